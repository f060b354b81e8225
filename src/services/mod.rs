pub mod traits;
pub mod http;
pub mod api_client;
pub mod ibge_client;
pub mod geolocation;
pub mod object_urls;

pub use traits::*;
pub use api_client::ApiClient;
pub use ibge_client::IbgeClient;
pub use geolocation::BrowserGeolocation;
pub use object_urls::BrowserObjectUrls;
