pub mod home;
pub mod create_point;

pub use home::HomeView;
pub use create_point::CreatePointView;
