pub mod use_route;
pub mod use_create_point;

pub use use_route::{use_route, UseRouteHandle};
pub use use_create_point::{use_create_point, UseCreatePointHandle};
