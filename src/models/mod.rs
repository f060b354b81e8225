pub mod coordinates;
pub mod item;
pub mod division;
pub mod point;

pub use coordinates::Coordinates;
pub use item::CategoryItem;
pub use division::{UfData, CityData, PLACEHOLDER_DIVISION, is_placeholder};
pub use point::CreatePointRequest;
