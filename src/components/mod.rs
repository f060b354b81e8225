pub mod dropzone;
pub mod location_map;
pub mod division_select;
pub mod item_grid;
pub mod error_notice;

pub use dropzone::Dropzone;
pub use location_map::LocationMap;
pub use division_select::DivisionSelect;
pub use item_grid::ItemGrid;
pub use error_notice::ErrorNotice;
