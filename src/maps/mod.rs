// Módulo de mapas: trait común + implementación Leaflet para web

pub mod traits;
pub mod leaflet;

pub use traits::MapSurface;
pub use leaflet::LeafletMap;
