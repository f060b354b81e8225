use crate::error::AppError;
use crate::models::Coordinates;

/// Superficie de mapa sobre la que se elige la ubicación del punto
pub trait MapSurface {
    /// Crear el mapa en el contenedor
    fn initialize(&mut self, center: Coordinates, zoom: f64) -> Result<(), AppError>;

    /// Centrar el mapa en una ubicación específica
    fn set_center(&mut self, center: Coordinates) -> Result<(), AppError>;

    /// Mover el marcador del punto elegido
    fn set_marker(&mut self, position: Coordinates) -> Result<(), AppError>;

    /// Establecer el callback para clicks en el mapa
    fn on_click(&mut self, callback: Box<dyn Fn(Coordinates)>) -> Result<(), AppError>;

    /// Liberar el mapa (desmontaje)
    fn destroy(&mut self);

    fn is_ready(&self) -> bool;
}
