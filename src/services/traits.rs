// ============================================================================
// CLIENTES INYECTABLES - Una abstracción por servicio externo
// ============================================================================
// El orquestador recibe `Rc<dyn ...>`; en tests se sustituyen por fakes.
// Los futures son `LocalBoxFuture` porque todo corre en el hilo de UI (no Send).
// ============================================================================

use futures::future::LocalBoxFuture;

use crate::error::AppError;
use crate::models::{CategoryItem, Coordinates, CreatePointRequest};

/// Catálogo de categorías (`GET /items`)
pub trait ItemsApi {
    fn fetch_items(&self) -> LocalBoxFuture<'_, Result<Vec<CategoryItem>, AppError>>;
}

/// Localidades: estados y municipios
pub trait DivisionsApi {
    fn fetch_regions(&self) -> LocalBoxFuture<'_, Result<Vec<String>, AppError>>;

    fn fetch_sub_regions<'a>(
        &'a self,
        region: &'a str,
    ) -> LocalBoxFuture<'a, Result<Vec<String>, AppError>>;
}

/// Persistencia de puntos (`POST /points`)
pub trait PointsApi {
    fn create_point<'a>(
        &'a self,
        request: &'a CreatePointRequest,
    ) -> LocalBoxFuture<'a, Result<(), AppError>>;
}

/// Posición actual del dispositivo
pub trait GeolocationProvider {
    fn current_position(&self) -> LocalBoxFuture<'_, Result<Coordinates, AppError>>;
}
