// ============================================================================
// API CLIENT - Backend Ecoleta (items + points)
// ============================================================================
// Stateless: solo hace requests HTTP, sin lógica de negocio
// ============================================================================

use futures::future::{FutureExt, LocalBoxFuture};

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::{CategoryItem, CreatePointRequest};
use crate::services::http::{get_json, post_json};
use crate::services::traits::{ItemsApi, PointsApi};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout_seconds: u32,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_url, CONFIG.network_timeout_seconds)
    }

    pub fn with_base_url(base_url: &str, timeout_seconds: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_seconds,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Listar categorías
    pub async fn get_items(&self) -> Result<Vec<CategoryItem>, AppError> {
        let items: Vec<CategoryItem> = get_json(&self.url("items"), self.timeout_seconds).await?;
        log::info!("♻️ {} categorías recibidas", items.len());
        Ok(items)
    }

    /// Crear punto de coleta
    pub async fn post_point(&self, request: &CreatePointRequest) -> Result<(), AppError> {
        log::info!(
            "📤 Creando punto '{}' en {}/{} con {} items",
            request.name,
            request.sub_region,
            request.region,
            request.items.len()
        );
        post_json(&self.url("points"), request, self.timeout_seconds).await?;
        log::info!("✅ Punto de coleta creado");
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemsApi for ApiClient {
    fn fetch_items(&self) -> LocalBoxFuture<'_, Result<Vec<CategoryItem>, AppError>> {
        self.get_items().boxed_local()
    }
}

impl PointsApi for ApiClient {
    fn create_point<'a>(
        &'a self,
        request: &'a CreatePointRequest,
    ) -> LocalBoxFuture<'a, Result<(), AppError>> {
        self.post_point(request).boxed_local()
    }
}
