// ============================================================================
// IBGE CLIENT - Estados (UF) y municipios
// ============================================================================

use futures::future::{FutureExt, LocalBoxFuture};

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::{CityData, UfData};
use crate::services::http::get_json;
use crate::services::traits::DivisionsApi;

const REGION_COLLECTION: &str = "estados";
const SUB_REGION_COLLECTION: &str = "municipios";

#[derive(Clone)]
pub struct IbgeClient {
    base_url: String,
    timeout_seconds: u32,
}

impl IbgeClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.divisions_url, CONFIG.network_timeout_seconds)
    }

    pub fn with_base_url(base_url: &str, timeout_seconds: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_seconds,
        }
    }

    fn regions_url(&self) -> String {
        format!("{}/{}", self.base_url, REGION_COLLECTION)
    }

    fn sub_regions_url(&self, region: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url, REGION_COLLECTION, region, SUB_REGION_COLLECTION
        )
    }

    /// Siglas de todos los estados
    pub async fn get_regions(&self) -> Result<Vec<String>, AppError> {
        let ufs: Vec<UfData> = get_json(&self.regions_url(), self.timeout_seconds).await?;
        log::info!("🗺️ {} UFs recibidas", ufs.len());
        Ok(ufs.into_iter().map(|uf| uf.sigla).collect())
    }

    /// Nombres de los municipios de una UF
    pub async fn get_sub_regions(&self, region: &str) -> Result<Vec<String>, AppError> {
        let cities: Vec<CityData> =
            get_json(&self.sub_regions_url(region), self.timeout_seconds).await?;
        log::info!("🏙️ {} municipios recibidos para {}", cities.len(), region);
        Ok(cities.into_iter().map(|city| city.nome).collect())
    }
}

impl Default for IbgeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DivisionsApi for IbgeClient {
    fn fetch_regions(&self) -> LocalBoxFuture<'_, Result<Vec<String>, AppError>> {
        self.get_regions().boxed_local()
    }

    fn fetch_sub_regions<'a>(
        &'a self,
        region: &'a str,
    ) -> LocalBoxFuture<'a, Result<Vec<String>, AppError>> {
        self.get_sub_regions(region).boxed_local()
    }
}
