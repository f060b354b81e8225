// ============================================================================
// LEAFLET MAP - MapSurface sobre el bridge JS (static/leaflet_bridge.js)
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::MapSurface;
use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::Coordinates;
use crate::utils::leaflet_ffi::*;

/// Renderizador de mapas para web usando Leaflet + OpenStreetMap
pub struct LeafletMap {
    container_id: String,
    click_closure: Option<Closure<dyn FnMut(f64, f64)>>,
    is_ready: bool,
}

impl LeafletMap {
    pub fn new(container_id: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
            click_closure: None,
            is_ready: false,
        }
    }

    fn ensure_ready(&self) -> Result<(), AppError> {
        if self.is_ready {
            Ok(())
        } else {
            Err(AppError::Browser("Map is not ready".to_string()))
        }
    }
}

impl MapSurface for LeafletMap {
    fn initialize(&mut self, center: Coordinates, zoom: f64) -> Result<(), AppError> {
        log::info!(
            "🗺️ Inicializando Leaflet en #{} ({}, {})",
            self.container_id,
            center.latitude,
            center.longitude
        );
        init_leaflet_map(
            &self.container_id,
            center.latitude,
            center.longitude,
            zoom,
            &CONFIG.map_config.tile_url,
            &CONFIG.map_config.attribution,
        )
        .map_err(AppError::from_js)?;
        self.is_ready = true;
        Ok(())
    }

    fn set_center(&mut self, center: Coordinates) -> Result<(), AppError> {
        self.ensure_ready()?;
        set_leaflet_center(&self.container_id, center.latitude, center.longitude);
        Ok(())
    }

    fn set_marker(&mut self, position: Coordinates) -> Result<(), AppError> {
        self.ensure_ready()?;
        set_leaflet_marker(&self.container_id, position.latitude, position.longitude);
        Ok(())
    }

    fn on_click(&mut self, callback: Box<dyn Fn(Coordinates)>) -> Result<(), AppError> {
        self.ensure_ready()?;
        let closure = Closure::wrap(Box::new(move |lat: f64, lng: f64| {
            callback(Coordinates::new(lat, lng));
        }) as Box<dyn FnMut(f64, f64)>);
        on_leaflet_click(&self.container_id, closure.as_ref().unchecked_ref());
        // El closure vive mientras viva el mapa; destroy() lo suelta
        self.click_closure = Some(closure);
        Ok(())
    }

    fn destroy(&mut self) {
        if self.is_ready {
            destroy_leaflet_map(&self.container_id);
            log::info!("🧹 Mapa #{} destruido", self.container_id);
        }
        self.click_closure = None;
        self.is_ready = false;
    }

    fn is_ready(&self) -> bool {
        self.is_ready
    }
}

impl Drop for LeafletMap {
    fn drop(&mut self) {
        self.destroy();
    }
}
