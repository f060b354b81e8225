// ============================================================================
// ROUTES - "/" (home) y "/cadastrar" (registro)
// ============================================================================

use wasm_bindgen::JsValue;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    CreatePoint,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/cadastrar" => Route::CreatePoint,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home | Route::NotFound => "/",
            Route::CreatePoint => "/cadastrar",
        }
    }
}

/// Ruta según window.location.pathname
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Home)
}

/// history.pushState hacia la ruta
pub fn push_route(route: Route) -> Result<(), AppError> {
    let history = web_sys::window()
        .ok_or_else(|| AppError::Browser("No window".to_string()))?
        .history()
        .map_err(AppError::from_js)?;
    history
        .push_state_with_url(&JsValue::NULL, "", Some(route.path()))
        .map_err(AppError::from_js)
}
