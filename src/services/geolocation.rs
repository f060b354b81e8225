// ============================================================================
// GEOLOCATION - navigator.geolocation.getCurrentPosition como Future
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};
use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::Coordinates;
use crate::services::http::with_timeout;
use crate::services::traits::GeolocationProvider;

/// Código PERMISSION_DENIED de GeolocationPositionError
const PERMISSION_DENIED: f64 = 1.0;

type PositionSender = Rc<RefCell<Option<oneshot::Sender<Result<Coordinates, AppError>>>>>;

#[derive(Clone, Default)]
pub struct BrowserGeolocation;

impl BrowserGeolocation {
    pub fn new() -> Self {
        Self
    }

    pub async fn get_current_position(&self) -> Result<Coordinates, AppError> {
        let geolocation = web_sys::window()
            .ok_or_else(|| AppError::GeolocationUnavailable("No window".to_string()))?
            .navigator()
            .geolocation()
            .map_err(|_| AppError::GeolocationUnavailable("Geolocation API not available".to_string()))?;

        let (tx, rx) = oneshot::channel();
        let sender: PositionSender = Rc::new(RefCell::new(Some(tx)));

        let on_success = {
            let sender = sender.clone();
            Closure::once_into_js(move |position: JsValue| {
                if let Some(tx) = sender.borrow_mut().take() {
                    let _ = tx.send(read_coordinates(&position));
                }
            })
        };
        let on_error = {
            let sender = sender.clone();
            Closure::once_into_js(move |error: JsValue| {
                if let Some(tx) = sender.borrow_mut().take() {
                    let _ = tx.send(Err(read_position_error(&error)));
                }
            })
        };

        geolocation
            .get_current_position_with_error_callback(
                on_success.unchecked_ref(),
                Some(on_error.unchecked_ref()),
            )
            .map_err(AppError::from_js)?;

        with_timeout(
            async move {
                rx.await.unwrap_or_else(|_| {
                    Err(AppError::GeolocationUnavailable("Position request dropped".to_string()))
                })
            },
            CONFIG.network_timeout_seconds,
        )
        .await
    }
}

impl GeolocationProvider for BrowserGeolocation {
    fn current_position(&self) -> LocalBoxFuture<'_, Result<Coordinates, AppError>> {
        self.get_current_position().boxed_local()
    }
}

fn read_f64(target: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
}

fn read_coordinates(position: &JsValue) -> Result<Coordinates, AppError> {
    let coords = Reflect::get(position, &JsValue::from_str("coords"))
        .map_err(|_| AppError::GeolocationUnavailable("Position without coords".to_string()))?;

    match (read_f64(&coords, "latitude"), read_f64(&coords, "longitude")) {
        (Some(lat), Some(lng)) => Ok(Coordinates::new(lat, lng)),
        _ => Err(AppError::GeolocationUnavailable("Invalid coords".to_string())),
    }
}

fn read_position_error(error: &JsValue) -> AppError {
    if read_f64(error, "code") == Some(PERMISSION_DENIED) {
        return AppError::PermissionDenied;
    }
    let message = Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| "Unknown error".to_string());
    AppError::GeolocationUnavailable(message)
}
