// ============================================================================
// USE ROUTE HOOK - Ruta actual + navegación con history API
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::routes::{current_route, push_route, Route};

#[derive(Clone)]
pub struct UseRouteHandle {
    pub route: Route,
    pub navigate: Callback<Route>,
}

#[hook]
pub fn use_route() -> UseRouteHandle {
    let route = use_state(current_route);

    // Botón "atrás" del navegador
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|win| {
                let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    route.set(current_route());
                }) as Box<dyn FnMut(web_sys::Event)>);
                if let Err(e) = win.add_event_listener_with_callback(
                    "popstate",
                    closure.as_ref().unchecked_ref(),
                ) {
                    log::warn!("⚠️ No se pudo escuchar popstate: {:?}", e);
                }
                (win, closure)
            });

            move || {
                if let Some((win, closure)) = listener {
                    let _ = win.remove_event_listener_with_callback(
                        "popstate",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| {
            log::info!("🧭 Navegando a {}", target.path());
            if let Err(e) = push_route(target) {
                log::error!("❌ Error de navegación: {}", e);
            }
            route.set(target);
        })
    };

    UseRouteHandle {
        route: *route,
        navigate,
    }
}
