// ============================================================================
// ECOLETA WEB - Registro de pontos de coleta (Rust + Yew + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views/Components: renderizan (sin lógica)
// - Hooks: conectan ViewModels con Yew
// - ViewModels: estado de la página + lógica UI
// - Services: SOLO comunicación con APIs y con el navegador
// - State: Rc<RefCell> + subscribers
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod maps;
pub mod state;
pub mod viewmodels;
pub mod hooks;
pub mod components;
pub mod views;
pub mod routes;
pub mod utils;
pub mod app;

use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

/// Punto de entrada: panic hook, logging y render de la app
pub fn run() {
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 Ecoleta Web - Rust + Yew ({})", CONFIG.environment);
    log::info!("🌐 API: {} | Localidades: {}", CONFIG.api_url, CONFIG.divisions_url);

    yew::Renderer::<App>::new().render();
}
