// ============================================================================
// LEAFLET FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para funciones JS (static/leaflet_bridge.js) - Sin estado
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initLeafletMap, catch)]
    pub fn init_leaflet_map(
        container_id: &str,
        lat: f64,
        lng: f64,
        zoom: f64,
        tile_url: &str,
        attribution: &str,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = setLeafletCenter)]
    pub fn set_leaflet_center(container_id: &str, lat: f64, lng: f64);

    #[wasm_bindgen(js_name = setLeafletMarker)]
    pub fn set_leaflet_marker(container_id: &str, lat: f64, lng: f64);

    #[wasm_bindgen(js_name = onLeafletClick)]
    pub fn on_leaflet_click(container_id: &str, callback: &js_sys::Function);

    #[wasm_bindgen(js_name = destroyLeafletMap)]
    pub fn destroy_leaflet_map(container_id: &str);
}
