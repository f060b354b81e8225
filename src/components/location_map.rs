// ============================================================================
// LOCATION MAP COMPONENT - Mapa Leaflet para elegir la ubicación
// ============================================================================

use yew::prelude::*;

use crate::config::CONFIG;
use crate::maps::{LeafletMap, MapSurface};
use crate::models::Coordinates;

const MAP_CONTAINER_ID: &str = "create-point-map";

#[derive(Properties, PartialEq)]
pub struct LocationMapProps {
    pub center: Coordinates,
    pub marker: Coordinates,
    pub on_click: Callback<Coordinates>,
}

#[function_component(LocationMap)]
pub fn location_map(props: &LocationMapProps) -> Html {
    let map = use_mut_ref(|| LeafletMap::new(MAP_CONTAINER_ID));

    // Crear el mapa al montar (el div ya está en el DOM)
    {
        let map = map.clone();
        let center = props.center;
        let marker = props.marker;
        let on_click = props.on_click.clone();

        use_effect_with((), move |_| {
            {
                let mut surface = map.borrow_mut();
                match surface.initialize(center, CONFIG.map_config.default_zoom) {
                    Ok(()) => {
                        let _ = surface.set_marker(marker);
                        if let Err(e) = surface.on_click(Box::new(move |position| on_click.emit(position))) {
                            log::error!("❌ Error registrando click del mapa: {}", e);
                        }
                    }
                    Err(e) => log::error!("❌ Error inicializando mapa: {}", e),
                }
            }
            move || map.borrow_mut().destroy()
        });
    }

    // Recentrar cuando llega la geolocalización
    {
        let map = map.clone();
        use_effect_with(props.center, move |center| {
            if map.borrow().is_ready() {
                let _ = map.borrow_mut().set_center(*center);
            }
            || ()
        });
    }

    {
        let map = map.clone();
        use_effect_with(props.marker, move |marker| {
            if map.borrow().is_ready() {
                let _ = map.borrow_mut().set_marker(*marker);
            }
            || ()
        });
    }

    html! {
        <div id={MAP_CONTAINER_ID} class="map"></div>
    }
}
