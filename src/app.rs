// ============================================================================
// APP - Componente raíz (router mínimo sobre la history API)
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_route;
use crate::routes::Route;
use crate::views::{CreatePointView, HomeView};

#[function_component(App)]
pub fn app() -> Html {
    let router = use_route();
    let on_navigate = router.navigate.clone();

    match router.route {
        Route::Home => html! { <HomeView {on_navigate} /> },
        Route::CreatePoint => html! { <CreatePointView {on_navigate} /> },
        Route::NotFound => html! { <HomeView {on_navigate} not_found={true} /> },
    }
}
