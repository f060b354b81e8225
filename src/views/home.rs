use yew::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct HomeViewProps {
    pub on_navigate: Callback<Route>,
    /// Mostrar aviso de ruta inexistente
    #[prop_or_default]
    pub not_found: bool,
}

#[function_component(HomeView)]
pub fn home_view(props: &HomeViewProps) -> Html {
    let onclick = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Route::CreatePoint);
        })
    };

    html! {
        <div id="page-home">
            <div class="content">
                <header>
                    <h2>{"Ecoleta"}</h2>
                </header>

                if props.not_found {
                    <p class="not-found">{"Página não encontrada"}</p>
                }

                <main>
                    <h1>{"Seu marketplace de coleta de resíduos."}</h1>
                    <p>{"Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente."}</p>

                    <a href={Route::CreatePoint.path()} {onclick}>
                        <span>{"➜"}</span>
                        <strong>{"Cadastre um ponto de coleta"}</strong>
                    </a>
                </main>
            </div>
        </div>
    }
}
