// ============================================================================
// CREATE POINT VIEW - Página "Cadastro do ponto de coleta"
// ============================================================================
// Solo renderiza: toda la lógica está en CreatePointViewModel (vía hook).
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{DivisionSelect, Dropzone, ErrorNotice, ItemGrid, LocationMap};
use crate::hooks::use_create_point;
use crate::routes::Route;
use crate::viewmodels::{RemoteData, SubmissionState};

#[derive(Properties, PartialEq)]
pub struct CreatePointViewProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(CreatePointView)]
pub fn create_point_view(props: &CreatePointViewProps) -> Html {
    let on_created = props.on_navigate.reform(|_: ()| Route::Home);
    let handle = use_create_point(on_created);
    let state = handle.vm.state();

    let fields = state.fields.borrow().clone();
    let location = *state.location.borrow();
    let selected_items = state.selected_items.borrow().ids().to_vec();
    let submission = state.submission();

    let (regions, sub_regions, selected_region, selected_sub_region, loading_sub_regions, regions_error, sub_regions_error) = {
        let divisions = state.divisions.borrow();
        (
            divisions.region_options().to_vec(),
            divisions.sub_region_options().to_vec(),
            divisions.selected_region().to_string(),
            divisions.selected_sub_region().to_string(),
            divisions.sub_regions.is_loading(),
            divisions.regions.error().map(|e| e.user_message()),
            divisions.sub_regions.error().map(|e| e.user_message()),
        )
    };

    let (items, items_loading, items_error) = match &*state.items.borrow() {
        RemoteData::Loaded(items) => (items.clone(), false, None),
        RemoteData::Failed(e) => (Vec::new(), false, Some(e.user_message())),
        RemoteData::Loading => (Vec::new(), true, None),
        RemoteData::NotAsked => (Vec::new(), false, None),
    };

    let field_input = |name: &'static str| {
        let on_field_input = handle.on_field_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field_input.emit((name.to_string(), input.value()));
        })
    };

    let onsubmit = {
        let on_submit = handle.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Route::Home);
        })
    };

    let submitting = submission.is_busy();

    html! {
        <div id="page-create-point">
            <header>
                <h2>{"Ecoleta"}</h2>
                <a href={Route::Home.path()} onclick={on_back}>
                    {"← Voltar para home"}
                </a>
            </header>

            <form {onsubmit}>
                <h1>{"Cadastro do"}<br />{"ponto de coleta"}</h1>

                <Dropzone on_file_upload={handle.on_file_upload.clone()} />

                <fieldset>
                    <legend><h2>{"Dados"}</h2></legend>

                    <div class="field">
                        <label for="name">{"Nome da entidade"}</label>
                        <input type="text" name="name" id="name"
                            value={fields.name.clone()}
                            oninput={field_input("name")} />
                    </div>

                    <div class="field-group">
                        <div class="field">
                            <label for="email">{"E-mail"}</label>
                            <input type="email" name="email" id="email"
                                value={fields.email.clone()}
                                oninput={field_input("email")} />
                        </div>
                        <div class="field">
                            <label for="contact">{"Whatsapp"}</label>
                            <input type="text" name="contact" id="contact"
                                value={fields.contact.clone()}
                                oninput={field_input("contact")} />
                        </div>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>{"Endereço"}</h2>
                        <span>{"Selecione o endereço no mapa"}</span>
                    </legend>

                    <LocationMap
                        center={location.initial_center}
                        marker={location.selected}
                        on_click={handle.on_map_click.clone()} />

                    if let Some(message) = regions_error {
                        <ErrorNotice {message} on_retry={handle.on_retry_regions.clone()} />
                    }

                    <DivisionSelect
                        {regions}
                        {sub_regions}
                        {selected_region}
                        {selected_sub_region}
                        {loading_sub_regions}
                        on_region_change={handle.on_region_change.clone()}
                        on_sub_region_change={handle.on_sub_region_change.clone()} />

                    if let Some(message) = sub_regions_error {
                        <ErrorNotice {message} on_retry={handle.on_retry_sub_regions.clone()} />
                    }
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>{"Ítens de coleta"}</h2>
                        <span>{"Selecione um ou mais ítens abaixo"}</span>
                    </legend>

                    if items_loading {
                        <p class="loading">{"Carregando ítens..."}</p>
                    }
                    if let Some(message) = items_error {
                        <ErrorNotice {message} on_retry={handle.on_retry_items.clone()} />
                    }

                    <ItemGrid
                        {items}
                        selected={selected_items}
                        on_toggle={handle.on_toggle_item.clone()} />
                </fieldset>

                if let SubmissionState::Failed(error) = &submission {
                    <ErrorNotice
                        message={error.user_message()}
                        on_retry={error.is_retryable().then(|| handle.on_submit.clone())}
                        on_dismiss={handle.on_dismiss_error.clone()} />
                }

                <button type="submit" disabled={submitting}>
                    { if submitting { "Cadastrando..." } else { "Cadastrar ponto de coleta" } }
                </button>
            </form>
        </div>
    }
}
