use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::PLACEHOLDER_DIVISION;

#[derive(Properties, PartialEq)]
pub struct DivisionSelectProps {
    pub regions: Vec<String>,
    pub sub_regions: Vec<String>,
    pub selected_region: String,
    pub selected_sub_region: String,
    #[prop_or_default]
    pub loading_sub_regions: bool,
    pub on_region_change: Callback<String>,
    pub on_sub_region_change: Callback<String>,
}

fn select_value(e: &Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

/// Dropdowns UF -> Cidade
#[function_component(DivisionSelect)]
pub fn division_select(props: &DivisionSelectProps) -> Html {
    let on_region = {
        let cb = props.on_region_change.clone();
        Callback::from(move |e: Event| cb.emit(select_value(&e)))
    };
    let on_sub_region = {
        let cb = props.on_sub_region_change.clone();
        Callback::from(move |e: Event| cb.emit(select_value(&e)))
    };

    let city_placeholder = if props.loading_sub_regions {
        "Carregando cidades..."
    } else {
        "Selecione uma cidade"
    };

    html! {
        <div class="field-group">
            <div class="field">
                <label for="uf">{"Estado (UF)"}</label>
                <select name="uf" id="uf" onchange={on_region}>
                    <option value={PLACEHOLDER_DIVISION} selected={props.selected_region == PLACEHOLDER_DIVISION}>
                        {"Selecione uma UF"}
                    </option>
                    { for props.regions.iter().map(|uf| html! {
                        <option key={uf.clone()} value={uf.clone()} selected={*uf == props.selected_region}>
                            {uf}
                        </option>
                    }) }
                </select>
            </div>

            <div class="field">
                <label for="city">{"Cidade"}</label>
                <select name="city" id="city" onchange={on_sub_region} disabled={props.loading_sub_regions}>
                    <option value={PLACEHOLDER_DIVISION} selected={props.selected_sub_region == PLACEHOLDER_DIVISION}>
                        {city_placeholder}
                    </option>
                    { for props.sub_regions.iter().map(|city| html! {
                        <option key={city.clone()} value={city.clone()} selected={*city == props.selected_sub_region}>
                            {city}
                        </option>
                    }) }
                </select>
            </div>
        </div>
    }
}
