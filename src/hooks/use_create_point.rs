// ============================================================================
// USE CREATE POINT HOOK - Conecta CreatePointViewModel con Yew
// ============================================================================
// Hook nativo de Yew - Delega toda la lógica al ViewModel. El estado vive en
// Rc<RefCell>; cada notificación del estado fuerza un re-render.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::Coordinates;
use crate::viewmodels::{CreatePointViewModel, SubmitOutcome};

const CREATED_MESSAGE: &str = "Ponto de coleta criado";

/// Handle del hook
#[derive(Clone)]
pub struct UseCreatePointHandle {
    pub vm: Rc<CreatePointViewModel>,
    pub on_field_input: Callback<(String, String)>,
    pub on_region_change: Callback<String>,
    pub on_sub_region_change: Callback<String>,
    pub on_map_click: Callback<Coordinates>,
    pub on_toggle_item: Callback<u32>,
    pub on_file_upload: Callback<web_sys::File>,
    pub on_submit: Callback<()>,
    pub on_dismiss_error: Callback<()>,
    pub on_retry_items: Callback<()>,
    pub on_retry_regions: Callback<()>,
    pub on_retry_sub_regions: Callback<()>,
}

#[hook]
pub fn use_create_point(on_created: Callback<()>) -> UseCreatePointHandle {
    let vm = use_memo((), |_| CreatePointViewModel::browser());
    let update = use_force_update();

    // Montaje: suscripción al estado + las tres cargas independientes
    {
        let vm = vm.clone();
        use_effect_with((), move |_| {
            vm.state().subscribe_to_changes(move || update.force_update());
            let mount_vm = vm.clone();
            spawn_local(async move {
                mount_vm.mount().await;
            });
            // Las cargas pendientes pueden terminar después del desmontaje
            move || vm.state().clear_subscribers()
        });
    }

    let on_field_input = {
        let vm = vm.clone();
        Callback::from(move |(field, value): (String, String)| {
            vm.update_field(&field, &value);
        })
    };

    let on_region_change = {
        let vm = vm.clone();
        Callback::from(move |region: String| {
            spawn_local(vm.change_region(&region));
        })
    };

    let on_sub_region_change = {
        let vm = vm.clone();
        Callback::from(move |sub_region: String| vm.select_sub_region(&sub_region))
    };

    let on_map_click = {
        let vm = vm.clone();
        Callback::from(move |position: Coordinates| vm.select_position(position))
    };

    let on_toggle_item = {
        let vm = vm.clone();
        Callback::from(move |id: u32| vm.toggle_item(id))
    };

    let on_file_upload = {
        let vm = vm.clone();
        Callback::from(move |file: web_sys::File| vm.attach_image(file))
    };

    let on_submit = {
        let vm = vm.clone();
        Callback::from(move |_| {
            let vm = vm.clone();
            let on_created = on_created.clone();
            spawn_local(async move {
                match vm.submit().await {
                    Ok(SubmitOutcome::Created) => {
                        if let Some(win) = web_sys::window() {
                            let _ = win.alert_with_message(CREATED_MESSAGE);
                        }
                        on_created.emit(());
                    }
                    Ok(SubmitOutcome::Ignored) => {}
                    // El estado Failed ya lo muestra la vista
                    Err(_) => {}
                }
            });
        })
    };

    let on_dismiss_error = {
        let vm = vm.clone();
        Callback::from(move |_| vm.dismiss_failure())
    };

    let on_retry_items = {
        let vm = vm.clone();
        Callback::from(move |_| spawn_local(vm.retry_items()))
    };

    let on_retry_regions = {
        let vm = vm.clone();
        Callback::from(move |_| spawn_local(vm.retry_regions()))
    };

    let on_retry_sub_regions = {
        let vm = vm.clone();
        Callback::from(move |_| spawn_local(vm.retry_sub_regions()))
    };

    UseCreatePointHandle {
        vm,
        on_field_input,
        on_region_change,
        on_sub_region_change,
        on_map_click,
        on_toggle_item,
        on_file_upload,
        on_submit,
        on_dismiss_error,
        on_retry_items,
        on_retry_regions,
        on_retry_sub_regions,
    }
}
