// ============================================================================
// DROPZONE COMPONENT - Foto del establecimiento
// ============================================================================

use web_sys::{DragEvent, File, FileList, HtmlInputElement};
use yew::prelude::*;

use crate::services::BrowserObjectUrls;
use crate::viewmodels::DropzoneViewModel;

#[derive(Properties, PartialEq)]
pub struct DropzoneProps {
    pub on_file_upload: Callback<File>,
}

fn file_list_to_vec(list: FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[function_component(Dropzone)]
pub fn dropzone(props: &DropzoneProps) -> Html {
    let vm = use_mut_ref(|| DropzoneViewModel::<File, BrowserObjectUrls>::new(BrowserObjectUrls));
    let preview = use_state(|| None::<String>);

    // Liberar la URL de preview al desmontar
    {
        let vm = vm.clone();
        use_effect_with((), move |_| move || vm.borrow_mut().release());
    }

    let handle_files = {
        let vm = vm.clone();
        let preview = preview.clone();
        let on_file_upload = props.on_file_upload.clone();
        Callback::from(move |files: Vec<File>| {
            let accepted = vm.borrow_mut().accept(files);
            if let Some(file) = accepted {
                preview.set(vm.borrow().preview_url().map(str::to_string));
                on_file_upload.emit(file);
            }
        })
    };

    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());

    let ondrop = {
        let handle_files = handle_files.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            let files = e
                .data_transfer()
                .and_then(|dt| dt.files())
                .map(file_list_to_vec)
                .unwrap_or_default();
            handle_files.emit(files);
        })
    };

    let onchange = Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = input.files().map(file_list_to_vec).unwrap_or_default();
        handle_files.emit(files);
        // permite volver a elegir el mismo archivo
        input.set_value("");
    });

    html! {
        <label class="dropzone" {ondragover} {ondrop}>
            <input type="file" accept="image/*" hidden={true} {onchange} />
            {
                match &*preview {
                    Some(url) => html! { <img src={url.clone()} alt="Point" /> },
                    None => html! {
                        <p>
                            <span class="upload-icon">{"⬆"}</span>
                            {"Imagem do estabelecimento"}
                        </p>
                    },
                }
            }
        </label>
    }
}
