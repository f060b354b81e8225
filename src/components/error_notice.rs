use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorNoticeProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

/// Aviso de error con "tentar novamente" opcional
#[function_component(ErrorNotice)]
pub fn error_notice(props: &ErrorNoticeProps) -> Html {
    html! {
        <div class="error-notice" role="alert">
            <span>{&props.message}</span>
            if let Some(on_retry) = &props.on_retry {
                <button type="button" class="btn-retry" onclick={on_retry.reform(|_: MouseEvent| ())}>
                    {"Tentar novamente"}
                </button>
            }
            if let Some(on_dismiss) = &props.on_dismiss {
                <button type="button" class="btn-dismiss" onclick={on_dismiss.reform(|_: MouseEvent| ())}>
                    {"✕"}
                </button>
            }
        </div>
    }
}
