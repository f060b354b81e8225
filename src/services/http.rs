// ============================================================================
// HTTP HELPERS - GET/POST JSON con timeout (gloo-net)
// ============================================================================

use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;

use crate::error::AppError;

/// Corre `request` contra un timeout de `seconds` segundos
pub async fn with_timeout<T, F>(request: F, seconds: u32) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    let timeout = TimeoutFuture::new(seconds.saturating_mul(1000));
    futures::pin_mut!(request, timeout);

    match future::select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(AppError::Timeout(seconds)),
    }
}

/// GET y parseo JSON
pub async fn get_json<T: DeserializeOwned>(url: &str, timeout_seconds: u32) -> Result<T, AppError> {
    with_timeout(
        async {
            let response = Request::get(url).send().await?;
            let response = ensure_ok(response).await?;
            response
                .json::<T>()
                .await
                .map_err(|e| AppError::Parse(e.to_string()))
        },
        timeout_seconds,
    )
    .await
}

/// POST JSON; el cuerpo de la respuesta se ignora
pub async fn post_json<B: Serialize>(url: &str, body: &B, timeout_seconds: u32) -> Result<(), AppError> {
    let request = Request::post(url)
        .json(body)
        .map_err(|e| AppError::Serialization(e.to_string()))?;

    with_timeout(
        async {
            let response = request.send().await?;
            ensure_ok(response).await.map(|_| ())
        },
        timeout_seconds,
    )
    .await
}

async fn ensure_ok(response: Response) -> Result<Response, AppError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.text().await {
        Ok(text) if !text.is_empty() => text,
        _ => response.status_text(),
    };
    Err(AppError::Http { status, message })
}
