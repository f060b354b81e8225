// ============================================================================
// ERRORES - Taxonomía de errores de la aplicación
// ============================================================================
// Todos los servicios devuelven Result<T, AppError>. Ningún error es fatal:
// la página decide si lo muestra (con reintento) o lo absorbe.
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Error de validación local del formulario (bloquea el envío)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("O campo '{0}' é obrigatório")]
    MissingField(&'static str),

    #[error("E-mail inválido")]
    InvalidEmail,

    #[error("Selecione uma UF")]
    RegionNotSelected,

    #[error("Selecione uma cidade")]
    SubRegionNotSelected,

    #[error("Selecione um endereço no mapa")]
    LocationNotSelected,

    #[error("Selecione um ou mais itens de coleta")]
    NoItemsSelected,
}

/// Error general de la aplicación
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u32),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location unavailable: {0}")]
    GeolocationUnavailable(String),

    #[error("Browser error: {0}")]
    Browser(String),
}

impl AppError {
    /// Convertir un error de JS (web-sys) en AppError
    pub fn from_js(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        AppError::Browser(message)
    }

    /// Errores de red que merecen un botón "tentar novamente"
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Network(_) | AppError::Timeout(_) => true,
            AppError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Mensaje para mostrar al usuario (sin detalles técnicos)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::Network(_) | AppError::Timeout(_) => {
                "Falha de conexão. Verifique sua internet e tente novamente.".to_string()
            }
            AppError::Http { status, .. } if *status >= 500 => {
                "O servidor não respondeu corretamente. Tente novamente.".to_string()
            }
            AppError::Http { .. } => "Não foi possível cadastrar o ponto de coleta.".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => AppError::Parse(e.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}
