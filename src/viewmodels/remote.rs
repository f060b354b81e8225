use crate::error::AppError;

/// Estado de un recurso remoto cargado de forma asíncrona
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteData<T> {
    NotAsked,
    Loading,
    Loaded(T),
    Failed(AppError),
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        RemoteData::NotAsked
    }
}

impl<T> RemoteData<T> {
    pub fn from_result(result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => RemoteData::Loaded(value),
            Err(e) => RemoteData::Failed(e),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RemoteData::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            RemoteData::Failed(e) => Some(e),
            _ => None,
        }
    }
}
