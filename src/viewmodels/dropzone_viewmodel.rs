// ============================================================================
// DROPZONE VIEWMODEL - Archivo pendiente + URL local de preview
// ============================================================================
// La URL de preview es un recurso del navegador: se libera al ser reemplazada,
// al llamar a release() y en Drop.
// ============================================================================

use crate::error::AppError;

/// Tipos MIME aceptados (equivalente a accept="image/*")
const ACCEPTED_MIME_PREFIX: &str = "image/";

/// Archivo seleccionado por el usuario
pub trait PreviewFile {
    fn mime_type(&self) -> String;
    fn name(&self) -> String;
}

/// Creación y liberación de URLs locales para un archivo
pub trait ObjectUrlStore<F> {
    fn create(&self, file: &F) -> Result<String, AppError>;
    fn revoke(&self, url: &str);
}

pub fn is_accepted_mime(mime: &str) -> bool {
    mime.starts_with(ACCEPTED_MIME_PREFIX)
}

pub struct DropzoneViewModel<F, S: ObjectUrlStore<F>> {
    store: S,
    preview_url: Option<String>,
    _file: std::marker::PhantomData<F>,
}

impl<F: PreviewFile + Clone, S: ObjectUrlStore<F>> DropzoneViewModel<F, S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            preview_url: None,
            _file: std::marker::PhantomData,
        }
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    /// Procesa un drop / selección. Solo se mira el primer archivo.
    /// Devuelve el archivo aceptado para notificar al padre, o None si se ignoró.
    pub fn accept(&mut self, files: Vec<F>) -> Option<F> {
        let file = files.into_iter().next()?;

        if !is_accepted_mime(&file.mime_type()) {
            log::info!(
                "🚫 Archivo ignorado: {} ({})",
                file.name(),
                file.mime_type()
            );
            return None;
        }

        let url = match self.store.create(&file) {
            Ok(url) => url,
            Err(e) => {
                log::error!("❌ No se pudo crear la preview de {}: {}", file.name(), e);
                return None;
            }
        };

        if let Some(previous) = self.preview_url.replace(url) {
            self.store.revoke(&previous);
        }
        log::info!("🖼️ Preview generada para {}", file.name());
        Some(file)
    }

    /// Libera la URL actual (desmontaje del componente)
    pub fn release(&mut self) {
        if let Some(url) = self.preview_url.take() {
            self.store.revoke(&url);
        }
    }
}

impl<F, S: ObjectUrlStore<F>> Drop for DropzoneViewModel<F, S> {
    fn drop(&mut self) {
        if let Some(url) = self.preview_url.take() {
            self.store.revoke(&url);
        }
    }
}
