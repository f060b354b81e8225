// ============================================================================
// OBJECT URLS - URL.createObjectURL / URL.revokeObjectURL
// ============================================================================

use web_sys::{File, Url};

use crate::error::AppError;
use crate::viewmodels::dropzone_viewmodel::{ObjectUrlStore, PreviewFile};

impl PreviewFile for File {
    fn mime_type(&self) -> String {
        self.type_()
    }

    fn name(&self) -> String {
        File::name(self)
    }
}

/// Store de URLs locales respaldado por el navegador
#[derive(Clone, Default)]
pub struct BrowserObjectUrls;

impl ObjectUrlStore<File> for BrowserObjectUrls {
    fn create(&self, file: &File) -> Result<String, AppError> {
        Url::create_object_url_with_blob(file).map_err(AppError::from_js)
    }

    fn revoke(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("⚠️ No se pudo liberar la URL de preview {}: {:?}", url, e);
        }
    }
}
