use serde::{Deserialize, Serialize};

/// Categoría de residuo aceptada por un punto de coleta (solo lectura)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryItem {
    pub id: u32,
    pub title: String,
    pub image_url: String,
}
