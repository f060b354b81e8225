use serde::{Deserialize, Serialize};

/// Cuerpo de `POST /points`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePointRequest {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub region: String,
    pub sub_region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<u32>,
}
