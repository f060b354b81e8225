use serde::{Deserialize, Serialize};

/// Valor de los `<select>` cuando no hay nada seleccionado
pub const PLACEHOLDER_DIVISION: &str = "0";

pub fn is_placeholder(value: &str) -> bool {
    value.is_empty() || value == PLACEHOLDER_DIVISION
}

/// Estado (UF) tal como lo devuelve IBGE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UfData {
    pub sigla: String,
}

/// Municipio tal como lo devuelve IBGE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityData {
    pub nome: String,
}
