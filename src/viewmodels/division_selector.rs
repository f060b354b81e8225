// ============================================================================
// DIVISION SELECTOR - UF -> municipios
// ============================================================================
// La lista de municipios depende de la UF seleccionada. Cada cambio de UF
// incrementa `generation`; una respuesta cuyo ticket ya no es el actual se
// descarta para que una UF vieja no pise la lista de la nueva.
// ============================================================================

use crate::error::AppError;
use crate::models::{is_placeholder, PLACEHOLDER_DIVISION};
use crate::viewmodels::RemoteData;

/// Petición de municipios emitida por un cambio de UF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubRegionTicket {
    pub region: String,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DivisionSelector {
    pub regions: RemoteData<Vec<String>>,
    pub sub_regions: RemoteData<Vec<String>>,
    selected_region: String,
    selected_sub_region: String,
    generation: u64,
}

impl Default for DivisionSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl DivisionSelector {
    pub fn new() -> Self {
        Self {
            regions: RemoteData::NotAsked,
            sub_regions: RemoteData::NotAsked,
            selected_region: PLACEHOLDER_DIVISION.to_string(),
            selected_sub_region: PLACEHOLDER_DIVISION.to_string(),
            generation: 0,
        }
    }

    pub fn selected_region(&self) -> &str {
        &self.selected_region
    }

    pub fn selected_sub_region(&self) -> &str {
        &self.selected_sub_region
    }

    pub fn region_options(&self) -> &[String] {
        self.regions.value().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn sub_region_options(&self) -> &[String] {
        self.sub_regions.value().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn start_loading_regions(&mut self) {
        self.regions = RemoteData::Loading;
    }

    pub fn apply_regions(&mut self, result: Result<Vec<String>, AppError>) {
        self.regions = RemoteData::from_result(result);
    }

    /// Registra la UF elegida. Devuelve el ticket de la petición de municipios
    /// a emitir, o None si no hay que pedir nada (placeholder o misma UF).
    pub fn select_region(&mut self, value: &str) -> Option<SubRegionTicket> {
        if value == self.selected_region {
            return None;
        }

        self.selected_region = value.to_string();
        self.selected_sub_region = PLACEHOLDER_DIVISION.to_string();
        self.generation += 1;

        if is_placeholder(value) {
            self.sub_regions = RemoteData::NotAsked;
            return None;
        }

        self.sub_regions = RemoteData::Loading;
        Some(SubRegionTicket {
            region: self.selected_region.clone(),
            generation: self.generation,
        })
    }

    /// Ticket para volver a pedir los municipios de la UF actual
    pub fn retry_ticket(&mut self) -> Option<SubRegionTicket> {
        if is_placeholder(&self.selected_region) {
            return None;
        }
        self.generation += 1;
        self.sub_regions = RemoteData::Loading;
        Some(SubRegionTicket {
            region: self.selected_region.clone(),
            generation: self.generation,
        })
    }

    /// Aplica la respuesta si el ticket sigue vigente. Devuelve false si se descartó.
    pub fn apply_sub_regions(
        &mut self,
        ticket: &SubRegionTicket,
        result: Result<Vec<String>, AppError>,
    ) -> bool {
        if ticket.generation != self.generation {
            log::info!(
                "⏭️ Municipios de {} descartados (generación {} != {})",
                ticket.region,
                ticket.generation,
                self.generation
            );
            return false;
        }
        self.sub_regions = RemoteData::from_result(result);
        true
    }

    pub fn select_sub_region(&mut self, value: &str) {
        self.selected_sub_region = value.to_string();
    }
}
