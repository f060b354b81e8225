// ============================================================================
// LOCATION PICKER - Centro inicial (geolocalización) + punto elegido (click)
// ============================================================================

use crate::error::AppError;
use crate::models::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationPicker {
    pub initial_center: Coordinates,
    pub selected: Coordinates,
}

impl LocationPicker {
    pub fn new(default_center: Coordinates) -> Self {
        Self {
            initial_center: default_center,
            selected: Coordinates::ORIGIN,
        }
    }

    /// Resultado de la geolocalización. Los fallos se absorben: el mapa
    /// se queda en el centro por defecto.
    pub fn apply_geolocation(&mut self, result: Result<Coordinates, AppError>) {
        match result {
            Ok(position) => {
                log::info!(
                    "📍 Posición actual: ({}, {})",
                    position.latitude,
                    position.longitude
                );
                self.initial_center = position;
            }
            Err(AppError::PermissionDenied) => {
                log::warn!("⚠️ Permiso de ubicación denegado, usando centro por defecto");
            }
            Err(e) => {
                log::warn!("⚠️ Ubicación no disponible ({}), usando centro por defecto", e);
            }
        }
    }

    /// Click en el mapa
    pub fn select(&mut self, position: Coordinates) {
        self.selected = position;
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_origin()
    }
}

impl Default for LocationPicker {
    fn default() -> Self {
        Self::new(Coordinates::ORIGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_changes_only_selection() {
        let mut picker = LocationPicker::new(Coordinates::new(-23.0, -46.0));
        let before = picker;

        picker.select(Coordinates::new(10.0, 20.0));
        assert_eq!(picker.selected, Coordinates::new(10.0, 20.0));
        assert_eq!(picker.initial_center, before.initial_center);
    }

    #[test]
    fn test_denied_permission_keeps_default_center() {
        let default_center = Coordinates::new(-15.79, -47.88);
        let mut picker = LocationPicker::new(default_center);

        picker.apply_geolocation(Err(AppError::PermissionDenied));
        assert_eq!(picker.initial_center, default_center);

        picker.apply_geolocation(Err(AppError::GeolocationUnavailable("timeout".into())));
        assert_eq!(picker.initial_center, default_center);
        assert!(!picker.has_selection());
    }

    #[test]
    fn test_granted_position_recenters() {
        let mut picker = LocationPicker::default();
        picker.apply_geolocation(Ok(Coordinates::new(-23.5, -46.6)));
        assert_eq!(picker.initial_center, Coordinates::new(-23.5, -46.6));
        assert_eq!(picker.selected, Coordinates::ORIGIN);
    }
}
