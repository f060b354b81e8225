// ============================================================================
// ITEM SELECTION - Conjunto de categorías marcadas
// ============================================================================

/// Ids seleccionados, en orden de primer click y sin duplicados
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSelection {
    ids: Vec<u32>,
}

impl ItemSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marca o desmarca `id`. Devuelve true si quedó seleccionado.
    pub fn toggle(&mut self, id: u32) -> bool {
        if let Some(pos) = self.ids.iter().position(|&selected| selected == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_double_toggle_restores_selection() {
        let mut selection = ItemSelection::new();
        selection.toggle(2);
        let before = selection.clone();

        assert!(selection.toggle(5));
        assert!(!selection.toggle(5));
        assert_eq!(selection, before);

        assert!(!selection.toggle(2));
        assert!(selection.toggle(2));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_never_holds_duplicates() {
        let mut selection = ItemSelection::new();
        let sequence = [1, 3, 1, 1, 6, 3, 2, 6, 6, 1, 4, 2, 2];
        for id in sequence {
            selection.toggle(id);
            let unique: HashSet<_> = selection.ids().iter().collect();
            assert_eq!(unique.len(), selection.len());
        }
        // 1 x4 -> fuera, 3 x2 -> fuera, 6 x3 -> dentro, 2 x3 -> dentro, 4 x1 -> dentro
        assert_eq!(selection.ids(), &[6, 4, 2]);
    }

    #[test]
    fn test_keeps_first_click_order() {
        let mut selection = ItemSelection::new();
        selection.toggle(3);
        selection.toggle(1);
        assert_eq!(selection.ids(), &[3, 1]);
        assert!(selection.contains(1));
        assert!(!selection.contains(2));
    }
}
