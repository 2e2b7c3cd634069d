use crate::core::ControlId;

/// Auswahlbezogener Interaktionszustand.
///
/// Wird zu Beginn jedes Layout-Passes geleert und aus den Selektions-Flags
/// der ControlPoints neu aufgebaut; gesperrte Punkte sind nie enthalten.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// IDs der aktuell selektierten, ungesperrten ControlPoints
    /// (in Sequenz-Reihenfolge)
    pub selected_ids: Vec<ControlId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prüft ob die Selektion leer ist.
    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    /// Anzahl der selektierten Punkte.
    pub fn len(&self) -> usize {
        self.selected_ids.len()
    }

    /// Prüft ob ein Punkt selektiert ist.
    pub fn contains(&self, id: ControlId) -> bool {
        self.selected_ids.contains(&id)
    }
}
