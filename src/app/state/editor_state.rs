use crate::app::CommandLog;
use crate::core::CurveModel;
use crate::shared::EditorOptions;

use super::{FrameState, SelectionState, TravellerState};

/// Hauptzustand einer Editor-Session.
///
/// Eine Session gehört genau einem Playfield-Element; der Host erstellt
/// pro editiertem Element eine eigene Instanz.
pub struct EditorState {
    /// ControlPoint-Modell über der DragPoint-Sequenz des Hosts
    pub model: CurveModel,
    /// Selection-State (pro Layout-Pass neu aufgebaut)
    pub selection: SelectionState,
    /// Frame-State (Hit-Targets, Pivot, Phase)
    pub frame: FrameState,
    /// Curve-Traveller
    pub traveller: TravellerState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Sampling)
    pub options: EditorOptions,
    /// Geschlossene Kurve (Rubber, Wand) statt offener (Rampe)
    pub closed_curve: bool,
}

impl EditorState {
    /// Erstellt einen neuen, leeren Editor-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen Editor-State mit gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            model: CurveModel::new(),
            selection: SelectionState::new(),
            frame: FrameState::default(),
            traveller: TravellerState::default(),
            command_log: CommandLog::new(),
            options,
            closed_curve: false,
        }
    }

    /// Gibt die Anzahl der ControlPoints zurück (für UI-Anzeige).
    pub fn point_count(&self) -> usize {
        self.model.control_points().len()
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
