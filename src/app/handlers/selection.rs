//! Handler für Selektions-Operationen.

use crate::app::state::InteractionPhase;
use crate::app::EditorState;
use crate::core::ControlId;

/// Baut die Selektions-IDs aus den Flags neu auf, damit Folge-Commands im
/// selben Frame die aktuelle Selektion sehen (der nächste Layout-Pass
/// würde sonst erst wieder synchronisieren).
fn rebuild_selected_ids(state: &mut EditorState) {
    state.selection.selected_ids = state
        .model
        .control_points()
        .iter()
        .filter(|cp| cp.is_selected && !cp.is_locked)
        .map(|cp| cp.id)
        .collect();
}

/// Selektiert einen Punkt per Klick.
///
/// Plain-Klick ersetzt die Selektion, additiver Klick toggelt die
/// Membership. Gesperrte Punkte werden ignoriert (der Mapping-Layer
/// filtert sie bereits, der Guard hier fängt direkte Command-Aufrufe ab).
pub fn select_point(state: &mut EditorState, id: ControlId, additive: bool) {
    if !additive {
        for cp in state.model.control_points_mut() {
            cp.is_selected = false;
        }
    }

    let Some(cp) = state.model.find_mut(id) else {
        return;
    };
    if cp.is_locked {
        return;
    }
    cp.is_selected = if additive { !cp.is_selected } else { true };

    rebuild_selected_ids(state);
    state.frame.phase = InteractionPhase::Selecting;
    log::debug!("Selektion: {} Punkt(e)", state.selection.len());
}

/// Hebt die Selektion vollständig auf.
pub fn clear(state: &mut EditorState) {
    for cp in state.model.control_points_mut() {
        cp.is_selected = false;
    }
    state.selection.selected_ids.clear();
    if state.frame.phase == InteractionPhase::Selecting {
        state.frame.phase = InteractionPhase::Idle;
    }
}

/// Beendet die Selecting-Phase beim Loslassen der Primärtaste.
pub fn release_pointer(state: &mut EditorState) {
    if state.frame.phase == InteractionPhase::Selecting {
        state.frame.phase = InteractionPhase::Idle;
    }
}
