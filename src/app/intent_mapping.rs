//! Mapping von UI-Intents auf mutierende Editor-Commands.

use super::state::InteractionPhase;
use super::{EditorCommand, EditorIntent, EditorState};


/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer `EditorCommand`s.
///
/// Hier lebt die Eingabe-Logik (Hit-Test-Auswertung, Lock-Regeln,
/// Phasen-Guards); die Commands selbst sind kontextfreie Mutationsschritte.
pub fn map_intent_to_commands(state: &EditorState, intent: EditorIntent) -> Vec<EditorCommand> {
    match intent {
        EditorIntent::LayoutRequested { cursor } => {
            vec![EditorCommand::RunLayoutPass { cursor }]
        }

        EditorIntent::PointerPressed { screen_pos, toggle } => {
            match state.frame.nearest_hit(screen_pos) {
                // Traveller-Klick selektiert nicht — Einfügen läuft über
                // einen eigenen Intent
                Some(id) if id == state.model.traveller_id() => vec![],
                Some(id) => {
                    let locked = state
                        .model
                        .find(id)
                        .map(|cp| cp.is_locked)
                        .unwrap_or(false);
                    if locked {
                        // Gesperrte Punkte sind nie selektierbar
                        vec![]
                    } else {
                        vec![EditorCommand::SelectPoint {
                            id,
                            additive: toggle,
                        }]
                    }
                }
                // Klick ins Leere: nur Plain-Klick hebt die Selektion auf
                None if !toggle => vec![EditorCommand::ClearSelection],
                None => vec![],
            }
        }

        EditorIntent::PointerReleased => vec![EditorCommand::ReleasePointer],

        EditorIntent::GroupHandleDragged { world_pos } => {
            if state.selection.is_empty() {
                return vec![];
            }
            if state.frame.phase == InteractionPhase::Dragging {
                vec![EditorCommand::DragGroupHandle { world_pos }]
            } else {
                vec![
                    EditorCommand::BeginGroupDrag,
                    EditorCommand::DragGroupHandle { world_pos },
                ]
            }
        }

        EditorIntent::GroupHandleReleased => {
            if state.frame.phase == InteractionPhase::Dragging {
                vec![EditorCommand::EndGroupDrag]
            } else {
                vec![]
            }
        }

        EditorIntent::TravellerMoved {
            world_pos,
            segment_index,
            visible,
        } => vec![EditorCommand::UpdateTraveller {
            world_pos,
            segment_index: Some(segment_index),
            visible,
        }],

        EditorIntent::TravellerHidden => vec![EditorCommand::UpdateTraveller {
            world_pos: state.traveller.world_pos,
            segment_index: state.traveller.segment_index,
            visible: false,
        }],

        EditorIntent::AddPointAtTravellerRequested => {
            if state.traveller.visible && state.traveller.segment_index.is_some() {
                vec![EditorCommand::AddPointAtTraveller]
            } else {
                vec![]
            }
        }

        EditorIntent::RemovePointRequested { id } => vec![EditorCommand::RemovePoint { id }],

        EditorIntent::FlipRequested { axis } => vec![EditorCommand::FlipPoints { axis }],

        EditorIntent::SetAllLockedRequested { locked } => {
            vec![EditorCommand::SetAllLocked { locked }]
        }

        EditorIntent::ClearSelectionRequested => vec![EditorCommand::ClearSelection],

        EditorIntent::SyncRequested => vec![EditorCommand::RemapControlPoints],

        EditorIntent::OptionsChanged { options } => vec![EditorCommand::ApplyOptions { options }],
    }
}
