//! Handler für mutierende Editing-Operationen (Insert, Remove, Flip,
//! Lock, Gruppen-Drag).

use crate::app::state::InteractionPhase;
use crate::app::EditorState;
use crate::core::{ControlId, FlipAxis};
use crate::host::HostContext;
use glam::Vec3;

/// Fügt einen neuen Punkt an der Traveller-Position ein.
///
/// Referenzindex und Weltposition kommen aus dem Traveller-Zustand;
/// ohne sichtbaren Traveller mit gültigem Segment ist das ein No-op.
pub fn add_point_at_traveller(state: &mut EditorState, host: &mut HostContext<'_>) {
    let Some(reference_index) = state.traveller.segment_index else {
        log::debug!("Traveller ohne Segment — Einfügen übersprungen");
        return;
    };
    if !state.traveller.visible {
        return;
    }

    if state.model.insert_after(
        reference_index,
        state.traveller.world_pos,
        host.store,
        host.transform,
    ) {
        // Rebuild hat Selektion und Caches verworfen
        state.selection.selected_ids.clear();
        host.persistence.mark_dirty();
        log::info!(
            "DragPoint hinter Index {} eingefügt ({} Punkte)",
            reference_index,
            state.model.control_points().len()
        );
    }
}

/// Entfernt einen Punkt; gesperrte Punkte nur nach bestätigter Rückfrage.
pub fn remove_point(state: &mut EditorState, host: &mut HostContext<'_>, id: ControlId) {
    if state.model.remove(id, host.store, host.prompt) {
        state.selection.selected_ids.clear();
        host.persistence.mark_dirty();
        log::info!(
            "DragPoint entfernt ({} Punkte verbleiben)",
            state.model.control_points().len()
        );
    }
}

/// Spiegelt alle Punkte auf der gegebenen Achse um den Frame-Pivot.
pub fn flip_points(state: &mut EditorState, host: &mut HostContext<'_>, axis: FlipAxis) {
    if state.model.control_points().is_empty() {
        return;
    }
    state
        .model
        .flip(axis, state.frame.flip_pivot, host.store, host.transform);
    host.persistence.mark_dirty();
    log::info!("Kurve auf Achse {:?} gespiegelt", axis);
}

/// Setzt das Lock-Flag auf allen Punkten; benachrichtigt die Persistenz
/// nur bei tatsächlicher Änderung.
pub fn set_all_locked(state: &mut EditorState, host: &mut HostContext<'_>, locked: bool) {
    if state.model.set_locked(locked, host.store) {
        host.persistence.mark_dirty();
        log::info!("Lock-Status aller Punkte: {}", locked);
    } else {
        log::debug!("Lock-Status unverändert");
    }
}

/// Beginnt einen Gruppen-Drag.
pub fn begin_group_drag(state: &mut EditorState) {
    state.frame.phase = InteractionPhase::Dragging;
}

/// Zieht das Gruppen-Handle: wendet das Delta uniform auf alle
/// selektierten Punkte an und schreibt die Positionen zurück.
pub fn drag_group_handle(state: &mut EditorState, host: &mut HostContext<'_>, world_pos: Vec3) {
    let Some(handle) = state.frame.group_handle else {
        return;
    };
    let delta = world_pos - handle;
    if delta.length_squared() <= f32::EPSILON {
        return;
    }

    let ids = state.selection.selected_ids.clone();
    state.model.translate(&ids, delta, host.store, host.transform);
    state.frame.group_handle = Some(world_pos);
    state.frame.phase = InteractionPhase::Dragging;
}

/// Schließt den Gruppen-Drag ab und benachrichtigt die Persistenz einmal.
pub fn end_group_drag(state: &mut EditorState, host: &mut HostContext<'_>) {
    if state.frame.phase == InteractionPhase::Dragging {
        host.persistence.mark_dirty();
    }
    state.frame.phase = InteractionPhase::Idle;
}

/// Aktualisiert den Traveller-Zustand (vom Render-Adapter getrieben).
pub fn update_traveller(
    state: &mut EditorState,
    world_pos: Vec3,
    segment_index: Option<usize>,
    visible: bool,
) {
    state.traveller.world_pos = world_pos;
    state.traveller.segment_index = segment_index;
    state.traveller.visible = visible;
}

/// Re-synchronisiert das Modell mit der Host-Sequenz.
pub fn remap(state: &mut EditorState, host: &mut HostContext<'_>) {
    if state.model.remap(host.store) {
        state.selection.selected_ids.clear();
        log::debug!("ControlPoints nach externer Änderung neu aufgebaut");
    }
}

/// Übernimmt geänderte Optionen.
pub fn apply_options(state: &mut EditorState, options: crate::shared::EditorOptions) {
    state.options = options;
}
