//! Handler für den Layout-Pass: Positions-Caches, Hit-Targets, Pivot.

use crate::app::state::{HitTarget, InteractionPhase};
use crate::app::EditorState;
use crate::core::SCREEN_RADIUS;
use crate::host::HostContext;
use glam::{Vec2, Vec3};

/// Führt den Layout-Pass eines UI-Frames aus.
///
/// Synchronisiert zuerst das Modell mit der Host-Sequenz (fängt externe
/// Edits und Host-Undo ab), berechnet dann für jeden ControlPoint Welt-
/// und Screenposition, akkumuliert den Flip-Pivot, baut die Selektion aus
/// den Flags neu auf und registriert die Hit-Targets des Frames.
pub fn run_layout_pass(state: &mut EditorState, host: &mut HostContext<'_>, cursor: Option<Vec2>) {
    if state.model.remap(host.store) {
        log::debug!(
            "ControlPoints neu aufgebaut ({} Punkte)",
            state.model.control_points().len()
        );
    }

    state.frame.hit_targets.clear();
    state.selection.selected_ids.clear();

    let mut pivot_sum = Vec3::ZERO;
    let count = state.model.control_points().len();

    for cp in state.model.control_points_mut() {
        let Some(dp) = host.store.drag_points().get(cp.index) else {
            continue;
        };
        cp.is_locked = dp.is_locked;
        cp.is_slingshot = dp.is_slingshot;

        let local = dp.center + host.store.base_offset() + host.store.point_offset(cp.ratio);
        cp.world_pos = host.transform.local_to_world(local);
        cp.screen_pos = host.view.world_to_screen(cp.world_pos);
        pivot_sum += cp.world_pos;

        if cp.is_selected && !cp.is_locked {
            state.selection.selected_ids.push(cp.id);
        }

        state.frame.hit_targets.push(HitTarget {
            id: cp.id,
            screen_pos: cp.screen_pos,
            radius: host.view.handle_size(cp.world_pos)
                * SCREEN_RADIUS
                * state.options.control_point_size_ratio,
        });
    }

    state.frame.flip_pivot = if count > 0 {
        pivot_sum / count as f32
    } else {
        Vec3::ZERO
    };

    // Gruppen-Handle am Zentroid der Selektion
    state.frame.group_handle = if state.selection.is_empty() {
        None
    } else {
        let mut sum = Vec3::ZERO;
        for &id in &state.selection.selected_ids {
            if let Some(cp) = state.model.find(id) {
                sum += cp.world_pos;
            }
        }
        Some(sum / state.selection.len() as f32)
    };

    // Traveller als zusätzliches Hit-Target (halber Basisradius)
    if state.traveller.visible {
        state.frame.hit_targets.push(HitTarget {
            id: state.model.traveller_id(),
            screen_pos: host.view.world_to_screen(state.traveller.world_pos),
            radius: host.view.handle_size(state.traveller.world_pos)
                * SCREEN_RADIUS
                * state.options.traveller_size_ratio
                * 0.5,
        });
    }

    // Hover nur ableiten, wenn keine Interaktion läuft
    state.frame.phase = match state.frame.phase {
        InteractionPhase::Dragging => InteractionPhase::Dragging,
        InteractionPhase::Selecting => InteractionPhase::Selecting,
        InteractionPhase::Idle | InteractionPhase::Hovering { .. } => {
            match cursor.and_then(|c| state.frame.nearest_hit(c)) {
                Some(id) => InteractionPhase::Hovering { id },
                None => InteractionPhase::Idle,
            }
        }
    };
}
