use crate::core::ControlId;
use glam::{Vec2, Vec3};

/// Interaktionsphase der Editor-Session.
///
/// Übergänge pro UI-Frame: `Idle → Hovering → (Selecting | Dragging) → Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionPhase {
    /// Keine Interaktion
    #[default]
    Idle,
    /// Cursor über einem registrierten Hit-Target
    Hovering {
        /// Das Target unter dem Cursor
        id: ControlId,
    },
    /// Primärtaste auf einem Punkt gedrückt (Selektion läuft)
    Selecting,
    /// Gruppen-Handle wird gezogen
    Dragging,
}

/// Screen-Space-Hit-Target eines ControlPoints oder des Travellers.
#[derive(Debug, Clone, Copy)]
pub struct HitTarget {
    /// Interaktions-ID des Targets
    pub id: ControlId,
    /// Screenposition des Handle-Zentrums
    pub screen_pos: Vec2,
    /// Hit-Radius in Screen-Pixeln
    pub radius: f32,
}

/// Pro-Frame-Zustand des Layout-Passes.
///
/// Hit-Targets, Flip-Pivot und Gruppen-Handle werden in jedem Layout-Pass
/// komplett neu berechnet; zwischen Frames ist nur die Phase stabil.
#[derive(Debug, Default)]
pub struct FrameState {
    /// Aktuelle Interaktionsphase
    pub phase: InteractionPhase,
    /// Registrierte Hit-Targets dieses Frames
    pub hit_targets: Vec<HitTarget>,
    /// Mittelwert aller Weltpositionen (Pivot für Flip-Operationen),
    /// pro Layout-Pass zurückgesetzt
    pub flip_pivot: Vec3,
    /// Weltposition des Gruppen-Handles (Zentroid der Selektion),
    /// `None` bei leerer Selektion
    pub group_handle: Option<Vec3>,
}

impl FrameState {
    /// Nächstgelegenes Hit-Target, dessen Radius den Cursor enthält.
    ///
    /// Bei Überlappung gewinnt das Target mit dem kleinsten Abstand
    /// zum Cursor.
    pub fn nearest_hit(&self, cursor: Vec2) -> Option<ControlId> {
        self.hit_targets
            .iter()
            .filter_map(|target| {
                let dist = target.screen_pos.distance(cursor);
                (dist <= target.radius).then_some((target.id, dist))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }
}
