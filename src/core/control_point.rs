//! Transiente ControlPoint-Projektion eines DragPoints für die Interaktion.

use glam::{Vec2, Vec3};

/// Screen-Basisradius eines Control-Point-Handles (wird mit Handle-Größe
/// und konfigurierbarem Size-Ratio multipliziert).
pub const SCREEN_RADIUS: f32 = 0.25;

/// Stabile Interaktions-ID eines ControlPoints innerhalb einer Editor-Session.
///
/// Wird bei jedem Rebuild neu vergeben (vgl. die Hit-Test-Control-IDs des
/// Host-Editors) und ist nur für Hit-Tests und Selektion gedacht — nicht
/// persistiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(pub u64);

/// Ephemere UI-Projektion eines DragPoints.
///
/// Gehört exklusiv dem `CurveModel`: wird bei Längenänderung der
/// DragPoint-Sequenz komplett neu aufgebaut, sonst in-place aktualisiert.
#[derive(Debug, Clone)]
pub struct ControlPoint {
    /// Interaktions-ID für Hit-Tests
    pub id: ControlId,
    /// Index in der DragPoint-Sequenz des Hosts
    pub index: usize,
    /// Normierte Position entlang der Kurve: `index / (count - 1)`, 0 bei count == 1
    pub ratio: f32,
    /// Gecachte Weltposition (wird im Layout-Pass aktualisiert)
    pub world_pos: Vec3,
    /// Gecachte Screenposition (wird im Layout-Pass aktualisiert)
    pub screen_pos: Vec2,
    /// Selektions-Flag
    pub is_selected: bool,
    /// Lock-Flag des DragPoints, im Layout-Pass gecacht
    pub is_locked: bool,
    /// Slingshot-Hint des DragPoints, im Layout-Pass gecacht
    pub is_slingshot: bool,
}

impl ControlPoint {
    /// Erstellt einen neuen, unselektierten ControlPoint.
    pub fn new(id: ControlId, index: usize, ratio: f32) -> Self {
        Self {
            id,
            index,
            ratio,
            world_pos: Vec3::ZERO,
            screen_pos: Vec2::ZERO,
            is_selected: false,
            is_locked: false,
            is_slingshot: false,
        }
    }
}
