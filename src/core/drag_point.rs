//! Persistierte DragPoint-Daten: ein Stützpunkt der Playfield-Kurve.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Ein persistierter Kurven-Stützpunkt in lokalen Koordinaten des Elements.
///
/// Die Identität eines DragPoints ist seine Position in der geordneten
/// Sequenz des Hosts — er trägt selbst keine ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragPoint {
    /// Position in lokalen Koordinaten des Playfield-Elements
    pub center: Vec3,
    /// Gesperrte Punkte sind nicht selektierbar und nur nach Rückfrage löschbar
    pub is_locked: bool,
    /// Glatter Kurvenübergang (Render-Hint)
    pub is_smooth: bool,
    /// Punkt gehört zu einem Slingshot-Segment (Render-Hint)
    pub is_slingshot: bool,
    /// Textur-Koordinate automatisch berechnen (Render-Hint)
    pub has_auto_texture: bool,
    /// Manuelle Textur-Koordinate, nur relevant wenn `has_auto_texture == false`
    pub texture_coord: f32,
}

impl DragPoint {
    /// Erstellt einen neuen, ungesperrten DragPoint an der gegebenen Position.
    pub fn new(center: Vec3) -> Self {
        Self {
            center,
            is_locked: false,
            is_smooth: false,
            is_slingshot: false,
            has_auto_texture: true,
            texture_coord: 0.0,
        }
    }

    /// Erstellt einen neuen Punkt mit den Render-Hints einer Vorlage.
    ///
    /// Neue Punkte sind immer ungesperrt, unabhängig von der Vorlage.
    pub fn from_template(template: &DragPoint) -> Self {
        Self {
            is_locked: false,
            ..template.clone()
        }
    }
}

/// Spiegelachse für die Flip-Operation.
///
/// Als geschlossenes Enum ist eine ungültige Achse nicht darstellbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipAxis {
    X,
    Y,
    Z,
}

impl FlipAxis {
    /// Extrahiert die Komponente dieser Achse aus einem Vektor.
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            FlipAxis::X => v.x,
            FlipAxis::Y => v.y,
            FlipAxis::Z => v.z,
        }
    }

    /// Schreibt die Komponente dieser Achse in einen Vektor.
    pub fn set_component(self, v: &mut Vec3, value: f32) {
        match self {
            FlipAxis::X => v.x = value,
            FlipAxis::Y => v.y = value,
            FlipAxis::Z => v.z = value,
        }
    }
}
