//! Host-Capabilities als injizierte Traits.
//!
//! Der Kern kennt weder GUI noch Szene des Host-Editors: Punktdaten,
//! Transformation, Projektion, Rückfrage-Dialog und Persistenz laufen
//! ausschließlich über diese Schnittstellen.

mod bridge;

pub use bridge::{AutoConfirm, DirtyCounter, MemoryPointStore, TopDownProjection};

use crate::core::DragPoint;
use glam::{Vec2, Vec3};

/// Geordnete Punktdaten-Quelle des Hosts.
///
/// Die DragPoint-Sequenz gehört dem Host (sie ist Teil seiner
/// Element-Persistenz); der Kern liest und schreibt sie nur über
/// diese Schnittstelle.
pub trait PointStore {
    /// Die geordnete DragPoint-Sequenz.
    fn drag_points(&self) -> &[DragPoint];

    /// Ersetzt die komplette Sequenz (strukturelle Änderung).
    fn set_drag_points(&mut self, points: Vec<DragPoint>);

    /// Schreibt die lokale Position eines einzelnen Punkts.
    fn set_center(&mut self, index: usize, center: Vec3);

    /// Setzt das Lock-Flag eines einzelnen Punkts.
    fn set_locked(&mut self, index: usize, locked: bool);

    /// Basis-Offset, der auf die gesamte Kurve angewendet wird.
    fn base_offset(&self) -> Vec3 {
        Vec3::ZERO
    }

    /// Per-Punkt-Offset als Funktion des Kurven-Ratios (z.B. Höhenprofil
    /// einer Rampe).
    fn point_offset(&self, _ratio: f32) -> Vec3 {
        Vec3::ZERO
    }
}

/// Lokal-zu-Welt-Transformation des Playfield-Elements.
pub trait CurveTransform {
    /// Bildet einen lokalen Punkt in Weltkoordinaten ab.
    fn local_to_world(&self, p: Vec3) -> Vec3;
    /// Bildet einen Weltpunkt in lokale Koordinaten ab.
    fn world_to_local(&self, p: Vec3) -> Vec3;
}

impl CurveTransform for glam::Affine3A {
    fn local_to_world(&self, p: Vec3) -> Vec3 {
        self.transform_point3(p)
    }

    fn world_to_local(&self, p: Vec3) -> Vec3 {
        self.inverse().transform_point3(p)
    }
}

/// Projektion des Host-Viewports für Screenpositionen und Hit-Radien.
pub trait ViewProjection {
    /// Projiziert eine Weltposition auf Screen-Pixel.
    fn world_to_screen(&self, world: Vec3) -> Vec2;

    /// Basis-Handlegröße in Screen-Pixeln für ein Handle an dieser
    /// Weltposition (entspricht der fixen Screen-Größe der Host-Gizmos).
    fn handle_size(&self, world: Vec3) -> f32;
}

/// Ja/Nein-Rückfrage für destruktive Aktionen auf gesperrten Daten.
pub trait ConfirmPrompt {
    /// Zeigt die Rückfrage an und liefert `true` bei Bestätigung.
    fn confirm(&mut self, title: &str, message: &str) -> bool;
}

/// Persistenz-Benachrichtigung: wird nach strukturellen Änderungen und
/// abgeschlossenen Drags gerufen, damit der Host Dirty/Undo markieren kann.
pub trait PersistenceHook {
    /// Markiert die Element-Daten als geändert.
    fn mark_dirty(&mut self);
}

/// Gebündelte Host-Capabilities für einen Controller-Aufruf.
///
/// Explizite Dependency-Injection statt Parent-Lookup: der Host reicht
/// seine Capabilities pro Frame herein, der Kern hält keine Referenzen.
pub struct HostContext<'a> {
    /// Punktdaten-Quelle
    pub store: &'a mut dyn PointStore,
    /// Element-Transformation
    pub transform: &'a dyn CurveTransform,
    /// Viewport-Projektion
    pub view: &'a dyn ViewProjection,
    /// Rückfrage-Dialog
    pub prompt: &'a mut dyn ConfirmPrompt,
    /// Dirty/Undo-Benachrichtigung
    pub persistence: &'a mut dyn PersistenceHook,
}
