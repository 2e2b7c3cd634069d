//! Einfache Capability-Implementierungen für Tests und Headless-Hosts.

use super::{ConfirmPrompt, PersistenceHook, PointStore, ViewProjection};
use crate::core::DragPoint;
use glam::{Vec2, Vec3};

/// In-Memory-Punktdaten-Quelle.
///
/// Für Tests und Hosts ohne eigene Element-Persistenz; echte Editor-Hosts
/// binden stattdessen ihre Komponenten-Daten an `PointStore`.
#[derive(Debug, Default)]
pub struct MemoryPointStore {
    /// Die gehaltene DragPoint-Sequenz
    pub points: Vec<DragPoint>,
    /// Basis-Offset der gesamten Kurve
    pub base_offset: Vec3,
    /// Konstanter Höhen-Offset pro Ratio-Einheit (vereinfachtes Höhenprofil)
    pub height_per_ratio: f32,
}

impl MemoryPointStore {
    /// Erstellt einen Store aus lokalen Punktpositionen.
    pub fn from_positions(positions: &[Vec3]) -> Self {
        Self {
            points: positions.iter().map(|&p| DragPoint::new(p)).collect(),
            base_offset: Vec3::ZERO,
            height_per_ratio: 0.0,
        }
    }
}

impl PointStore for MemoryPointStore {
    fn drag_points(&self) -> &[DragPoint] {
        &self.points
    }

    fn set_drag_points(&mut self, points: Vec<DragPoint>) {
        self.points = points;
    }

    fn set_center(&mut self, index: usize, center: Vec3) {
        if let Some(point) = self.points.get_mut(index) {
            point.center = center;
        }
    }

    fn set_locked(&mut self, index: usize, locked: bool) {
        if let Some(point) = self.points.get_mut(index) {
            point.is_locked = locked;
        }
    }

    fn base_offset(&self) -> Vec3 {
        self.base_offset
    }

    fn point_offset(&self, ratio: f32) -> Vec3 {
        Vec3::new(0.0, 0.0, ratio * self.height_per_ratio)
    }
}

/// Orthografische Draufsicht auf das Playfield (x/y-Ebene).
#[derive(Debug, Clone, Copy)]
pub struct TopDownProjection {
    /// Screen-Pixel pro Welteinheit
    pub pixels_per_unit: f32,
    /// Fixe Basis-Handlegröße in Screen-Pixeln
    pub handle_size_px: f32,
}

impl Default for TopDownProjection {
    fn default() -> Self {
        Self {
            pixels_per_unit: 1.0,
            handle_size_px: 80.0,
        }
    }
}

impl ViewProjection for TopDownProjection {
    fn world_to_screen(&self, world: Vec3) -> Vec2 {
        Vec2::new(world.x, world.y) * self.pixels_per_unit
    }

    fn handle_size(&self, _world: Vec3) -> f32 {
        self.handle_size_px
    }
}

/// Rückfrage-Dialog mit fester Antwort; zählt die Anfragen mit.
#[derive(Debug, Default)]
pub struct AutoConfirm {
    /// Antwort auf jede Rückfrage
    pub answer: bool,
    /// Anzahl der gestellten Rückfragen
    pub asked: usize,
}

impl AutoConfirm {
    /// Erstellt einen Dialog, der immer `answer` antwortet.
    pub fn new(answer: bool) -> Self {
        Self { answer, asked: 0 }
    }
}

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&mut self, _title: &str, _message: &str) -> bool {
        self.asked += 1;
        self.answer
    }
}

/// Persistenz-Hook, der Benachrichtigungen nur mitzählt.
#[derive(Debug, Default)]
pub struct DirtyCounter {
    /// Anzahl der `mark_dirty`-Aufrufe
    pub count: usize,
}

impl PersistenceHook for DirtyCounter {
    fn mark_dirty(&mut self) {
        self.count += 1;
    }
}
