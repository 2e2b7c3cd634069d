//! Das CurveModel: geordnete ControlPoint-Sequenz mit Insert/Remove/Remap
//! gegen die Punktdaten-Quelle des Hosts.

use super::{ControlId, ControlPoint, DragPoint, FlipAxis};
use crate::host::{ConfirmPrompt, CurveTransform, PointStore};
use glam::Vec3;

/// Geordnete Sequenz von ControlPoints über der DragPoint-Sequenz des Hosts.
///
/// Invariante nach jeder mutierenden Operation:
/// `control_points().len() == store.drag_points().len()`, Ratios
/// monoton nicht-fallend in `0..=1`.
pub struct CurveModel {
    control_points: Vec<ControlPoint>,
    traveller_id: ControlId,
    next_control_id: u64,
}

impl CurveModel {
    /// Erstellt ein leeres Modell.
    pub fn new() -> Self {
        let mut model = Self {
            control_points: Vec::new(),
            traveller_id: ControlId(0),
            next_control_id: 1,
        };
        model.traveller_id = model.alloc_id();
        model
    }

    /// Read-only Sicht auf alle ControlPoints.
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    /// Mutable Sicht für den Layout-Pass (Cache-Positionen, Selektion).
    pub fn control_points_mut(&mut self) -> &mut [ControlPoint] {
        &mut self.control_points
    }

    /// Interaktions-ID des Curve-Travellers (wird bei Rebuilds erneuert).
    pub fn traveller_id(&self) -> ControlId {
        self.traveller_id
    }

    /// Findet einen ControlPoint über seine Interaktions-ID.
    pub fn find(&self, id: ControlId) -> Option<&ControlPoint> {
        self.control_points.iter().find(|cp| cp.id == id)
    }

    /// Findet einen ControlPoint mutable über seine Interaktions-ID.
    pub fn find_mut(&mut self, id: ControlId) -> Option<&mut ControlPoint> {
        self.control_points.iter_mut().find(|cp| cp.id == id)
    }

    fn alloc_id(&mut self) -> ControlId {
        let id = ControlId(self.next_control_id);
        self.next_control_id += 1;
        id
    }

    /// Synchronisiert die ControlPoints mit der DragPoint-Sequenz des Hosts.
    ///
    /// Bei Längen-Abweichung (externe Edits, Host-Undo) wird komplett neu
    /// aufgebaut, sonst werden die Indizes in-place bestätigt.
    /// Gibt `true` zurück, wenn ein Rebuild stattfand.
    pub fn remap(&mut self, store: &dyn PointStore) -> bool {
        if self.control_points.len() != store.drag_points().len() {
            self.rebuild(store);
            return true;
        }

        for (i, cp) in self.control_points.iter_mut().enumerate() {
            cp.index = i;
        }
        false
    }

    /// Baut alle ControlPoints neu auf: frische IDs, neu berechnete Ratios.
    /// Selektion und Positions-Caches gehen dabei verloren (werden im
    /// nächsten Layout-Pass neu gefüllt).
    fn rebuild(&mut self, store: &dyn PointStore) {
        let count = store.drag_points().len();
        self.control_points.clear();
        for i in 0..count {
            let ratio = if count > 1 {
                i as f32 / (count - 1) as f32
            } else {
                0.0
            };
            let id = self.alloc_id();
            self.control_points.push(ControlPoint::new(id, i, ratio));
        }
        self.traveller_id = self.alloc_id();
    }

    /// Fügt einen neuen DragPoint direkt hinter dem Traveller-Referenzindex ein.
    ///
    /// Die lokale Position entsteht durch Rücktransformation der
    /// Traveller-Weltposition abzüglich Basis- und Ratio-Offset. Der neue
    /// Punkt übernimmt die Render-Hints des Referenzpunkts und ist ungesperrt.
    ///
    /// Out-of-range Referenzindex ist ein stiller No-op (kein Fehler).
    /// Gibt `true` zurück, wenn eingefügt wurde.
    pub fn insert_after(
        &mut self,
        reference_index: usize,
        traveller_world: Vec3,
        store: &mut dyn PointStore,
        transform: &dyn CurveTransform,
    ) -> bool {
        let points = store.drag_points();
        if reference_index >= points.len() {
            return false;
        }

        let new_index = reference_index + 1;
        // Ratio relativ zur alten Länge, wie beim Einfüge-Offset des Hosts
        let ratio = new_index as f32 / points.len() as f32;

        let mut local = transform.world_to_local(traveller_world);
        local -= store.base_offset();
        local -= store.point_offset(ratio);

        let mut new_point = DragPoint::from_template(&points[reference_index]);
        new_point.center = local;

        let mut updated = points.to_vec();
        updated.insert(new_index, new_point);
        store.set_drag_points(updated);

        self.rebuild(store);
        true
    }

    /// Entfernt den Punkt mit der gegebenen Interaktions-ID.
    ///
    /// Unbekannte IDs sind ein stiller No-op. Gesperrte Punkte werden nur
    /// nach bestätigter Rückfrage entfernt; Ablehnen lässt den Zustand
    /// unverändert. Gibt `true` zurück, wenn entfernt wurde.
    pub fn remove(
        &mut self,
        id: ControlId,
        store: &mut dyn PointStore,
        prompt: &mut dyn ConfirmPrompt,
    ) -> bool {
        let Some(index) = self.control_points.iter().position(|cp| cp.id == id) else {
            return false;
        };

        let locked = store
            .drag_points()
            .get(index)
            .map(|dp| dp.is_locked)
            .unwrap_or(false);
        if locked
            && !prompt.confirm(
                "Gesperrten DragPoint entfernen",
                "Dieser DragPoint ist gesperrt!\nSoll er wirklich entfernt werden?",
            )
        {
            return false;
        }

        let mut updated = store.drag_points().to_vec();
        updated.remove(index);
        store.set_drag_points(updated);

        self.rebuild(store);
        true
    }

    /// Spiegelt alle Punkte auf der gegebenen Achse um den Pivot
    /// (Mittelwert der Weltpositionen, vom Layout-Pass pro Frame berechnet).
    ///
    /// Schreibt die gespiegelten Weltpositionen durch die inverse
    /// Transformation in die DragPoints zurück.
    pub fn flip(
        &mut self,
        axis: FlipAxis,
        pivot: Vec3,
        store: &mut dyn PointStore,
        transform: &dyn CurveTransform,
    ) {
        let pivot_coord = axis.component(pivot);
        for i in 0..self.control_points.len() {
            let cp = &mut self.control_points[i];
            let coord = axis.component(cp.world_pos);
            axis.set_component(&mut cp.world_pos, pivot_coord + (pivot_coord - coord));

            let cp = &self.control_points[i];
            Self::write_back(cp, store, transform);
        }
    }

    /// Verschiebt die Punkte mit den gegebenen IDs um ein Welt-Delta und
    /// schreibt die neuen Positionen in die DragPoints zurück.
    pub fn translate(
        &mut self,
        ids: &[ControlId],
        delta: Vec3,
        store: &mut dyn PointStore,
        transform: &dyn CurveTransform,
    ) {
        for &id in ids {
            let Some(pos) = self.control_points.iter().position(|cp| cp.id == id) else {
                continue;
            };
            self.control_points[pos].world_pos += delta;
            Self::write_back(&self.control_points[pos], store, transform);
        }
    }

    /// Setzt das Lock-Flag auf allen Punkten.
    ///
    /// Gibt `true` zurück, wenn sich mindestens ein Flag geändert hat
    /// (No-op-Erkennung für die Persistenz-Benachrichtigung).
    pub fn set_locked(&self, locked: bool, store: &mut dyn PointStore) -> bool {
        let mut changed = false;
        for cp in &self.control_points {
            let current = store
                .drag_points()
                .get(cp.index)
                .map(|dp| dp.is_locked)
                .unwrap_or(locked);
            if current != locked {
                store.set_locked(cp.index, locked);
                changed = true;
            }
        }
        changed
    }

    /// Rechnet die gecachte Weltposition eines ControlPoints in lokale
    /// Koordinaten zurück und schreibt sie in den Store.
    fn write_back(cp: &ControlPoint, store: &mut dyn PointStore, transform: &dyn CurveTransform) {
        let mut local = transform.world_to_local(cp.world_pos);
        local -= store.base_offset();
        local -= store.point_offset(cp.ratio);
        store.set_center(cp.index, local);
    }
}

impl Default for CurveModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{AutoConfirm, MemoryPointStore};
    use glam::Affine3A;

    fn store_with_x_positions(xs: &[f32]) -> MemoryPointStore {
        let positions: Vec<Vec3> = xs.iter().map(|&x| Vec3::new(x, 0.0, 0.0)).collect();
        MemoryPointStore::from_positions(&positions)
    }

    fn synced_model(store: &MemoryPointStore) -> CurveModel {
        let mut model = CurveModel::new();
        model.remap(store);
        model
    }

    /// Simuliert den Layout-Pass: Weltpositionen aus den DragPoints cachen.
    fn refresh_world_positions(model: &mut CurveModel, store: &MemoryPointStore) {
        let transform = Affine3A::IDENTITY;
        for cp in model.control_points_mut() {
            let dp = &store.drag_points()[cp.index];
            cp.world_pos = transform.local_to_world(
                dp.center + store.base_offset() + store.point_offset(cp.ratio),
            );
        }
    }

    #[test]
    fn test_remap_rebuilds_on_length_change() {
        let store = store_with_x_positions(&[0.0, 1.0, 2.0]);
        let mut model = CurveModel::new();

        assert!(model.remap(&store));
        assert_eq!(model.control_points().len(), 3);

        // Gleiche Länge → kein Rebuild
        assert!(!model.remap(&store));
    }

    #[test]
    fn test_remap_is_idempotent_at_same_length() {
        let store = store_with_x_positions(&[0.0, 1.0, 2.0]);
        let mut model = synced_model(&store);
        refresh_world_positions(&mut model, &store);

        let before: Vec<Vec3> = model.control_points().iter().map(|cp| cp.world_pos).collect();
        assert!(!model.remap(&store));
        assert!(!model.remap(&store));
        let after: Vec<Vec3> = model.control_points().iter().map(|cp| cp.world_pos).collect();

        assert_eq!(before, after);
    }

    #[test]
    fn test_ratios_are_monotonic() {
        let store = store_with_x_positions(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let model = synced_model(&store);

        let ratios: Vec<f32> = model.control_points().iter().map(|cp| cp.ratio).collect();
        assert_eq!(ratios.first(), Some(&0.0));
        assert_eq!(ratios.last(), Some(&1.0));
        assert!(ratios.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_single_point_has_ratio_zero() {
        let store = store_with_x_positions(&[7.0]);
        let model = synced_model(&store);
        assert_eq!(model.control_points()[0].ratio, 0.0);
    }

    #[test]
    fn test_insert_after_grows_by_one_and_keeps_ratios_monotonic() {
        let mut store = store_with_x_positions(&[0.0, 2.0, 4.0]);
        let mut model = synced_model(&store);

        let inserted = model.insert_after(
            1,
            Vec3::new(3.0, 0.5, 0.0),
            &mut store,
            &Affine3A::IDENTITY,
        );
        assert!(inserted);
        assert_eq!(model.control_points().len(), 4);
        assert_eq!(store.drag_points().len(), 4);

        let ratios: Vec<f32> = model.control_points().iter().map(|cp| cp.ratio).collect();
        assert!(ratios.windows(2).all(|w| w[0] <= w[1]));

        // Eingefügt direkt hinter Index 1, Position über Rücktransformation
        assert_eq!(store.drag_points()[2].center, Vec3::new(3.0, 0.5, 0.0));
        assert!(!store.drag_points()[2].is_locked);
    }

    #[test]
    fn test_insert_subtracts_offsets() {
        let mut store = store_with_x_positions(&[0.0, 4.0]);
        store.base_offset = Vec3::new(1.0, 0.0, 0.0);
        store.height_per_ratio = 2.0;
        let mut model = synced_model(&store);

        model.insert_after(0, Vec3::new(2.0, 0.0, 0.0), &mut store, &Affine3A::IDENTITY);

        // ratio = 1/2, point_offset = (0, 0, 1.0), base_offset = (1, 0, 0)
        assert_eq!(store.drag_points()[1].center, Vec3::new(1.0, 0.0, -1.0));
    }

    #[test]
    fn test_insert_out_of_range_is_noop() {
        let mut store = store_with_x_positions(&[0.0, 1.0]);
        let mut model = synced_model(&store);

        let inserted = model.insert_after(5, Vec3::ZERO, &mut store, &Affine3A::IDENTITY);
        assert!(!inserted);
        assert_eq!(store.drag_points().len(), 2);
        assert_eq!(model.control_points().len(), 2);
    }

    #[test]
    fn test_insert_copies_template_hints() {
        let mut store = store_with_x_positions(&[0.0, 1.0]);
        store.points[0].is_slingshot = true;
        store.points[0].is_locked = true;
        let mut model = synced_model(&store);

        model.insert_after(0, Vec3::new(0.5, 0.0, 0.0), &mut store, &Affine3A::IDENTITY);

        assert!(store.drag_points()[1].is_slingshot);
        assert!(!store.drag_points()[1].is_locked);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = store_with_x_positions(&[0.0, 1.0]);
        let mut model = synced_model(&store);
        let mut prompt = AutoConfirm::new(true);

        let removed = model.remove(ControlId(9999), &mut store, &mut prompt);
        assert!(!removed);
        assert_eq!(store.drag_points().len(), 2);
        assert_eq!(prompt.asked, 0);
    }

    #[test]
    fn test_remove_unlocked_point_without_prompt() {
        let mut store = store_with_x_positions(&[0.0, 1.0, 2.0]);
        let mut model = synced_model(&store);
        let mut prompt = AutoConfirm::new(false);

        let id = model.control_points()[1].id;
        assert!(model.remove(id, &mut store, &mut prompt));
        assert_eq!(store.drag_points().len(), 2);
        assert_eq!(model.control_points().len(), 2);
        // Ungesperrte Punkte lösen keine Rückfrage aus
        assert_eq!(prompt.asked, 0);
    }

    #[test]
    fn test_remove_locked_point_declined_leaves_state_unchanged() {
        let mut store = store_with_x_positions(&[0.0, 1.0, 2.0]);
        store.points[1].is_locked = true;
        let mut model = synced_model(&store);
        let mut prompt = AutoConfirm::new(false);

        let id = model.control_points()[1].id;
        assert!(!model.remove(id, &mut store, &mut prompt));
        assert_eq!(store.drag_points().len(), 3);
        assert_eq!(prompt.asked, 1);
    }

    #[test]
    fn test_remove_locked_point_confirmed_removes_exactly_one() {
        let mut store = store_with_x_positions(&[0.0, 1.0, 2.0]);
        store.points[1].is_locked = true;
        let mut model = synced_model(&store);
        let mut prompt = AutoConfirm::new(true);

        let id = model.control_points()[1].id;
        assert!(model.remove(id, &mut store, &mut prompt));
        assert_eq!(store.drag_points().len(), 2);
        assert_eq!(prompt.asked, 1);
        assert_eq!(store.drag_points()[0].center.x, 0.0);
        assert_eq!(store.drag_points()[1].center.x, 2.0);
    }

    #[test]
    fn test_flip_x_mirrors_about_mean() {
        let mut store = store_with_x_positions(&[0.0, 2.0, 4.0]);
        let mut model = synced_model(&store);
        refresh_world_positions(&mut model, &store);

        // Pivot = Mittelwert der Weltpositionen
        let pivot = Vec3::new(2.0, 0.0, 0.0);
        model.flip(FlipAxis::X, pivot, &mut store, &Affine3A::IDENTITY);

        let xs: Vec<f32> = store.drag_points().iter().map(|dp| dp.center.x).collect();
        assert_eq!(xs, vec![4.0, 2.0, 0.0]);
    }

    #[test]
    fn test_flip_is_involutive() {
        let mut store = store_with_x_positions(&[0.0, 1.0, 5.0]);
        let mut model = synced_model(&store);
        refresh_world_positions(&mut model, &store);

        let pivot = Vec3::new(2.0, 0.0, 0.0);
        model.flip(FlipAxis::X, pivot, &mut store, &Affine3A::IDENTITY);
        model.flip(FlipAxis::X, pivot, &mut store, &Affine3A::IDENTITY);

        let xs: Vec<f32> = store.drag_points().iter().map(|dp| dp.center.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 5.0]);
    }

    #[test]
    fn test_set_locked_reports_change() {
        let mut store = store_with_x_positions(&[0.0, 1.0]);
        store.points[0].is_locked = true;
        let model = synced_model(&store);

        // Gemischt → Änderung
        assert!(model.set_locked(true, &mut store));
        assert!(store.drag_points().iter().all(|dp| dp.is_locked));

        // Bereits vollständig gesperrt → keine Änderung
        assert!(!model.set_locked(true, &mut store));
    }

    #[test]
    fn test_translate_moves_only_given_ids() {
        let mut store = store_with_x_positions(&[0.0, 1.0, 2.0]);
        let mut model = synced_model(&store);
        refresh_world_positions(&mut model, &store);

        let ids = [model.control_points()[0].id, model.control_points()[2].id];
        model.translate(&ids, Vec3::new(1.0, 0.0, 0.0), &mut store, &Affine3A::IDENTITY);

        let xs: Vec<f32> = store.drag_points().iter().map(|dp| dp.center.x).collect();
        assert_eq!(xs, vec![1.0, 1.0, 3.0]);
    }
}
