use glam::Vec3;

/// Zustand des Curve-Travellers.
///
/// Ein virtueller Punkt, der zwischen zwei ControlPoints auf der Kurve
/// reitet. Position und Segment werden vom Render-Adapter des Hosts
/// hereingereicht (z.B. über `shared::spline_geometry::traveller_on_curve`)
/// und von Insert-Operationen konsumiert.
#[derive(Debug, Clone, Copy, Default)]
pub struct TravellerState {
    /// Weltposition auf der Kurve
    pub world_pos: Vec3,
    /// Index des ControlPoints, der das getroffene Kurvensegment beginnt
    pub segment_index: Option<usize>,
    /// Sichtbarkeit (nur sichtbare Traveller sind Hit-Targets und
    /// Einfüge-Referenz)
    pub visible: bool,
}
