//! Baut die Render-Szene für den Render-Adapter des Hosts.
//!
//! Reine Leseoperation auf dem EditorState: die gesampelte Kurve
//! (aufgeteilt in Slingshot- und Normal-Sektionen), Control-Point-Sprites
//! mit Zustandsfarben, Traveller-Marker und Gruppen-Handle.

use crate::app::EditorState;
use crate::core::{ControlId, SCREEN_RADIUS};
use crate::host::ViewProjection;
use crate::shared::spline_geometry;
use glam::{Vec2, Vec3};

/// Drawable-Daten eines ControlPoints.
#[derive(Debug, Clone)]
pub struct ControlPointSprite {
    /// Interaktions-ID (für Hover-Hervorhebung im Adapter)
    pub id: ControlId,
    /// Weltposition
    pub world_pos: Vec3,
    /// Screenposition
    pub screen_pos: Vec2,
    /// Darstellungsradius in Screen-Pixeln
    pub radius: f32,
    /// Zustandsfarbe (RGBA)
    pub color: [f32; 4],
    /// Selektiert
    pub is_selected: bool,
    /// Gesperrt
    pub is_locked: bool,
}

/// Zusammenhängender Kurvenabschnitt mit einheitlicher Darstellung.
#[derive(Debug, Clone)]
pub struct CurveSection {
    /// Gesampelte Weltpositionen
    pub points: Vec<Vec3>,
    /// Slingshot-Abschnitt (andere Farbe)
    pub is_slingshot: bool,
    /// Linienfarbe (RGBA)
    pub color: [f32; 4],
    /// Linienstärke in Screen-Pixeln
    pub width: f32,
}

/// Drawable-Daten des Curve-Travellers.
#[derive(Debug, Clone, Copy)]
pub struct TravellerSprite {
    /// Weltposition auf der Kurve
    pub world_pos: Vec3,
    /// Screenposition
    pub screen_pos: Vec2,
    /// Darstellungsradius in Screen-Pixeln
    pub radius: f32,
}

/// Komplette Render-Szene eines Frames.
#[derive(Debug, Clone, Default)]
pub struct CurveScene {
    /// Kurvenabschnitte in Sequenz-Reihenfolge
    pub sections: Vec<CurveSection>,
    /// Control-Point-Sprites in Sequenz-Reihenfolge
    pub sprites: Vec<ControlPointSprite>,
    /// Traveller, falls sichtbar
    pub traveller: Option<TravellerSprite>,
    /// Weltposition des Gruppen-Handles, falls Selektion vorhanden
    pub group_handle: Option<Vec3>,
}

/// Baut die Render-Szene aus dem aktuellen EditorState.
///
/// Erwartet, dass der Layout-Pass dieses Frames bereits gelaufen ist
/// (Positions-Caches aktuell).
pub fn build(state: &EditorState, view: &dyn ViewProjection) -> CurveScene {
    let control_points = state.model.control_points();

    let sprites = control_points
        .iter()
        .map(|cp| {
            let color = if cp.is_locked {
                state.options.control_point_color_locked
            } else if cp.is_selected {
                state.options.control_point_color_selected
            } else {
                state.options.control_point_color
            };
            ControlPointSprite {
                id: cp.id,
                world_pos: cp.world_pos,
                screen_pos: cp.screen_pos,
                radius: view.handle_size(cp.world_pos)
                    * SCREEN_RADIUS
                    * state.options.control_point_size_ratio,
                color,
                is_selected: cp.is_selected,
                is_locked: cp.is_locked,
            }
        })
        .collect();

    let traveller = state.traveller.visible.then(|| TravellerSprite {
        world_pos: state.traveller.world_pos,
        screen_pos: view.world_to_screen(state.traveller.world_pos),
        radius: view.handle_size(state.traveller.world_pos)
            * SCREEN_RADIUS
            * state.options.traveller_size_ratio,
    });

    CurveScene {
        sections: build_sections(state),
        sprites,
        traveller,
        group_handle: state.frame.group_handle,
    }
}

/// Sampelt die Kurve und teilt sie in Sektionen mit einheitlichem
/// Slingshot-Flag auf (maßgeblich ist das Flag des Segment-Startpunkts).
fn build_sections(state: &EditorState) -> Vec<CurveSection> {
    let control_points = state.model.control_points();
    if control_points.len() < 2 {
        return Vec::new();
    }

    let world: Vec<Vec3> = control_points.iter().map(|cp| cp.world_pos).collect();
    let samples = state.options.samples_per_segment.max(1);
    let polyline = spline_geometry::catmull_rom_chain(&world, samples, state.closed_curve);

    let segment_count = if state.closed_curve {
        control_points.len()
    } else {
        control_points.len() - 1
    };

    let mut sections: Vec<CurveSection> = Vec::new();
    for seg in 0..segment_count {
        let is_slingshot = control_points[seg].is_slingshot;
        let start = seg * samples;
        let end = ((seg + 1) * samples).min(polyline.len() - 1);

        match sections.last_mut() {
            // Folgesegment mit gleichem Flag: anhängen, Startpunkt ist
            // schon der Endpunkt der laufenden Sektion
            Some(section) if section.is_slingshot == is_slingshot => {
                section.points.extend_from_slice(&polyline[start + 1..=end]);
            }
            _ => {
                sections.push(CurveSection {
                    points: polyline[start..=end].to_vec(),
                    is_slingshot,
                    color: if is_slingshot {
                        state.options.curve_slingshot_color
                    } else {
                        state.options.curve_color
                    },
                    width: state.options.curve_width,
                });
            }
        }
    }

    sections
}
