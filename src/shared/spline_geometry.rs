//! Reine Geometrie-Funktionen für Catmull-Rom-Splines im Raum.
//!
//! Layer-neutral: wird von `render_scene`, Hosts (Traveller-Steuerung)
//! und Tests importiert, ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec3;

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2.
pub fn catmull_rom_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Berechnet eine dichte Punktliste entlang einer Catmull-Rom-Spline durch `points`.
///
/// `closed == true`: Nachbarn werden zyklisch gewählt und das Schluss-Segment
/// von letztem zu erstem Punkt wird mitgesampelt (geschlossene Kurven wie
/// Rubbers). `closed == false`: an den Rändern werden Phantom-Punkte
/// gespiegelt, damit die Kurve natürlich durch Anfang und Ende läuft.
///
/// `samples_per_segment`: Anzahl der Zwischenpunkte pro Segment (ohne Endpunkt).
pub fn catmull_rom_chain(points: &[Vec3], samples_per_segment: usize, closed: bool) -> Vec<Vec3> {
    if points.len() < 2 || samples_per_segment == 0 {
        return points.to_vec();
    }
    if points.len() == 2 && !closed {
        // Gerade Linie — kein Spline nötig
        let mut result = Vec::with_capacity(samples_per_segment + 1);
        for i in 0..=samples_per_segment {
            let t = i as f32 / samples_per_segment as f32;
            result.push(points[0].lerp(points[1], t));
        }
        return result;
    }

    let n = points.len();
    let segment_count = if closed { n } else { n - 1 };
    let mut result = Vec::with_capacity(segment_count * samples_per_segment + 1);

    for seg in 0..segment_count {
        let p1 = points[seg];
        let p2 = points[(seg + 1) % n];

        let p0 = if seg == 0 {
            if closed {
                points[n - 1]
            } else {
                2.0 * points[0] - points[1]
            }
        } else {
            points[seg - 1]
        };
        let p3 = if seg + 2 < n {
            points[seg + 2]
        } else if closed {
            points[(seg + 2) % n]
        } else {
            2.0 * points[n - 1] - points[n - 2]
        };

        let steps = if seg == segment_count - 1 {
            samples_per_segment + 1 // letztes Segment: Endpunkt einschließen
        } else {
            samples_per_segment
        };

        for i in 0..steps {
            let t = i as f32 / samples_per_segment as f32;
            result.push(catmull_rom_point(p0, p1, p2, p3, t));
        }
    }

    result
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Nächster Punkt auf einer Polyline zu einer Abfrageposition.
///
/// Gibt `(punkt, sample_segment_index, distanz)` zurück; `None` bei weniger
/// als zwei Punkten. `sample_segment_index` bezieht sich auf die Polyline,
/// nicht auf die Kontrollpunkte — siehe [`traveller_on_curve`].
pub fn nearest_on_polyline(polyline: &[Vec3], query: Vec3) -> Option<(Vec3, usize, f32)> {
    if polyline.len() < 2 {
        return None;
    }

    let mut best: Option<(Vec3, usize, f32)> = None;
    for (i, w) in polyline.windows(2).enumerate() {
        let seg = w[1] - w[0];
        let len_sq = seg.length_squared();
        let t = if len_sq > f32::EPSILON {
            ((query - w[0]).dot(seg) / len_sq).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let candidate = w[0] + seg * t;
        let dist = candidate.distance(query);
        if best.map(|(_, _, d)| dist < d).unwrap_or(true) {
            best = Some((candidate, i, dist));
        }
    }
    best
}

/// Positioniert den Curve-Traveller auf der gesampelten Kurve.
///
/// Liefert die Weltposition auf der Kurve und den Index des Kontrollpunkts,
/// der das getroffene Kurvensegment beginnt — genau die beiden Werte, die
/// `insert_after` konsumiert. `samples_per_segment` muss dem Wert entsprechen,
/// mit dem die Polyline erzeugt wurde.
pub fn traveller_on_curve(
    polyline: &[Vec3],
    samples_per_segment: usize,
    control_point_count: usize,
    query: Vec3,
) -> Option<(Vec3, usize)> {
    if samples_per_segment == 0 || control_point_count == 0 {
        return None;
    }
    let (pos, sample_segment, _) = nearest_on_polyline(polyline, query)?;
    let control_index = (sample_segment / samples_per_segment).min(control_point_count - 1);
    Some((pos, control_index))
}
