//! Zentrale Konfiguration für den Playfield Curve Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kurve ───────────────────────────────────────────────────────────

/// Linienstärke der Kurve in Screen-Pixeln.
pub const CURVE_WIDTH: f32 = 10.0;
/// Farbe normaler Kurvensegmente (RGBA: Blau).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Farbe von Slingshot-Segmenten (RGBA: Rot).
pub const CURVE_SLINGSHOT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Zwischenpunkte pro Kurvensegment beim Sampling.
pub const SAMPLES_PER_SEGMENT: usize = 8;

// ── Control-Points ──────────────────────────────────────────────────

/// Größenfaktor für Control-Point-Handles.
pub const CONTROL_POINT_SIZE_RATIO: f32 = 1.0;
/// Größenfaktor für den Curve-Traveller.
pub const TRAVELLER_SIZE_RATIO: f32 = 0.75;
/// Farbe unselektierter Control-Points (RGBA: Grau).
pub const CONTROL_POINT_COLOR: [f32; 4] = [0.7, 0.7, 0.7, 1.0];
/// Farbe selektierter Control-Points (RGBA: Orange).
pub const CONTROL_POINT_COLOR_SELECTED: [f32; 4] = [1.0, 0.6, 0.0, 1.0];
/// Farbe gesperrter Control-Points (RGBA: Dunkelrot).
pub const CONTROL_POINT_COLOR_LOCKED: [f32; 4] = [0.6, 0.1, 0.1, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `playfield_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Linienstärke der Kurve in Screen-Pixeln
    pub curve_width: f32,
    /// Farbe normaler Kurvensegmente (RGBA)
    pub curve_color: [f32; 4],
    /// Farbe von Slingshot-Segmenten (RGBA)
    pub curve_slingshot_color: [f32; 4],
    /// Zwischenpunkte pro Kurvensegment beim Sampling
    pub samples_per_segment: usize,

    // ── Control-Points ──────────────────────────────────────────
    /// Größenfaktor für Control-Point-Handles (Hitbox und Darstellung)
    pub control_point_size_ratio: f32,
    /// Größenfaktor für den Curve-Traveller
    #[serde(default = "default_traveller_size_ratio")]
    pub traveller_size_ratio: f32,
    /// Farbe unselektierter Control-Points
    pub control_point_color: [f32; 4],
    /// Farbe selektierter Control-Points
    pub control_point_color_selected: [f32; 4],
    /// Farbe gesperrter Control-Points
    #[serde(default = "default_control_point_color_locked")]
    pub control_point_color_locked: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            curve_width: CURVE_WIDTH,
            curve_color: CURVE_COLOR,
            curve_slingshot_color: CURVE_SLINGSHOT_COLOR,
            samples_per_segment: SAMPLES_PER_SEGMENT,

            control_point_size_ratio: CONTROL_POINT_SIZE_RATIO,
            traveller_size_ratio: TRAVELLER_SIZE_RATIO,
            control_point_color: CONTROL_POINT_COLOR,
            control_point_color_selected: CONTROL_POINT_COLOR_SELECTED,
            control_point_color_locked: CONTROL_POINT_COLOR_LOCKED,
        }
    }
}

/// Serde-Default für `traveller_size_ratio` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_traveller_size_ratio() -> f32 {
    TRAVELLER_SIZE_RATIO
}

/// Serde-Default für `control_point_color_locked` (Abwärtskompatibilität).
fn default_control_point_color_locked() -> [f32; 4] {
    CONTROL_POINT_COLOR_LOCKED
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("playfield_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("playfield_curve_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_toml_roundtrip() {
        let mut options = EditorOptions::default();
        options.curve_width = 4.0;
        options.samples_per_segment = 12;

        let toml_str = toml::to_string_pretty(&options).expect("Serialisierung");
        let restored: EditorOptions = toml::from_str(&toml_str).expect("Deserialisierung");

        assert_eq!(restored, options);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        // Ältere Options-Datei ohne die später ergänzten Felder
        let toml_str = r#"
            curve_width = 6.0
            curve_color = [0.0, 0.0, 1.0, 1.0]
            curve_slingshot_color = [1.0, 0.0, 0.0, 1.0]
            samples_per_segment = 8
            control_point_size_ratio = 1.0
            control_point_color = [0.7, 0.7, 0.7, 1.0]
            control_point_color_selected = [1.0, 0.6, 0.0, 1.0]
        "#;
        let restored: EditorOptions = toml::from_str(toml_str).expect("Deserialisierung");

        assert_eq!(restored.curve_width, 6.0);
        assert_eq!(restored.traveller_size_ratio, TRAVELLER_SIZE_RATIO);
        assert_eq!(
            restored.control_point_color_locked,
            CONTROL_POINT_COLOR_LOCKED
        );
    }
}
