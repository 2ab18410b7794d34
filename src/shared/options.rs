//! Zentrale Konfiguration für Casteljau Studio.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::MIN_CURVE_POINTS;
use serde::{Deserialize, Serialize};

// ── Konstruktion ────────────────────────────────────────────────────

/// Standard-Anzahl der Kontrollpunkte beim Start.
pub const CONTROL_POINT_COUNT: usize = 3;
/// Obergrenze für das Anzahl-Eingabefeld im Seitenpanel.
pub const CONTROL_POINT_COUNT_UI_MAX: usize = 32;
/// Anzahl der Abtastschritte für die Kurve (ergibt +1 Stützpunkte).
pub const SAMPLE_STEP_COUNT: usize = 100;
/// Pick-Radius für Kontroll- und Interpolationspunkte (Canvas-Einheiten).
pub const PICK_RADIUS: f64 = 10.0;
/// Startwert des gemeinsamen Interpolationsverhältnisses.
pub const INITIAL_RATIO: f64 = 0.5;
/// Canvas-Größe, bis das erste Layout die echte Größe liefert.
pub const DEFAULT_CANVAS_SIZE: [f64; 2] = [800.0, 600.0];

// ── Farben ──────────────────────────────────────────────────────────

/// Hintergrund (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Kontrollpunkte (RGBA: Grün).
pub const CONTROL_POINT_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Gerade gezogener Punkt (RGBA: Dunkelgrün).
pub const DRAGGED_POINT_COLOR: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
/// Kanten des Kontrollpolygons (RGBA: Schwarz).
pub const CONTROL_EDGE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Interpolationspunkte der Ebene 0 (RGBA: Rot).
pub const INTERPOLATION_POINT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Kanten zwischen Interpolationspunkten der Ebene 0 (RGBA: Navy).
pub const INTERPOLATION_EDGE_COLOR: [f32; 4] = [0.0, 0.0, 0.5, 1.0];
/// Bézier-Kurve (RGBA: Hellblau).
pub const CURVE_COLOR: [f32; 4] = [0.678, 0.847, 0.902, 1.0];
/// Füllung der konvexen Hülle (RGBA: Pfirsich #FFEFD6).
pub const HULL_FILL_COLOR: [f32; 4] = [1.0, 0.937, 0.839, 1.0];
/// Beschriftungen (RGBA: Schwarz).
pub const LABEL_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Palette für die tieferen Pyramiden-Ebenen (Lila-Töne), wird zyklisch verwendet.
pub const LEVEL_PALETTE: [[f32; 4]; 6] = [
    [0.502, 0.0, 0.502, 1.0],   // #800080
    [1.0, 0.0, 1.0, 1.0],       // #FF00FF
    [0.541, 0.169, 0.886, 1.0], // #8A2BE2
    [0.6, 0.196, 0.8, 1.0],     // #9932CC
    [0.58, 0.0, 0.827, 1.0],    // #9400D3
    [0.545, 0.0, 0.545, 1.0],   // #8B008B
];

// ── Größen ──────────────────────────────────────────────────────────

/// Radius der Kontroll- und Interpolationspunkte.
pub const CONTROL_POINT_RADIUS: f32 = 5.0;
/// Radius der Punkte tieferer Ebenen.
pub const LEVEL_POINT_RADIUS: f32 = 3.0;
/// Linienstärke aller Konstruktionskanten.
pub const EDGE_WIDTH: f32 = 0.5;
/// Linienstärke der Kurve.
pub const CURVE_WIDTH: f32 = 2.0;
/// Versatz der Punktbeschriftung (x rechts, y oben).
pub const LABEL_OFFSET: f32 = 8.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `casteljau_studio.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerOptions {
    // ── Konstruktion ────────────────────────────────────────────
    /// Anzahl der Kontrollpunkte beim Start (≥ 2)
    pub control_point_count: usize,
    /// Abtastschritte der Kurve (> 0)
    pub sample_step_count: usize,
    /// Pick-Radius für Hit-Tests (> 0)
    pub pick_radius: f64,
    /// Start-Verhältnis `t` in [0, 1]
    pub initial_ratio: f64,
    /// Canvas-Größe vor dem ersten Layout [Breite, Höhe]
    pub canvas_size: [f64; 2],

    // ── Overlays ────────────────────────────────────────────────
    /// Interpolations-Overlay beim Start sichtbar
    pub show_interpolation: bool,
    /// Konvexe Hülle beim Start gefüllt
    pub show_convex_hull: bool,

    // ── Farben ──────────────────────────────────────────────────
    pub background_color: [f32; 4],
    pub control_point_color: [f32; 4],
    pub dragged_point_color: [f32; 4],
    pub control_edge_color: [f32; 4],
    pub interpolation_point_color: [f32; 4],
    pub interpolation_edge_color: [f32; 4],
    pub curve_color: [f32; 4],
    pub hull_fill_color: [f32; 4],
    pub label_color: [f32; 4],
    /// Farben der Ebenen ≥ 1, zyklisch
    pub level_palette: Vec<[f32; 4]>,

    // ── Größen ──────────────────────────────────────────────────
    pub control_point_radius: f32,
    pub level_point_radius: f32,
    pub edge_width: f32,
    pub curve_width: f32,
    pub label_offset: f32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            control_point_count: CONTROL_POINT_COUNT,
            sample_step_count: SAMPLE_STEP_COUNT,
            pick_radius: PICK_RADIUS,
            initial_ratio: INITIAL_RATIO,
            canvas_size: DEFAULT_CANVAS_SIZE,

            show_interpolation: true,
            show_convex_hull: false,

            background_color: BACKGROUND_COLOR,
            control_point_color: CONTROL_POINT_COLOR,
            dragged_point_color: DRAGGED_POINT_COLOR,
            control_edge_color: CONTROL_EDGE_COLOR,
            interpolation_point_color: INTERPOLATION_POINT_COLOR,
            interpolation_edge_color: INTERPOLATION_EDGE_COLOR,
            curve_color: CURVE_COLOR,
            hull_fill_color: HULL_FILL_COLOR,
            label_color: LABEL_COLOR,
            level_palette: LEVEL_PALETTE.to_vec(),

            control_point_radius: CONTROL_POINT_RADIUS,
            level_point_radius: LEVEL_POINT_RADIUS,
            edge_width: EDGE_WIDTH,
            curve_width: CURVE_WIDTH,
            label_offset: LABEL_OFFSET,
        }
    }
}

impl ViewerOptions {
    /// Prüft die Wertebereiche der Konstruktions-Optionen.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.control_point_count < MIN_CURVE_POINTS {
            anyhow::bail!(
                "control_point_count muss mindestens {} sein, ist {}",
                MIN_CURVE_POINTS,
                self.control_point_count
            );
        }
        if self.sample_step_count == 0 {
            anyhow::bail!("sample_step_count muss größer als 0 sein");
        }
        if self.pick_radius.is_nan() || self.pick_radius <= 0.0 {
            anyhow::bail!("pick_radius muss größer als 0 sein, ist {}", self.pick_radius);
        }
        if !(0.0..=1.0).contains(&self.initial_ratio) {
            anyhow::bail!(
                "initial_ratio muss in [0, 1] liegen, ist {}",
                self.initial_ratio
            );
        }
        Ok(())
    }

    /// Farbe der Pyramiden-Ebene `level` (≥ 1), zyklisch über die Palette.
    pub fn level_color(&self, level: usize) -> [f32; 4] {
        if self.level_palette.is_empty() {
            return self.interpolation_edge_color;
        }
        self.level_palette[(level.saturating_sub(1)) % self.level_palette.len()]
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst und validiert Optionen aus einem TOML-String.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        opts.validate()?;
        Ok(opts)
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
            .unwrap_or_else(|_| std::path::PathBuf::from("casteljau_studio"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("casteljau_studio.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let opts = ViewerOptions::default();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.control_point_count, 3);
        assert_eq!(opts.sample_step_count, 100);
        assert_eq!(opts.pick_radius, 10.0);
        assert_eq!(opts.initial_ratio, 0.5);
    }

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let mut opts = ViewerOptions::default();
        opts.control_point_count = 6;
        opts.show_convex_hull = true;
        let text = toml::to_string_pretty(&opts).expect("Serialisierung");
        let parsed = ViewerOptions::from_toml(&text).expect("Parsen");
        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let parsed = ViewerOptions::from_toml("pick_radius = 14.0\n").expect("Parsen");
        assert_eq!(parsed.pick_radius, 14.0);
        assert_eq!(parsed.control_point_count, CONTROL_POINT_COUNT);
        assert_eq!(parsed.level_palette.len(), LEVEL_PALETTE.len());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(ViewerOptions::from_toml("control_point_count = 1\n").is_err());
        assert!(ViewerOptions::from_toml("sample_step_count = 0\n").is_err());
        assert!(ViewerOptions::from_toml("pick_radius = 0.0\n").is_err());
        assert!(ViewerOptions::from_toml("initial_ratio = 1.5\n").is_err());
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let path = std::path::Path::new("/nonexistent/casteljau_studio.toml");
        assert_eq!(ViewerOptions::load_from_file(path), ViewerOptions::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "casteljau_studio_options_{}.toml",
            std::process::id()
        ));
        let mut opts = ViewerOptions::default();
        opts.initial_ratio = 0.25;
        opts.save_to_file(&path).expect("Speichern");
        let loaded = ViewerOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.initial_ratio, 0.25);
    }

    #[test]
    fn test_level_colors_cycle_through_palette() {
        let opts = ViewerOptions::default();
        assert_eq!(opts.level_color(1), LEVEL_PALETTE[0]);
        assert_eq!(opts.level_color(6), LEVEL_PALETTE[5]);
        assert_eq!(opts.level_color(7), LEVEL_PALETTE[0]);
    }
}
