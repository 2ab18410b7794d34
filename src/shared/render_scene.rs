//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::ViewerOptions;
use crate::core::{InterpolationPyramid, Point, SharedRatio};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kontrollpunkte in Polygon-Reihenfolge
    pub control_points: Vec<Point>,
    /// Konvexe Hülle der Kontrollpunkte (nur wenn das Hüllen-Overlay aktiv ist)
    pub hull: Option<Vec<Point>>,
    /// Interpolationspyramide (nur wenn das Interpolations-Overlay aktiv ist)
    pub pyramid: Option<InterpolationPyramid>,
    /// Abgetastete Bézier-Kurve
    pub curve: Vec<Point>,
    /// Gemeinsames Verhältnis `t` dieses Frames
    pub ratio: SharedRatio,
    /// Index des gerade gezogenen Kontrollpunkts
    pub dragged_control_point: Option<usize>,
    /// Index des gerade gezogenen Interpolationspunkts (Ebene 0)
    pub dragged_interpolation_point: Option<usize>,
    /// Canvas-Größe [Breite, Höhe]
    pub canvas_size: [f64; 2],
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: ViewerOptions,
}

impl RenderScene {
    /// Gibt zurück, ob das Interpolations-Overlay gezeichnet wird.
    pub fn shows_interpolation(&self) -> bool {
        self.pyramid.is_some()
    }
}
