//! Renderer für die abgetastete Bézier-Kurve.

use super::surface::DrawingSurface;
use super::RenderScene;

pub(crate) struct CurveRenderer;

impl CurveRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Zeichnet die Kurve als Polylinie durch alle Abtastpunkte.
    pub fn render(&self, surface: &mut dyn DrawingSurface, scene: &RenderScene) {
        let opts = &scene.options;
        for pair in scene.curve.windows(2) {
            surface.stroke_segment(pair[0], pair[1], opts.curve_color, opts.curve_width);
        }
    }
}
