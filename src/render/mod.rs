//! Rendering der Konstruktion auf eine austauschbare Zeichenfläche.
//!
//! Der Renderer kennt nur `RenderScene` und `DrawingSurface`; das egui-Backend
//! lebt in `ui::painter`, der `RecordingSurface` dient Tests und Benchmarks.

mod curve_renderer;
mod polygon_renderer;
mod pyramid_renderer;
mod recording;
mod surface;

pub use crate::shared::RenderScene;
pub(crate) use curve_renderer::CurveRenderer;
pub(crate) use polygon_renderer::PolygonRenderer;
pub(crate) use pyramid_renderer::PyramidRenderer;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{DrawingSurface, Rgba};

use crate::core::Point;

/// Position der `t`-Anzeige (linke untere Ecke des Textes).
pub const RATIO_READOUT_POSITION: Point = Point::new(12.0, 24.0);

/// Versatz eines Labels relativ zu seinem Punkt (rechts oberhalb).
fn label_offset(offset: f32) -> Point {
    let offset = f64::from(offset);
    Point::new(offset, -offset)
}

/// Haupt-Renderer für die de-Casteljau-Konstruktion.
///
/// Zustandslos zwischen Frames: jeder Aufruf von `render_scene()` zeichnet die
/// komplette Szene neu.
pub struct Renderer {
    polygon_renderer: PolygonRenderer,
    pyramid_renderer: PyramidRenderer,
    curve_renderer: CurveRenderer,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new() -> Self {
        Self {
            polygon_renderer: PolygonRenderer::new(),
            pyramid_renderer: PyramidRenderer::new(),
            curve_renderer: CurveRenderer::new(),
        }
    }

    /// Rendert die komplette Szene in fester Reihenfolge
    /// (Hintergrund, Hülle, Kanten, Pyramide, Kurve, Punkte, Labels, `t`).
    pub fn render_scene(&mut self, surface: &mut impl DrawingSurface, scene: &RenderScene) {
        log::trace!(
            "render_scene: {} Kontrollpunkte, {} Kurvenpunkte, Pyramide: {}",
            scene.control_points.len(),
            scene.curve.len(),
            scene.shows_interpolation()
        );

        surface.clear(scene.options.background_color);

        self.polygon_renderer.render_hull(surface, scene);
        self.polygon_renderer.render_edges(surface, scene);
        self.pyramid_renderer.render(surface, scene);
        self.curve_renderer.render(surface, scene);
        self.polygon_renderer.render_points(surface, scene);

        self.polygon_renderer.render_labels(surface, scene);
        self.pyramid_renderer.render_labels(surface, scene);

        surface.draw_text(
            &scene.ratio.to_string(),
            RATIO_READOUT_POSITION,
            scene.options.label_color,
        );
    }
}

#[cfg(test)]
mod tests;
