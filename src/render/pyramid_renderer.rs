//! Renderer für die Interpolationspyramide.
//!
//! Ebene 0 liegt auf den Kanten des Kontrollpolygons und nutzt die
//! Interpolationsfarben, jede tiefere Ebene eine Palettenfarbe.
//! Die Kanten einer Ebene verbinden zugleich jeden Punkt der nächsten Ebene
//! mit den beiden Punkten, zwischen denen er interpoliert wurde.

use super::surface::DrawingSurface;
use super::RenderScene;

pub(crate) struct PyramidRenderer;

impl PyramidRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Zeichnet alle Ebenen (Kanten, dann Punkte). No-op ohne Pyramide.
    pub fn render(&self, surface: &mut dyn DrawingSurface, scene: &RenderScene) {
        let Some(pyramid) = scene.pyramid.as_ref() else {
            return;
        };
        let opts = &scene.options;

        for (level, points) in pyramid.levels().iter().enumerate() {
            // Ebene 0 sind greifbare Punkte und so groß wie die Kontrollpunkte
            let (edge_color, point_color, radius) = if level == 0 {
                (
                    opts.interpolation_edge_color,
                    opts.interpolation_point_color,
                    opts.control_point_radius,
                )
            } else {
                let color = opts.level_color(level);
                (color, color, opts.level_point_radius)
            };

            for pair in points.windows(2) {
                surface.stroke_segment(pair[0], pair[1], edge_color, opts.edge_width);
            }
            for (i, point) in points.iter().enumerate() {
                let color = if level == 0 && scene.dragged_interpolation_point == Some(i) {
                    opts.dragged_point_color
                } else {
                    point_color
                };
                surface.fill_circle(*point, radius, color);
            }
        }
    }

    /// Labels `I0…` an den Interpolationspunkten der Ebene 0.
    pub fn render_labels(&self, surface: &mut dyn DrawingSurface, scene: &RenderScene) {
        let Some(pyramid) = scene.pyramid.as_ref() else {
            return;
        };
        let opts = &scene.options;
        let offset = super::label_offset(opts.label_offset);
        for (i, point) in pyramid.interpolation_points().iter().enumerate() {
            surface.draw_text(&format!("I{}", i), *point + offset, opts.label_color);
        }
    }
}
