//! Renderer für Kontrollpolygon, konvexe Hülle und Kontrollpunkte.

use super::surface::DrawingSurface;
use super::RenderScene;

/// Zeichnet Hüllenfüllung, Polygonkanten, Kontrollpunkte und deren Labels.
pub(crate) struct PolygonRenderer;

impl PolygonRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Füllt die konvexe Hülle, falls sie in der Szene enthalten ist.
    pub fn render_hull(&self, surface: &mut dyn DrawingSurface, scene: &RenderScene) {
        if let Some(hull) = scene.hull.as_deref() {
            if hull.len() >= 3 {
                surface.fill_polygon(hull, scene.options.hull_fill_color);
            }
        }
    }

    pub fn render_edges(&self, surface: &mut dyn DrawingSurface, scene: &RenderScene) {
        let opts = &scene.options;
        for pair in scene.control_points.windows(2) {
            surface.stroke_segment(pair[0], pair[1], opts.control_edge_color, opts.edge_width);
        }
    }

    /// Kontrollpunkte; der gezogene Punkt erhält die Drag-Farbe.
    pub fn render_points(&self, surface: &mut dyn DrawingSurface, scene: &RenderScene) {
        let opts = &scene.options;
        for (i, point) in scene.control_points.iter().enumerate() {
            let color = if scene.dragged_control_point == Some(i) {
                opts.dragged_point_color
            } else {
                opts.control_point_color
            };
            surface.fill_circle(*point, opts.control_point_radius, color);
        }
    }

    /// Labels `P0…` rechts oberhalb der Kontrollpunkte.
    pub fn render_labels(&self, surface: &mut dyn DrawingSurface, scene: &RenderScene) {
        let opts = &scene.options;
        let offset = super::label_offset(opts.label_offset);
        for (i, point) in scene.control_points.iter().enumerate() {
            surface.draw_text(&format!("P{}", i), *point + offset, opts.label_color);
        }
    }
}
