//! Zeichenflächen-Abstraktion: alles, was der Renderer von einem Backend braucht.

use crate::core::Point;

/// RGBA-Farbe mit Komponenten in [0, 1], wie in den Optionen.
pub type Rgba = [f32; 4];

/// Minimale 2D-Zeichenfläche.
///
/// Koordinaten sind Canvas-Koordinaten (Ursprung oben links, y nach unten).
pub trait DrawingSurface {
    /// Füllt die gesamte Fläche mit `color`.
    fn clear(&mut self, color: Rgba);
    fn stroke_segment(&mut self, from: Point, to: Point, color: Rgba, width: f32);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba);
    /// Füllt ein konvexes Polygon.
    fn fill_polygon(&mut self, points: &[Point], color: Rgba);
    /// Zeichnet `text` mit der linken unteren Ecke bei `position`.
    fn draw_text(&mut self, text: &str, position: Point, color: Rgba);
}
