//! Aufzeichnende Zeichenfläche für Headless-Betrieb, Tests und Benchmarks.

use super::surface::{DrawingSurface, Rgba};
use crate::core::Point;

/// Ein aufgezeichneter Zeichenbefehl.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Rgba,
    },
    Segment {
        from: Point,
        to: Point,
        color: Rgba,
        width: f32,
    },
    Circle {
        center: Point,
        radius: f32,
        color: Rgba,
    },
    Polygon {
        points: Vec<Point>,
        color: Rgba,
    },
    Text {
        text: String,
        position: Point,
        color: Rgba,
    },
}

/// Zeichenfläche, die alle Befehle in Reihenfolge speichert.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Verwirft alle Befehle, behält aber die Kapazität (für Frame-Schleifen).
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Alle gezeichneten Texte in Reihenfolge.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Mittelpunkte aller Kreise mit Farbe `color`.
    pub fn circles_with_color(&self, color: Rgba) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, color: c, .. } if *c == color => Some(*center),
                _ => None,
            })
            .collect()
    }

    /// Anzahl der Segmente mit Farbe `color`.
    pub fn segment_count_with_color(&self, color: Rgba) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Segment { color: c, .. } if *c == color))
            .count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn stroke_segment(&mut self, from: Point, to: Point, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::Segment {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            position,
            color,
        });
    }
}
