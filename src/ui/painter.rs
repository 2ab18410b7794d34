//! `DrawingSurface`-Implementierung über einen egui-Painter.

use crate::core::Point;
use crate::render::{DrawingSurface, Rgba};

const LABEL_FONT_SIZE: f32 = 12.0;

/// Zeichnet Canvas-Koordinaten in das Rechteck `rect` eines egui-Painters.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, p: Point) -> egui::Pos2 {
        self.rect.min + egui::vec2(p.x as f32, p.y as f32)
    }
}

fn to_color32(c: Rgba) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]).into()
}

impl DrawingSurface for EguiSurface<'_> {
    fn clear(&mut self, color: Rgba) {
        self.painter.rect_filled(self.rect, 0.0, to_color32(color));
    }

    fn stroke_segment(&mut self, from: Point, to: Point, color: Rgba, width: f32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(width, to_color32(color)),
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        let screen: Vec<egui::Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter.add(egui::Shape::convex_polygon(
            screen,
            to_color32(color),
            egui::Stroke::NONE,
        ));
    }

    fn draw_text(&mut self, text: &str, position: Point, color: Rgba) {
        self.painter.text(
            self.to_screen(position),
            egui::Align2::LEFT_BOTTOM,
            text,
            egui::FontId::proportional(LABEL_FONT_SIZE),
            to_color32(color),
        );
    }
}
