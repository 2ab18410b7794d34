//! Canvas-Input-Handling: Zeigerzustand von egui → AppIntent.

use crate::app::AppIntent;
use crate::core::Point;

/// Rechnet eine Bildschirmposition in Canvas-Koordinaten um.
fn screen_to_canvas(pos: egui::Pos2, rect: egui::Rect) -> Point {
    let local = pos - rect.min;
    Point::new(f64::from(local.x), f64::from(local.y))
}

/// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
///
/// Pro Frame wird die aktuelle Canvas-Größe gemeldet. Ein Drücken zählt nur,
/// wenn der Zeiger über dem Canvas steht; Loslassen wird immer gemeldet,
/// damit ein außerhalb beendeter Drag nicht hängen bleibt.
pub fn collect_canvas_events(ui: &egui::Ui, response: &egui::Response) -> Vec<AppIntent> {
    let rect = response.rect;
    let mut events = vec![AppIntent::CanvasResized {
        size: [f64::from(rect.width()), f64::from(rect.height())],
    }];

    let (pressed, down, released, delta, latest_pos, press_origin) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_down(),
            i.pointer.primary_released(),
            i.pointer.delta(),
            i.pointer.latest_pos(),
            i.pointer.press_origin(),
        )
    });

    if pressed && response.hovered() {
        // press_origin() ist die exakte Klickposition vor der Drag-Schwelle
        if let Some(pos) = press_origin.or(latest_pos) {
            events.push(AppIntent::PointerPressed {
                pos: screen_to_canvas(pos, rect),
            });
        }
    }

    if down && delta != egui::Vec2::ZERO {
        if let Some(pos) = latest_pos {
            events.push(AppIntent::PointerMoved {
                pos: screen_to_canvas(pos, rect),
            });
        }
    }

    if released {
        events.push(AppIntent::PointerReleased);
    }

    events
}
