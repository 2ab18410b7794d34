//! UI-Komponenten: Bedienpanel, Status-Bar, Canvas-Input und egui-Zeichenfläche.

pub mod controls;
pub mod input;
/// UI-Layer mit egui
///
/// Übersetzt egui-Zeigerzustand in AppIntents und zeichnet die Szene über
/// den `DrawingSurface`-Vertrag auf einen egui-Painter.
pub mod painter;
pub mod status;

pub use controls::render_controls_panel;
pub use input::collect_canvas_events;
pub use painter::EguiSurface;
pub use status::render_status_bar;
