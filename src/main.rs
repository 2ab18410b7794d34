//! Casteljau Studio.
//!
//! Interaktive Visualisierung der de-Casteljau-Konstruktion von Bézier-Kurven
//! mit egui.

use casteljau_studio::{render, ui, AppController, AppIntent, AppState, ViewerOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Casteljau Studio v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1100.0, 720.0])
                .with_title("Casteljau Studio"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Casteljau Studio",
            options,
            Box::new(|_cc| Ok(Box::new(ViewerApp::new()?))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    renderer: render::Renderer,
}

impl ViewerApp {
    fn new() -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let viewer_options = ViewerOptions::load_from_file(&config_path);

        Ok(Self {
            state: AppState::new(viewer_options)?,
            controller: AppController::new(),
            renderer: render::Renderer::new(),
        })
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::render_status_bar(ctx, &self.state);
        let panel_events = ui::render_controls_panel(ctx, &mut self.state);
        let mut has_meaningful_events = !panel_events.is_empty();
        self.process_events(panel_events);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let canvas_events = ui::collect_canvas_events(ui, &response);
                has_meaningful_events |= canvas_events
                    .iter()
                    .any(|e| !matches!(e, AppIntent::CanvasResized { .. }));
                self.process_events(canvas_events);

                // Szene nach den Events bauen, damit der Frame den neuen Zustand zeigt
                let scene = self.controller.build_render_scene(&self.state);
                let painter = ui.painter_at(rect);
                let mut surface = ui::EguiSurface::new(&painter, rect);
                self.renderer.render_scene(&mut surface, &scene);
            });

        if has_meaningful_events {
            ctx.request_repaint();
        }
    }
}

impl ViewerApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
