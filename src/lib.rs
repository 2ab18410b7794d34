//! Casteljau Studio Library.
//! Geometrie, Interaktions-Engine und Rendering als Library exportiert für
//! Tests, Benchmarks und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, ConstructionState, DragState, UiState,
    ViewState,
};
pub use core::{
    convex_hull, evaluate_bezier, project_ratio, sample_bezier, ControlPolygon, GeometryError,
    InterpolationPyramid, Point, SharedRatio,
};
pub use render::{DrawingSurface, RecordingSurface, Renderer};
pub use shared::{RenderScene, ViewerOptions};
