//! Builder für Render-Szenen aus dem AppState.

use crate::app::interaction::DragState;
use crate::app::AppState;
use crate::core::{convex_hull, sample_bezier};
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let construction = &state.construction;
    let control_points = construction.polygon().points().to_vec();

    let curve = sample_bezier(&control_points, state.options.sample_step_count).unwrap_or_else(|e| {
        log::warn!("Kurve nicht abtastbar: {}", e);
        Vec::new()
    });

    let hull = state
        .view
        .show_convex_hull
        .then(|| convex_hull(&control_points));
    let pyramid = state
        .view
        .show_interpolation
        .then(|| construction.pyramid());

    let (dragged_control_point, dragged_interpolation_point) = match construction.drag() {
        DragState::Idle => (None, None),
        DragState::DraggingControlPoint(i) => (Some(i), None),
        DragState::DraggingInterpolationPoint(i) => (None, Some(i)),
    };

    RenderScene {
        control_points,
        hull,
        pyramid,
        curve,
        ratio: construction.ratio(),
        dragged_control_point,
        dragged_interpolation_point,
        canvas_size: state.view.canvas_size,
        options: state.options.clone(),
    }
}
