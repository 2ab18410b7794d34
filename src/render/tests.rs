use super::{DrawCommand, RecordingSurface, Renderer};
use crate::app::interaction::{on_pointer_down, ConstructionState};
use crate::core::{ControlPolygon, InterpolationPyramid, Point, SharedRatio};
use crate::shared::{RenderScene, ViewerOptions};

fn scene(points: Vec<Point>, t: f64, interpolation: bool, hull: bool) -> RenderScene {
    let polygon = ControlPolygon::from_points(points).expect("gültiges Polygon");
    let construction = ConstructionState::new(polygon, SharedRatio::new(t));
    scene_from(&construction, interpolation, hull)
}

fn scene_from(construction: &ConstructionState, interpolation: bool, hull: bool) -> RenderScene {
    let control_points = construction.polygon().points().to_vec();
    let pyramid: Option<InterpolationPyramid> = interpolation.then(|| construction.pyramid());
    RenderScene {
        curve: crate::core::sample_bezier(&control_points, 10).unwrap(),
        hull: hull.then(|| crate::core::convex_hull(&control_points)),
        control_points,
        pyramid,
        ratio: construction.ratio(),
        dragged_control_point: None,
        dragged_interpolation_point: None,
        canvas_size: [800.0, 600.0],
        options: ViewerOptions::default(),
    }
}

fn triangle() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(50.0, 100.0),
    ]
}

fn render(scene: &RenderScene) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    Renderer::new().render_scene(&mut surface, scene);
    surface
}

#[test]
fn test_render_starts_with_clear_and_ends_with_ratio_readout() {
    let scene = scene(triangle(), 0.5, true, false);
    let surface = render(&scene);
    let commands = surface.commands();

    assert!(matches!(commands.first(), Some(DrawCommand::Clear { .. })));
    match commands.last() {
        Some(DrawCommand::Text { text, .. }) => assert_eq!(text, "t: 0.50"),
        other => panic!("t-Anzeige erwartet, gefunden: {:?}", other),
    }
}

#[test]
fn test_render_labels_control_and_interpolation_points() {
    let scene = scene(triangle(), 0.25, true, false);
    let surface = render(&scene);
    assert_eq!(surface.texts(), vec!["P0", "P1", "P2", "I0", "I1", "t: 0.25"]);
}

#[test]
fn test_render_without_interpolation_overlay() {
    let scene = scene(triangle(), 0.5, false, false);
    let surface = render(&scene);
    let opts = &scene.options;

    assert!(surface
        .circles_with_color(opts.interpolation_point_color)
        .is_empty());
    assert_eq!(surface.segment_count_with_color(opts.interpolation_edge_color), 0);
    assert_eq!(surface.texts(), vec!["P0", "P1", "P2", "t: 0.50"]);
    // Kontrollpunkte, Kanten und Kurve bleiben sichtbar
    assert_eq!(surface.circles_with_color(opts.control_point_color).len(), 3);
    assert_eq!(surface.segment_count_with_color(opts.control_edge_color), 2);
    assert_eq!(surface.segment_count_with_color(opts.curve_color), 10);
}

#[test]
fn test_render_pyramid_levels_use_palette() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(0.0, 100.0),
    ];
    let scene = scene(points, 0.5, true, false);
    let surface = render(&scene);
    let opts = &scene.options;

    assert_eq!(surface.circles_with_color(opts.interpolation_point_color).len(), 3);
    assert_eq!(surface.segment_count_with_color(opts.interpolation_edge_color), 2);
    // Ebene 1: zwei Punkte, eine Kante; Ebene 2: Scheitelpunkt
    assert_eq!(surface.circles_with_color(opts.level_color(1)).len(), 2);
    assert_eq!(surface.segment_count_with_color(opts.level_color(1)), 1);
    let apex = surface.circles_with_color(opts.level_color(2));
    assert_eq!(apex, vec![Point::new(75.0, 50.0)]);
}

#[test]
fn test_render_hull_only_when_enabled() {
    let without = render(&scene(triangle(), 0.5, false, false));
    assert!(!without
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::Polygon { .. })));

    let with = render(&scene(triangle(), 0.5, false, true));
    // Hülle direkt nach dem Löschen des Hintergrunds
    match &with.commands()[1] {
        DrawCommand::Polygon { points, .. } => assert_eq!(points.len(), 3),
        other => panic!("Hüllenfüllung erwartet, gefunden: {:?}", other),
    }
}

#[test]
fn test_render_highlights_dragged_control_point() {
    let polygon = ControlPolygon::from_points(triangle()).unwrap();
    let mut construction = ConstructionState::new(polygon, SharedRatio::default());
    assert!(on_pointer_down(
        &mut construction,
        Point::new(100.0, 0.0),
        10.0,
        true
    ));

    let mut scene = scene_from(&construction, true, false);
    scene.dragged_control_point = Some(1);
    let surface = render(&scene);

    assert_eq!(
        surface.circles_with_color(scene.options.dragged_point_color),
        vec![Point::new(100.0, 0.0)]
    );
    assert_eq!(
        surface
            .circles_with_color(scene.options.control_point_color)
            .len(),
        2
    );
}

#[test]
fn test_interpolation_handles_match_control_point_size() {
    let scene = scene(triangle(), 0.5, true, false);
    let surface = render(&scene);
    let opts = &scene.options;

    let radii: Vec<f32> = surface
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Circle { radius, color, .. }
                if *color == opts.interpolation_point_color =>
            {
                Some(*radius)
            }
            _ => None,
        })
        .collect();
    assert_eq!(radii, vec![opts.control_point_radius; 2]);

    // Scheitelpunkt der Ebene 1 bleibt klein
    let apex_radius = surface.commands().iter().find_map(|c| match c {
        DrawCommand::Circle { radius, color, .. } if *color == opts.level_color(1) => {
            Some(*radius)
        }
        _ => None,
    });
    assert_eq!(apex_radius, Some(opts.level_point_radius));
}
