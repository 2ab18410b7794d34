//! Bernstein-Auswertung von Bézier-Kurven beliebigen Grades.
//!
//! Die Kurve ist allein durch die Kontrollpunkte definiert,
//! Grad = Anzahl Kontrollpunkte − 1.

use super::error::GeometryError;
use super::geometry::Point;

/// Mindestanzahl an Kontrollpunkten für eine auswertbare Kurve.
pub const MIN_CURVE_POINTS: usize = 2;

/// Binomialkoeffizient `n über k` als f64.
///
/// Iteratives Multiplizieren/Dividieren über das kleinere `k` (Symmetrie),
/// damit Zwischenwerte ganzzahlig bleiben und nicht überlaufen.
/// Für `k > n` ist das Ergebnis 0.
pub fn binomial_coefficient(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut coeff = 1.0f64;
    for i in 1..=k {
        coeff = coeff * (n - k + i) as f64 / i as f64;
    }
    coeff
}

/// B(t) = Σ C(n−1, i)·(1−t)^(n−1−i)·t^i·P_i
pub fn evaluate_bezier(control_points: &[Point], t: f64) -> Result<Point, GeometryError> {
    ensure_curve_points(control_points)?;

    let degree = control_points.len() - 1;
    let inv = 1.0 - t;
    let point = control_points
        .iter()
        .enumerate()
        .fold(Point::ZERO, |acc, (i, p)| {
            let weight = binomial_coefficient(degree, i)
                * inv.powi((degree - i) as i32)
                * t.powi(i as i32);
            acc + *p * weight
        });
    Ok(point)
}

/// Tastet die Kurve an `step_count + 1` Stellen `t = i / step_count` ab.
///
/// Beide Endpunkte sind enthalten; `t` wird aus dem ganzzahligen Index
/// berechnet, damit `t = 1` exakt getroffen wird.
pub fn sample_bezier(
    control_points: &[Point],
    step_count: usize,
) -> Result<Vec<Point>, GeometryError> {
    ensure_curve_points(control_points)?;
    if step_count == 0 {
        return Err(GeometryError::InvalidSampleStepCount);
    }

    (0..=step_count)
        .map(|i| evaluate_bezier(control_points, i as f64 / step_count as f64))
        .collect()
}

fn ensure_curve_points(control_points: &[Point]) -> Result<(), GeometryError> {
    if control_points.len() < MIN_CURVE_POINTS {
        return Err(GeometryError::InsufficientPoints {
            count: control_points.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-9);
        assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-9);
    }

    #[test]
    fn test_binomial_matches_pascal_row() {
        let row: Vec<f64> = (0..=6).map(|k| binomial_coefficient(6, k)).collect();
        assert_eq!(row, vec![1.0, 6.0, 15.0, 20.0, 15.0, 6.0, 1.0]);
    }

    #[test]
    fn test_binomial_edge_cases() {
        assert_eq!(binomial_coefficient(0, 0), 1.0);
        assert_eq!(binomial_coefficient(5, 0), 1.0);
        assert_eq!(binomial_coefficient(5, 5), 1.0);
        assert_eq!(binomial_coefficient(3, 4), 0.0);
    }

    #[test]
    fn test_binomial_is_exact_for_moderate_n() {
        // C(30, 15) = 155117520
        assert_eq!(binomial_coefficient(30, 15), 155_117_520.0);
        // C(40, 20) = 137846528820
        assert_eq!(binomial_coefficient(40, 20), 137_846_528_820.0);
    }

    #[test]
    fn test_quadratic_with_apex_in_middle() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(50.0, 100.0),
            Point::new(100.0, 0.0),
        ];
        let p = evaluate_bezier(&points, 0.5).unwrap();
        assert_point_eq(p, Point::new(50.0, 50.0));
    }

    #[test]
    fn test_quadratic_scenario_weights_quarter_half_quarter() {
        // B(0.5) = 0.25·P0 + 0.5·P1 + 0.25·P2
        let points = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(50.0, 100.0),
        ];
        let p = evaluate_bezier(&points, 0.5).unwrap();
        assert_point_eq(p, Point::new(62.5, 25.0));
    }

    #[test]
    fn test_linear_curve_is_lerp() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, -4.0)];
        let p = evaluate_bezier(&points, 0.25).unwrap();
        assert_point_eq(p, Point::new(2.5, -1.0));
    }

    #[test]
    fn test_evaluate_rejects_single_point() {
        let err = evaluate_bezier(&[Point::new(1.0, 1.0)], 0.5).unwrap_err();
        assert_eq!(err, GeometryError::InsufficientPoints { count: 1 });
    }

    #[test]
    fn test_sample_hits_both_endpoints_exactly() {
        let points = [
            Point::new(0.0, 1.77),
            Point::new(1.1, -1.0),
            Point::new(4.3, 3.0),
            Point::new(3.2, -4.0),
            Point::new(7.3, 2.7),
            Point::new(8.9, 1.7),
        ];
        let samples = sample_bezier(&points, 100).unwrap();
        assert_eq!(samples.len(), 101);
        assert_point_eq(samples[0], points[0]);
        assert_point_eq(samples[100], points[5]);
    }

    #[test]
    fn test_sample_rejects_degenerate_input() {
        assert_eq!(
            sample_bezier(&[], 100).unwrap_err(),
            GeometryError::InsufficientPoints { count: 0 }
        );
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert_eq!(
            sample_bezier(&points, 0).unwrap_err(),
            GeometryError::InvalidSampleStepCount
        );
    }

    #[test]
    fn test_sample_single_step_returns_endpoints() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(5.0, 10.0),
            Point::new(10.0, 0.0),
        ];
        let samples = sample_bezier(&points, 1).unwrap();
        assert_eq!(samples, vec![points[0], points[2]]);
    }
}
