//! Konvexe Hülle der Kontrollpunkte (Andrew's Monotone Chain).
//!
//! Die Bézier-Kurve liegt immer innerhalb dieser Hülle.

use super::geometry::Point;
use std::cmp::Ordering;

/// Kreuzprodukt von (a→b) × (a→c); > 0 bei Linksknick.
fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b - a).perp_dot(c - a)
}

/// Hüllpunkte gegen den Uhrzeigersinn (im mathematischen Koordinatensystem),
/// beginnend beim lexikographisch kleinsten Punkt. Kollineare Punkte entfallen,
/// der erste Punkt wird am Ende nicht wiederholt.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });
    sorted.dedup();

    let mut lower: Vec<Point> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    // Endpunkte kommen in beiden Hälften vor
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
