//! Core-Domänentypen: Punkte, Kontrollpolygon, Bézier-Auswertung, Interpolationspyramide.
//!
//! Reine Geometrie ohne UI- oder Render-Abhängigkeit.

pub mod bezier;
pub mod control_polygon;
pub mod error;
pub mod geometry;
pub mod hull;
pub mod pyramid;
pub mod ratio;

pub use bezier::{binomial_coefficient, evaluate_bezier, sample_bezier, MIN_CURVE_POINTS};
pub use control_polygon::ControlPolygon;
pub use error::GeometryError;
pub use geometry::{distance, lerp, midpoint, Point};
pub use hull::convex_hull;
pub use pyramid::{build_chain, build_pyramid, InterpolationPyramid};
pub use ratio::{project_ratio, SharedRatio};
