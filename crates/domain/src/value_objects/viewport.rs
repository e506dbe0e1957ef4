//! Map viewport derived from two endpoint coordinates

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Coordinate;

/// Smallest span (degrees) a viewport is allowed to collapse to
pub const DEFAULT_MIN_SPAN_DEGREES: f64 = 0.1;

/// Rectangular region used to frame a map around two endpoints
///
/// Never persisted; recomputed whenever both endpoint coordinates are known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    center: Coordinate,
    latitude_span: f64,
    longitude_span: f64,
}

impl Viewport {
    /// Build a midpoint-centered viewport covering both points
    ///
    /// Each span is the distance between the points along that axis scaled by
    /// `padding_factor`, but never smaller than `min_span` and never larger
    /// than the globe (180° latitude, 360° longitude). Coinciding points
    /// therefore still yield a usable box.
    #[must_use]
    pub fn spanning(a: &Coordinate, b: &Coordinate, min_span: f64, padding_factor: f64) -> Self {
        let padding = if padding_factor.is_finite() && padding_factor > 0.0 {
            padding_factor
        } else {
            1.0
        };
        let min_span = if min_span.is_finite() { min_span.max(0.0) } else { 0.0 };

        let lat_delta = (a.latitude() - b.latitude()).abs() * padding;
        let lon_delta = (a.longitude() - b.longitude()).abs() * padding;

        Self {
            center: a.midpoint(b),
            latitude_span: lat_delta.max(min_span).min(180.0),
            longitude_span: lon_delta.max(min_span).min(360.0),
        }
    }

    /// Center of the viewport
    #[must_use]
    pub const fn center(&self) -> Coordinate {
        self.center
    }

    /// North-south extent in degrees
    #[must_use]
    pub const fn latitude_span(&self) -> f64 {
        self.latitude_span
    }

    /// East-west extent in degrees
    #[must_use]
    pub const fn longitude_span(&self) -> f64 {
        self.longitude_span
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "center {} (Δlat {:.4}, Δlon {:.4})",
            self.center, self.latitude_span, self.longitude_span
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).expect("valid coordinate")
    }

    #[test]
    fn test_center_is_midpoint() {
        let vp = Viewport::spanning(
            &coord(40.0, -75.0),
            &coord(40.2, -75.3),
            DEFAULT_MIN_SPAN_DEGREES,
            1.0,
        );
        assert!((vp.center().latitude() - 40.1).abs() < 1e-9);
        assert!((vp.center().longitude() + 75.15).abs() < 1e-9);
    }

    #[test]
    fn test_spans_cover_both_points() {
        let a = coord(40.0, -75.0);
        let b = coord(40.2, -75.3);
        let vp = Viewport::spanning(&a, &b, DEFAULT_MIN_SPAN_DEGREES, 1.2);
        assert!((vp.latitude_span() - 0.24).abs() < 1e-9);
        assert!((vp.longitude_span() - 0.36).abs() < 1e-9);
        for point in [a, b] {
            assert!((point.latitude() - vp.center().latitude()).abs() <= vp.latitude_span() / 2.0);
            assert!(
                (point.longitude() - vp.center().longitude()).abs() <= vp.longitude_span() / 2.0
            );
        }
    }

    #[test]
    fn test_coinciding_points_use_minimum_span() {
        let a = coord(52.52, 13.405);
        let vp = Viewport::spanning(&a, &a, DEFAULT_MIN_SPAN_DEGREES, 1.2);
        assert!((vp.latitude_span() - DEFAULT_MIN_SPAN_DEGREES).abs() < f64::EPSILON);
        assert!((vp.longitude_span() - DEFAULT_MIN_SPAN_DEGREES).abs() < f64::EPSILON);
        assert_eq!(vp.center(), a);
    }

    #[test]
    fn test_spans_capped_at_globe() {
        let vp = Viewport::spanning(&coord(-90.0, -180.0), &coord(90.0, 180.0), 0.1, 2.0);
        assert!((vp.latitude_span() - 180.0).abs() < f64::EPSILON);
        assert!((vp.longitude_span() - 360.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_padding_falls_back_to_unscaled() {
        let vp = Viewport::spanning(&coord(10.0, 10.0), &coord(11.0, 12.0), 0.1, f64::NAN);
        assert!((vp.latitude_span() - 1.0).abs() < 1e-9);
        assert!((vp.longitude_span() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        let vp = Viewport::spanning(&coord(40.0, -75.0), &coord(40.2, -75.3), 0.1, 1.0);
        assert!(vp.to_string().starts_with("center 40.1"));
    }
}
