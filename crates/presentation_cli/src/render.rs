//! Plain-text rendering of command results

use application::services::{ResolutionState, ResolvedRide};
use domain::{NewRide, RideSummary};

/// Shown when a search succeeds with no matches
pub const NO_RIDES_MESSAGE: &str = "No rides found for the selected route.";

/// Shown in place of the map when the viewport is missing
pub const NO_MAP_MESSAGE: &str = "Unable to load map";

/// Render search results, one ride per line, in backend order
pub fn search_results(rides: &[RideSummary]) -> String {
    if rides.is_empty() {
        return NO_RIDES_MESSAGE.to_string();
    }

    rides
        .iter()
        .map(|ride| format!("[{}] {ride}", ride.id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a resolved ride: metadata, map framing, then warnings
pub fn resolved_ride(resolved: &ResolvedRide) -> String {
    let detail = &resolved.detail;
    let mut out = format!(
        "Name: {}\nSource: {}\nDestination: {}\nPhone: {}\n",
        detail.name,
        detail.source,
        detail.destination,
        if detail.has_phone() { detail.phone.as_str() } else { "-" },
    );

    match resolved.map_overlay() {
        Some(overlay) => {
            out.push_str(&format!("Map: {}\n", overlay.viewport));
            for marker in &overlay.markers {
                out.push_str(&format!("  {}: {}\n", marker.endpoint, marker.coordinate));
            }
        },
        None => {
            out.push_str(NO_MAP_MESSAGE);
            out.push('\n');
        },
    }

    for warning in &resolved.warnings {
        out.push_str(&format!("Warning: {warning}\n"));
    }

    out.trim_end().to_string()
}

/// Render any resolver state
pub fn resolution_state(state: &ResolutionState) -> String {
    match state {
        ResolutionState::Idle => "Idle".to_string(),
        ResolutionState::Loading { ride_id } => format!("Loading ride {ride_id}..."),
        ResolutionState::Ready(resolved) => resolved_ride(resolved),
        ResolutionState::DetailFailed { reason, .. } => reason.to_string(),
    }
}

/// Confirmation for a published ride
pub fn created_ride(ride: &NewRide) -> String {
    format!(
        "Ride published: {} ({} → {})",
        ride.name(),
        ride.source(),
        ride.destination()
    )
}

#[cfg(test)]
mod tests {
    use application::ports::{DetailError, GeocodeError};
    use application::services::{CoordWarning, Endpoint};
    use domain::value_objects::{Coordinate, Viewport};
    use domain::RideDetail;

    use super::*;

    fn resolved(with_map: bool) -> ResolvedRide {
        let source = Coordinate::new(40.0, -75.0).unwrap();
        let destination = Coordinate::new(40.2, -75.3).unwrap();

        ResolvedRide {
            ride_id: "r1".to_string(),
            detail: RideDetail::new("Alex", "Central Station", "Airport", "555-0100"),
            source: Some(source),
            destination: with_map.then_some(destination),
            viewport: with_map.then(|| Viewport::spanning(&source, &destination, 0.1, 1.2)),
            warnings: if with_map {
                Vec::new()
            } else {
                vec![CoordWarning {
                    endpoint: Endpoint::Destination,
                    error: GeocodeError::NotFound("Airport".to_string()),
                }]
            },
        }
    }

    #[test]
    fn empty_search_shows_no_rides_message() {
        assert_eq!(search_results(&[]), NO_RIDES_MESSAGE);
    }

    #[test]
    fn search_results_keep_order() {
        let rides = vec![
            RideSummary::new("b", "Bea", "X", "Y"),
            RideSummary::new("a", "Alex", "X", "Y"),
        ];
        let out = search_results(&rides);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[b] Driver: Bea"));
        assert!(lines[1].starts_with("[a] Driver: Alex"));
    }

    #[test]
    fn resolved_ride_with_map_lists_markers() {
        let out = resolved_ride(&resolved(true));
        assert!(out.contains("Name: Alex"));
        assert!(out.contains("Phone: 555-0100"));
        assert!(out.contains("Map: center"));
        assert!(out.contains("Source:"));
        assert!(out.contains("Destination:"));
        assert!(!out.contains(NO_MAP_MESSAGE));
        assert!(!out.contains("Warning"));
    }

    #[test]
    fn resolved_ride_without_map_reports_it() {
        let out = resolved_ride(&resolved(false));
        assert!(out.contains(NO_MAP_MESSAGE));
        assert!(out.contains("Warning: Destination: Address not found: Airport"));
    }

    #[test]
    fn missing_phone_renders_dash() {
        let mut ride = resolved(true);
        ride.detail.phone = String::new();
        assert!(resolved_ride(&ride).contains("Phone: -"));
    }

    #[test]
    fn failed_state_shows_reason() {
        let state = ResolutionState::DetailFailed {
            ride_id: "r9".to_string(),
            reason: DetailError::NotFound("r9".to_string()),
        };
        assert_eq!(resolution_state(&state), "Ride not found: r9");
    }

    #[test]
    fn created_ride_confirmation() {
        let ride = NewRide::new("Alex", "Central Station", "Airport").unwrap();
        assert_eq!(
            created_ride(&ride),
            "Ride published: Alex (Central Station → Airport)"
        );
    }
}
