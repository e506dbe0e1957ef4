//! Ride detail resolution
//!
//! Turns an opaque ride identifier into a displayable record: the ride
//! metadata from the backend plus both endpoint addresses geocoded and framed
//! by a map viewport.
//!
//! # State machine
//!
//! ```text
//! Idle ──resolve──▶ Loading ──detail ok──▶ Ready(detail, viewport?, warnings)
//!                      │
//!                      └──detail failed──▶ DetailFailed(reason)
//! ```
//!
//! Only a failed detail fetch is fatal. Geocoding failures are folded into
//! warnings and the state still becomes `Ready`, without a viewport.
//!
//! Every `resolve` call takes a fresh request token. Outcomes are applied only
//! while their token is still the latest, so a superseded request can finish
//! at any time without overwriting newer state.

use std::fmt;
use std::sync::Arc;

use domain::value_objects::{Coordinate, DEFAULT_MIN_SPAN_DEGREES, Viewport};
use domain::RideDetail;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::ports::{DetailError, GeocodeError, GeocodingPort, RideDetailPort};

/// How the viewport is framed around the two endpoints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Smallest span in degrees along either axis
    #[serde(default = "default_min_span_degrees")]
    pub min_span_degrees: f64,

    /// Multiplier applied to the endpoint distance so markers are not on the edge
    #[serde(default = "default_padding_factor")]
    pub padding_factor: f64,
}

const fn default_min_span_degrees() -> f64 {
    DEFAULT_MIN_SPAN_DEGREES
}

const fn default_padding_factor() -> f64 {
    1.2
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_span_degrees: default_min_span_degrees(),
            padding_factor: default_padding_factor(),
        }
    }
}

impl ViewportConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the minimum span is not positive or the padding
    /// factor is below 1.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.min_span_degrees.is_finite() && self.min_span_degrees > 0.0) {
            return Err("min_span_degrees must be greater than 0".to_string());
        }

        if !(self.padding_factor.is_finite() && self.padding_factor >= 1.0) {
            return Err("padding_factor must be at least 1.0".to_string());
        }

        Ok(())
    }
}

/// Which end of the ride a coordinate belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// Pickup address
    Source,
    /// Dropoff address
    Destination,
}

impl Endpoint {
    /// Marker label shown on the map
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::Destination => "Destination",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A geocoding failure recorded against one endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordWarning {
    /// The endpoint whose address could not be resolved
    pub endpoint: Endpoint,
    /// Why resolution failed
    pub error: GeocodeError,
}

impl fmt::Display for CoordWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.endpoint, self.error)
    }
}

/// A labelled point for the map surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    /// Which endpoint this marker shows
    pub endpoint: Endpoint,
    /// Where to place it
    pub coordinate: Coordinate,
}

/// Everything the external map surface needs to draw the ride
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapOverlay {
    /// Region to frame
    pub viewport: Viewport,
    /// Source marker followed by destination marker
    pub markers: [MapMarker; 2],
}

/// A fully resolved ride: metadata plus whatever geocoding produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRide {
    /// Identifier this record was resolved for
    pub ride_id: String,
    /// Metadata from the backend
    pub detail: RideDetail,
    /// Coordinate of the pickup address, if geocoding succeeded
    pub source: Option<Coordinate>,
    /// Coordinate of the dropoff address, if geocoding succeeded
    pub destination: Option<Coordinate>,
    /// Present only when both endpoints were geocoded
    pub viewport: Option<Viewport>,
    /// One entry per failed endpoint, source first
    pub warnings: Vec<CoordWarning>,
}

impl ResolvedRide {
    /// Map inputs, or `None` when the map cannot be drawn
    #[must_use]
    pub fn map_overlay(&self) -> Option<MapOverlay> {
        let viewport = self.viewport?;
        let source = self.source?;
        let destination = self.destination?;

        Some(MapOverlay {
            viewport,
            markers: [
                MapMarker {
                    endpoint: Endpoint::Source,
                    coordinate: source,
                },
                MapMarker {
                    endpoint: Endpoint::Destination,
                    coordinate: destination,
                },
            ],
        })
    }

    /// Whether geocoding fully succeeded
    #[must_use]
    pub fn has_map(&self) -> bool {
        self.viewport.is_some()
    }
}

/// Resolution state for the resolver's current request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResolutionState {
    /// Nothing requested yet, or the last request was abandoned
    Idle,
    /// Waiting on the backend or the geocoder
    Loading {
        /// Identifier being resolved
        ride_id: String,
    },
    /// Terminal: the ride can be displayed, with or without a map
    Ready(ResolvedRide),
    /// Terminal: the ride metadata could not be fetched
    DetailFailed {
        /// Identifier that failed
        ride_id: String,
        /// Why the fetch failed
        reason: DetailError,
    },
}

impl ResolutionState {
    /// Whether no further transition happens without a new request
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::DetailFailed { .. })
    }

    /// The identifier this state refers to, if any
    #[must_use]
    pub fn ride_id(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Loading { ride_id } | Self::DetailFailed { ride_id, .. } => Some(ride_id),
            Self::Ready(resolved) => Some(&resolved.ride_id),
        }
    }
}

/// State published to observers, tagged with the request that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionSnapshot {
    /// Monotonically increasing request token; 0 before the first request
    pub token: u64,
    /// Current state
    pub state: ResolutionState,
}

/// Orchestrates detail fetch and geocoding for one ride at a time
pub struct RideDetailResolver {
    detail_port: Arc<dyn RideDetailPort>,
    geocoding_port: Arc<dyn GeocodingPort>,
    viewport_config: ViewportConfig,
    state: watch::Sender<ResolutionSnapshot>,
}

impl fmt::Debug for RideDetailResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RideDetailResolver")
            .field("viewport_config", &self.viewport_config)
            .field("token", &self.state.borrow().token)
            .finish_non_exhaustive()
    }
}

impl RideDetailResolver {
    /// Create a new resolver in the `Idle` state
    pub fn new(detail_port: Arc<dyn RideDetailPort>, geocoding_port: Arc<dyn GeocodingPort>) -> Self {
        let (state, _) = watch::channel(ResolutionSnapshot {
            token: 0,
            state: ResolutionState::Idle,
        });

        Self {
            detail_port,
            geocoding_port,
            viewport_config: ViewportConfig::default(),
            state,
        }
    }

    /// Use a custom viewport framing
    #[must_use]
    pub const fn with_viewport_config(mut self, config: ViewportConfig) -> Self {
        self.viewport_config = config;
        self
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> ResolutionState {
        self.state.borrow().state.clone()
    }

    /// Observe every state transition
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ResolutionSnapshot> {
        self.state.subscribe()
    }

    /// Drop the active request (e.g. the caller navigated away)
    ///
    /// In-flight calls are not aborted; their outcomes are ignored on arrival.
    pub fn abandon(&self) {
        self.state.send_modify(|snapshot| {
            snapshot.token += 1;
            snapshot.state = ResolutionState::Idle;
        });
        debug!("Resolution abandoned");
    }

    /// Resolve a ride identifier
    ///
    /// Returns the terminal state this request produced, or `None` when a
    /// newer request (or `abandon`) superseded it and its outcome was
    /// discarded.
    #[instrument(skip(self))]
    pub async fn resolve(&self, ride_id: &str) -> Option<ResolutionState> {
        let token = self.begin(ride_id);

        let detail = match self.detail_port.fetch(ride_id).await {
            Ok(detail) => detail,
            Err(reason) => {
                warn!(%ride_id, error = %reason, "Ride detail fetch failed");
                return self.finish(
                    token,
                    ResolutionState::DetailFailed {
                        ride_id: ride_id.to_string(),
                        reason,
                    },
                );
            },
        };

        if !self.is_current(token) {
            debug!(%ride_id, token, "Superseded before geocoding, skipping");
            return None;
        }

        // Both lookups are in flight together; neither waits on the other.
        let (source, destination) = tokio::join!(
            self.geocoding_port.resolve(&detail.source),
            self.geocoding_port.resolve(&detail.destination),
        );

        let resolved = self.assemble(ride_id, detail, source, destination);
        info!(
            %ride_id,
            has_map = resolved.has_map(),
            warnings = resolved.warnings.len(),
            "Ride resolved"
        );

        self.finish(token, ResolutionState::Ready(resolved))
    }

    /// Start a new request: bump the token and enter `Loading` atomically
    fn begin(&self, ride_id: &str) -> u64 {
        let mut token = 0;
        self.state.send_modify(|snapshot| {
            snapshot.token += 1;
            token = snapshot.token;
            snapshot.state = ResolutionState::Loading {
                ride_id: ride_id.to_string(),
            };
        });
        token
    }

    fn is_current(&self, token: u64) -> bool {
        self.state.borrow().token == token
    }

    /// Apply a terminal state if `token` is still the latest request
    fn finish(&self, token: u64, state: ResolutionState) -> Option<ResolutionState> {
        let applied = self.state.send_if_modified(|snapshot| {
            if snapshot.token != token {
                return false;
            }
            snapshot.state = state.clone();
            true
        });

        if applied {
            Some(state)
        } else {
            debug!(token, "Discarding outcome of superseded request");
            None
        }
    }

    /// Fold both geocoding outcomes into a ready record
    fn assemble(
        &self,
        ride_id: &str,
        detail: RideDetail,
        source: Result<Coordinate, GeocodeError>,
        destination: Result<Coordinate, GeocodeError>,
    ) -> ResolvedRide {
        let mut warnings = Vec::new();

        let source = match source {
            Ok(coordinate) => Some(coordinate),
            Err(error) => {
                warn!(address = %detail.source, %error, "Source not geocoded");
                warnings.push(CoordWarning {
                    endpoint: Endpoint::Source,
                    error,
                });
                None
            },
        };

        let destination = match destination {
            Ok(coordinate) => Some(coordinate),
            Err(error) => {
                warn!(address = %detail.destination, %error, "Destination not geocoded");
                warnings.push(CoordWarning {
                    endpoint: Endpoint::Destination,
                    error,
                });
                None
            },
        };

        let viewport = match (&source, &destination) {
            (Some(a), Some(b)) => Some(Viewport::spanning(
                a,
                b,
                self.viewport_config.min_span_degrees,
                self.viewport_config.padding_factor,
            )),
            _ => None,
        };

        ResolvedRide {
            ride_id: ride_id.to_string(),
            detail,
            source,
            destination,
            viewport,
            warnings,
        }
    }
}
