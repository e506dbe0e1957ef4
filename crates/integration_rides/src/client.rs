//! Ride backend client
//!
//! Talks to the rider backend: ride detail by identifier, search by
//! pickup/dropoff, and ride creation. Every call is a single attempt bounded
//! by the configured timeout.

use std::time::Duration;

use async_trait::async_trait;
use domain::{NewRide, RideDetail, RideSummary};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::config::RideServiceConfig;
use crate::error::RideServiceError;
use crate::models::{
    CreateRideRequest, RawRideInfoResponse, RawSearchResponse, RideInfoRequest, SearchRequest,
};

/// Trait for ride backend clients
#[async_trait]
pub trait RideServiceClient: Send + Sync {
    /// Fetch the full record for one ride
    async fn ride_info(&self, ride_id: &str) -> Result<RideDetail, RideServiceError>;

    /// Search rides between two free-text locations, in backend order
    async fn search_rides(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<Vec<RideSummary>, RideServiceError>;

    /// Publish a new ride
    async fn create_ride(&self, ride: &NewRide) -> Result<(), RideServiceError>;
}

/// HTTP client for the rider backend
#[derive(Debug)]
pub struct RiderServerClient {
    client: Client,
    config: RideServiceConfig,
}

impl RiderServerClient {
    /// Create a new rider backend client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &RideServiceConfig) -> Result<Self, RideServiceError> {
        config
            .validate()
            .map_err(RideServiceError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| RideServiceError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// POST a JSON body to a backend path
    async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, RideServiceError> {
        let url = self.config.endpoint(path);
        debug!(%url, "Posting to ride backend");

        self.client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RideServiceError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    RideServiceError::ConnectionFailed(e.to_string())
                }
            })
    }

    /// Parse the `/info` response body into a ride record
    fn parse_info_response(ride_id: &str, body: &str) -> Result<RideDetail, RideServiceError> {
        let raw: RawRideInfoResponse =
            serde_json::from_str(body).map_err(|e| RideServiceError::ParseError(e.to_string()))?;

        raw.data
            .map(RideDetail::from)
            .ok_or_else(|| RideServiceError::RideNotFound(ride_id.to_string()))
    }

    /// Parse a `/search` response body
    ///
    /// `status` is the HTTP status; a non-2xx body that still carries an
    /// explicit `success: false` message is reported as a rejection with that
    /// message.
    fn parse_search_response(
        status: StatusCode,
        body: &str,
    ) -> Result<Vec<RideSummary>, RideServiceError> {
        let parsed = serde_json::from_str::<RawSearchResponse>(body);

        if !status.is_success() {
            return match parsed {
                Ok(RawSearchResponse {
                    success: false,
                    message: Some(message),
                    ..
                }) => Err(RideServiceError::Rejected(message)),
                _ => Err(RideServiceError::RequestFailed(format!("HTTP {status}"))),
            };
        }

        let raw = parsed.map_err(|e| RideServiceError::ParseError(e.to_string()))?;

        if !raw.success {
            return Err(RideServiceError::Rejected(
                raw.message
                    .unwrap_or_else(|| "Search rejected by backend".to_string()),
            ));
        }

        let rides = raw
            .data
            .ok_or_else(|| RideServiceError::ParseError("missing data in search response".into()))?;

        Ok(rides.into_iter().map(RideSummary::from).collect())
    }
}

#[async_trait]
impl RideServiceClient for RiderServerClient {
    #[instrument(skip(self))]
    async fn ride_info(&self, ride_id: &str) -> Result<RideDetail, RideServiceError> {
        let response = self
            .post(
                "info",
                &RideInfoRequest {
                    id: ride_id.to_string(),
                },
            )
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(RideServiceError::RideNotFound(ride_id.to_string()));
        }

        if !status.is_success() {
            return Err(RideServiceError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RideServiceError::ParseError(e.to_string()))?;

        Self::parse_info_response(ride_id, &body)
    }

    #[instrument(skip(self))]
    async fn search_rides(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<Vec<RideSummary>, RideServiceError> {
        let response = self
            .post(
                "search",
                &SearchRequest {
                    source: source.to_string(),
                    destination: destination.to_string(),
                },
            )
            .await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RideServiceError::ParseError(e.to_string()))?;

        let rides = Self::parse_search_response(status, &body)?;

        if rides.is_empty() {
            warn!("No rides found");
        }

        debug!(count = rides.len(), "Rides found");
        Ok(rides)
    }

    #[instrument(skip(self, ride), fields(source = ride.source(), destination = ride.destination()))]
    async fn create_ride(&self, ride: &NewRide) -> Result<(), RideServiceError> {
        let response = self
            .post(
                "create",
                &CreateRideRequest {
                    name: ride.name().to_string(),
                    source: ride.source().to_string(),
                    destination: ride.destination().to_string(),
                },
            )
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RideServiceError::RequestFailed(format!("HTTP {status}")));
        }

        debug!("Ride created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_info_response() {
        let json = r#"{
            "data": {
                "name": "Alex",
                "source": "Central Station",
                "destination": "Airport",
                "phone": "555-0100"
            }
        }"#;

        let detail = RiderServerClient::parse_info_response("42", json).unwrap();
        assert_eq!(
            detail,
            RideDetail::new("Alex", "Central Station", "Airport", "555-0100")
        );
    }

    #[test]
    fn test_parse_info_null_phone_is_empty() {
        let json = r#"{"data":{"name":"Alex","source":"A","destination":"B","phone":null}}"#;

        let detail = RiderServerClient::parse_info_response("42", json).unwrap();
        assert_eq!(detail, RideDetail::new("Alex", "A", "B", ""));
    }

    #[test]
    fn test_parse_info_missing_data_is_not_found() {
        let err = RiderServerClient::parse_info_response("42", "{}").unwrap_err();
        assert!(matches!(err, RideServiceError::RideNotFound(ref id) if id == "42"));
    }

    #[test]
    fn test_parse_info_invalid_json() {
        let err = RiderServerClient::parse_info_response("42", "not json").unwrap_err();
        assert!(matches!(err, RideServiceError::ParseError(_)));
    }

    #[test]
    fn test_parse_search_success_keeps_order() {
        let json = r#"{
            "success": true,
            "data": [
                { "_id": "b", "name": "Bea", "source": "X", "destination": "Y" },
                { "_id": "a", "name": "Alex", "source": "X", "destination": "Y" },
                { "_id": "b", "name": "Bea", "source": "X", "destination": "Y" }
            ]
        }"#;

        let rides = RiderServerClient::parse_search_response(StatusCode::OK, json).unwrap();
        let ids: Vec<&str> = rides.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_parse_search_empty() {
        let json = r#"{ "success": true, "data": [] }"#;
        let rides = RiderServerClient::parse_search_response(StatusCode::OK, json).unwrap();
        assert!(rides.is_empty());
    }

    #[test]
    fn test_parse_search_rejected_keeps_message() {
        let json = r#"{ "success": false, "message": "no drivers available" }"#;
        let err = RiderServerClient::parse_search_response(StatusCode::OK, json).unwrap_err();
        assert_eq!(err.to_string(), "no drivers available");
    }

    #[test]
    fn test_parse_search_error_status_with_message() {
        let json = r#"{ "success": false, "message": "source is required" }"#;
        let err = RiderServerClient::parse_search_response(StatusCode::BAD_REQUEST, json)
            .unwrap_err();
        assert!(matches!(err, RideServiceError::Rejected(ref m) if m == "source is required"));
    }

    #[test]
    fn test_parse_search_error_status_without_body() {
        let err = RiderServerClient::parse_search_response(StatusCode::BAD_GATEWAY, "")
            .unwrap_err();
        assert!(matches!(err, RideServiceError::RequestFailed(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_parse_search_success_without_data() {
        let json = r#"{ "success": true }"#;
        let err = RiderServerClient::parse_search_response(StatusCode::OK, json).unwrap_err();
        assert!(matches!(err, RideServiceError::ParseError(_)));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = RideServiceConfig {
            timeout_secs: 0,
            ..RideServiceConfig::default()
        };
        assert!(matches!(
            RiderServerClient::new(&config),
            Err(RideServiceError::ConfigurationError(_))
        ));
    }
}
