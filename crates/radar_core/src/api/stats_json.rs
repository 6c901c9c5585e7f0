//! JSON API for stat normalization and comparison
//!
//! These endpoints mirror the shapes exchanged with the upstream
//! football-data proxy: a raw statistics record in, the eight-key
//! attribute object out. Normalization itself never fails; the only error
//! path is a request body that does not parse.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::models::stats::RawSeasonStats;
use crate::radar::{RadarAttributes, RadarDiff, StatNormalizer};

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured API error with a stable code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string() }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Normalization request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeRequest {
    pub schema_version: Option<String>,
    /// Raw season statistics; absent or null means "unknown player" and
    /// yields the baseline attributes, never an error.
    pub statistics: Option<RawSeasonStats>,
}

/// Comparison request: two raw statistics records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub schema_version: Option<String>,
    pub first: Option<RawSeasonStats>,
    pub second: Option<RawSeasonStats>,
}

/// Comparison response: both attribute blocks plus the diff summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub first: RadarAttributes,
    pub second: RadarAttributes,
    pub diff: RadarDiff,
    pub total_diff: u16,
    pub biggest_strength: DiffHighlight,
    pub biggest_weakness: DiffHighlight,
}

/// One headline pick from a comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffHighlight {
    pub attribute: String,
    pub delta: i16,
}

impl From<(&'static str, i16)> for DiffHighlight {
    fn from((attribute, delta): (&'static str, i16)) -> Self {
        Self { attribute: attribute.to_string(), delta }
    }
}

/// Normalize one player's raw statistics from a JSON request string.
///
/// # Arguments
/// * `request_json` - JSON string containing `NormalizeRequest`
///
/// # Returns
/// JSON string containing `ApiResponse<RadarAttributes>`
pub fn normalize_stats_json(request_json: &str) -> String {
    debug!("Processing stat normalization request");

    let request: NormalizeRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse NormalizeRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            let response: ApiResponse<RadarAttributes> = ApiResponse::error(error);
            return serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string());
        }
    };

    let attributes = StatNormalizer::normalize(request.statistics.as_ref());
    let response = ApiResponse::success(attributes);
    serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
}

/// Compare two players' raw statistics from a JSON request string.
///
/// # Arguments
/// * `request_json` - JSON string containing `CompareRequest`
///
/// # Returns
/// JSON string containing `ApiResponse<CompareResponse>`
pub fn compare_stats_json(request_json: &str) -> String {
    debug!("Processing stat comparison request");

    let request: CompareRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse CompareRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            let response: ApiResponse<CompareResponse> = ApiResponse::error(error);
            return serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string());
        }
    };

    let first = StatNormalizer::normalize(request.first.as_ref());
    let second = StatNormalizer::normalize(request.second.as_ref());
    let diff = RadarDiff::between(&first, &second);

    let response = ApiResponse::success(CompareResponse {
        total_diff: diff.total_diff(),
        biggest_strength: diff.biggest_strength().into(),
        biggest_weakness: diff.biggest_weakness().into(),
        first,
        second,
        diff,
    });
    serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_normalize_endpoint_success() {
        let request = json!({
            "schema_version": "v1",
            "statistics": {
                "games": { "rating": "7.5", "appearances": 20, "position": "Midfielder" },
                "goals": { "total": 5 }
            }
        });

        let response = normalize_stats_json(&request.to_string());
        let value: Value = serde_json::from_str(&response).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["schema_version"], "v1");
        assert_eq!(value["data"]["shooting"], 75);
        assert_eq!(value["data"]["positioning"], 85);
        assert_eq!(value["data"].as_object().unwrap().len(), 8);
        assert!(value["error"].is_null());
    }

    #[test]
    fn test_normalize_endpoint_null_statistics_is_baseline() {
        let response = normalize_stats_json(&json!({ "statistics": null }).to_string());
        let value: Value = serde_json::from_str(&response).unwrap();

        assert_eq!(value["success"], true);
        for key in
            ["pace", "shooting", "passing", "dribbling", "defending", "physical", "vision", "positioning"]
        {
            assert_eq!(value["data"][key], 50);
        }
    }

    #[test]
    fn test_normalize_endpoint_rejects_malformed_json() {
        let response = normalize_stats_json("{ this is not json");
        let value: Value = serde_json::from_str(&response).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "INVALID_JSON");
        assert!(value["data"].is_null());
    }

    #[test]
    fn test_compare_endpoint() {
        let request = json!({
            "first": {
                "games": { "rating": "7.5", "appearances": 20, "position": "Attacker" },
                "goals": { "total": 12 }
            },
            "second": null
        });

        let response = compare_stats_json(&request.to_string());
        let value: Value = serde_json::from_str(&response).unwrap();

        assert_eq!(value["success"], true);
        // Unknown second player gets the 50-baseline.
        assert_eq!(value["data"]["second"]["shooting"], 50);
        assert_eq!(
            value["data"]["diff"]["shooting_diff"],
            value["data"]["first"]["shooting"].as_i64().unwrap() - 50
        );
        assert!(value["data"]["total_diff"].as_u64().unwrap() > 0);
        assert!(value["data"]["biggest_strength"]["delta"].as_i64().unwrap() > 0);
    }
}
