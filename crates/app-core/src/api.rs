//! API response contracts
//!
//! The backend wraps every response in an envelope with a boolean `success`
//! flag. Successful responses carry `data`; failures carry a `message`.
//! Unmatched paths get a fixed 404 body listing the available API prefixes.

use serde::de::value::UnitDeserializer;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// HTTP status for an unmatched route
pub const NOT_FOUND_STATUS: u16 = 404;

/// API prefixes listed in the route-not-found body, in response order
pub const AVAILABLE_ROUTES: &[(&str, &str)] = &[
    ("auth", "/api/auth"),
    ("users", "/api/users"),
    ("casks", "/api/casks"),
    ("offers", "/api/offers"),
    ("bids", "/api/bids"),
    ("transactions", "/api/transactions"),
    ("portfolio", "/api/portfolio"),
    ("notifications", "/api/notifications"),
    ("distilleries", "/api/distilleries"),
    ("uploads", "/api/uploads"),
    ("health", "/api/health"),
];

/// Errors carried by failed API responses
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server reported a failure
    #[error("Request failed: {0}")]
    Failed(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

// =============================================================================
// Response Envelope
// =============================================================================

/// Success-or-error response
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// `success: true`
    Success {
        /// Payload
        data: T,
        /// Optional human-readable note
        message: Option<String>,
    },
    /// `success: false`
    Failure {
        /// Reason
        message: String,
    },
}

impl<T> ApiResponse<T> {
    /// Successful response
    pub fn success(data: T) -> Self {
        ApiResponse::Success {
            data,
            message: None,
        }
    }

    /// Failed response
    pub fn failure(message: impl Into<String>) -> Self {
        ApiResponse::Failure {
            message: message.into(),
        }
    }

    /// Whether the response succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    /// Branch into a `Result`
    pub fn into_result(self) -> Result<T> {
        match self {
            ApiResponse::Success { data, .. } => Ok(data),
            ApiResponse::Failure { message } => Err(ApiError::Failed(message)),
        }
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

#[derive(Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let envelope = match self {
            ApiResponse::Success { data, message } => EnvelopeRef {
                success: true,
                data: Some(data),
                message: message.as_deref(),
            },
            ApiResponse::Failure { message } => EnvelopeRef {
                success: false,
                data: None,
                message: Some(message),
            },
        };
        envelope.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let envelope = Envelope::<T>::deserialize(deserializer)?;
        match (envelope.success, envelope.data) {
            (true, Some(data)) => Ok(ApiResponse::Success {
                data,
                message: envelope.message,
            }),
            // Null or absent data is only valid for payloads that accept unit,
            // such as `()` and `Option<_>`
            (true, None) => T::deserialize(UnitDeserializer::<D::Error>::new())
                .map(|data| ApiResponse::Success {
                    data,
                    message: envelope.message,
                })
                .map_err(|_| de::Error::missing_field("data")),
            (false, _) => Ok(ApiResponse::Failure {
                message: envelope.message.unwrap_or_default(),
            }),
        }
    }
}

// =============================================================================
// Route Not Found
// =============================================================================

/// Ordered name-to-prefix table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable(pub Vec<(String, String)>);

impl RouteTable {
    /// The fixed table of API prefixes
    pub fn standard() -> Self {
        RouteTable(
            AVAILABLE_ROUTES
                .iter()
                .map(|(name, prefix)| (name.to_string(), prefix.to_string()))
                .collect(),
        )
    }

    /// Prefix for a route name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, prefix)| prefix.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for RouteTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, prefix) in &self.0 {
            map.serialize_entry(name, prefix)?;
        }
        map.end()
    }
}

struct RouteTableVisitor;

impl<'de> Visitor<'de> for RouteTableVisitor {
    type Value = RouteTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of route names to prefixes")
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut access: A,
    ) -> std::result::Result<RouteTable, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry::<String, String>()? {
            entries.push(entry);
        }
        Ok(RouteTable(entries))
    }
}

impl<'de> Deserialize<'de> for RouteTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(RouteTableVisitor)
    }
}

/// Body of the 404 response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNotFound {
    /// Always false
    pub success: bool,
    /// `Route not found - <url>`
    pub message: String,
    /// API prefixes the client can use instead
    pub available_routes: RouteTable,
}

impl RouteNotFound {
    /// Body for an unmatched URL
    pub fn new(original_url: &str) -> Self {
        Self {
            success: false,
            message: format!("Route not found - {}", original_url),
            available_routes: RouteTable::standard(),
        }
    }
}

/// Status and body of a 404 response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundResponse {
    /// HTTP status
    pub status: u16,
    /// JSON body
    pub body: RouteNotFound,
}

impl NotFoundResponse {
    /// Body as JSON text
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.body)
    }
}

/// Response for an unmatched request path
pub fn route_not_found(original_url: &str) -> NotFoundResponse {
    tracing::debug!(url = original_url, "Route not found");
    NotFoundResponse {
        status: NOT_FOUND_STATUS,
        body: RouteNotFound::new(original_url),
    }
}
