//! API request/response models for standard endpoints.

use chrono::{DateTime, Utc};
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Largest page window a caller may request
pub const MAX_PAGE_SIZE: i64 = 50;

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}

/// Query parameters for paginated listing endpoints.
///
/// Raw caller values are clamped rather than rejected: a negative offset
/// becomes 0 and an oversized page size is capped at [`MAX_PAGE_SIZE`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Apiv2Schema)]
pub struct PageQuery {
    /// Zero-based index of the first result
    pub first_result: Option<i64>,
    /// Maximum number of results to return
    pub max_results: Option<i64>,
}

impl PageQuery {
    pub fn first_result(&self) -> usize {
        self.first_result.unwrap_or(0).max(0) as usize
    }

    pub fn max_results(&self) -> usize {
        self.max_results
            .unwrap_or(MAX_PAGE_SIZE)
            .clamp(0, MAX_PAGE_SIZE) as usize
    }
}

/// A single order row in a listing response
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct OrderSummary {
    pub id: Uuid,
    pub reference: String,
    /// Order total in minor currency units
    pub total_minor: i64,
    pub created_at: DateTime<Utc>,
}

/// One page of orders for the authenticated account
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct OrderPageResponse {
    pub first_result: usize,
    pub max_results: usize,
    pub total: usize,
    pub orders: Vec<OrderSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_summary_schema_covers_typed_fields() {
        use paperclip::v2::schema::Apiv2Schema;

        // Uuid and DateTime fields need the paperclip feature flags to
        // carry schema impls
        let schema = OrderSummary::raw_schema();
        assert!(schema.properties.contains_key("id"));
        assert!(schema.properties.contains_key("created_at"));
        assert!(schema.properties.contains_key("total_minor"));
    }

    #[test]
    fn page_query_defaults() {
        let query = PageQuery {
            first_result: None,
            max_results: None,
        };
        assert_eq!(query.first_result(), 0);
        assert_eq!(query.max_results(), 50);
    }

    #[test]
    fn page_query_clamps_bounds() {
        let query = PageQuery {
            first_result: Some(-3),
            max_results: Some(500),
        };
        assert_eq!(query.first_result(), 0);
        assert_eq!(query.max_results(), 50);

        let query = PageQuery {
            first_result: Some(10),
            max_results: Some(-1),
        };
        assert_eq!(query.first_result(), 10);
        assert_eq!(query.max_results(), 0);
    }
}
