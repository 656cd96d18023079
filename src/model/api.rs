use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Page selection shared by list endpoints. Pages start at 1.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationParams {
    /// Page number (default: 1)
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 10)
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

pub fn default_page() -> u64 {
    1
}

pub fn default_limit() -> u64 {
    10
}
