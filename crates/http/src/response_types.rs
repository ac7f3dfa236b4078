//! Response types (Serialize)

use pilltrack_core::PillLog;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}

/// Body of a successful log deletion: confirmation plus the removed row.
#[derive(Debug, Serialize)]
pub struct DeleteLogResponse {
    pub message: &'static str,
    pub log: PillLog,
}
