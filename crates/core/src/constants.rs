//! Shared constants for pilltrack.

/// Actor recorded on a log entry when the caller does not name one.
pub const DEFAULT_GIVEN_BY: &str = "User";

/// HTTP listen port when neither `--port` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 3001;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 5;
