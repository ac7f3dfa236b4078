//! Environment variable parsing with warn-level logging for invalid values.

/// Read an environment variable, falling back to `default`.
///
/// An unset variable is the expected case and falls through silently. A set
/// but unparseable value logs a warning instead of being swallowed, so a
/// typo'd `PORT=80o1` is visible in the logs rather than a silent 3001.
pub fn env_or_default<T: std::str::FromStr + std::fmt::Display>(var: &str, default: T) -> T {
    match std::env::var(var) {
        Ok(raw) => match raw.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(var, value = %raw, default = %default, "invalid env var value, using default");
                default
            },
        },
        Err(_) => default,
    }
}
