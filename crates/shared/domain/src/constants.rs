//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Calendar
// =============================================================================

/// Accepted shape of a calendar day in queries (`YYYY-MM-DD`)
pub const DAY_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

/// Milliseconds in one minute (service durations are expressed in minutes)
pub const MILLIS_PER_MINUTE: f64 = 60_000.0;

// =============================================================================
// Bookings
// =============================================================================

/// Notes stored when the client sends none
pub const DEFAULT_NOTES: &str = "";

/// Client-facing message for a stored service that cannot be booked
pub const INVALID_SERVICE_MESSAGE: &str = "Invalid service configuration";

// =============================================================================
// Placeholder slots
// =============================================================================

/// Fixed intervals returned by the placeholder slot listing, as
/// `(start, end)` times of day in UTC.
pub const PLACEHOLDER_SLOTS: &[(&str, &str)] = &[
    ("09:00:00.000", "09:30:00.000"),
    ("09:30:00.000", "10:00:00.000"),
];
