pub mod auth;
pub mod endpoints;
pub mod parameters;

/// Placeholder cell for missing values.
pub(crate) const EMPTY_CELL: &str = "—";
