//! Stable error codes, kept machine-readable for UI layers.

pub const INVALID_DIMENSION: &str = "GW-GRID-001";
pub const OUT_OF_RANGE: &str = "GW-GRID-002";
pub const ALREADY_RUNNING: &str = "GW-RUN-001";
pub const MISSING_DESIGNATION: &str = "GW-RUN-002";
pub const CONFIG_FILE_NOT_FOUND: &str = "GW-CFG-001";
pub const CONFIG_PARSE: &str = "GW-CFG-002";
pub const CONFIG_VALIDATION: &str = "GW-CFG-003";

/// Maps every gridwalk error to a stable `&'static str` code.
pub trait GridwalkErrorCode {
    fn error_code(&self) -> &'static str;
}
