//! Compiled defaults shared across the crate.

/// Interval between scheduled ticks, matching the host animation frame.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 16;

/// Default grid height when no configuration is supplied.
pub const DEFAULT_ROW_COUNT: u32 = 20;

/// Default grid width when no configuration is supplied.
pub const DEFAULT_COLUMN_COUNT: u32 = 30;
