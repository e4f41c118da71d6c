/// Number of calendar months shown in the monthly trend by default.
pub const DEFAULT_TREND_MONTHS: usize = 6;

/// Decimal precision for display.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
