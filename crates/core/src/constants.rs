/// Highest section order that still belongs to the Executive tier
pub const EXECUTIVE_MAX_ORDER: u32 = 6;

/// Highest section order that still belongs to the Operational tier
pub const OPERATIONAL_MAX_ORDER: u32 = 9;

/// Selection value the dashboard filters use for "no filter"
pub const MATCH_ALL_SENTINEL: &str = "all";

/// Decimal places used for percentage shares
pub const PERCENTAGE_PRECISION: u32 = 1;

/// Fraction digits shown by compact notation when none are requested
pub const COMPACT_DEFAULT_DECIMALS: u32 = 1;

/// Default currency (Indian Rupee)
pub const DEFAULT_CURRENCY_CODE: &str = "INR";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_CURRENCY_NAME: &str = "Indian Rupee";
pub const DEFAULT_LOCALE: &str = "en-IN";

/// Change percentages whose magnitude is at or below this are Stable
pub const DEFAULT_STABLE_BAND: f64 = 0.0;
