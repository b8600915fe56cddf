use rust_decimal::Decimal;

/// Base path of the portfolio API
pub const DEFAULT_API_BASE_URL: &str =
    "https://wealthmanager-online-assignment.onrender.com/api/portfolio";

/// Request timeout for each portfolio API call
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Currency symbol prefixed to every monetary amount
pub const CURRENCY_SYMBOL: &str = "₹";

/// Rendered in place of a trailing return the server did not provide
pub const UNAVAILABLE_MARKER: &str = "-";

/// Viewport width (px) from which pie legends move to the right side
pub const WIDE_VIEWPORT_MIN_WIDTH: u32 = 768;

/// Allowed drift (percentage points) when checking that bucket shares sum to 100
pub const PERCENTAGE_SUM_TOLERANCE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Fixed pie palette, cycled by display position
pub const ALLOCATION_PALETTE: [&str; 9] = [
    "#4cafef", "#ff9800", "#8bc34a", "#f44336", "#9c27b0", "#03a9f4", "#795548", "#e91e63",
    "#009688",
];

/// Message shown to the user whenever a fetch cycle fails
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch portfolio data. Make sure the portfolio API is reachable.";
