//! Internal constants for chart rendering.

/// Name the chart macro and block are registered under.
pub const EXTENSION_NAME: &str = "chart";

/// Attribute names assigned to positional attributes, in order.
pub const POSITIONAL_ATTRIBUTES: &[&str] = &["type", "width", "height"];

/// Cell delimiter for chart data.
pub const DELIMITER: char = ',';

/// Default chart height.
pub const DEFAULT_HEIGHT: &str = "400";

/// Default chart width.
pub const DEFAULT_WIDTH: &str = "600";

/// Series colors, in series order.
pub const CHART_COLORS: &str = "#72B3CC,#8EB33B";
