//! Chart configuration read from the attribute list.

use rw_extensions::AttributeList;

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Chart type understood by the client-side renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartType {
    #[default]
    Line,
    Bar,
}

impl ChartType {
    /// Parse the `type` attribute. Anything other than `bar` is a line chart.
    #[must_use]
    pub fn parse(s: Option<&str>) -> Self {
        match s {
            Some("bar") => Self::Bar,
            _ => Self::Line,
        }
    }

    /// Value of the `data-chart-type` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Bar => "Bar",
        }
    }
}

/// Optional chart attributes. Values are kept as given, without coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartConfig {
    /// Title rendered above the chart.
    pub title: Option<String>,
    /// Raw `type` attribute.
    pub chart_type: Option<String>,
    /// Chart width.
    pub width: Option<String>,
    /// Chart height.
    pub height: Option<String>,
}

impl ChartConfig {
    /// Read chart attributes by name.
    ///
    /// Positional attributes must already be mapped to names.
    #[must_use]
    pub fn from_attributes(attrs: &AttributeList) -> Self {
        let get = |key: &str| attrs.get(key).map(str::to_owned);
        Self {
            title: get("title"),
            chart_type: get("type"),
            width: get("width"),
            height: get("height"),
        }
    }

    /// Effective height.
    #[must_use]
    pub fn height(&self) -> &str {
        self.height.as_deref().unwrap_or(DEFAULT_HEIGHT)
    }

    /// Effective width.
    #[must_use]
    pub fn width(&self) -> &str {
        self.width.as_deref().unwrap_or(DEFAULT_WIDTH)
    }

    /// Effective chart type.
    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        ChartType::parse(self.chart_type.as_deref())
    }
}
