//! Chart blocks rendered from CSV data.
//!
//! This crate turns CSV-like data into an HTML fragment that a client-side
//! chart script picks up by attribute name. Data comes from a file
//! (block macro) or from the block body (delimited block):
//!
//! ```text
//! chart::data/sales.csv[bar,500,700]
//!
//! [chart,line,title="Languages"]
//! ....
//! Java,JavaScript,Python
//! 1.265,1.042,1.024
//! ....
//! ```
//!
//! # Architecture
//!
//! - [`ParsedTable`]: header line as labels, remaining lines as series
//! - [`ChartConfig`]: `title`, `type`, `width` and `height` attributes with defaults
//! - [`render_chart`]: the widget markup, with a fixed attribute order
//! - [`ChartBlockMacro`] / [`ChartBlock`]: extension handlers for the two syntaxes
//!
//! # Example
//!
//! ```
//! use rw_chart::register;
//! use rw_extensions::{DocumentProcessor, ExtensionRegistry};
//!
//! let mut processor = DocumentProcessor::new(register(ExtensionRegistry::new()));
//! let html = processor.process("[chart,bar]\n....\nQ1,Q2\n10,20\n....");
//! assert!(html.contains(r#"data-chart-type="Bar""#));
//! assert!(html.contains(r#"data-chart-series-0="10,20""#));
//! ```

mod config;
mod consts;
mod handlers;
mod markup;
mod table;

pub use config::{ChartConfig, ChartType};
pub use handlers::{ChartBlock, ChartBlockMacro};
pub use markup::{empty_chart_placeholder, render_chart, unreadable_file_placeholder};
pub use table::{ParsedTable, TableError};

use rw_extensions::ExtensionRegistry;

/// Register the chart block and chart block macro.
#[must_use]
pub fn register(registry: ExtensionRegistry) -> ExtensionRegistry {
    registry.block(ChartBlock).block_macro(ChartBlockMacro)
}
