//! Extension API for block macros and delimited blocks.
//!
//! This crate provides the host side of document extensions: handlers register
//! under a name, and the [`DocumentProcessor`] hands them the pieces of the
//! document that use their syntax.
//!
//! # Architecture
//!
//! - [`AttributeList`]: parsed `[positional,key=value]` attribute lists
//! - [`BlockMacroHandler`] / [`BlockHandler`]: handler traits for
//!   `name::target[attrs]` macros and `[name]` delimited blocks
//! - [`ExtensionContext`]: asset path resolution and asset reading
//! - [`Passthrough`]: pre-rendered HTML returned by handlers
//! - [`ExtensionRegistry`]: handler lookup by name and block context
//! - [`DocumentProcessor`]: line-based dispatch over a whole document
//!
//! Positional attributes are mapped to the names a handler declares exactly
//! once, by the processor, before the handler runs.
//!
//! # Example
//!
//! ```
//! use rw_extensions::{
//!     AttributeList, BlockMacroHandler, DocumentProcessor, ExtensionContext,
//!     ExtensionRegistry, NamedContentHandler, Passthrough,
//! };
//!
//! struct Badge;
//!
//! impl NamedContentHandler for Badge {
//!     fn name(&self) -> &str { "badge" }
//!     fn positional_attributes(&self) -> &[&str] { &["color"] }
//! }
//!
//! impl BlockMacroHandler for Badge {
//!     fn process(&self, _ctx: &ExtensionContext, target: &str, attrs: AttributeList) -> Passthrough {
//!         let color = attrs.get("color").unwrap_or("grey").to_owned();
//!         Passthrough::new(format!(r#"<span class="badge {color}">{target}</span>"#), attrs)
//!     }
//! }
//!
//! let mut processor = DocumentProcessor::new(ExtensionRegistry::new().block_macro(Badge));
//! let output = processor.process("badge::stable[green]");
//! assert_eq!(output, r#"<span class="badge green">stable</span>"#);
//! ```

mod attributes;
mod context;
mod handler;
mod parser;
mod passthrough;
mod processor;
mod registry;
mod settings;

pub use attributes::AttributeList;
pub use context::{AssetReader, ExtensionContext, FsAssetReader, ReadOptions};
pub use handler::{BlockContext, BlockHandler, BlockMacroHandler, ContentModel, NamedContentHandler};
pub use passthrough::Passthrough;
pub use processor::{DocumentProcessor, ProcessorConfig};
pub use registry::ExtensionRegistry;
pub use settings::{ConfigError, ProcessorSettings};
