//! Document processor for block macros and delimited blocks.
//!
//! Walks a document line by line and replaces extension syntax with the
//! passthrough HTML returned by registered handlers.

use std::path::PathBuf;

use crate::parser::{find_closing, parse_block_attribute_line, parse_block_macro};
use crate::{
    AssetReader, AttributeList, BlockContext, ExtensionContext, ExtensionRegistry, FsAssetReader,
    ProcessorSettings,
};

/// Configuration for the document processor.
pub struct ProcessorConfig {
    /// Base directory for resolving asset targets.
    pub base_dir: PathBuf,
    /// Path to the document being converted (if known).
    pub source_path: Option<PathBuf>,
    /// Confine asset paths to `base_dir`.
    pub safe: bool,
    /// Asset reader.
    ///
    /// Default: [`FsAssetReader`]
    pub reader: Option<Box<dyn AssetReader>>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessorConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            source_path: None,
            safe: false,
            reader: None,
        }
    }

    /// Create a configuration from loaded settings.
    #[must_use]
    pub fn from_settings(settings: ProcessorSettings) -> Self {
        let config = Self::new().with_safe(settings.safe);
        match settings.base_dir {
            Some(base_dir) => config.with_base_dir(base_dir),
            None => config,
        }
    }

    /// Set the base directory for resolving asset targets.
    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Set the source document path.
    #[must_use]
    pub fn with_source_path(mut self, source_path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(source_path.into());
        self
    }

    /// Enable or disable safe mode.
    #[must_use]
    pub fn with_safe(mut self, safe: bool) -> Self {
        self.safe = safe;
        self
    }

    /// Set the asset reader.
    #[must_use]
    pub fn with_reader<R: AssetReader + 'static>(mut self, reader: R) -> Self {
        self.reader = Some(Box::new(reader));
        self
    }

    fn create_context(&self, line: usize) -> ExtensionContext<'_> {
        ExtensionContext {
            source_path: self.source_path.as_deref(),
            base_dir: &self.base_dir,
            line,
            safe: self.safe,
            reader: self
                .reader
                .as_deref()
                .unwrap_or(&FsAssetReader as &dyn AssetReader),
        }
    }
}

/// Processor that dispatches extension syntax to registered handlers.
///
/// - `name::target[attrs]` on its own line goes to the block macro handler `name`.
/// - `[name,attrs]` followed by a `----` or `....` delimited block goes to the
///   block handler `name` registered for that context.
///
/// Anything without a matching handler is left unchanged, and delimited blocks
/// are copied verbatim so macro syntax inside them is never expanded.
///
/// # Example
///
/// ```
/// use rw_extensions::{
///     AttributeList, BlockContext, BlockHandler, DocumentProcessor, ExtensionContext,
///     ExtensionRegistry, NamedContentHandler, Passthrough,
/// };
///
/// struct Shout;
///
/// impl NamedContentHandler for Shout {
///     fn name(&self) -> &str { "shout" }
/// }
///
/// impl BlockHandler for Shout {
///     fn contexts(&self) -> &[BlockContext] { &[BlockContext::Literal] }
///
///     fn process(&self, _ctx: &ExtensionContext, lines: &[String], attrs: AttributeList) -> Passthrough {
///         Passthrough::new(format!("<p>{}</p>", lines.join(" ").to_uppercase()), attrs)
///     }
/// }
///
/// let mut processor = DocumentProcessor::new(ExtensionRegistry::new().block(Shout));
/// let output = processor.process("[shout]\n....\nhello\n....\n");
/// assert_eq!(output, "<p>HELLO</p>\n");
/// ```
pub struct DocumentProcessor {
    registry: ExtensionRegistry,
    config: ProcessorConfig,
    warnings: Vec<String>,
}

impl DocumentProcessor {
    /// Create a processor with default configuration.
    #[must_use]
    pub fn new(registry: ExtensionRegistry) -> Self {
        Self {
            registry,
            config: ProcessorConfig::default(),
            warnings: Vec::new(),
        }
    }

    /// Replace the processor configuration.
    #[must_use]
    pub fn with_config(mut self, config: ProcessorConfig) -> Self {
        self.config = config;
        self
    }

    /// Warnings collected while processing.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Process a document, returning it with extension syntax converted.
    #[must_use]
    pub fn process(&mut self, input: &str) -> String {
        let lines: Vec<&str> = input.lines().collect();
        let mut output: Vec<String> = Vec::with_capacity(lines.len());
        let mut idx = 0;

        while idx < lines.len() {
            let line = lines[idx];

            // Unclaimed delimited blocks are copied through untouched
            if BlockContext::from_delimiter(line).is_some() {
                let end = find_closing(&lines, idx, line.trim_end()).unwrap_or(lines.len() - 1);
                output.extend(lines[idx..=end].iter().map(|l| (*l).to_owned()));
                idx = end + 1;
                continue;
            }

            if let Some(attrs) = parse_block_attribute_line(line)
                && let Some((html, consumed)) = self.dispatch_block(&lines, idx, attrs)
            {
                output.push(html);
                idx += consumed;
                continue;
            }

            if let Some(html) = self.dispatch_block_macro(line, idx + 1) {
                output.push(html);
            } else {
                output.push(line.to_owned());
            }
            idx += 1;
        }

        let mut result = output.join("\n");
        if input.ends_with('\n') {
            result.push('\n');
        }
        result
    }

    fn dispatch_block_macro(&self, line: &str, line_num: usize) -> Option<String> {
        let parsed = parse_block_macro(line)?;
        let handler = self.registry.registered_for_block_macro(parsed.name)?;

        let mut attrs = AttributeList::parse(parsed.attrs);
        attrs.apply_positional(handler.positional_attributes());

        tracing::debug!(name = parsed.name, line = line_num, "dispatching block macro");
        let ctx = self.config.create_context(line_num);
        Some(handler.process(&ctx, parsed.target, attrs).into_html())
    }

    /// Dispatch a delimited block whose attribute line sits at `idx`.
    ///
    /// Returns the HTML and the number of lines consumed.
    fn dispatch_block(
        &mut self,
        lines: &[&str],
        idx: usize,
        attrs_str: &str,
    ) -> Option<(String, usize)> {
        let delimiter = lines.get(idx + 1)?.trim_end();
        let context = BlockContext::from_delimiter(delimiter)?;

        let mut attrs = AttributeList::parse(attrs_str);
        let name = attrs.positional(0)?.to_owned();
        let handler = self.registry.registered_for_block(&name, context)?;

        let Some(close) = find_closing(lines, idx + 1, delimiter) else {
            self.warnings.push(format!(
                "line {}: unterminated {} block '{name}'",
                idx + 1,
                context.as_str()
            ));
            return None;
        };

        let content = handler.content_model().prepare(&lines[idx + 2..close]);
        attrs.shift_positional();
        attrs.apply_positional(handler.positional_attributes());

        tracing::debug!(
            name = %name,
            context = context.as_str(),
            line = idx + 1,
            "dispatching block"
        );
        let ctx = self.config.create_context(idx + 1);
        let html = handler.process(&ctx, &content, attrs).into_html();
        Some((html, close - idx + 1))
    }
}
