//! Extension registry.

use crate::{BlockContext, BlockHandler, BlockMacroHandler};

/// Collection of registered block macro and block handlers.
///
/// When two handlers share a name, the one registered last wins.
///
/// # Example
///
/// ```
/// use rw_extensions::{
///     AttributeList, BlockMacroHandler, ExtensionContext, ExtensionRegistry,
///     NamedContentHandler, Passthrough,
/// };
///
/// struct Video;
///
/// impl NamedContentHandler for Video {
///     fn name(&self) -> &str { "video" }
/// }
///
/// impl BlockMacroHandler for Video {
///     fn process(&self, _ctx: &ExtensionContext, target: &str, attrs: AttributeList) -> Passthrough {
///         Passthrough::new(format!(r#"<video src="{target}"></video>"#), attrs)
///     }
/// }
///
/// let registry = ExtensionRegistry::new().block_macro(Video);
/// assert!(registry.has_block_macros());
/// assert!(registry.registered_for_block_macro("video").is_some());
/// ```
#[derive(Default)]
pub struct ExtensionRegistry {
    block_macros: Vec<Box<dyn BlockMacroHandler>>,
    blocks: Vec<Box<dyn BlockHandler>>,
}

impl ExtensionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block macro handler.
    #[must_use]
    pub fn block_macro<H: BlockMacroHandler + 'static>(mut self, handler: H) -> Self {
        self.block_macros.push(Box::new(handler));
        self
    }

    /// Register a delimited block handler.
    #[must_use]
    pub fn block<H: BlockHandler + 'static>(mut self, handler: H) -> Self {
        self.blocks.push(Box::new(handler));
        self
    }

    /// Whether any block macro handler is registered.
    #[must_use]
    pub fn has_block_macros(&self) -> bool {
        !self.block_macros.is_empty()
    }

    /// Whether any block handler is registered.
    #[must_use]
    pub fn has_blocks(&self) -> bool {
        !self.blocks.is_empty()
    }

    /// Find the block macro handler registered under `name`.
    #[must_use]
    pub fn registered_for_block_macro(&self, name: &str) -> Option<&dyn BlockMacroHandler> {
        self.block_macros
            .iter()
            .rev()
            .find(|h| h.name() == name)
            .map(|h| &**h)
    }

    /// Find the block handler registered under `name` for `context`.
    #[must_use]
    pub fn registered_for_block(
        &self,
        name: &str,
        context: BlockContext,
    ) -> Option<&dyn BlockHandler> {
        self.blocks
            .iter()
            .rev()
            .find(|h| h.name() == name && h.contexts().contains(&context))
            .map(|h| &**h)
    }
}
