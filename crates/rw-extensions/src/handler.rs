//! Handler traits for block macros and delimited blocks.
//!
//! Handlers are stateless: the same instance converts every occurrence in a
//! document, and may be shared across threads.

use crate::{AttributeList, ExtensionContext, Passthrough};

/// Common identity of every extension handler.
pub trait NamedContentHandler: Send + Sync {
    /// Name matched against the document syntax (`name::target[]` or `[name]`).
    fn name(&self) -> &str;

    /// Names assigned, in order, to positional attributes.
    ///
    /// The host applies this mapping once before calling `process`, so handlers
    /// only ever look attributes up by name.
    fn positional_attributes(&self) -> &[&str] {
        &[]
    }
}

/// Handler for single-line block macros: `name::target[attrs]`.
///
/// # Example
///
/// ```
/// use rw_extensions::{
///     AttributeList, BlockMacroHandler, ExtensionContext, NamedContentHandler, Passthrough,
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
/// ```
pub trait BlockMacroHandler: NamedContentHandler {
    /// Convert the macro into passthrough HTML.
    fn process(&self, ctx: &ExtensionContext, target: &str, attrs: AttributeList) -> Passthrough;
}

/// Handler for delimited blocks introduced by a `[name,...]` attribute line.
pub trait BlockHandler: NamedContentHandler {
    /// Block contexts this handler applies to.
    fn contexts(&self) -> &[BlockContext];

    /// How the block body is read before it reaches [`process`](Self::process).
    fn content_model(&self) -> ContentModel {
        ContentModel::Raw
    }

    /// Convert the block body into passthrough HTML.
    ///
    /// `lines` holds one entry per physical line between the delimiters.
    fn process(&self, ctx: &ExtensionContext, lines: &[String], attrs: AttributeList)
    -> Passthrough;
}

/// Kind of delimited block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockContext {
    /// `----` delimited listing block.
    Listing,
    /// `....` delimited literal block.
    Literal,
}

impl BlockContext {
    /// Detect a delimiter line: four or more `-` (listing) or `.` (literal).
    #[must_use]
    pub fn from_delimiter(line: &str) -> Option<Self> {
        let trimmed = line.trim_end();
        let first = trimmed.chars().next()?;
        if trimmed.len() < 4 || !trimmed.chars().all(|c| c == first) {
            return None;
        }
        match first {
            '-' => Some(Self::Listing),
            '.' => Some(Self::Literal),
            _ => None,
        }
    }

    /// Context name as used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Listing => "listing",
            Self::Literal => "literal",
        }
    }
}

/// How the body of a delimited block is handed to its handler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentModel {
    /// Lines exactly as written.
    #[default]
    Raw,
    /// Trailing whitespace stripped, leading and trailing blank lines dropped.
    Simple,
}

impl ContentModel {
    /// Prepare block lines according to this model.
    #[must_use]
    pub fn prepare(self, lines: &[&str]) -> Vec<String> {
        match self {
            Self::Raw => lines.iter().map(|line| (*line).to_owned()).collect(),
            Self::Simple => {
                let trimmed: Vec<&str> = lines.iter().map(|line| line.trim_end()).collect();
                let start = trimmed.iter().position(|line| !line.is_empty());
                let end = trimmed.iter().rposition(|line| !line.is_empty());
                match (start, end) {
                    (Some(start), Some(end)) => trimmed[start..=end]
                        .iter()
                        .map(|line| (*line).to_owned())
                        .collect(),
                    _ => Vec::new(),
                }
            }
        }
    }
}
