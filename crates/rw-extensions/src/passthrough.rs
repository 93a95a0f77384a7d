//! Passthrough output returned by extension handlers.

use crate::AttributeList;

/// Pre-rendered HTML emitted verbatim into the final document.
///
/// The host never escapes or re-parses the payload. The attribute list the
/// handler was invoked with travels along with it.
///
/// # Example
///
/// ```
/// use rw_extensions::{AttributeList, Passthrough};
///
/// let block = Passthrough::new("<div>ok</div>", AttributeList::new());
/// assert_eq!(block.into_html(), "<div>ok</div>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Passthrough {
    /// Final HTML.
    pub html: String,
    /// Attributes of the macro or block that produced this output.
    pub attrs: AttributeList,
}

impl Passthrough {
    /// Create a passthrough block.
    #[must_use]
    pub fn new(html: impl Into<String>, attrs: AttributeList) -> Self {
        Self {
            html: html.into(),
            attrs,
        }
    }

    /// Consume the block, returning its HTML.
    #[must_use]
    pub fn into_html(self) -> String {
        self.html
    }
}
