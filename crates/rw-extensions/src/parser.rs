//! Line syntax for block macros and block attribute lines.

/// A block macro line: `name::target[attrs]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BlockMacroLine<'a> {
    pub name: &'a str,
    pub target: &'a str,
    /// Attribute list body, without brackets.
    pub attrs: &'a str,
}

/// Parse a whole line as a block macro.
///
/// The macro must start at column zero and the line must end with `]`.
pub(crate) fn parse_block_macro(line: &str) -> Option<BlockMacroLine<'_>> {
    let line = line.trim_end();
    let (name, rest) = line.split_once("::")?;
    if !is_valid_name(name) {
        return None;
    }

    let body = rest.strip_suffix(']')?;
    let open = body.find('[')?;
    let target = &body[..open];
    if target.starts_with(char::is_whitespace) || target.ends_with(char::is_whitespace) {
        return None;
    }

    Some(BlockMacroLine {
        name,
        target,
        attrs: &body[open + 1..],
    })
}

/// Parse a block attribute line: `[chart,bar]`.
///
/// Returns the attribute list body. Anchors (`[[id]]`) and empty lists are rejected.
pub(crate) fn parse_block_attribute_line(line: &str) -> Option<&str> {
    let inner = line.trim_end().strip_prefix('[')?.strip_suffix(']')?;
    if inner.trim().is_empty() || inner.starts_with('[') {
        return None;
    }
    Some(inner)
}

/// Find the line closing a delimited block opened at `open`.
///
/// The closing delimiter must match the opening one exactly.
pub(crate) fn find_closing(lines: &[&str], open: usize, delimiter: &str) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(open + 1)
        .find(|(_, line)| line.trim_end() == delimiter)
        .map(|(idx, _)| idx)
}

/// Names start with a word character and continue with word characters or `-`.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphanumeric() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}
