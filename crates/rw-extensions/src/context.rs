//! Extension processing context.
//!
//! Provides asset path resolution and asset reading to extension handlers.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Source of asset contents (CSV files, includes, ...).
///
/// Implemented by [`FsAssetReader`] and by any `Fn(&Path) -> io::Result<String>`
/// closure, which keeps test doubles short.
pub trait AssetReader: Send + Sync {
    /// Read the asset at `path` as UTF-8 text.
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Reads assets from the local file system.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsAssetReader;

impl AssetReader for FsAssetReader {
    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl<F> AssetReader for F
where
    F: Fn(&Path) -> io::Result<String> + Send + Sync,
{
    fn read(&self, path: &Path) -> io::Result<String> {
        self(path)
    }
}

/// Options for [`ExtensionContext::read_asset`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Log a warning when the asset cannot be read.
    pub warn_on_failure: bool,
    /// Normalize line endings and strip trailing whitespace.
    pub normalize: bool,
}

/// Context handed to extension handlers for each invocation.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use rw_extensions::{ExtensionContext, FsAssetReader};
///
/// let ctx = ExtensionContext {
///     source_path: None,
///     base_dir: Path::new("docs"),
///     line: 1,
///     safe: false,
///     reader: &FsAssetReader,
/// };
///
/// assert_eq!(ctx.normalize_asset_path("data/./sales.csv"), Path::new("docs/data/sales.csv"));
/// ```
pub struct ExtensionContext<'a> {
    /// Path to the document being converted (if known).
    pub source_path: Option<&'a Path>,
    /// Directory asset targets are resolved against.
    pub base_dir: &'a Path,
    /// Line number of the macro or block (1-indexed).
    pub line: usize,
    /// Confine resolved asset paths to `base_dir`.
    pub safe: bool,
    /// Asset reader.
    pub reader: &'a dyn AssetReader,
}

impl ExtensionContext<'_> {
    /// Resolve an asset target against the base directory.
    ///
    /// `.` and `..` segments are collapsed lexically. In safe mode a target that
    /// would escape the base directory is clamped back inside it.
    #[must_use]
    pub fn normalize_asset_path(&self, target: &str) -> PathBuf {
        let resolved = normalize_lexically(&self.base_dir.join(target));
        if !self.safe {
            return resolved;
        }

        let jailed = confine(self.base_dir, Path::new(target));
        if jailed != resolved {
            tracing::warn!(
                asset = %target,
                base_dir = %self.base_dir.display(),
                line = self.line,
                "asset path is outside of base directory, recovering"
            );
        }
        jailed
    }

    /// Read an asset, returning `None` when it cannot be read.
    ///
    /// Failures are logged rather than returned; extension output never aborts
    /// document conversion.
    #[must_use]
    pub fn read_asset(&self, path: &Path, options: ReadOptions) -> Option<String> {
        match self.reader.read(path) {
            Ok(data) if options.normalize => Some(normalize_source(&data)),
            Ok(data) => Some(data),
            Err(e) => {
                if options.warn_on_failure {
                    tracing::warn!(
                        path = %path.display(),
                        line = self.line,
                        error = %e,
                        "asset does not exist or cannot be read"
                    );
                } else {
                    tracing::debug!(path = %path.display(), error = %e, "asset read failed");
                }
                None
            }
        }
    }
}

/// Strip a BOM, convert CRLF to LF and strip trailing whitespace from each line.
///
/// The final line terminator is dropped.
fn normalize_source(data: &str) -> String {
    let data = data.strip_prefix('\u{feff}').unwrap_or(data);
    data.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse `.` and `..` segments without touching the file system.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }
    parts.iter().collect()
}

/// Resolve `target` under `base`, never climbing above `base`.
///
/// Absolute targets are re-rooted at `base`.
fn confine(base: &Path, target: &Path) -> PathBuf {
    let mut resolved = normalize_lexically(base);
    let mut depth = 0usize;
    for component in target.components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                depth += 1;
            }
            Component::ParentDir if depth > 0 => {
                resolved.pop();
                depth -= 1;
            }
            _ => {}
        }
    }
    resolved
}
