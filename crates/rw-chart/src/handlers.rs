//! Chart block macro and chart block handlers.
//!
//! Both handlers funnel into [`render_chart`]; they differ only in where the
//! data comes from.

use rw_extensions::{
    AttributeList, BlockContext, BlockHandler, BlockMacroHandler, ContentModel, ExtensionContext,
    NamedContentHandler, Passthrough, ReadOptions,
};

use crate::consts::{EXTENSION_NAME, POSITIONAL_ATTRIBUTES};
use crate::markup::{empty_chart_placeholder, render_chart, unreadable_file_placeholder};
use crate::{ChartConfig, ParsedTable};

/// Block macro rendering a chart from a CSV file: `chart::sales.csv[bar,500,700]`.
///
/// A file that cannot be read renders a placeholder naming the target as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartBlockMacro;

impl NamedContentHandler for ChartBlockMacro {
    fn name(&self) -> &str {
        EXTENSION_NAME
    }

    fn positional_attributes(&self) -> &[&str] {
        POSITIONAL_ATTRIBUTES
    }
}

impl BlockMacroHandler for ChartBlockMacro {
    fn process(&self, ctx: &ExtensionContext, target: &str, attrs: AttributeList) -> Passthrough {
        let path = ctx.normalize_asset_path(target);
        let options = ReadOptions {
            warn_on_failure: true,
            normalize: true,
        };

        let Some(content) = ctx.read_asset(&path, options) else {
            return Passthrough::new(unreadable_file_placeholder(target), attrs);
        };

        let table = ParsedTable::from_text(&content);
        let config = ChartConfig::from_attributes(&attrs);
        Passthrough::new(render_chart(&table.series, &table.labels, &config), attrs)
    }
}

/// Delimited block rendering a chart from inline CSV data:
///
/// ```text
/// [chart,bar]
/// ....
/// January,February,March
/// 28,48,40
/// ....
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartBlock;

impl NamedContentHandler for ChartBlock {
    fn name(&self) -> &str {
        EXTENSION_NAME
    }

    fn positional_attributes(&self) -> &[&str] {
        POSITIONAL_ATTRIBUTES
    }
}

impl BlockHandler for ChartBlock {
    fn contexts(&self) -> &[BlockContext] {
        &[BlockContext::Listing, BlockContext::Literal]
    }

    fn content_model(&self) -> ContentModel {
        ContentModel::Raw
    }

    fn process(&self, ctx: &ExtensionContext, lines: &[String], attrs: AttributeList) -> Passthrough {
        let Ok(table) = ParsedTable::from_lines(lines) else {
            tracing::debug!(line = ctx.line, "chart block has no content");
            return Passthrough::new(empty_chart_placeholder(), attrs);
        };

        let config = ChartConfig::from_attributes(&attrs);
        Passthrough::new(render_chart(&table.series, &table.labels, &config), attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;
    use std::path::Path;

    fn missing(_: &Path) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::NotFound, "not found"))
    }

    fn context<'a>(reader: &'a dyn rw_extensions::AssetReader) -> ExtensionContext<'a> {
        ExtensionContext {
            source_path: None,
            base_dir: Path::new("docs"),
            line: 1,
            safe: false,
            reader,
        }
    }

    fn named(input: &str) -> AttributeList {
        let mut attrs = AttributeList::parse(input);
        attrs.apply_positional(POSITIONAL_ATTRIBUTES);
        attrs
    }

    #[test]
    fn test_declarations() {
        assert_eq!(ChartBlockMacro.name(), "chart");
        assert_eq!(ChartBlock.name(), "chart");
        assert_eq!(ChartBlockMacro.positional_attributes(), ["type", "width", "height"]);
        assert_eq!(ChartBlock.positional_attributes(), ["type", "width", "height"]);
        assert_eq!(
            ChartBlock.contexts(),
            [BlockContext::Listing, BlockContext::Literal]
        );
        assert_eq!(ChartBlock.content_model(), ContentModel::Raw);
    }

    #[test]
    fn test_macro_missing_file() {
        let ctx = context(&missing);
        let output = ChartBlockMacro.process(&ctx, "missing.csv", AttributeList::new());
        assert_eq!(
            output.html,
            r#"<div class="openblock">[file does not exist or cannot be read: missing.csv]</div>"#
        );
    }

    #[test]
    fn test_macro_placeholder_uses_target_as_written() {
        let ctx = context(&missing);
        let output = ChartBlockMacro.process(&ctx, "./data/../404.csv", AttributeList::new());
        assert!(output.html.contains("[file does not exist or cannot be read: ./data/../404.csv]"));
    }

    #[test]
    fn test_macro_reads_resolved_path() {
        let reader = |path: &Path| -> io::Result<String> {
            assert_eq!(path, Path::new("docs/data/sales.csv"));
            Ok("a,b\r\n1,2  \r\n".to_owned())
        };
        let ctx = context(&reader);
        let output = ChartBlockMacro.process(&ctx, "data/sales.csv", named("bar"));
        assert!(output.html.contains(
            r##"data-chart-type="Bar" data-chart-colors="#72B3CC,#8EB33B" data-chart-labels="a,b" data-chart-series-0="1,2"></div>"##
        ));
        assert_eq!(output.attrs.get("type"), Some("bar"));
    }

    #[test]
    fn test_block_empty() {
        let ctx = context(&missing);
        let output = ChartBlock.process(&ctx, &[], AttributeList::new());
        assert_eq!(output.html, r#"<div class="openblock">[chart is empty]</div>"#);
    }

    #[test]
    fn test_block_renders_lines() {
        let ctx = context(&missing);
        let lines = vec![
            "January,February,March".to_owned(),
            "28,48,40".to_owned(),
            "65,59,80".to_owned(),
        ];
        let output = ChartBlock.process(&ctx, &lines, AttributeList::new());
        assert!(output.html.contains(
            r#"data-chart-labels="January,February,March" data-chart-series-0="28,48,40" data-chart-series-1="65,59,80""#
        ));
        assert!(output.html.contains(
            r#"data-chart-height="400" data-chart-width="600" data-chart-type="Line""#
        ));
    }

    #[test]
    fn test_block_title() {
        let ctx = context(&missing);
        let lines = vec!["a".to_owned(), "1".to_owned()];
        let output = ChartBlock.process(&ctx, &lines, named("title=Sales"));
        assert!(output.html.contains(r#"<div class="title">Sales</div>"#));
        assert!(output.html.contains("Sales</div>\n<div class=\"ct-chart\""));
    }
}
