//! HTML markup for chart widgets.
//!
//! The attribute names and their order are read by the client-side chart
//! script and must not change:
//!
//! ```text
//! <div class="openblock">{title}<div class="ct-chart" data-chart-height="…" data-chart-width="…"
//!   data-chart-type="…" data-chart-colors="…" data-chart-labels="…" data-chart-series-0="…" …></div>
//! </div>
//! ```

use std::fmt::Write;

use crate::ChartConfig;
use crate::consts::{CHART_COLORS, DELIMITER};

/// Render the chart widget for the given series and labels.
///
/// Cell values and the title are emitted verbatim.
#[must_use]
pub fn render_chart(series: &[Vec<String>], labels: &[String], config: &ChartConfig) -> String {
    let delimiter = DELIMITER.to_string();

    let title = config
        .title
        .as_ref()
        .map(|title| format!("<div class=\"title\">{title}</div>\n"))
        .unwrap_or_default();

    let mut attrs = String::new();
    let _ = write!(
        attrs,
        r#"data-chart-height="{}" data-chart-width="{}" data-chart-type="{}" data-chart-colors="{CHART_COLORS}" data-chart-labels="{}" "#,
        config.height(),
        config.width(),
        config.chart_type().as_str(),
        labels.join(&delimiter),
    );

    let series_attrs: Vec<String> = series
        .iter()
        .enumerate()
        .map(|(index, row)| format!(r#"data-chart-series-{index}="{}""#, row.join(&delimiter)))
        .collect();
    attrs.push_str(&series_attrs.join(" "));

    format!("<div class=\"openblock\">{title}<div class=\"ct-chart\" {attrs}></div>\n</div>")
}

/// Placeholder for a chart block without content.
#[must_use]
pub fn empty_chart_placeholder() -> String {
    placeholder("chart is empty")
}

/// Placeholder for a chart macro whose data file cannot be read.
///
/// `target` is the target as written in the document.
#[must_use]
pub fn unreadable_file_placeholder(target: &str) -> String {
    placeholder(&format!("file does not exist or cannot be read: {target}"))
}

fn placeholder(message: &str) -> String {
    format!("<div class=\"openblock\">[{message}]</div>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| (*c).to_owned()).collect()
    }

    fn sales() -> (Vec<Vec<String>>, Vec<String>) {
        (
            vec![strings(&["28", "48", "40"]), strings(&["65", "59", "80"])],
            strings(&["January", "February", "March"]),
        )
    }

    #[test]
    fn test_render_defaults() {
        let (series, labels) = sales();
        let html = render_chart(&series, &labels, &ChartConfig::default());
        assert_eq!(
            html,
            concat!(
                r#"<div class="openblock"><div class="ct-chart" data-chart-height="400" "#,
                r##"data-chart-width="600" data-chart-type="Line" data-chart-colors="#72B3CC,#8EB33B" "##,
                r#"data-chart-labels="January,February,March" data-chart-series-0="28,48,40" "#,
                r#"data-chart-series-1="65,59,80"></div>"#,
                "\n</div>"
            )
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let (series, labels) = sales();
        let config = ChartConfig {
            title: Some("Sales".to_owned()),
            ..ChartConfig::default()
        };
        assert_eq!(
            render_chart(&series, &labels, &config),
            render_chart(&series, &labels, &config)
        );
    }

    #[test]
    fn test_render_bar_with_dimensions() {
        let (series, labels) = sales();
        let config = ChartConfig {
            chart_type: Some("bar".to_owned()),
            width: Some("500".to_owned()),
            height: Some("700".to_owned()),
            ..ChartConfig::default()
        };
        let html = render_chart(&series, &labels, &config);
        assert!(html.contains(
            r#"data-chart-height="700" data-chart-width="500" data-chart-type="Bar" "#
        ));
    }

    #[test]
    fn test_render_unknown_type_is_line() {
        let (series, labels) = sales();
        let config = ChartConfig {
            chart_type: Some("pie".to_owned()),
            ..ChartConfig::default()
        };
        let html = render_chart(&series, &labels, &config);
        assert!(html.contains(r#"data-chart-type="Line""#));
        assert!(!html.contains("Bar"));
    }

    #[test]
    fn test_render_title() {
        let (series, labels) = sales();
        let config = ChartConfig {
            title: Some("Sales".to_owned()),
            ..ChartConfig::default()
        };
        let html = render_chart(&series, &labels, &config);
        assert!(html.starts_with(
            "<div class=\"openblock\"><div class=\"title\">Sales</div>\n<div class=\"ct-chart\""
        ));
    }

    #[test]
    fn test_render_without_title_has_no_title_class() {
        let (series, labels) = sales();
        let html = render_chart(&series, &labels, &ChartConfig::default());
        assert!(!html.contains("title"));
    }

    #[test]
    fn test_attribute_order() {
        let (series, labels) = sales();
        let configs = [
            ChartConfig::default(),
            ChartConfig {
                title: Some("T".to_owned()),
                chart_type: Some("bar".to_owned()),
                width: Some("1".to_owned()),
                height: Some("2".to_owned()),
            },
        ];
        let names = [
            "data-chart-height=",
            "data-chart-width=",
            "data-chart-type=",
            "data-chart-colors=",
            "data-chart-labels=",
            "data-chart-series-0=",
            "data-chart-series-1=",
        ];

        for config in &configs {
            let html = render_chart(&series, &labels, config);
            let positions: Vec<usize> = names.iter().map(|n| html.find(n).unwrap()).collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{html}");
        }
    }

    #[test]
    fn test_render_no_series() {
        let html = render_chart(&[], &strings(&["a", "b"]), &ChartConfig::default());
        assert!(html.ends_with("data-chart-labels=\"a,b\" ></div>\n</div>"));
        assert!(!html.contains("data-chart-series"));
    }

    #[test]
    fn test_render_ragged_rows_verbatim() {
        let series = vec![strings(&["1"]), strings(&["x", "y", "z", "w"])];
        let html = render_chart(&series, &strings(&["a", "b"]), &ChartConfig::default());
        assert!(html.contains(r#"data-chart-series-0="1" data-chart-series-1="x,y,z,w""#));
    }

    #[test]
    fn test_empty_chart_placeholder() {
        assert_eq!(
            empty_chart_placeholder(),
            r#"<div class="openblock">[chart is empty]</div>"#
        );
    }

    #[test]
    fn test_unreadable_file_placeholder() {
        assert_eq!(
            unreadable_file_placeholder("missing.csv"),
            r#"<div class="openblock">[file does not exist or cannot be read: missing.csv]</div>"#
        );
    }
}
