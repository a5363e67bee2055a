// src/render/html.rs

use serde_json::Value;
use std::fmt::Write;

use crate::features::{FeatureColumn, FeatureTable};

/// Columns of the data preview after `state`.
pub const PREVIEW_COLUMNS: [FeatureColumn; 11] = [
    FeatureColumn::Pop,
    FeatureColumn::SnapPct,
    FeatureColumn::FplPct,
    FeatureColumn::UnempPct,
    FeatureColumn::NotInLfPct,
    FeatureColumn::DegPct,
    FeatureColumn::BlackPct,
    FeatureColumn::HispanicPct,
    FeatureColumn::NativePct,
    FeatureColumn::RentPct,
    FeatureColumn::MortgagePct,
];

pub const PREVIEW_ROWS: usize = 5;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// JSON that is safe inside a `<script>` element.
pub fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

fn format_cell(col: FeatureColumn, value: f64) -> String {
    if col.is_ratio() {
        value.to_string()
    } else {
        (value as i64).to_string()
    }
}

/// First rows of the table as an HTML `<table>`.
pub fn preview_table(table: &FeatureTable) -> String {
    let mut out = String::from("<table class=\"preview\">\n<thead><tr><th>state</th>");
    for col in PREVIEW_COLUMNS {
        let _ = write!(out, "<th>{}</th>", col.name());
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for rec in table.head(PREVIEW_ROWS) {
        let _ = write!(out, "<tr><td>{}</td>", escape(&rec.state));
        for col in PREVIEW_COLUMNS {
            let _ = write!(out, "<td>{}</td>", format_cell(col, rec.value(col)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

/// A chart container plus the script that draws `figure` into it.
pub fn figure_div(id: &str, figure: &Value) -> String {
    format!(
        "<div class=\"chart\" id=\"{id}\"></div>\n<script>(function () {{ var fig = {json}; Plotly.newPlot(\"{id}\", fig.data, fig.layout, {{responsive: true}}); }})();</script>\n",
        id = escape(id),
        json = script_json(figure),
    )
}

pub fn paragraph(text: &str) -> String {
    format!("<p>{}</p>\n", escape(text))
}

pub fn heading(level: u8, text: &str) -> String {
    format!("<h{level}>{}</h{level}>\n", escape(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::table::tests::sample_table;
    use serde_json::json;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b>"A&B's"</b>"#),
            "&lt;b&gt;&quot;A&amp;B&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn script_json_cannot_close_the_tag() {
        let v = json!({ "text": "</script><script>alert(1)" });
        let s = script_json(&v);
        assert!(!s.contains("</script>"));
        assert!(s.contains("<\\/script>"));
    }

    #[test]
    fn preview_lists_twelve_columns() {
        let html = preview_table(&sample_table());
        assert_eq!(html.matches("<th>").count(), 12);
        assert!(html.contains("<th>mortgage_pct</th>"));
        // three rows survive cleaning, all fit in the preview
        assert_eq!(html.matches("<tr><td>").count(), 3);
        assert!(html.contains("<tr><td>Alabama</td><td>1000</td><td>0.15</td>"));
    }
}
