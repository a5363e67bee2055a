// src/render/mod.rs

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::{fmt::Write as _, fs, path::Path};
use tracing::info;

use crate::charts::{plotly, ChartSpec, Choropleth};
use crate::features::{FeatureColumn, FeatureTable};
use crate::views::{Section, View};

pub mod html;
pub mod text;

use html::{escape, figure_div, heading, paragraph, preview_table};

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

const STYLE: &str = "body { font-family: sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem; }
table.preview { border-collapse: collapse; font-size: 0.85rem; }
table.preview th, table.preview td { border: 1px solid #ddd; padding: 0.25rem 0.5rem; text-align: right; }
.chart { width: 100%; min-height: 450px; }
footer { color: #777; font-size: 0.8rem; margin-top: 2rem; }";

const TOGGLE_JS: &str = "function snapdashShow(section, index) {
  document.querySelectorAll('[data-section=\"' + section + '\"]').forEach(function (el) {
    el.style.display = Number(el.dataset.index) === index ? 'block' : 'none';
  });
  var chart = document.getElementById(section + '-' + index + '-chart');
  if (chart) { Plotly.Plots.resize(chart); }
}";

/// Page-level facts that do not come from the feature table.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub source: String,
    pub generated_at: DateTime<Utc>,
}

impl Dashboard {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            generated_at: Utc::now(),
        }
    }
}

fn section_copy(section: Section) -> (&'static str, &'static str) {
    match section {
        Section::Choropleth => (text::CHOROPLETH_HEADING, text::CHOROPLETH_INTRO),
        Section::StackedBar => (text::BAR_HEADING, text::BAR_INTRO),
        Section::Scatter => (text::SCATTER_HEADING, text::SCATTER_INTRO),
    }
}

/// One section: the dropdown and every option pre-rendered, the first one visible.
fn render_section(table: &FeatureTable, section: Section) -> String {
    let slug = section.slug();
    let (title, intro) = section_copy(section);
    let selections = section.selections();

    let mut out = format!("<section id=\"{slug}\">\n");
    out.push_str(&heading(3, title));
    out.push_str(&paragraph(intro));
    let _ = writeln!(
        out,
        "<label for=\"{slug}-select\">{}</label>\n<select id=\"{slug}-select\" onchange=\"snapdashShow('{slug}', this.selectedIndex)\">",
        escape(section.prompt())
    );
    for sel in &selections {
        let _ = writeln!(out, "<option>{}</option>", escape(sel.label()));
    }
    out.push_str("</select>\n");

    for (i, sel) in selections.iter().enumerate() {
        let view = sel.view(table);
        let display = if i == 0 { "block" } else { "none" };
        let _ = writeln!(
            out,
            "<div class=\"option\" data-section=\"{slug}\" data-index=\"{i}\" style=\"display: {display}\">"
        );
        out.push_str(&figure_div(
            &format!("{slug}-{i}-chart"),
            &plotly::figure(&view.chart),
        ));
        out.push_str(&paragraph(view.commentary));
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
    out
}

/// The whole dashboard as one self-contained HTML page.
pub fn render_dashboard(table: &FeatureTable, dashboard: &Dashboard) -> String {
    let mut out = String::with_capacity(64 * 1024);
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<script src=\"{PLOTLY_CDN}\"></script>\n<style>\n{STYLE}\n</style>\n<script>\n{TOGGLE_JS}\n</script>\n</head>\n<body>\n",
        title = escape(text::TITLE),
    );
    out.push_str(&heading(1, text::TITLE));

    for (title, body) in text::INTRO {
        out.push_str(&heading(2, title));
        out.push_str(&paragraph(body));
    }

    out.push_str(&heading(2, text::DATA_HEADING));
    out.push_str(&paragraph(text::DATA_INTRO));
    out.push_str(&preview_table(table));

    out.push_str(&paragraph(text::HEADLINE_INTRO));
    let headline = ChartSpec::Choropleth(Choropleth::build(table, FeatureColumn::SnapPct));
    out.push_str(&figure_div("headline-chart", &plotly::figure(&headline)));
    out.push_str(&paragraph(text::HEADLINE_COMMENTARY));

    for section in Section::ALL {
        out.push_str(&render_section(table, section));
    }

    out.push_str(&heading(2, text::FEEDBACK_HEADING));
    out.push_str(&paragraph(text::FEEDBACK_INTRO));
    let _ = writeln!(
        out,
        "<label for=\"feedback\">{}</label>\n<input type=\"text\" id=\"feedback\" name=\"feedback\">",
        escape(text::FEEDBACK_PROMPT)
    );

    out.push_str(&heading(2, "Works Cited"));
    for entry in text::WORKS_CITED {
        out.push_str(&paragraph(entry));
    }

    let _ = write!(
        out,
        "<footer>Data: {} &middot; generated {}</footer>\n</body>\n</html>\n",
        escape(&dashboard.source),
        dashboard.generated_at.format("%Y-%m-%d %H:%M UTC"),
    );
    out
}

/// Render and write the page; the file appears only once complete.
pub fn write_dashboard(table: &FeatureTable, dashboard: &Dashboard, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("creating {:?}", parent))?;
    }
    let page = render_dashboard(table, dashboard);
    let tmp_path = path.with_extension("html.tmp");
    fs::write(&tmp_path, &page).with_context(|| format!("writing {:?}", tmp_path))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))?;
    info!(path = %path.display(), bytes = page.len(), "wrote dashboard");
    Ok(())
}

/// A single view with its Plotly figure, as printed by `snapdash view`.
pub fn render_view(view: &View) -> Value {
    json!({
        "section": view.section,
        "option": view.label,
        "columns": view.columns,
        "commentary": view.commentary,
        "chart": view.chart,
        "figure": plotly::figure(&view.chart),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::table::tests::{header, row, sample_table};
    use crate::features::JoinPolicy;
    use crate::fetch::RawResponse;
    use crate::regions::RegionLookup;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn dashboard() -> Dashboard {
        Dashboard {
            source: "https://api.census.gov/data/2020/acs/acs5".into(),
            generated_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn page_structure() {
        let page = render_dashboard(&sample_table(), &dashboard());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<h1>SNAP Participation Dashboard</h1>"));
        assert!(page.contains(PLOTLY_CDN));
        assert_eq!(page.matches("<select ").count(), 3);
        // 9 indicators twice plus 4 demographics
        assert_eq!(page.matches("<option>").count(), 22);
        assert_eq!(page.matches("class=\"option\"").count(), 22);
        // one figure per option plus the headline map
        assert_eq!(page.matches("Plotly.newPlot(").count(), 23);
        assert!(page.contains("id=\"headline-chart\""));
        assert!(page.contains("<input type=\"text\" id=\"feedback\""));
        assert!(page.contains("<h2>Works Cited</h2>"));
        assert!(page.contains("generated 2024-03-01 12:00 UTC"));
    }

    #[test]
    fn first_option_of_each_section_is_visible() {
        let page = render_dashboard(&sample_table(), &dashboard());
        for slug in ["choropleth", "bar", "scatter"] {
            let first = format!(
                "data-section=\"{slug}\" data-index=\"0\" style=\"display: block\""
            );
            assert!(page.contains(&first), "{}", slug);
        }
        assert_eq!(page.matches("style=\"display: block\"").count(), 3);
    }

    #[test]
    fn commentary_and_prompts_are_escaped() {
        let page = render_dashboard(&sample_table(), &dashboard());
        assert!(page.contains("What is SNAP?"));
        assert!(page.contains("it&#39;s perhaps worth noting again"));
        assert!(!page.contains("it's perhaps worth noting again"));
    }

    #[test]
    fn works_cited_urls_are_kept_whole() {
        let page = render_dashboard(&sample_table(), &dashboard());
        assert!(page.contains("snap-participation-and-expenditures/#:~:text=Preliminary%20national%20data%20available%20at,SNAP%20benefits%20in%20April%202020."));
        assert_eq!(page.matches("<h2>Works Cited</h2>").count(), 1);
    }

    #[test]
    fn region_names_are_escaped() {
        let raw = RawResponse {
            header: header(),
            rows: vec![row(&[
                "<Ampersand & Co>", "100", "10", "90", "20", "10", "20", "30", "20", "10",
                "30", "40", "5", "5", "5", "5", "40", "98",
            ])],
        };
        let lookup = RegionLookup::embedded().unwrap();
        let table = FeatureTable::from_raw(&raw, lookup, JoinPolicy::Lenient).unwrap();
        let page = render_dashboard(&table, &dashboard());
        assert!(page.contains("<td>&lt;Ampersand &amp; Co&gt;</td>"));
        assert!(!page.contains("<td><Ampersand"));
    }

    #[test]
    fn writes_page_to_disk() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("site").join("index.html");
        write_dashboard(&sample_table(), &dashboard(), &path).unwrap();
        let page = fs::read_to_string(&path).unwrap();
        assert!(page.ends_with("</html>\n"));
        assert!(!path.with_extension("html.tmp").exists());
    }

    #[test]
    fn view_json_carries_figure_and_commentary() {
        let table = sample_table();
        let view = Section::Scatter.resolve("Poverty Rate").view(&table);
        let v = render_view(&view);
        assert_eq!(v["section"], "scatter");
        assert_eq!(v["option"], "Poverty Rate");
        assert_eq!(v["columns"], json!(["fpl_pct"]));
        assert_eq!(v["chart"]["kind"], "scatter");
        assert!(v["figure"]["data"].as_array().unwrap().len() >= 2);
        assert!(v["commentary"]
            .as_str()
            .unwrap()
            .starts_with("This scatter plot shows the relationship"));
    }
}
