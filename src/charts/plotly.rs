// src/charts/plotly.rs

use serde_json::{json, Value};

use super::{ChartSpec, Choropleth, Scatter, StackedBar};

/// Largest marker diameter in pixels for the most populous state.
const MAX_MARKER_PX: f64 = 40.0;

/// Plotly.js figure (`{"data": [...], "layout": {...}}`) for `chart`.
pub fn figure(chart: &ChartSpec) -> Value {
    match chart {
        ChartSpec::Choropleth(c) => choropleth(c),
        ChartSpec::StackedBar(b) => stacked_bar(b),
        ChartSpec::Scatter(s) => scatter(s),
    }
}

fn choropleth(c: &Choropleth) -> Value {
    let name = c.column.name();
    json!({
        "data": [{
            "type": "choropleth",
            "locationmode": "USA-states",
            "locations": c.locations,
            "z": c.values,
            "text": c.names,
            "colorscale": "Viridis",
            "reversescale": true,
            "colorbar": { "title": { "text": name } },
            "hovertemplate": format!("%{{location}}<br>{}=%{{z}}<extra></extra>", name),
        }],
        "layout": {
            "geo": { "scope": "usa" },
            "margin": { "l": 0, "r": 0, "t": 10, "b": 0 },
        },
    })
}

fn stacked_bar(b: &StackedBar) -> Value {
    let traces: Vec<Value> = b
        .series
        .iter()
        .map(|s| {
            json!({
                "type": "bar",
                "name": s.column.name(),
                "x": b.states,
                "y": s.values,
            })
        })
        .collect();
    json!({
        "data": traces,
        "layout": {
            "barmode": "stack",
            "xaxis": { "title": { "text": "state" } },
            "yaxis": { "title": { "text": "value" } },
            "legend": { "title": { "text": "variable" } },
        },
    })
}

fn scatter(s: &Scatter) -> Value {
    let x_name = s.x_column.name();
    let y_name = s.y_column.name();
    let max_pop = s.points.iter().map(|p| p.pop).max().unwrap_or(1).max(1) as f64;
    // Plotly's area sizing: sizeref = 2 * max(size) / max_px^2
    let sizeref = 2.0 * max_pop / (MAX_MARKER_PX * MAX_MARKER_PX);

    let mut traces: Vec<Value> = s
        .groups()
        .into_iter()
        .map(|(region, points)| {
            let name = region.map(|r| r.as_str()).unwrap_or("Unknown");
            json!({
                "type": "scatter",
                "mode": "markers",
                "name": name,
                "x": points.iter().map(|p| p.x).collect::<Vec<_>>(),
                "y": points.iter().map(|p| p.y).collect::<Vec<_>>(),
                "text": points.iter().map(|p| p.state.as_str()).collect::<Vec<_>>(),
                "marker": {
                    "size": points.iter().map(|p| p.pop).collect::<Vec<_>>(),
                    "sizemode": "area",
                    "sizeref": sizeref,
                    "opacity": 0.8,
                },
                "hovertemplate": format!("%{{text}}<br>{}=%{{y}}<extra></extra>", y_name),
            })
        })
        .collect();

    let xs: Vec<f64> = s.points.iter().map(|p| p.x).collect();
    if let Some([(x0, y0), (x1, y1)]) = s.fit.and_then(|f| f.segment(&xs)) {
        traces.push(json!({
            "type": "scatter",
            "mode": "lines",
            "name": "linear fit",
            "x": [x0, x1],
            "y": [y0, y1],
            "line": { "color": "#4c78a8", "width": 2 },
            "hoverinfo": "skip",
        }));
    }

    json!({
        "data": traces,
        "layout": {
            "xaxis": { "title": { "text": x_name } },
            "yaxis": { "title": { "text": y_name } },
            "legend": { "title": { "text": "region" } },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{Choropleth, Scatter, StackedBar};
    use crate::features::table::tests::sample_table;
    use crate::features::FeatureColumn;

    #[test]
    fn choropleth_figure() {
        let table = sample_table();
        let fig = figure(&ChartSpec::Choropleth(Choropleth::build(
            &table,
            FeatureColumn::SnapPct,
        )));
        let trace = &fig["data"][0];
        assert_eq!(trace["type"], "choropleth");
        assert_eq!(trace["locationmode"], "USA-states");
        assert_eq!(trace["reversescale"], true);
        assert_eq!(trace["locations"], json!(["AL", "NM"]));
        assert_eq!(fig["layout"]["geo"]["scope"], "usa");
    }

    #[test]
    fn stacked_bar_figure() {
        let table = sample_table();
        let fig = figure(&ChartSpec::StackedBar(StackedBar::build(
            &table,
            &[FeatureColumn::LessThanHsPct, FeatureColumn::HsPct],
        )));
        assert_eq!(fig["layout"]["barmode"], "stack");
        let names: Vec<&str> = fig["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["less_than_hs_pct", "hs_pct"]);
    }

    #[test]
    fn scatter_figure_has_fit_line() {
        let table = sample_table();
        let fig = figure(&ChartSpec::Scatter(Scatter::build(
            &table,
            FeatureColumn::UnempPct,
        )));
        let data = fig["data"].as_array().unwrap();
        // South, West, Unknown, then the line
        assert_eq!(data.len(), 4);
        assert_eq!(data[2]["name"], "Unknown");
        assert_eq!(data[3]["mode"], "lines");
        assert_eq!(fig["layout"]["yaxis"]["title"]["text"], "snap_pct");
    }
}
