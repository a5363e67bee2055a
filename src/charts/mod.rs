// src/charts/mod.rs

use serde::{Deserialize, Serialize};

use crate::features::{FeatureColumn, FeatureTable};
use crate::regions::Region;

pub mod plotly;
pub mod regression;

pub use regression::LinearFit;

/// A chart ready to hand to the renderer. Axes and chart type are fixed per
/// variant; only the encoded columns change between selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Choropleth(Choropleth),
    StackedBar(StackedBar),
    Scatter(Scatter),
}

impl ChartSpec {
    pub fn columns(&self) -> Vec<FeatureColumn> {
        match self {
            ChartSpec::Choropleth(c) => vec![c.column],
            ChartSpec::StackedBar(b) => b.series.iter().map(|s| s.column).collect(),
            ChartSpec::Scatter(s) => vec![s.x_column, s.y_column],
        }
    }
}

/// US state map coloured by one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choropleth {
    pub column: FeatureColumn,
    /// Two-letter state codes.
    pub locations: Vec<String>,
    pub names: Vec<String>,
    pub values: Vec<f64>,
}

impl Choropleth {
    /// Rows without a state code cannot be placed on the map and are left out.
    pub fn build(table: &FeatureTable, column: FeatureColumn) -> Self {
        let mut out = Self {
            column,
            locations: Vec::with_capacity(table.len()),
            names: Vec::with_capacity(table.len()),
            values: Vec::with_capacity(table.len()),
        };
        for rec in table.rows() {
            if let Some(code) = &rec.state_code {
                out.locations.push(code.clone());
                out.names.push(rec.state.clone());
                out.values.push(rec.value(column));
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub column: FeatureColumn,
    pub values: Vec<f64>,
}

/// One bar per state, one stacked segment per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedBar {
    pub states: Vec<String>,
    pub series: Vec<Series>,
}

impl StackedBar {
    pub fn build(table: &FeatureTable, columns: &[FeatureColumn]) -> Self {
        Self {
            states: table.rows().iter().map(|r| r.state.clone()).collect(),
            series: columns
                .iter()
                .map(|c| Series {
                    column: *c,
                    values: table.column(*c),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub state: String,
    pub region: Option<Region>,
    pub x: f64,
    pub y: f64,
    pub pop: i64,
}

/// Points coloured by census region and sized by population, with a fitted line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scatter {
    pub x_column: FeatureColumn,
    pub y_column: FeatureColumn,
    pub points: Vec<ScatterPoint>,
    pub fit: Option<LinearFit>,
}

impl Scatter {
    /// `x_column` against SNAP participation.
    pub fn build(table: &FeatureTable, x_column: FeatureColumn) -> Self {
        let y_column = FeatureColumn::SnapPct;
        let points: Vec<ScatterPoint> = table
            .rows()
            .iter()
            .map(|r| ScatterPoint {
                state: r.state.clone(),
                region: r.region,
                x: r.value(x_column),
                y: r.value(y_column),
                pop: r.counts.pop,
            })
            .collect();
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        Self {
            x_column,
            y_column,
            fit: LinearFit::fit(&xs, &ys),
            points,
        }
    }

    /// Points grouped by region in `Region::ALL` order; unmatched rows last under `None`.
    pub fn groups(&self) -> Vec<(Option<Region>, Vec<&ScatterPoint>)> {
        let keys = Region::ALL.iter().copied().map(Some).chain([None]);
        keys.filter_map(|key| {
            let members: Vec<&ScatterPoint> =
                self.points.iter().filter(|p| p.region == key).collect();
            (!members.is_empty()).then_some((key, members))
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::table::tests::sample_table;

    #[test]
    fn choropleth_skips_rows_without_code() {
        let table = sample_table();
        let chart = Choropleth::build(&table, FeatureColumn::UnempPct);
        assert_eq!(chart.locations, vec!["AL", "NM"]);
        assert_eq!(chart.values, vec![0.04, 0.05]);
    }

    #[test]
    fn stacked_bar_has_a_series_per_column() {
        let table = sample_table();
        let chart = StackedBar::build(&table, &[FeatureColumn::RentPct, FeatureColumn::MortgagePct]);
        assert_eq!(chart.states.len(), 3);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].values, vec![0.3, 0.32, 0.3]);
    }

    #[test]
    fn scatter_groups_and_fit() {
        let table = sample_table();
        let chart = Scatter::build(&table, FeatureColumn::FplPct);
        assert_eq!(chart.y_column, FeatureColumn::SnapPct);
        assert!(chart.fit.is_some());

        let groups: Vec<Option<Region>> = chart.groups().into_iter().map(|(g, _)| g).collect();
        assert_eq!(groups, vec![Some(Region::South), Some(Region::West), None]);
        assert_eq!(
            ChartSpec::Scatter(chart).columns(),
            vec![FeatureColumn::FplPct, FeatureColumn::SnapPct]
        );
    }
}
