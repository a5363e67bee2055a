// src/views/mod.rs

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::charts::{ChartSpec, Choropleth, Scatter, StackedBar};
use crate::features::{FeatureColumn, FeatureTable};

pub mod commentary;
pub mod options;

pub use options::{Demographic, Indicator};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("unknown section `{0}` (expected choropleth, bar or scatter)")]
    UnknownSection(String),
}

/// The three selector-driven dashboard sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Choropleth,
    StackedBar,
    Scatter,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Choropleth, Section::StackedBar, Section::Scatter];

    pub fn slug(&self) -> &'static str {
        match self {
            Section::Choropleth => "choropleth",
            Section::StackedBar => "bar",
            Section::Scatter => "scatter",
        }
    }

    /// Prompt shown next to the dropdown.
    pub fn prompt(&self) -> &'static str {
        match self {
            Section::Choropleth => "Choose another variable to look at:",
            Section::StackedBar => "Choose a demographic level to explore at the state level:",
            Section::Scatter => "Choose a variable to plot against SNAP participation rate:",
        }
    }

    /// Every selection of this section, in dropdown order.
    pub fn selections(&self) -> Vec<Selection> {
        match self {
            Section::Choropleth => Indicator::ALL.into_iter().map(Selection::Choropleth).collect(),
            Section::StackedBar => Demographic::ALL
                .into_iter()
                .map(Selection::StackedBar)
                .collect(),
            Section::Scatter => Indicator::ALL.into_iter().map(Selection::Scatter).collect(),
        }
    }

    /// Resolve a dropdown label. Unknown labels fall through to the last option.
    pub fn resolve(&self, label: &str) -> Selection {
        match self {
            Section::Choropleth => Selection::Choropleth(Indicator::resolve(label)),
            Section::StackedBar => Selection::StackedBar(Demographic::resolve(label)),
            Section::Scatter => Selection::Scatter(Indicator::resolve(label)),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Section {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "choropleth" | "map" => Ok(Section::Choropleth),
            "bar" | "stacked_bar" | "stacked-bar" => Ok(Section::StackedBar),
            "scatter" => Ok(Section::Scatter),
            other => Err(SelectionError::UnknownSection(other.to_string())),
        }
    }
}

/// One dropdown choice in one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "section", content = "option", rename_all = "snake_case")]
pub enum Selection {
    Choropleth(Indicator),
    StackedBar(Demographic),
    Scatter(Indicator),
}

impl Selection {
    pub fn section(&self) -> Section {
        match self {
            Selection::Choropleth(_) => Section::Choropleth,
            Selection::StackedBar(_) => Section::StackedBar,
            Selection::Scatter(_) => Section::Scatter,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Selection::Choropleth(i) | Selection::Scatter(i) => i.label(),
            Selection::StackedBar(d) => d.label(),
        }
    }

    pub fn columns(&self) -> Vec<FeatureColumn> {
        match self {
            Selection::Choropleth(i) | Selection::Scatter(i) => vec![i.column()],
            Selection::StackedBar(d) => d.columns().to_vec(),
        }
    }

    pub fn commentary(&self) -> &'static str {
        match self {
            Selection::Choropleth(i) => commentary::choropleth(*i),
            Selection::StackedBar(d) => commentary::stacked_bar(*d),
            Selection::Scatter(i) => commentary::scatter(*i),
        }
    }

    /// Build the chart and pair it with its commentary.
    pub fn view(&self, table: &FeatureTable) -> View {
        let chart = match self {
            Selection::Choropleth(i) => ChartSpec::Choropleth(Choropleth::build(table, i.column())),
            Selection::StackedBar(d) => ChartSpec::StackedBar(StackedBar::build(table, d.columns())),
            Selection::Scatter(i) => ChartSpec::Scatter(Scatter::build(table, i.column())),
        };
        View {
            section: self.section(),
            label: self.label(),
            columns: self.columns(),
            chart,
            commentary: self.commentary(),
        }
    }
}

/// A resolved selection: what to draw and what to say about it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub section: Section,
    pub label: &'static str,
    pub columns: Vec<FeatureColumn>,
    pub chart: ChartSpec,
    pub commentary: &'static str,
}
