pub mod cache;
pub mod charts;
pub mod config;
pub mod export;
pub mod features;
pub mod fetch;
pub mod pipeline;
pub mod regions;
pub mod render;
pub mod views;

pub use config::Config;
pub use features::{FeatureColumn, FeatureError, FeatureTable, RegionRecord};
pub use pipeline::Pipeline;
pub use regions::{Region, RegionLookup};
pub use render::Dashboard;
pub use views::{Demographic, Indicator, Section, Selection, View};
