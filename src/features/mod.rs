pub mod batch;
pub mod columns;
pub mod error;
pub mod table;

pub use batch::feature_schema;
pub use columns::{FeatureColumn, RAW_COLUMNS};
pub use error::FeatureError;
pub use table::{round3, Counts, Derived, FeatureTable, JoinPolicy, RegionRecord};
