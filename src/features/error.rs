use thiserror::Error;

/// Why a raw ACS reply could not become a feature table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    #[error("row {row} has {found} cells, expected {expected}")]
    SchemaMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("column `{column}` for `{region}`: cannot cast `{value}` to an integer")]
    Cast {
        column: &'static str,
        region: String,
        value: String,
    },
    #[error("`{region}`: `{column}` overflows a 64-bit count")]
    Overflow { column: &'static str, region: String },
    #[error("`{region}` has zero population")]
    ZeroPopulation { region: String },
    #[error("`{region}` is missing from the region lookup")]
    UnmatchedRegion { region: String },
}
