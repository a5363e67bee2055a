// src/features/columns.rs

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Labels applied positionally to every raw API row.
pub const RAW_COLUMNS: [&str; 18] = [
    "state",
    "pop",
    "snap",
    "non_snap",
    "below_fpl",
    "less_than_hs",
    "hs",
    "some_college",
    "college_deg",
    "grad_deg",
    "rent",
    "mortgage",
    "black",
    "hispanic",
    "native",
    "unemployed",
    "not_in_labor_force",
    "id",
];

/// Every numeric column of the feature table, raw or derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureColumn {
    Pop,
    Snap,
    NonSnap,
    BelowFpl,
    LessThanHs,
    Hs,
    SomeCollege,
    CollegeDeg,
    GradDeg,
    Rent,
    Mortgage,
    Black,
    Hispanic,
    Native,
    Unemployed,
    NotInLaborForce,
    Id,
    SnapPct,
    FplPct,
    Deg,
    DegPct,
    LessThanHsPct,
    HsPct,
    SomeCollPct,
    CollegeDegPct,
    GradDegPct,
    RentPct,
    MortgagePct,
    BlackPct,
    HispanicPct,
    NativePct,
    UnempPct,
    NotInLfPct,
}

impl FeatureColumn {
    /// Derived columns, in derivation order.
    pub const DERIVED: [FeatureColumn; 16] = [
        FeatureColumn::SnapPct,
        FeatureColumn::FplPct,
        FeatureColumn::Deg,
        FeatureColumn::DegPct,
        FeatureColumn::LessThanHsPct,
        FeatureColumn::HsPct,
        FeatureColumn::SomeCollPct,
        FeatureColumn::CollegeDegPct,
        FeatureColumn::GradDegPct,
        FeatureColumn::RentPct,
        FeatureColumn::MortgagePct,
        FeatureColumn::BlackPct,
        FeatureColumn::HispanicPct,
        FeatureColumn::NativePct,
        FeatureColumn::UnempPct,
        FeatureColumn::NotInLfPct,
    ];

    /// Raw integer columns after `state`, in label order.
    pub const COUNTS: [FeatureColumn; 17] = [
        FeatureColumn::Pop,
        FeatureColumn::Snap,
        FeatureColumn::NonSnap,
        FeatureColumn::BelowFpl,
        FeatureColumn::LessThanHs,
        FeatureColumn::Hs,
        FeatureColumn::SomeCollege,
        FeatureColumn::CollegeDeg,
        FeatureColumn::GradDeg,
        FeatureColumn::Rent,
        FeatureColumn::Mortgage,
        FeatureColumn::Black,
        FeatureColumn::Hispanic,
        FeatureColumn::Native,
        FeatureColumn::Unemployed,
        FeatureColumn::NotInLaborForce,
        FeatureColumn::Id,
    ];

    pub fn name(&self) -> &'static str {
        use FeatureColumn::*;
        match self {
            Pop => "pop",
            Snap => "snap",
            NonSnap => "non_snap",
            BelowFpl => "below_fpl",
            LessThanHs => "less_than_hs",
            Hs => "hs",
            SomeCollege => "some_college",
            CollegeDeg => "college_deg",
            GradDeg => "grad_deg",
            Rent => "rent",
            Mortgage => "mortgage",
            Black => "black",
            Hispanic => "hispanic",
            Native => "native",
            Unemployed => "unemployed",
            NotInLaborForce => "not_in_labor_force",
            Id => "id",
            SnapPct => "snap_pct",
            FplPct => "fpl_pct",
            Deg => "deg",
            DegPct => "deg_pct",
            LessThanHsPct => "less_than_hs_pct",
            HsPct => "hs_pct",
            SomeCollPct => "some_coll_pct",
            CollegeDegPct => "college_deg_pct",
            GradDegPct => "grad_deg_pct",
            RentPct => "rent_pct",
            MortgagePct => "mortgage_pct",
            BlackPct => "black_pct",
            HispanicPct => "hispanic_pct",
            NativePct => "native_pct",
            UnempPct => "unemp_pct",
            NotInLfPct => "not_in_lf_pct",
        }
    }

    /// True for the `round(count / pop, 3)` columns.
    pub fn is_ratio(&self) -> bool {
        self.name().ends_with("_pct")
    }

    fn all() -> impl Iterator<Item = FeatureColumn> {
        Self::COUNTS.into_iter().chain(Self::DERIVED)
    }
}

impl fmt::Display for FeatureColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feature column `{0}`")]
pub struct UnknownColumn(pub String);

impl FromStr for FeatureColumn {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_follow_raw_labels() {
        let names: Vec<&str> = FeatureColumn::COUNTS.iter().map(|c| c.name()).collect();
        assert_eq!(names, RAW_COLUMNS[1..].to_vec());
    }

    #[test]
    fn parses_every_name() {
        for col in FeatureColumn::all() {
            assert_eq!(col.name().parse::<FeatureColumn>().unwrap(), col);
        }
        assert!("snap_percent".parse::<FeatureColumn>().is_err());
    }

    #[test]
    fn ratio_flags() {
        assert!(FeatureColumn::SnapPct.is_ratio());
        assert!(!FeatureColumn::Deg.is_ratio());
        assert!(!FeatureColumn::Pop.is_ratio());
        let ratios = FeatureColumn::DERIVED.iter().filter(|c| c.is_ratio()).count();
        assert_eq!(ratios, 15);
    }
}
