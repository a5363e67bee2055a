// src/views/options.rs

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::warn;

use super::SelectionError;
use crate::features::FeatureColumn;

/// Options of the choropleth and scatter selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    PovertyRate,
    UnemploymentRate,
    LaborForceParticipation,
    EducationAboveHighSchool,
    PercentAfricanAmerican,
    PercentHispanic,
    PercentNativeAmerican,
    RentingRate,
    MortgageRate,
}

impl Indicator {
    /// Dropdown order. The last entry is the fallback for unknown labels.
    pub const ALL: [Indicator; 9] = [
        Indicator::PovertyRate,
        Indicator::UnemploymentRate,
        Indicator::LaborForceParticipation,
        Indicator::EducationAboveHighSchool,
        Indicator::PercentAfricanAmerican,
        Indicator::PercentHispanic,
        Indicator::PercentNativeAmerican,
        Indicator::RentingRate,
        Indicator::MortgageRate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Indicator::PovertyRate => "Poverty Rate",
            Indicator::UnemploymentRate => "Unemployment Rate",
            Indicator::LaborForceParticipation => "Labor Force Participation Rate",
            Indicator::EducationAboveHighSchool => "Education Greater than High School",
            Indicator::PercentAfricanAmerican => "Percent African-American",
            Indicator::PercentHispanic => "Percent Hispanic",
            Indicator::PercentNativeAmerican => "Percent Native American",
            Indicator::RentingRate => "Renting Rate",
            Indicator::MortgageRate => "Mortgage Rate",
        }
    }

    /// The column this option colours (choropleth) or puts on the x axis (scatter).
    ///
    /// "Labor Force Participation Rate" plots the share *not* in the labor force.
    pub fn column(&self) -> FeatureColumn {
        match self {
            Indicator::PovertyRate => FeatureColumn::FplPct,
            Indicator::UnemploymentRate => FeatureColumn::UnempPct,
            Indicator::LaborForceParticipation => FeatureColumn::NotInLfPct,
            Indicator::EducationAboveHighSchool => FeatureColumn::DegPct,
            Indicator::PercentAfricanAmerican => FeatureColumn::BlackPct,
            Indicator::PercentHispanic => FeatureColumn::HispanicPct,
            Indicator::PercentNativeAmerican => FeatureColumn::NativePct,
            Indicator::RentingRate => FeatureColumn::RentPct,
            Indicator::MortgageRate => FeatureColumn::MortgagePct,
        }
    }

    /// Exact label match, falling back to the last option.
    pub fn resolve(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            let fallback = Self::ALL[Self::ALL.len() - 1];
            warn!(label, fallback = fallback.label(), "unknown indicator; using fallback");
            fallback
        })
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Indicator {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.label() == s)
            .ok_or_else(|| SelectionError::UnknownOption(s.to_string()))
    }
}

/// Options of the stacked-bar selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Demographic {
    Race,
    EducationHighSchoolOrLess,
    EducationAboveHighSchool,
    Housing,
}

impl Demographic {
    /// Dropdown order. The last entry is the fallback for unknown labels.
    pub const ALL: [Demographic; 4] = [
        Demographic::Race,
        Demographic::EducationHighSchoolOrLess,
        Demographic::EducationAboveHighSchool,
        Demographic::Housing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Demographic::Race => "Race",
            Demographic::EducationHighSchoolOrLess => "Education level: High School or Less",
            Demographic::EducationAboveHighSchool => "Education Level: Greater than High School",
            Demographic::Housing => "Housing",
        }
    }

    /// Stacked series, bottom to top.
    pub fn columns(&self) -> &'static [FeatureColumn] {
        match self {
            Demographic::Race => &[
                FeatureColumn::BlackPct,
                FeatureColumn::HispanicPct,
                FeatureColumn::NativePct,
            ],
            Demographic::EducationHighSchoolOrLess => {
                &[FeatureColumn::LessThanHsPct, FeatureColumn::HsPct]
            }
            Demographic::EducationAboveHighSchool => &[
                FeatureColumn::SomeCollPct,
                FeatureColumn::CollegeDegPct,
                FeatureColumn::GradDegPct,
            ],
            Demographic::Housing => &[FeatureColumn::RentPct, FeatureColumn::MortgagePct],
        }
    }

    pub fn resolve(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            let fallback = Self::ALL[Self::ALL.len() - 1];
            warn!(label, fallback = fallback.label(), "unknown demographic; using fallback");
            fallback
        })
    }
}

impl fmt::Display for Demographic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Demographic {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.label() == s)
            .ok_or_else(|| SelectionError::UnknownOption(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_round_trip() {
        for o in Indicator::ALL {
            assert_eq!(o.label().parse::<Indicator>().unwrap(), o);
        }
        for o in Demographic::ALL {
            assert_eq!(o.label().parse::<Demographic>().unwrap(), o);
        }
    }

    #[test]
    fn columns_are_distinct() {
        let cols: HashSet<_> = Indicator::ALL.iter().map(|o| o.column()).collect();
        assert_eq!(cols.len(), Indicator::ALL.len());
        assert!(cols.iter().all(|c| c.is_ratio()));
    }

    #[test]
    fn unknown_label_falls_through_to_last() {
        assert_eq!(Indicator::resolve("Median Income"), Indicator::MortgageRate);
        assert_eq!(Demographic::resolve("Age"), Demographic::Housing);
        assert!("Median Income".parse::<Indicator>().is_err());
    }

    #[test]
    fn matching_is_exact_not_substring() {
        // "Rate" is a substring of several labels; it must not pick the first of them.
        assert_eq!(Indicator::resolve("Rate"), Indicator::MortgageRate);
        assert_eq!(
            Indicator::resolve("Unemployment Rate"),
            Indicator::UnemploymentRate
        );
        assert_eq!(
            Demographic::resolve("Education Level: Greater than High School"),
            Demographic::EducationAboveHighSchool
        );
    }

    #[test]
    fn demographic_columns() {
        assert_eq!(
            Demographic::Race.columns(),
            &[
                FeatureColumn::BlackPct,
                FeatureColumn::HispanicPct,
                FeatureColumn::NativePct
            ]
        );
        assert_eq!(Demographic::Housing.columns().len(), 2);
    }
}
