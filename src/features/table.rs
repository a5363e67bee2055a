// src/features/table.rs

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::columns::{FeatureColumn, RAW_COLUMNS};
use super::error::FeatureError;
use crate::fetch::{RawResponse, FIELD_CODES};
use crate::regions::{Region, RegionLookup};

/// What to do with a row whose state is not in the region lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinPolicy {
    /// Keep the row with empty metadata and log it.
    #[default]
    Lenient,
    /// Fail the build.
    Strict,
}

/// Integer columns as cast from the API strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Counts {
    pub pop: i64,
    pub snap: i64,
    pub non_snap: i64,
    pub below_fpl: i64,
    pub less_than_hs: i64,
    pub hs: i64,
    pub some_college: i64,
    pub college_deg: i64,
    pub grad_deg: i64,
    pub rent: i64,
    pub mortgage: i64,
    pub black: i64,
    pub hispanic: i64,
    pub native: i64,
    pub unemployed: i64,
    pub not_in_labor_force: i64,
}

/// Ratios to population, each rounded to three decimals, plus the `deg` count.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Derived {
    pub snap_pct: f64,
    pub fpl_pct: f64,
    /// some_college + college_deg + grad_deg
    pub deg: i64,
    pub deg_pct: f64,
    pub less_than_hs_pct: f64,
    pub hs_pct: f64,
    pub some_coll_pct: f64,
    pub college_deg_pct: f64,
    pub grad_deg_pct: f64,
    pub rent_pct: f64,
    pub mortgage_pct: f64,
    pub black_pct: f64,
    pub hispanic_pct: f64,
    pub native_pct: f64,
    pub unemp_pct: f64,
    pub not_in_lf_pct: f64,
}

impl Derived {
    pub fn from_counts(region: &str, c: &Counts) -> Result<Self, FeatureError> {
        if c.pop == 0 {
            return Err(FeatureError::ZeroPopulation {
                region: region.to_string(),
            });
        }
        let pct = |n: i64| round3(n as f64 / c.pop as f64);
        let deg = c
            .some_college
            .checked_add(c.college_deg)
            .and_then(|d| d.checked_add(c.grad_deg))
            .ok_or_else(|| FeatureError::Overflow {
                column: "deg",
                region: region.to_string(),
            })?;
        Ok(Self {
            snap_pct: pct(c.snap),
            fpl_pct: pct(c.below_fpl),
            deg,
            deg_pct: pct(deg),
            less_than_hs_pct: pct(c.less_than_hs),
            hs_pct: pct(c.hs),
            some_coll_pct: pct(c.some_college),
            college_deg_pct: pct(c.college_deg),
            grad_deg_pct: pct(c.grad_deg),
            rent_pct: pct(c.rent),
            mortgage_pct: pct(c.mortgage),
            black_pct: pct(c.black),
            hispanic_pct: pct(c.hispanic),
            native_pct: pct(c.native),
            unemp_pct: pct(c.unemployed),
            not_in_lf_pct: pct(c.not_in_labor_force),
        })
    }
}

/// Round to three decimals, ties to even on the scaled value.
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round_ties_even() / 1000.0
}

/// One state after cleaning, derivation and the metadata join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub state: String,
    pub state_code: Option<String>,
    pub region: Option<Region>,
    /// FIPS code from the API's geography column.
    pub id: i64,
    #[serde(flatten)]
    pub counts: Counts,
    #[serde(flatten)]
    pub derived: Derived,
}

impl RegionRecord {
    /// Numeric value of `col` as f64, for charting.
    pub fn value(&self, col: FeatureColumn) -> f64 {
        use FeatureColumn::*;
        let c = &self.counts;
        let d = &self.derived;
        match col {
            Pop => c.pop as f64,
            Snap => c.snap as f64,
            NonSnap => c.non_snap as f64,
            BelowFpl => c.below_fpl as f64,
            LessThanHs => c.less_than_hs as f64,
            Hs => c.hs as f64,
            SomeCollege => c.some_college as f64,
            CollegeDeg => c.college_deg as f64,
            GradDeg => c.grad_deg as f64,
            Rent => c.rent as f64,
            Mortgage => c.mortgage as f64,
            Black => c.black as f64,
            Hispanic => c.hispanic as f64,
            Native => c.native as f64,
            Unemployed => c.unemployed as f64,
            NotInLaborForce => c.not_in_labor_force as f64,
            Id => self.id as f64,
            SnapPct => d.snap_pct,
            FplPct => d.fpl_pct,
            Deg => d.deg as f64,
            DegPct => d.deg_pct,
            LessThanHsPct => d.less_than_hs_pct,
            HsPct => d.hs_pct,
            SomeCollPct => d.some_coll_pct,
            CollegeDegPct => d.college_deg_pct,
            GradDegPct => d.grad_deg_pct,
            RentPct => d.rent_pct,
            MortgagePct => d.mortgage_pct,
            BlackPct => d.black_pct,
            HispanicPct => d.hispanic_pct,
            NativePct => d.native_pct,
            UnempPct => d.unemp_pct,
            NotInLfPct => d.not_in_lf_pct,
        }
    }

    /// Exact integer value of a count column (raw counts, `id`, `deg`); `None` for ratios.
    pub fn count(&self, col: FeatureColumn) -> Option<i64> {
        use FeatureColumn::*;
        let c = &self.counts;
        Some(match col {
            Pop => c.pop,
            Snap => c.snap,
            NonSnap => c.non_snap,
            BelowFpl => c.below_fpl,
            LessThanHs => c.less_than_hs,
            Hs => c.hs,
            SomeCollege => c.some_college,
            CollegeDeg => c.college_deg,
            GradDeg => c.grad_deg,
            Rent => c.rent,
            Mortgage => c.mortgage,
            Black => c.black,
            Hispanic => c.hispanic,
            Native => c.native,
            Unemployed => c.unemployed,
            NotInLaborForce => c.not_in_labor_force,
            Id => self.id,
            Deg => self.derived.deg,
            _ => return None,
        })
    }

    pub fn has_metadata(&self) -> bool {
        self.state_code.is_some() && self.region.is_some()
    }
}

/// The derived feature table. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureTable {
    records: Vec<RegionRecord>,
    dropped: Vec<String>,
}

impl FeatureTable {
    /// Label, clean, cast, derive and join a raw API reply.
    #[instrument(level = "info", skip_all, fields(rows = raw.rows.len()))]
    pub fn from_raw(
        raw: &RawResponse,
        lookup: &RegionLookup,
        policy: JoinPolicy,
    ) -> Result<Self, FeatureError> {
        check_header(&raw.header);

        let mut records = Vec::with_capacity(raw.rows.len());
        let mut dropped = Vec::new();

        for (idx, row) in raw.rows.iter().enumerate() {
            // 1) label
            if row.len() != RAW_COLUMNS.len() {
                return Err(FeatureError::SchemaMismatch {
                    row: idx,
                    expected: RAW_COLUMNS.len(),
                    found: row.len(),
                });
            }

            // 2) drop rows with any missing cell
            let cells: Option<Vec<&str>> = row
                .iter()
                .map(|c| c.as_deref().filter(|s| !s.trim().is_empty()))
                .collect();
            let Some(cells) = cells else {
                let name = row[0]
                    .as_deref()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("<row {}>", idx));
                info!(region = %name, "dropping row with missing values");
                dropped.push(name);
                continue;
            };

            // 3) cast, 4) derive
            let state = cells[0].to_string();
            let ints = cast_counts(&state, &cells[1..])?;
            let counts = Counts {
                pop: ints[0],
                snap: ints[1],
                non_snap: ints[2],
                below_fpl: ints[3],
                less_than_hs: ints[4],
                hs: ints[5],
                some_college: ints[6],
                college_deg: ints[7],
                grad_deg: ints[8],
                rent: ints[9],
                mortgage: ints[10],
                black: ints[11],
                hispanic: ints[12],
                native: ints[13],
                unemployed: ints[14],
                not_in_labor_force: ints[15],
            };
            let id = ints[16];
            let derived = Derived::from_counts(&state, &counts)?;

            // 5) left-join metadata
            let (state_code, region) = match lookup.get(&state) {
                Some(meta) => (Some(meta.state_code.clone()), Some(meta.region)),
                None => match policy {
                    JoinPolicy::Strict => {
                        return Err(FeatureError::UnmatchedRegion { region: state })
                    }
                    JoinPolicy::Lenient => {
                        warn!(region = %state, "no region metadata; keeping row without code or group");
                        (None, None)
                    }
                },
            };

            records.push(RegionRecord {
                state,
                state_code,
                region,
                id,
                counts,
                derived,
            });
        }

        info!(
            kept = records.len(),
            dropped = dropped.len(),
            "built feature table"
        );
        Ok(Self { records, dropped })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rows(&self) -> &[RegionRecord] {
        &self.records
    }

    pub fn get(&self, state: &str) -> Option<&RegionRecord> {
        self.records.iter().find(|r| r.state == state)
    }

    pub fn head(&self, n: usize) -> &[RegionRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn column(&self, col: FeatureColumn) -> Vec<f64> {
        self.records.iter().map(|r| r.value(col)).collect()
    }

    /// Rows the metadata join left without a code or group.
    pub fn unmatched(&self) -> Vec<&RegionRecord> {
        self.records.iter().filter(|r| !r.has_metadata()).collect()
    }

    /// Names of rows dropped for missing values.
    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }
}

fn check_header(header: &[String]) {
    let matches = header.len() == RAW_COLUMNS.len()
        && header.iter().zip(FIELD_CODES).all(|(h, code)| h.as_str() == *code);
    if matches {
        debug!("header matches requested fields");
    } else {
        warn!(?header, "response header differs from requested fields; columns are labelled by position");
    }
}

fn cast_counts(state: &str, cells: &[&str]) -> Result<Vec<i64>, FeatureError> {
    cells
        .iter()
        .zip(&RAW_COLUMNS[1..])
        .map(|(cell, column)| {
            let cleaned = clean_str(cell);
            cleaned.parse::<i64>().map_err(|_| FeatureError::Cast {
                column: *column,
                region: state.to_string(),
                value: cell.to_string(),
            })
        })
        .collect()
}

/// Trim whitespace and strip outer quotes if present.
fn clean_str(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    }
}
