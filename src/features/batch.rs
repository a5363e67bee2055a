// src/features/batch.rs

use anyhow::{anyhow, Result};
use arrow::{
    array::{ArrayRef, Float64Array, Int64Array, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;

use super::columns::FeatureColumn;
use super::table::FeatureTable;

/// Arrow type for a feature column: Int64 for counts and `deg`, Float64 for ratios.
pub fn column_type(col: FeatureColumn) -> DataType {
    if col.is_ratio() {
        DataType::Float64
    } else {
        DataType::Int64
    }
}

/// `state`, `state_code`, `region`, then raw counts, then derived columns.
pub fn feature_schema() -> Arc<Schema> {
    let mut fields = vec![
        Field::new("state", DataType::Utf8, false),
        Field::new("state_code", DataType::Utf8, true),
        Field::new("region", DataType::Utf8, true),
    ];
    fields.extend(
        FeatureColumn::COUNTS
            .iter()
            .chain(FeatureColumn::DERIVED.iter())
            .map(|c| Field::new(c.name(), column_type(*c), false)),
    );
    Arc::new(Schema::new(fields))
}

impl FeatureTable {
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let rows = self.rows();
        let mut arrays: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from(
                rows.iter().map(|r| r.state.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                rows.iter()
                    .map(|r| r.state_code.as_deref())
                    .collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                rows.iter()
                    .map(|r| r.region.map(|g| g.as_str()))
                    .collect::<Vec<_>>(),
            )),
        ];

        for col in FeatureColumn::COUNTS
            .iter()
            .chain(FeatureColumn::DERIVED.iter())
        {
            let array: ArrayRef = match column_type(*col) {
                DataType::Float64 => Arc::new(Float64Array::from(self.column(*col))),
                _ => {
                    let values: Option<Vec<i64>> = rows.iter().map(|r| r.count(*col)).collect();
                    let values =
                        values.ok_or_else(|| anyhow!("`{}` is not an integer column", col))?;
                    Arc::new(Int64Array::from(values))
                }
            };
            arrays.push(array);
        }

        RecordBatch::try_new(feature_schema(), arrays).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::table::tests::{sample_raw, sample_table};
    use crate::features::JoinPolicy;
    use crate::regions::RegionLookup;
    use arrow::array::Array;

    #[test]
    fn batch_matches_schema() {
        let table = sample_table();
        let batch = table.to_record_batch().unwrap();
        assert_eq!(batch.num_rows(), 3);
        assert_eq!(batch.num_columns(), 3 + 17 + 16);

        let schema = batch.schema();
        assert_eq!(schema.field_with_name("snap_pct").unwrap().data_type(), &DataType::Float64);
        assert_eq!(schema.field_with_name("deg").unwrap().data_type(), &DataType::Int64);
        assert!(schema.field_with_name("state_code").unwrap().is_nullable());
    }

    #[test]
    fn unmatched_metadata_is_null() {
        let batch = sample_table().to_record_batch().unwrap();
        let codes = batch
            .column_by_name("state_code")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(codes.value(0), "AL");
        assert!(codes.is_null(2));

        let pops = batch
            .column_by_name("pop")
            .unwrap()
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(pops.value(1), 2000);
    }

    #[test]
    fn counts_above_f64_precision_are_exact() {
        // 2^53 + 1 has no exact f64 representation
        let big: i64 = 9_007_199_254_740_993;
        let mut raw = sample_raw();
        raw.rows[0][1] = Some(big.to_string());
        let table =
            FeatureTable::from_raw(&raw, RegionLookup::embedded().unwrap(), JoinPolicy::Lenient)
                .unwrap();
        let batch = table.to_record_batch().unwrap();
        let pops = batch
            .column_by_name("pop")
            .unwrap()
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(pops.value(0), big);
        assert_eq!(pops.null_count(), 0);
    }
}
