// src/export.rs

use anyhow::{Context, Result};
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::{fs, path::Path};
use tracing::info;

use crate::features::FeatureTable;

/// Write the feature table as a single SNAPPY-compressed Parquet file.
/// The file appears at `path` only once fully written.
pub fn write_parquet(table: &FeatureTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("creating {:?}", parent))?;
    }
    let batch = table.to_record_batch().context("building record batch")?;

    let tmp_path = path.with_extension("parquet.tmp");
    let file = fs::File::create(&tmp_path).with_context(|| format!("creating {:?}", tmp_path))?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))
        .context("creating Arrow writer")?;
    writer.write(&batch).context("writing feature batch")?;
    writer.close().context("closing Arrow writer")?;

    fs::rename(&tmp_path, path)
        .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))?;
    info!(path = %path.display(), rows = batch.num_rows(), "wrote parquet");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::table::tests::{sample_raw, sample_table};
    use crate::features::JoinPolicy;
    use crate::regions::RegionLookup;
    use arrow::array::{Float64Array, Int64Array, StringArray};
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
    use tempfile::tempdir;

    #[test]
    fn writes_readable_parquet() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("out").join("features.parquet");
        write_parquet(&sample_table(), &path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("parquet.tmp").exists());

        let file = fs::File::open(&path).unwrap();
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .unwrap()
            .build()
            .unwrap();
        let batches: Vec<_> = reader.map(Result::unwrap).collect();
        let rows: usize = batches.iter().map(|b| b.num_rows()).sum();
        assert_eq!(rows, 3);

        let batch = &batches[0];
        let states = batch
            .column_by_name("state")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(states.value(2), "Test State");
        let snap = batch
            .column_by_name("snap_pct")
            .unwrap()
            .as_any()
            .downcast_ref::<Float64Array>()
            .unwrap();
        assert_eq!(snap.value(2), 0.1);
    }

    #[test]
    fn large_counts_survive_the_file() {
        let big: i64 = 9_007_199_254_740_993;
        let mut raw = sample_raw();
        raw.rows[1][1] = Some(big.to_string());
        raw.rows[1][7] = Some((big - 1).to_string());
        let table =
            FeatureTable::from_raw(&raw, RegionLookup::embedded().unwrap(), JoinPolicy::Lenient)
                .unwrap();

        let tmp = tempdir().unwrap();
        let path = tmp.path().join("big.parquet");
        write_parquet(&table, &path).unwrap();

        let file = fs::File::open(&path).unwrap();
        let mut reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .unwrap()
            .build()
            .unwrap();
        let batch = reader.next().unwrap().unwrap();
        let int_col = |name: &str| {
            batch
                .column_by_name(name)
                .unwrap()
                .as_any()
                .downcast_ref::<Int64Array>()
                .unwrap()
                .value(1)
        };
        assert_eq!(int_col("pop"), big);
        assert_eq!(int_col("some_college"), big - 1);
        // (2^53) + 300 + 200
        assert_eq!(int_col("deg"), big - 1 + 500);
    }
}
