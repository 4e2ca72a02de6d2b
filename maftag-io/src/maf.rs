//! Mutation annotation table parsing and writing.
//!
//! Mutation tables are tab-delimited with a header row naming each column;
//! lines starting with `#` carry format metadata and are skipped entirely.
//! The column set is open-ended; tagging only requires `Chromosome`,
//! `Start_Position` and `End_Position` to be present.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use maftag_core::{MaftagError, Result, Summarizable};

/// Rows are accumulated in batches of this size while loading.
const LOAD_BATCH_ROWS: usize = 10_000;

/// An in-memory tab-delimited table: a header plus string-valued rows.
///
/// Cell values are kept as strings; numeric interpretation happens at the
/// point of use. Every row has exactly one value per column.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MafTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl MafTable {
    /// Create a table from a header and rows.
    ///
    /// Returns an error if any row's width differs from the header's.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(MaftagError::InvalidInput(format!(
                    "row {}: expected {} values, found {}",
                    i + 1,
                    columns.len(),
                    row.len()
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    /// Column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows, in order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Index of the first column named `name`, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

impl Summarizable for MafTable {
    fn summary(&self) -> String {
        format!(
            "MafTable: {} rows \u{00d7} {} columns",
            self.n_rows(),
            self.n_columns()
        )
    }
}

/// Parse a mutation annotation table.
///
/// The first non-`#` line is the header. Rows are read in 10,000-row
/// batches and concatenated into one table; the batching only bounds
/// transient allocation during the load, the result is fully materialized.
pub fn parse_maf(path: impl AsRef<Path>) -> Result<MafTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        MaftagError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .comment(Some(b'#'))
        .has_headers(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| MaftagError::Parse(format!("{}: {}", path.display(), e)))?;
    let columns: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut batch: Vec<Vec<String>> = Vec::with_capacity(LOAD_BATCH_ROWS);
    for result in reader.records() {
        let record = result.map_err(|e| MaftagError::Parse(format!("{}: {}", path.display(), e)))?;
        batch.push(record.iter().map(|f| f.to_string()).collect());
        if batch.len() == LOAD_BATCH_ROWS {
            rows.append(&mut batch);
        }
    }
    rows.append(&mut batch);

    MafTable::new(columns, rows)
}

/// Write a table as tab-delimited text with a header row.
///
/// No row-index column is emitted.
pub fn write_maf(table: &MafTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        MaftagError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    let mut writer = WriterBuilder::new().delimiter(b'\t').from_writer(file);

    writer
        .write_record(table.columns())
        .map_err(|e| MaftagError::Parse(format!("{}: {}", path.display(), e)))?;
    for row in table.rows() {
        writer
            .write_record(row)
            .map_err(|e| MaftagError::Parse(format!("{}: {}", path.display(), e)))?;
    }
    writer
        .flush()
        .map_err(|e| MaftagError::Io(std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e))))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_maf_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".maf").unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_maf_basic() {
        let file = write_maf_file(
            "Hugo_Symbol\tChromosome\tStart_Position\tEnd_Position\n\
             TP53\tchr17\t7577120\t7577120\n\
             KRAS\tchr12\t25398284\t25398285\n",
        );
        let table = parse_maf(file.path()).unwrap();

        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_columns(), 4);
        assert_eq!(
            table.columns(),
            &["Hugo_Symbol", "Chromosome", "Start_Position", "End_Position"]
        );
        assert_eq!(table.rows()[0][0], "TP53");
        assert_eq!(table.rows()[1][3], "25398285");
    }

    #[test]
    fn test_parse_maf_skips_metadata_lines() {
        let file = write_maf_file(
            "#version 2.4\n\
             #annotation.spec https://example.org\n\
             Chromosome\tStart_Position\tEnd_Position\n\
             chr1\t100\t101\n",
        );
        let table = parse_maf(file.path()).unwrap();
        assert_eq!(table.n_rows(), 1);
        assert_eq!(table.columns()[0], "Chromosome");
    }

    #[test]
    fn test_parse_maf_empty_data() {
        let file = write_maf_file("Chromosome\tStart_Position\tEnd_Position\n");
        let table = parse_maf(file.path()).unwrap();
        assert_eq!(table.n_rows(), 0);
        assert_eq!(table.n_columns(), 3);
    }

    #[test]
    fn test_parse_maf_ragged_row() {
        let file = write_maf_file(
            "Chromosome\tStart_Position\tEnd_Position\n\
             chr1\t100\n",
        );
        let result = parse_maf(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_maf_file_not_found() {
        let result = parse_maf("/nonexistent/table.maf");
        assert!(result.is_err());
    }

    #[test]
    fn test_table_new_validates_width() {
        let result = MafTable::new(
            vec!["a".into(), "b".into()],
            vec![vec!["1".into(), "2".into(), "3".into()]],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_column_index() {
        let table = MafTable::new(
            vec!["Chromosome".into(), "Start_Position".into()],
            vec![],
        )
        .unwrap();
        assert_eq!(table.column_index("Start_Position"), Some(1));
        assert_eq!(table.column_index("End_Position"), None);
    }

    #[test]
    fn test_write_then_parse_round_trip() {
        let table = MafTable::new(
            vec!["Chromosome".into(), "Start_Position".into(), "End_Position".into()],
            vec![
                vec!["chr1".into(), "100".into(), "101".into()],
                vec!["chr2".into(), "200".into(), "210".into()],
            ],
        )
        .unwrap();

        let out = NamedTempFile::with_suffix(".maf").unwrap();
        write_maf(&table, out.path()).unwrap();
        let reloaded = parse_maf(out.path()).unwrap();
        assert_eq!(reloaded, table);
    }

    #[test]
    fn test_summary() {
        let table = MafTable::new(
            vec!["Chromosome".into()],
            vec![vec!["chr1".into()], vec!["chr2".into()]],
        )
        .unwrap();
        assert_eq!(table.summary(), "MafTable: 2 rows \u{00d7} 1 columns");
    }
}
