//! Repeat tagging for mutation tables.
//!
//! [`tag_table`] appends an `In_repeats` column flagging every row whose
//! span overlaps an indexed simple repeat on the same chromosome;
//! [`MafFile`] is the file-level entry point that loads both inputs and
//! runs the tagging in one call.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use maftag_core::{MaftagError, Result};
use maftag_omics::RepeatCatalog;

use crate::maf::{parse_maf, write_maf, MafTable};
use crate::repeats::parse_repeats;

/// Name of the column appended by tagging.
pub const IN_REPEATS_COLUMN: &str = "In_repeats";

const CHROMOSOME_COLUMN: &str = "Chromosome";
const START_COLUMN: &str = "Start_Position";
const END_COLUMN: &str = "End_Position";

/// Tag every row of `table` with an `In_repeats` flag.
///
/// Rows are grouped by their `Chromosome` value and the groups are
/// concatenated in ascending chromosome order, keeping the original
/// relative order inside each group. A row is tagged `1` when its
/// half-open span `[Start_Position, End_Position + 1)` intersects at
/// least one indexed repeat and `0` otherwise; both position columns are
/// inclusive, hence the `+ 1`. Chromosomes with no indexed repeats tag
/// every row `0`.
///
/// # Errors
///
/// Returns `InvalidInput` if a required column is missing and `Parse` if
/// a position value is not an unsigned integer.
pub fn tag_table(table: &MafTable, catalog: &RepeatCatalog) -> Result<MafTable> {
    let chrom_idx = require_column(table, CHROMOSOME_COLUMN)?;
    let start_idx = require_column(table, START_COLUMN)?;
    let end_idx = require_column(table, END_COLUMN)?;

    // Group row indices by chromosome, preserving in-group input order
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (row_idx, row) in table.rows().iter().enumerate() {
        groups
            .entry(row[chrom_idx].as_str())
            .or_default()
            .push(row_idx);
    }

    let mut columns = table.columns().to_vec();
    columns.push(IN_REPEATS_COLUMN.to_string());

    let mut rows = Vec::with_capacity(table.n_rows());
    for (chrom, row_indices) in groups {
        for row_idx in row_indices {
            let row = &table.rows()[row_idx];
            let start = parse_position(&row[start_idx], START_COLUMN, row_idx)?;
            let end = parse_position(&row[end_idx], END_COLUMN, row_idx)?;

            let hit = catalog.overlaps(chrom, start, end + 1);
            let mut tagged = row.clone();
            tagged.push(if hit { "1" } else { "0" }.to_string());
            rows.push(tagged);
        }
    }

    MafTable::new(columns, rows)
}

fn require_column(table: &MafTable, name: &str) -> Result<usize> {
    table
        .column_index(name)
        .ok_or_else(|| MaftagError::InvalidInput(format!("missing required column '{}'", name)))
}

fn parse_position(value: &str, column: &str, row_idx: usize) -> Result<u64> {
    value.trim().parse().map_err(|_| {
        MaftagError::Parse(format!(
            "row {}: invalid {} '{}'",
            row_idx + 1,
            column,
            value
        ))
    })
}

/// A mutation-annotation file on disk.
///
/// Construct with the table's path, then call [`MafFile::tag_repeats`]
/// with a simple-repeat reference table:
///
/// ```no_run
/// use maftag_io::MafFile;
///
/// # fn main() -> maftag_core::Result<()> {
/// let maf = MafFile::new("variants.maf");
///
/// // In-memory result
/// let tagged = maf.tag_repeats("simpleRepeat.txt", None)?;
///
/// // Or written to disk
/// use std::path::Path;
/// maf.tag_repeats("simpleRepeat.txt", Some(Path::new("tagged.maf")))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MafFile {
    path: PathBuf,
}

impl MafFile {
    /// Create a handle for the mutation table at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying table.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Tag the table against the simple-repeat reference at `repeats`.
    ///
    /// Without an output path the tagged table is returned. With one, the
    /// table is written there as tab-delimited text (surrounding
    /// whitespace in the path is trimmed first) and `None` is returned.
    pub fn tag_repeats(
        &self,
        repeats: impl AsRef<Path>,
        output: Option<&Path>,
    ) -> Result<Option<MafTable>> {
        let regions = parse_repeats(repeats)?;
        let catalog = RepeatCatalog::from_regions(regions);

        let table = parse_maf(&self.path)?;
        let tagged = tag_table(&table, &catalog)?;

        match output {
            None => Ok(Some(tagged)),
            Some(out) => {
                write_maf(&tagged, trim_path(out))?;
                Ok(None)
            }
        }
    }
}

/// Strip surrounding whitespace from a path's textual form.
fn trim_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(s.trim()),
        None => path.to_path_buf(),
    }
}
