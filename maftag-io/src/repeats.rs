//! Simple-repeat reference table parser.
//!
//! Parses UCSC `simpleRepeat` track dumps: tab-delimited, headerless, 17
//! positional columns (bin, chrom, chromStart, chromEnd, name_tag,
//! period_size, copyNUM, consensusSize, perMatch, perIndel, score, A, C,
//! G, T, entropy, unit_sequence). Only chrom, chromStart, chromEnd and
//! period_size are consumed; chromStart and chromEnd are kept as they
//! appear in the file (both inclusive).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use maftag_core::{MaftagError, Result};
use maftag_omics::RepeatRegion;

/// Column count of a simple-repeat table row.
const REPEAT_COLUMNS: usize = 17;

/// Parse a simple-repeat table and return all records.
///
/// Empty lines and lines starting with `#` are skipped.
pub fn parse_repeats(path: impl AsRef<Path>) -> Result<Vec<RepeatRegion>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        MaftagError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    let reader = BufReader::new(file);

    // Read all data lines (skip comments)
    let mut data_lines: Vec<(usize, String)> = Vec::new();
    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| {
            MaftagError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: line {}: {}", path.display(), line_num + 1, e),
            ))
        })?;
        let trimmed = line.trim().to_string();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        data_lines.push((line_num + 1, trimmed));
    }

    // Parse data lines (optionally in parallel)
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        data_lines
            .par_iter()
            .map(|(line_num, line)| parse_repeat_line(line, *line_num, path))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    data_lines
        .iter()
        .map(|(line_num, line)| parse_repeat_line(line, *line_num, path))
        .collect()
}

/// Parse simple-repeat text from a string.
///
/// Behaves like [`parse_repeats`] but reads from an in-memory string
/// instead of a file.
pub fn parse_repeats_str(text: &str) -> Result<Vec<RepeatRegion>> {
    let dummy = Path::new("<string>");
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let t = line.trim();
            !t.is_empty() && !t.starts_with('#')
        })
        .map(|(i, line)| parse_repeat_line(line.trim(), i + 1, dummy))
        .collect()
}

/// Parse a single simple-repeat line into a RepeatRegion.
fn parse_repeat_line(line: &str, line_num: usize, path: &Path) -> Result<RepeatRegion> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < REPEAT_COLUMNS {
        return Err(MaftagError::Parse(format!(
            "{}: line {}: expected {} tab-separated columns, found {}",
            path.display(),
            line_num,
            REPEAT_COLUMNS,
            fields.len()
        )));
    }

    let chrom = fields[1].to_string();

    let start: u64 = fields[2].parse().map_err(|_| {
        MaftagError::Parse(format!(
            "{}: line {}: invalid chromStart '{}'",
            path.display(),
            line_num,
            fields[2]
        ))
    })?;

    let end: u64 = fields[3].parse().map_err(|_| {
        MaftagError::Parse(format!(
            "{}: line {}: invalid chromEnd '{}'",
            path.display(),
            line_num,
            fields[3]
        ))
    })?;

    let period: u32 = fields[5].parse().map_err(|_| {
        MaftagError::Parse(format!(
            "{}: line {}: invalid period_size '{}'",
            path.display(),
            line_num,
            fields[5]
        ))
    })?;

    Ok(RepeatRegion {
        chrom,
        start,
        end,
        period,
    })
}
