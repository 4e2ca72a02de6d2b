//! File parsing and repeat tagging for the maftag workspace.
//!
//! Supported inputs:
//! - **Simple-repeat tables** — UCSC `simpleRepeat` dumps, via [`repeats`]
//! - **Mutation annotation tables** — headered tab-delimited variant
//!   records, via [`maf`]
//!
//! [`maf_ops`] ties the two together: it builds a
//! [`RepeatCatalog`](maftag_omics::RepeatCatalog) from the reference table
//! and appends an `In_repeats` column to the mutation table.

pub mod maf;
pub mod maf_ops;
pub mod repeats;

pub use maf::{parse_maf, write_maf, MafTable};
pub use maf_ops::{tag_table, MafFile, IN_REPEATS_COLUMN};
pub use repeats::{parse_repeats, parse_repeats_str};
