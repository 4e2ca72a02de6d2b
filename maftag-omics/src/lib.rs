//! Domain structures for simple-repeat tagging.
//!
//! This crate provides the in-memory side of the maftag workspace:
//!
//! - **Interval tree** — [`IntervalTree`] with O(log n + k) overlap queries
//! - **Repeat regions** — [`RepeatRegion`] rows and the per-chromosome
//!   [`RepeatCatalog`] index
//!
//! # Quick start
//!
//! ```
//! use maftag_omics::{RepeatCatalog, RepeatRegion};
//!
//! let catalog = RepeatCatalog::from_regions(vec![RepeatRegion {
//!     chrom: "chr1".into(),
//!     start: 50,
//!     end: 60,
//!     period: 2,
//! }]);
//!
//! // Reference ends are inclusive, so position 60 is still in the repeat.
//! assert!(catalog.overlaps("chr1", 60, 61));
//! assert!(!catalog.overlaps("chr1", 61, 62));
//! ```

pub mod interval_tree;
pub mod repeats;

pub use interval_tree::IntervalTree;
pub use repeats::{
    is_candidate_chromosome, RepeatCatalog, RepeatRegion, CANDIDATE_CHROMOSOMES, MAX_PERIOD_SIZE,
};
