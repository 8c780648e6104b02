//! Block aggregation for the fracvar estimator.
//!
//! This crate partitions a bar series into fixed-size blocks:
//!
//! - [`BlockMatrix`] - Zero-copy column-major view over a flat series
//! - [`Block`] - Extremes of one block of consecutive bars
//! - [`BlockAggregator`] - Per-scale block and range-sum computation

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fracvar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod block;

pub use aggregator::BlockAggregator;
pub use block::{Block, BlockMatrix};
