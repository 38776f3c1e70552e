//! # modelselec-transform
//!
//! Invertible lag transforms over tables of named numeric series.
//!
//! `diff` and `ln_diff` turn levels into lagged (log-)differences;
//! `diff_inv` and `ln_diff_inv` rebuild the levels exactly from the
//! differences plus at least `lag` seed observations.
//!
//! ```
//! use modelselec_transform::{Table, diff, diff_inv};
//!
//! let levels = Table::from_columns([
//!     ("A", vec![1.0, 2.0, 3.0, 4.0]),
//!     ("B", vec![4.0, 6.0, 8.0, 10.0]),
//! ])
//! .unwrap();
//!
//! let diffed = diff(&levels, 3).unwrap();
//! assert_eq!(diffed.column("B").unwrap(), [None, None, None, Some(6.0)]);
//!
//! let rebuilt = diff_inv(&diffed, 3, &levels.head(3)).unwrap();
//! assert_eq!(rebuilt, levels);
//! ```
//!
//! Untyped input goes through [`RawTable::coerce`] with a [`TableSchema`]
//! first, which is where non-numeric cells are rejected.

mod config;
mod error;
mod forward;
mod inverse;
mod kind;
mod raw;
mod table;

pub use config::{EmptyReconstruction, LogDomain, TransformConfig};
pub use error::TransformError;
pub use forward::{diff, ln_diff, ln_diff_with};
pub use inverse::{diff_inv, diff_inv_with, ln_diff_inv, ln_diff_inv_with};
pub use kind::Transform;
pub use raw::{RawCell, RawColumn, RawTable, TableSchema};
pub use table::Table;
