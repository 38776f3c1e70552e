//! Transform selector: level, difference, or log-difference.

use std::fmt;
use std::str::FromStr;

use crate::config::TransformConfig;
use crate::error::TransformError;
use crate::forward::{diff, ln_diff_with, validate_lag};
use crate::inverse::{diff_inv_with, ln_diff_inv_with};
use crate::table::Table;

/// The representation a numeric series is modelled in.
///
/// Parses case-insensitively from `"lvl"`, `"diff"` and `"diffln"` (also
/// `"level"`, `"ln_diff"` and `"ln-diff"`).
///
/// # Example
///
/// ```
/// use modelselec_transform::Transform;
///
/// let t: Transform = "DiffLn".parse().unwrap();
/// assert_eq!(t, Transform::LnDiff);
/// assert_eq!(t.to_string(), "diffln");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Transform {
    /// Levels as observed; apply and invert are the identity.
    Level,
    /// Lagged difference.
    #[default]
    Diff,
    /// Lagged difference of natural logarithms.
    LnDiff,
}

impl Transform {
    /// Canonical tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Transform::Level => "lvl",
            Transform::Diff => "diff",
            Transform::LnDiff => "diffln",
        }
    }

    /// Applies the forward transform.
    ///
    /// # Errors
    ///
    /// See [`diff`] and [`ln_diff_with`]; `Level` fails only on a zero lag.
    pub fn apply(
        &self,
        table: &Table,
        lag: usize,
        config: &TransformConfig,
    ) -> Result<Table, TransformError> {
        match self {
            Transform::Level => {
                validate_lag(lag)?;
                Ok(table.clone())
            }
            Transform::Diff => diff(table, lag),
            Transform::LnDiff => ln_diff_with(table, lag, config),
        }
    }

    /// Applies the inverse transform, rebuilding levels from `seed`.
    ///
    /// `Level` returns `table` unchanged and ignores `seed`.
    ///
    /// # Errors
    ///
    /// See [`diff_inv_with`] and [`ln_diff_inv_with`]; `Level` fails only on a
    /// zero lag.
    pub fn invert(
        &self,
        table: &Table,
        lag: usize,
        seed: &Table,
        config: &TransformConfig,
    ) -> Result<Table, TransformError> {
        match self {
            Transform::Level => {
                validate_lag(lag)?;
                Ok(table.clone())
            }
            Transform::Diff => diff_inv_with(table, lag, seed, config),
            Transform::LnDiff => ln_diff_inv_with(table, lag, seed, config),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transform {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lvl" | "level" => Ok(Transform::Level),
            "diff" => Ok(Transform::Diff),
            "diffln" | "ln_diff" | "ln-diff" => Ok(Transform::LnDiff),
            _ => Err(TransformError::UnknownTransform {
                name: s.to_string(),
            }),
        }
    }
}
