//! Transform configuration.

/// How the log-difference transforms treat values that are not strictly
/// positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogDomain {
    /// The logarithm of a non-positive value is undefined and flows through
    /// as an undefined cell.
    #[default]
    Propagate,
    /// Fail on the first non-positive value with
    /// [`TransformError::LogDomain`](crate::TransformError::LogDomain).
    Strict,
}

/// What an inverse transform returns when no fully defined differenced rows
/// are left to reconstruct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyReconstruction {
    /// Fail with
    /// [`TransformError::EmptyReconstruction`](crate::TransformError::EmptyReconstruction).
    #[default]
    Error,
    /// Return the seed unchanged.
    ReturnSeed,
}

/// Configuration shared by the forward and inverse transforms.
///
/// # Example
///
/// ```
/// use modelselec_transform::{EmptyReconstruction, LogDomain, TransformConfig};
///
/// let config = TransformConfig::default()
///     .with_log_domain(LogDomain::Strict)
///     .with_empty_reconstruction(EmptyReconstruction::ReturnSeed);
///
/// assert_eq!(config.log_domain(), LogDomain::Strict);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransformConfig {
    log_domain: LogDomain,
    empty_reconstruction: EmptyReconstruction,
}

impl TransformConfig {
    /// Set the policy for non-positive values under a logarithm.
    pub fn with_log_domain(mut self, log_domain: LogDomain) -> Self {
        self.log_domain = log_domain;
        self
    }

    /// Set the policy for inverting a table with nothing to reconstruct.
    pub fn with_empty_reconstruction(mut self, policy: EmptyReconstruction) -> Self {
        self.empty_reconstruction = policy;
        self
    }

    /// Returns the log-domain policy.
    pub fn log_domain(&self) -> LogDomain {
        self.log_domain
    }

    /// Returns the empty-reconstruction policy.
    pub fn empty_reconstruction(&self) -> EmptyReconstruction {
        self.empty_reconstruction
    }
}
