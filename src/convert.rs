//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use modelselec_transform::{EmptyReconstruction, LogDomain, TableSchema, Transform, TransformConfig};

use crate::config::{SchemaToml, TransformToml};

/// Parses a transform tag (`lvl`, `diff`, `diffln`).
pub fn parse_transform(s: &str) -> Result<Transform> {
    Ok(s.parse::<Transform>()?)
}

/// Parses a log-domain policy name string into the corresponding enum variant.
pub fn parse_log_domain(s: &str) -> Result<LogDomain> {
    match s.to_lowercase().as_str() {
        "propagate" => Ok(LogDomain::Propagate),
        "strict" => Ok(LogDomain::Strict),
        other => bail!("unknown log domain policy: {other:?}"),
    }
}

/// Parses an empty-reconstruction policy name string.
pub fn parse_empty_reconstruction(s: &str) -> Result<EmptyReconstruction> {
    match s.to_lowercase().as_str() {
        "error" => Ok(EmptyReconstruction::Error),
        "return_seed" | "return-seed" => Ok(EmptyReconstruction::ReturnSeed),
        other => bail!("unknown empty reconstruction policy: {other:?}"),
    }
}

/// Builds a [`TransformConfig`] from the TOML transform configuration.
pub fn build_transform_config(transform: &TransformToml) -> Result<TransformConfig> {
    Ok(TransformConfig::default()
        .with_log_domain(parse_log_domain(&transform.log_domain)?)
        .with_empty_reconstruction(parse_empty_reconstruction(&transform.on_empty)?))
}

/// Builds a [`TableSchema`] from the TOML schema configuration.
pub fn build_schema(schema: &SchemaToml) -> Result<TableSchema> {
    match &schema.numeric {
        None => Ok(TableSchema::AllNumeric),
        Some(names) if names.is_empty() => bail!("[schema].numeric lists no columns"),
        Some(names) => Ok(TableSchema::numeric(names.iter().cloned())),
    }
}

/// Resolves the transform and lag, letting CLI overrides win over the file.
pub fn resolve_transform(
    transform: &TransformToml,
    kind_override: Option<&str>,
    lag_override: Option<usize>,
) -> Result<(Transform, usize)> {
    let kind = parse_transform(kind_override.unwrap_or(&transform.kind))?;
    let lag = lag_override.unwrap_or(transform.lag);
    if lag == 0 {
        bail!("lag must be at least 1");
    }
    Ok((kind, lag))
}
