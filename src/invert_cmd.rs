//! Invert command: differenced table + seed -> level table.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use crate::cli::InvertArgs;
use modelselec_transform::Transform;

use crate::config::ModelselecConfig;
use crate::{convert, table_io};

/// Run the inverse transform.
pub fn run(args: InvertArgs) -> Result<()> {
    let _cmd = info_span!("invert").entered();
    let common = &args.common;

    let config = ModelselecConfig::load(common.config.as_deref())?;
    let (transform, lag) =
        convert::resolve_transform(&config.transform, common.transform.as_deref(), common.lag)?;
    let transform_cfg = convert::build_transform_config(&config.transform)?;
    let schema = convert::build_schema(&config.schema)?;

    let diffed = table_io::read_table(&args.input, &schema)?;
    let seed = match (&args.seed, transform) {
        (Some(path), _) => table_io::read_table(path, &schema)?,
        // Levels need no history.
        (None, Transform::Level) => diffed.head(0),
        (None, _) => bail!("--seed is required to invert a {transform} transform"),
    };

    info!(%transform, lag, seed_rows = seed.n_rows(), "reconstructing levels");
    let levels = transform
        .invert(&diffed, lag, &seed, &transform_cfg)
        .with_context(|| format!("{transform} inverse failed"))?;
    info!(n_rows = levels.n_rows(), "levels reconstructed");

    table_io::write_table(&levels, common.output.as_deref())
}
