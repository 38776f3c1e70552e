//! Forward command: level table -> differenced table.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::cli::ForwardArgs;
use crate::config::ModelselecConfig;
use crate::{convert, table_io};

/// Run the forward transform.
pub fn run(args: ForwardArgs) -> Result<()> {
    let _cmd = info_span!("forward").entered();
    let common = &args.common;

    // 1. Load config, then apply CLI overrides
    let config = ModelselecConfig::load(common.config.as_deref())?;
    let (transform, lag) =
        convert::resolve_transform(&config.transform, common.transform.as_deref(), common.lag)?;
    let transform_cfg = convert::build_transform_config(&config.transform)?;
    let schema = convert::build_schema(&config.schema)?;

    // 2. Read and coerce levels
    let levels = table_io::read_table(&args.input, &schema)?;

    // 3. Transform
    info!(%transform, lag, "applying forward transform");
    let out = transform
        .apply(&levels, lag, &transform_cfg)
        .with_context(|| format!("{transform} transform failed"))?;

    // 4. Write
    table_io::write_table(&out, common.output.as_deref())
}
