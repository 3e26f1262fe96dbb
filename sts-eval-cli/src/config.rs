use anyhow::{Context, Result};
use config::{Config as ConfigLoader, Environment, File};
use sts_eval_workflow::EvalConfig;

/// Layered run configuration: `config/default`, then `config/local`, then
/// `STS_EVAL_*` environment variables. Missing files are skipped.
pub fn load() -> Result<EvalConfig> {
    let settings = ConfigLoader::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name("config/local").required(false))
        .add_source(Environment::with_prefix("STS_EVAL").try_parsing(true))
        .build()
        .context("failed to read configuration")?;

    let config: EvalConfig = settings
        .try_deserialize()
        .context("failed to parse configuration")?;

    Ok(config.validated()?)
}
