use anyhow::{Context, Result};
use sts_eval_workflow::{EvalConfig, Pipeline};

use crate::cli::Command;
use crate::output::OutputWriter;

pub fn run(command: &Command, config: EvalConfig) -> Result<()> {
    let analysis = command.analysis();
    let path = &command.data().sts_data;
    let output = OutputWriter::new(config.output_format);

    let pipeline = Pipeline::for_analysis(analysis, &config);

    let spinner = output.spinner(&format!("Running {} analysis on {}", analysis, path.display()));
    let result = pipeline.run(config, path.clone());
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let report =
        result.with_context(|| format!("{} analysis of {} failed", analysis, path.display()))?;

    output.write_report(&report)
}
