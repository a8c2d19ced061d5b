mod logging;
mod stage_timer;

use std::path::PathBuf;

use clap::Parser;
use featdex::{ConvertStats, convert_batch_path, convert_stream_path};
use stage_timer::StageTimer;

/// Convert svmlight data with named features into indexed features.
///
/// Features are assigned dense integer indices (starting at 1) in
/// first-occurrence order; the reserved `qid` token passes through
/// unconverted. The index-to-name mapping can be saved alongside.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Input data file with string feature names.
    input_data: PathBuf,

    /// Output data file with integer feature indices.
    output_data: PathBuf,

    /// Optional file receiving the index-to-name mapping.
    index_mapping_file: Option<PathBuf>,

    /// Load and convert the whole file at once instead of streaming.
    ///
    /// Batch mode groups all comments before the data in the output;
    /// streaming mode preserves the original interleaving.
    #[clap(long)]
    batch: bool,

    #[command(flatten)]
    log_args: logging::LogArgs,
}

impl Args {
    /// Run the conversion.
    pub fn run(&self) -> Result<ConvertStats, Box<dyn std::error::Error>> {
        let _timer = StageTimer::start("conversion");

        let stats = if self.batch {
            convert_batch_path(
                &self.input_data,
                &self.output_data,
                self.index_mapping_file.as_ref(),
            )?
        } else {
            convert_stream_path(
                &self.input_data,
                &self.output_data,
                self.index_mapping_file.as_ref(),
            )?
        };

        Ok(stats)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.log_args.setup_logging(2)?;

    let stats = args.run()?;

    log::info!(
        "done: {} records converted, {} comments passed through",
        stats.records,
        stats.comments
    );

    Ok(())
}
