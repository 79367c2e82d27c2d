use argh::FromArgs;
use std::path::PathBuf;

use rankbench_imgproc::filter::FilterKind;

use rankbench_eval::{run, EvalConfig};

#[derive(FromArgs)]
/// Filter every noisy image with the configured kinds and score the results
/// against their clean references
struct Args {
    /// root directory of the study layout
    #[argh(option, short = 'o', default = "PathBuf::from(\"output\")")]
    output_root: PathBuf,

    /// category to process, repeatable; defaults to landscape and portrait
    #[argh(option, short = 'c')]
    category: Vec<String>,

    /// filter kind to apply (mean, median, min, max), repeatable; defaults to all
    #[argh(option, short = 'f')]
    filter: Vec<String>,

    /// window side length of the spatial filters
    #[argh(option, short = 'k', default = "3")]
    kernel_size: usize,

    /// jpeg encoding quality for the filtered outputs
    #[argh(option, default = "95")]
    quality: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // an unknown filter name is a configuration error and aborts up front
    let filters = if args.filter.is_empty() {
        FilterKind::ALL.to_vec()
    } else {
        args.filter
            .iter()
            .map(|name| name.parse::<FilterKind>())
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut config = EvalConfig {
        output_root: args.output_root,
        filters,
        kernel_size: args.kernel_size,
        jpeg_quality: args.quality,
        ..Default::default()
    };
    if !args.category.is_empty() {
        config.categories = args.category;
    }

    let summary = run(&config)?;

    println!(
        "evaluated {} (image, filter) pairs, {} skipped, {} failed",
        summary.evaluated, summary.skipped, summary.failed
    );
    println!("report written to '{}'", config.report_path().display());

    Ok(())
}
