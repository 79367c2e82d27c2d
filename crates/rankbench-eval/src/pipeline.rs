use std::fs;
use std::path::Path;

use log::{error, info, warn};

use rankbench_image::Image;
use rankbench_imgproc::filter::{window_filter, FilterKind};
use rankbench_imgproc::metrics::mse;
use rankbench_io::jpeg::{
    read_image_jpeg_mono8, read_image_jpeg_rgb8, write_image_jpeg_gray8, write_image_jpeg_rgb8,
};
use rankbench_io::IoError;

use crate::config::{has_jpeg_extension, EvalConfig};
use crate::error::EvalError;
use crate::naming::NoisyName;
use crate::report::{write_report, EvaluationRecord};

/// Counters describing the outcome of one evaluation run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of (noisy image, filter) pairs evaluated and recorded.
    pub evaluated: usize,
    /// Number of inputs skipped before filtering (missing reference,
    /// unrecognized name, decode failure, missing category).
    pub skipped: usize,
    /// Number of (noisy image, filter) pairs that failed during filtering,
    /// scoring or persisting.
    pub failed: usize,
}

/// Run the full evaluation batch.
///
/// For every category, every noisy image is matched with its clean
/// reference, filtered with every configured kind, scored and persisted.
/// Bad inputs never abort the batch: missing or undecodable files are
/// skipped with a warning and failures are isolated at the
/// (image, filter) granularity. The report table is written exactly once,
/// at the end, in processing order.
pub fn run(config: &EvalConfig) -> Result<RunSummary, EvalError> {
    let mut summary = RunSummary::default();
    let mut records = Vec::new();

    for category in &config.categories {
        let noise_dir = config.noise_dir(category);
        if !noise_dir.exists() {
            warn!(
                "[{category}] noise directory '{}' not found, skipping category",
                noise_dir.display()
            );
            summary.skipped += 1;
            continue;
        }

        info!("processing category: {category}");

        let mut noisy_files: Vec<String> = fs::read_dir(&noise_dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| has_jpeg_extension(name))
            .collect();
        // deterministic processing order
        noisy_files.sort();

        for file_name in &noisy_files {
            process_noisy_file(
                config,
                category,
                &noise_dir,
                file_name,
                &mut records,
                &mut summary,
            );
        }
    }

    fs::create_dir_all(&config.output_root)?;
    write_report(&config.report_path(), &records)?;

    info!(
        "evaluation finished: {} records ({} skipped, {} failed), report at '{}'",
        summary.evaluated,
        summary.skipped,
        summary.failed,
        config.report_path().display()
    );

    Ok(summary)
}

/// Resolve the reference of one noisy file and evaluate all filters on it.
///
/// Skips (with a warning) on unrecognized names, missing references and
/// decode failures; none of these is fatal to the batch.
fn process_noisy_file(
    config: &EvalConfig,
    category: &str,
    noise_dir: &Path,
    file_name: &str,
    records: &mut Vec<EvaluationRecord>,
    summary: &mut RunSummary,
) {
    let Some(name) = config.naming.parse(file_name) else {
        warn!("[{category}] unrecognized file name '{file_name}', skipping");
        summary.skipped += 1;
        return;
    };

    let reference_name = config.naming.reference_name(&name.base, &name.extension);
    let reference_path = config.original_dir(category).join(&reference_name);
    if !reference_path.exists() {
        warn!("[{category}] reference '{reference_name}' not found, skipping '{file_name}'");
        summary.skipped += 1;
        return;
    }

    let noisy_path = noise_dir.join(file_name);
    info!("[{category}] processing: {file_name}");

    // a gray base identity forces single channel buffers on both sides
    let decoded = if config.naming.is_grayscale(&name.base) {
        read_image_jpeg_mono8(&noisy_path).and_then(|noisy| {
            let clean = read_image_jpeg_mono8(&reference_path)?;
            evaluate_filters(
                config,
                category,
                &name,
                &noisy,
                &clean,
                // closure keeps the writer generic over any caller lifetime
                |p: &Path, img, q| write_image_jpeg_gray8(p, img, q),
                records,
                summary,
            );
            Ok(())
        })
    } else {
        read_image_jpeg_rgb8(&noisy_path).and_then(|noisy| {
            let clean = read_image_jpeg_rgb8(&reference_path)?;
            evaluate_filters(
                config,
                category,
                &name,
                &noisy,
                &clean,
                |p: &Path, img, q| write_image_jpeg_rgb8(p, img, q),
                records,
                summary,
            );
            Ok(())
        })
    };

    if let Err(e) = decoded {
        warn!("[{category}] failed to decode '{file_name}': {e}, skipping");
        summary.skipped += 1;
    }
}

/// Apply every configured filter to one noisy/clean pair.
///
/// Each (image, filter) outcome is either a record or a logged failure;
/// a failing filter never aborts the remaining ones.
#[allow(clippy::too_many_arguments)]
fn evaluate_filters<const C: usize>(
    config: &EvalConfig,
    category: &str,
    name: &NoisyName,
    noisy: &Image<u8, C>,
    clean: &Image<u8, C>,
    write: impl Fn(&Path, &Image<u8, C>, u8) -> Result<(), IoError>,
    records: &mut Vec<EvaluationRecord>,
    summary: &mut RunSummary,
) {
    for &kind in &config.filters {
        match evaluate_one(config, category, name, noisy, clean, kind, &write) {
            Ok(record) => {
                records.push(record);
                summary.evaluated += 1;
            }
            Err(e) => {
                error!(
                    "[{category}] filter '{kind}' failed on '{}': {e}",
                    name.stem
                );
                summary.failed += 1;
            }
        }
    }
}

fn evaluate_one<const C: usize>(
    config: &EvalConfig,
    category: &str,
    name: &NoisyName,
    noisy: &Image<u8, C>,
    clean: &Image<u8, C>,
    kind: FilterKind,
    write: impl Fn(&Path, &Image<u8, C>, u8) -> Result<(), IoError>,
) -> Result<EvaluationRecord, EvalError> {
    let mut filtered = Image::from_size_val(noisy.size(), 0)?;
    window_filter(noisy, &mut filtered, kind, config.kernel_size)?;

    let score = mse(clean, &filtered)?;

    let out_dir = config.filter_dir(category, kind);
    fs::create_dir_all(&out_dir)?;
    let out_path = out_dir.join(config.naming.filtered_name(&name.stem, kind, &name.extension));
    write(&out_path, &filtered, config.jpeg_quality)?;

    Ok(EvaluationRecord {
        category: category.to_string(),
        base_image: name.base.clone(),
        noise_params: name.noise_params.clone(),
        filter_kind: kind,
        mse: score,
    })
}
