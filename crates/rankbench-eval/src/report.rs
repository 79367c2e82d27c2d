use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rankbench_imgproc::filter::FilterKind;

use crate::error::EvalError;

/// The header row of the evaluation report.
pub const REPORT_HEADER: &str = "Category,Base_Image,Noise_Params,Filter_Type,MSE_Score";

/// One row of the evaluation report.
///
/// A record correlates a category, the base image identity, the noise
/// descriptor and one filter kind with the reconstruction score it achieved.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRecord {
    /// The image category, e.g. `landscape`.
    pub category: String,
    /// The base image identity, e.g. `gray`.
    pub base_image: String,
    /// The noise descriptor, e.g. `SP_lvl1`.
    pub noise_params: String,
    /// The filter kind that produced the scored image.
    pub filter_kind: FilterKind,
    /// The mean squared error against the clean reference.
    pub mse: f64,
}

/// Write the evaluation report as a comma separated table.
///
/// The file is created from scratch on every run (overwrite semantics) with
/// a header row followed by one row per record in processing order. Scores
/// are formatted with four decimals.
pub fn write_report(path: &Path, records: &[EvaluationRecord]) -> Result<(), EvalError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{REPORT_HEADER}")?;
    for record in records {
        writeln!(
            writer,
            "{},{},{},{},{:.4}",
            record.category,
            record.base_image,
            record.noise_params,
            record.filter_kind,
            record.mse
        )?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_has_header_and_formatted_rows() -> Result<(), EvalError> {
        let tmp_dir = tempfile::tempdir()?;
        let path = tmp_dir.path().join("mse_report.csv");

        let records = vec![
            EvaluationRecord {
                category: String::from("landscape"),
                base_image: String::from("gray"),
                noise_params: String::from("SP_lvl1"),
                filter_kind: FilterKind::Median,
                mse: 12.34567,
            },
            EvaluationRecord {
                category: String::from("portrait"),
                base_image: String::from("color"),
                noise_params: String::from("Gauss_lvl2"),
                filter_kind: FilterKind::Mean,
                mse: 0.0,
            },
        ];
        write_report(&path, &records)?;

        let contents = std::fs::read_to_string(&path)?;
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], REPORT_HEADER);
        assert_eq!(lines[1], "landscape,gray,SP_lvl1,median,12.3457");
        assert_eq!(lines[2], "portrait,color,Gauss_lvl2,mean,0.0000");

        Ok(())
    }

    #[test]
    fn report_is_overwritten_between_runs() -> Result<(), EvalError> {
        let tmp_dir = tempfile::tempdir()?;
        let path = tmp_dir.path().join("mse_report.csv");

        let record = EvaluationRecord {
            category: String::from("landscape"),
            base_image: String::from("gray"),
            noise_params: String::from("SP_lvl1"),
            filter_kind: FilterKind::Min,
            mse: 1.0,
        };
        write_report(&path, std::slice::from_ref(&record))?;
        write_report(&path, &[])?;

        let contents = std::fs::read_to_string(&path)?;
        assert_eq!(contents.lines().count(), 1);

        Ok(())
    }
}
