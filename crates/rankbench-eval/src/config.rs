use std::path::{Path, PathBuf};

use rankbench_imgproc::filter::FilterKind;

use crate::naming::NamingScheme;

/// Configuration of one evaluation run.
///
/// Every path is explicit; the pipeline never depends on the process working
/// directory beyond resolving `output_root` itself.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Root directory of the study layout
    /// (`<root>/<category>/{original,noise,filter}`).
    pub output_root: PathBuf,
    /// The image categories to process, in order.
    pub categories: Vec<String>,
    /// The filter kinds to apply to every noisy image, in order.
    pub filters: Vec<FilterKind>,
    /// The window side length K of the spatial filters.
    pub kernel_size: usize,
    /// The JPEG quality used when persisting filtered images.
    pub jpeg_quality: u8,
    /// The file naming convention.
    pub naming: NamingScheme,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("output"),
            categories: vec![String::from("landscape"), String::from("portrait")],
            filters: FilterKind::ALL.to_vec(),
            kernel_size: 3,
            jpeg_quality: 95,
            naming: NamingScheme::default(),
        }
    }
}

impl EvalConfig {
    /// The directory holding the clean reference images of a category.
    pub fn original_dir(&self, category: &str) -> PathBuf {
        self.category_dir(category).join("original")
    }

    /// The directory holding the noisy variants of a category.
    pub fn noise_dir(&self, category: &str) -> PathBuf {
        self.category_dir(category).join("noise")
    }

    /// The directory where filtered images of a category and kind are persisted.
    pub fn filter_dir(&self, category: &str, kind: FilterKind) -> PathBuf {
        self.category_dir(category).join("filter").join(kind.as_str())
    }

    /// The path of the evaluation report table.
    pub fn report_path(&self) -> PathBuf {
        self.output_root.join("mse_report.csv")
    }

    fn category_dir(&self, category: &str) -> PathBuf {
        self.output_root.join(category)
    }
}

/// Whether a directory entry looks like a JPEG file the pipeline consumes.
pub(crate) fn has_jpeg_extension(file_name: &str) -> bool {
    Path::new(file_name).extension().map_or(false, |ext| {
        ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg")
    })
}
