use argh::FromArgs;
use std::path::{Path, PathBuf};

use rankbench_image::Image;
use rankbench_imgproc::color::gray_from_rgb_u8;
use rankbench_imgproc::gradient::{gradient_magnitude, GradientKernel};
use rankbench_io::functional::{read_image_any, GenericImage};
use rankbench_io::png::write_image_png_mono8;

use rankbench_eval::EvalError;

#[derive(FromArgs)]
/// Extract gradient edge maps with four classical derivative kernel pairs
struct Args {
    /// root directory holding one sub directory of images per category
    #[argh(option, short = 'i')]
    input_root: PathBuf,

    /// root directory for the edge maps
    #[argh(option, short = 'o', default = "PathBuf::from(\"output_segmentation\")")]
    output_root: PathBuf,

    /// category to process, repeatable; defaults to landscape and portrait
    #[argh(option, short = 'c')]
    category: Vec<String>,
}

fn is_supported_image(file_name: &str) -> bool {
    Path::new(file_name).extension().map_or(false, |ext| {
        ["png", "jpg", "jpeg", "bmp"]
            .iter()
            .any(|supported| ext.eq_ignore_ascii_case(supported))
    })
}

fn segment_file(file_path: &Path, category: &str, out_dir: &Path) -> Result<(), EvalError> {
    let gray = match read_image_any(file_path)? {
        GenericImage::L8(image) => image,
        GenericImage::Rgb8(image) => {
            let mut gray = Image::from_size_val(image.size(), 0)?;
            gray_from_rgb_u8(&image, &mut gray)?;
            gray
        }
    };

    let stem = file_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    for kernel in GradientKernel::ALL {
        let mut edges = Image::from_size_val(gray.size(), 0)?;
        gradient_magnitude(&gray, &mut edges, kernel)?;

        let out_name = format!("{stem}_{category}_{kernel}.png");
        write_image_png_mono8(out_dir.join(out_name), &edges)?;
    }

    Ok(())
}

fn segment_category(args: &Args, category: &str) -> Result<(), EvalError> {
    let input_dir = args.input_root.join(category);
    if !input_dir.exists() {
        log::warn!("[{category}] input directory '{}' not found, skipping", input_dir.display());
        return Ok(());
    }

    let out_dir = args.output_root.join(category);
    std::fs::create_dir_all(&out_dir)?;

    let mut files: Vec<String> = std::fs::read_dir(&input_dir)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| is_supported_image(name))
        .collect();
    files.sort();

    for file_name in &files {
        log::info!("[{category}] segmenting: {file_name}");
        if let Err(e) = segment_file(&input_dir.join(file_name), category, &out_dir) {
            log::error!("[{category}] failed to segment '{file_name}': {e}");
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let categories = if args.category.is_empty() {
        vec![String::from("landscape"), String::from("portrait")]
    } else {
        args.category.clone()
    };

    for category in &categories {
        if let Err(e) = segment_category(&args, category) {
            log::error!("[{category}] segmentation failed: {e}");
        }
    }

    Ok(())
}
