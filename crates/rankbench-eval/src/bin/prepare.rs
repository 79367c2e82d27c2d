use argh::FromArgs;
use std::path::PathBuf;

use rankbench_image::Image;
use rankbench_imgproc::color::gray_from_rgb_u8;
use rankbench_io::functional::{read_image_any, GenericImage};
use rankbench_io::jpeg::{write_image_jpeg_gray8, write_image_jpeg_rgb8};

use rankbench_eval::EvalError;

#[derive(FromArgs)]
/// Convert source photographs into the color and grayscale reference pairs of the study
struct Args {
    /// category and source image as `<category>=<path>`, repeatable
    #[argh(option, short = 'i')]
    input: Vec<String>,

    /// root directory of the study layout
    #[argh(option, short = 'o', default = "PathBuf::from(\"output\")")]
    output_root: PathBuf,

    /// jpeg encoding quality
    #[argh(option, default = "95")]
    quality: u8,
}

fn prepare_category(args: &Args, category: &str, source: &str) -> Result<(), EvalError> {
    let rgb = match read_image_any(source)? {
        GenericImage::Rgb8(image) => image,
        GenericImage::L8(_) => {
            log::warn!("[{category}] source '{source}' is already grayscale, skipping");
            return Ok(());
        }
    };

    let save_dir = args.output_root.join(category).join("original");
    std::fs::create_dir_all(&save_dir)?;

    write_image_jpeg_rgb8(save_dir.join("color.jpg"), &rgb, args.quality)?;

    let mut gray = Image::from_size_val(rgb.size(), 0)?;
    gray_from_rgb_u8(&rgb, &mut gray)?;
    write_image_jpeg_gray8(save_dir.join("gray.jpg"), &gray, args.quality)?;

    log::info!("[{category}] reference pair saved to '{}'", save_dir.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    for spec in &args.input {
        let Some((category, source)) = spec.split_once('=') else {
            log::error!("invalid input '{spec}', expected `<category>=<path>`");
            continue;
        };

        // a bad source never aborts the remaining categories
        if let Err(e) = prepare_category(&args, category, source) {
            log::error!("[{category}] failed to prepare '{source}': {e}");
        }
    }

    Ok(())
}
