use argh::FromArgs;
use std::path::{Path, PathBuf};

use rand::{rngs::StdRng, SeedableRng};

use rankbench_image::Image;
use rankbench_imgproc::noise::{gaussian, salt_and_pepper};
use rankbench_io::jpeg::{
    read_image_jpeg_mono8, read_image_jpeg_rgb8, write_image_jpeg_gray8, write_image_jpeg_rgb8,
};
use rankbench_io::IoError;

use rankbench_eval::naming::NamingScheme;
use rankbench_eval::EvalError;

/// Salt and pepper corruption levels: (level name, total probability).
const SP_LEVELS: [(&str, f64); 2] = [("lvl1", 0.02), ("lvl2", 0.05)];

/// Gaussian corruption levels: (level name, mean, standard deviation).
const GAUSS_LEVELS: [(&str, f64, f64); 2] = [("lvl1", 0.0, 15.0), ("lvl2", 0.0, 40.0)];

#[derive(FromArgs)]
/// Synthesize the noisy variants of the clean reference images
struct Args {
    /// root directory of the study layout
    #[argh(option, short = 'o', default = "PathBuf::from(\"output\")")]
    output_root: PathBuf,

    /// category to process, repeatable; defaults to landscape and portrait
    #[argh(option, short = 'c')]
    category: Vec<String>,

    /// seed for the random source, for reproducible corpora
    #[argh(option)]
    seed: Option<u64>,

    /// jpeg encoding quality
    #[argh(option, default = "95")]
    quality: u8,
}

fn corrupt_base<const C: usize>(
    image: &Image<u8, C>,
    base: &str,
    out_dir: &Path,
    quality: u8,
    naming: &NamingScheme,
    rng: &mut StdRng,
    write: impl Fn(&Path, &Image<u8, C>, u8) -> Result<(), IoError>,
) -> Result<(), EvalError> {
    let mut noisy = Image::from_size_val(image.size(), 0)?;

    for (level, prob) in SP_LEVELS {
        salt_and_pepper(image, &mut noisy, prob, rng)?;
        let file_name = naming.noisy_name(base, "SP", level, "jpg");
        write(&out_dir.join(file_name), &noisy, quality)?;
    }

    for (level, mean, sigma) in GAUSS_LEVELS {
        gaussian(image, &mut noisy, mean, sigma, rng)?;
        let file_name = naming.noisy_name(base, "Gauss", level, "jpg");
        write(&out_dir.join(file_name), &noisy, quality)?;
    }

    Ok(())
}

fn corrupt_category(args: &Args, category: &str, rng: &mut StdRng) -> Result<(), EvalError> {
    let naming = NamingScheme::default();
    let input_dir = args.output_root.join(category).join("original");
    let output_dir = args.output_root.join(category).join("noise");

    if !input_dir.exists() {
        log::warn!(
            "[{category}] reference directory '{}' not found, run prepare first",
            input_dir.display()
        );
        return Ok(());
    }
    std::fs::create_dir_all(&output_dir)?;

    let color_path = input_dir.join(naming.reference_name("color", "jpg"));
    if color_path.exists() {
        let image = read_image_jpeg_rgb8(&color_path)?;
        corrupt_base(
            &image,
            "color",
            &output_dir,
            args.quality,
            &naming,
            rng,
            // closure keeps the writer generic over any caller lifetime
            |p: &Path, img, q| write_image_jpeg_rgb8(p, img, q),
        )?;
    }

    let gray_path = input_dir.join(naming.reference_name("gray", "jpg"));
    if gray_path.exists() {
        let image = read_image_jpeg_mono8(&gray_path)?;
        corrupt_base(
            &image,
            "gray",
            &output_dir,
            args.quality,
            &naming,
            rng,
            |p: &Path, img, q| write_image_jpeg_gray8(p, img, q),
        )?;
    }

    log::info!("[{category}] noisy variants saved to '{}'", output_dir.display());
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

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for category in &categories {
        if let Err(e) = corrupt_category(&args, category, &mut rng) {
            log::error!("[{category}] noise synthesis failed: {e}");
        }
    }

    Ok(())
}
