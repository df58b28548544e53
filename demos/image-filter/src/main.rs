use argh::FromArgs;
use std::path::PathBuf;
use std::process::ExitCode;

use imfilter::{
    imgproc::{
        filter::{self, Quantization},
        FilterError,
    },
    io::{functional as F, ppm, IoError},
};

#[derive(FromArgs, Debug)]
#[argh(help_triggers("-h", "--help"))]
/// Filter image
struct Args {
    /// verbose
    #[argh(switch, short = 'v')]
    verbose: bool,

    /// input file
    #[argh(option, short = 'i', long = "in")]
    input: PathBuf,

    /// output file, written as binary PPM
    #[argh(option, short = 'o', long = "out")]
    output: PathBuf,

    /// comma separated filters: identity, edge, sharpen, box-blur, gaussian-blur, unsharp-masking
    #[argh(option, short = 'f', default = "String::from(\"box-blur\")")]
    filter: String,

    /// wrap out of range sums modulo 256 instead of clamping them
    #[argh(switch)]
    wrapping: bool,
}

/// The stage of the pipeline that failed.
#[derive(thiserror::Error, Debug)]
enum AppError {
    #[error("Something went wrong while parsing filter flag: {0}")]
    Filter(#[source] FilterError),

    #[error("Something went wrong while loading input image: {0}")]
    Load(#[source] IoError),

    #[error("Something went wrong while filtering image: {0}")]
    Convolution(#[source] FilterError),

    #[error("Something went wrong while saving image: {0}")]
    Save(#[source] IoError),
}

fn run(args: &Args) -> Result<(), AppError> {
    log::info!("input-file: {}", args.input.display());
    log::info!("output-file: {}", args.output.display());
    log::info!("filter: {}", args.filter);

    let filters = filter::parse_filters(&args.filter).map_err(AppError::Filter)?;

    let quantization = if args.wrapping {
        Quantization::Wrapping
    } else {
        Quantization::Saturating
    };

    let image = F::read_image_rgb8(&args.input).map_err(AppError::Load)?;

    let filtered =
        filter::apply_filters(&image, &filters, quantization).map_err(AppError::Convolution)?;

    ppm::write_image_ppm(&args.output, &filtered).map_err(AppError::Save)?;

    Ok(())
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
