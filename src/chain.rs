//! Build a [`Pipeline`] from command-line style filter flags.
//!
//! | flag          | filter                      |
//! |---------------|-----------------------------|
//! | `-gs`         | [`Filter::Grayscale`]       |
//! | `-neg`        | [`Filter::Negative`]        |
//! | `-sepia`      | [`Filter::Sepia`]           |
//! | `-sharp`      | [`Filter::Sharpen`]         |
//! | `-crop W H`   | [`Filter::crop`]            |
//! | `-edge T`     | [`Filter::edge_detect`]     |
//! | `-blur S`     | [`Filter::gaussian_blur`]   |
//!
//! Filters run in the order their flags appear.

use core::str::FromStr;

use crate::error::BitmapError;
use crate::filters::Filter;
use crate::pipeline::Pipeline;

/// Usage lines for every supported flag.
pub const FILTER_HELP: &str = "\
  -neg          Negative
  -gs           Grayscale
  -crop W H     Crop to the top-left W x H pixels
  -sharp        Sharpening
  -edge T       Edge detection with threshold T
  -blur S       Gaussian blur with sigma S
  -sepia        Sepia";

/// Parse `args` (flags and their values, without input/output paths).
pub fn parse_filters<S: AsRef<str>>(args: &[S]) -> Result<Pipeline, BitmapError> {
    let mut args = args.iter().map(AsRef::as_ref);
    let mut pipeline = Pipeline::new();

    while let Some(flag) = args.next() {
        let filter = match flag {
            "-gs" => Filter::Grayscale,
            "-neg" => Filter::Negative,
            "-sepia" => Filter::Sepia,
            "-sharp" => Filter::Sharpen,
            "-crop" => {
                let width = parse_value::<usize>(flag, "width", args.next())?;
                let height = parse_value::<usize>(flag, "height", args.next())?;
                Filter::crop(width, height)
            }
            "-edge" => Filter::edge_detect(parse_value(flag, "threshold", args.next())?)?,
            "-blur" => Filter::gaussian_blur(parse_value(flag, "sigma", args.next())?)?,
            other => {
                return Err(BitmapError::InvalidArgument(format!(
                    "unknown filter type: {other}"
                )));
            }
        };
        pipeline.push(filter);
    }

    Ok(pipeline)
}

fn parse_value<T: FromStr>(flag: &str, what: &str, arg: Option<&str>) -> Result<T, BitmapError> {
    let arg = arg.ok_or_else(|| {
        BitmapError::InvalidArgument(format!("not enough arguments for {flag} filter"))
    })?;
    arg.parse().map_err(|_| {
        BitmapError::InvalidArgument(format!("{flag}: invalid {what} '{arg}'"))
    })
}
