use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use log::{LevelFilter, error, info};
use zenfilters::{BitmapError, Unstoppable, chain};

const LOG_ENV: &str = "ZENFILTERS_LOG";

#[rustfmt::skip]
fn create_cmd_args() -> Command {
    Command::new("zenfilters")
        .about("Apply an ordered chain of filters to a 24-bit BMP")
        .after_help(format!("Available filters:\n{}", chain::FILTER_HELP))
        .arg(Arg::new("input")
            .help("BMP file to read")
            .required(true))
        .arg(Arg::new("output")
            .help("BMP file to write")
            .required(true))
        .arg(Arg::new("filters")
            .help("Filter flags and their parameters, applied in order")
            .action(ArgAction::Append)
            .num_args(0..)
            .trailing_var_arg(true)
            .allow_hyphen_values(true))
}

fn main() -> ExitCode {
    setup_logger();

    let matches = match create_cmd_args().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let (Some(input), Some(output)) = (
        matches.get_one::<String>("input"),
        matches.get_one::<String>("output"),
    ) else {
        return ExitCode::FAILURE;
    };
    let filter_args: Vec<String> = matches
        .get_many::<String>("filters")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    match run(input, output, &filter_args) {
        Ok(()) => {
            info!("output saved to {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &str, output: &str, filter_args: &[String]) -> Result<(), BitmapError> {
    let pipeline = chain::parse_filters(filter_args)?;
    let image = zenfilters::read_bmp_file(input)?;
    let image = pipeline.apply(image, Unstoppable)?;
    zenfilters::write_bmp_file(&image, output)
}

/// Log level from `ZENFILTERS_LOG` (error, warn, info, debug, trace), default warn.
fn setup_logger() {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);

    if let Err(e) = simple_logger::SimpleLogger::new().with_level(level).init() {
        eprintln!("could not initialize logger: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters_of(args: &[&str]) -> Vec<String> {
        create_cmd_args()
            .try_get_matches_from(args)
            .unwrap()
            .get_many::<String>("filters")
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn command_is_well_formed() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn hyphenated_filter_flags_are_forwarded() {
        let args = ["zenfilters", "in.bmp", "out.bmp", "-crop", "10", "20", "-gs", "-blur", "1.5"];
        assert_eq!(filters_of(&args), ["-crop", "10", "20", "-gs", "-blur", "1.5"]);
    }

    #[test]
    fn no_filters_is_empty() {
        assert!(filters_of(&["zenfilters", "in.bmp", "out.bmp"]).is_empty());
    }

    #[test]
    fn missing_output_is_an_error() {
        let err = create_cmd_args()
            .try_get_matches_from(["zenfilters", "in.bmp"])
            .unwrap_err();
        assert!(err.use_stderr());
    }
}
