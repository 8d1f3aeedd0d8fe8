use clap::{Parser, Subcommand, ValueEnum};
use pluscode_rs::{
    CodeArea, DEFAULT_CODE_LENGTH, LatLng, PlusCodeError, code_length, decode, encode, is_full,
    is_short, is_valid, recover_nearest, shorten,
};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Encode, decode, shorten and recover Plus Codes.
#[derive(Parser, Debug)]
#[command(name = "pluscode", version, about)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Defaults to RUST_LOG or warn.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a location as a Plus Code.
    Encode {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Number of significant digits, clamped to 2..=15.
        #[arg(long, default_value_t = DEFAULT_CODE_LENGTH)]
        length: usize,
    },
    /// Decode a full Plus Code into its area.
    Decode {
        code: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Shorten a full code relative to a reference location.
    Shorten {
        code: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },
    /// Recover the nearest full code from a short code and a reference location.
    Recover {
        code: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },
    /// Report whether a code is valid, short or full.
    Validate { code: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Wkt,
    Geojson,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn format_area(area: &CodeArea, format: OutputFormat) -> Result<String, PlusCodeError> {
    match format {
        OutputFormat::Text => {
            let center = area.center();
            Ok(format!(
                "Latitude: {} to {}\nLongitude: {} to {}\nCenter: {:.6}, {:.6}\nLength: {}",
                area.latitude_lo(),
                area.latitude_hi(),
                area.longitude_lo(),
                area.longitude_hi(),
                center.latitude,
                center.longitude,
                area.code_length()
            ))
        }
        OutputFormat::Json => area.to_json(),
        OutputFormat::Wkt => Ok(area.to_wkt()),
        OutputFormat::Geojson => Ok(area.to_geojson()),
    }
}

fn run(command: Command) -> Result<String, PlusCodeError> {
    match command {
        Command::Encode { lat, lng, length } => Ok(encode(&LatLng::new(lat, lng), length)),
        Command::Decode { code, format } => format_area(&decode(&code)?, format),
        Command::Shorten { code, lat, lng } => {
            if !is_full(&code) {
                return Err(PlusCodeError::InvalidCode(code));
            }
            Ok(shorten(&code, &LatLng::new(lat, lng)))
        }
        Command::Recover { code, lat, lng } => {
            if !is_valid(&code) {
                return Err(PlusCodeError::InvalidCode(code));
            }
            Ok(recover_nearest(&code, &LatLng::new(lat, lng)))
        }
        Command::Validate { code } => {
            if !is_valid(&code) {
                return Err(PlusCodeError::InvalidCode(code));
            }
            Ok(format!(
                "valid: true\nshort: {}\nfull: {}\nlength: {}",
                is_short(&code),
                is_full(&code),
                code_length(&code)
            ))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(command = ?cli.command, "running");

    match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::error::Error;

    fn run_args(args: &[&str]) -> Result<String, Box<dyn Error>> {
        let cli = Cli::try_parse_from(args.iter().copied())?;
        Ok(run(cli.command)?)
    }

    fn run_err(args: &[&str]) -> Option<PlusCodeError> {
        run_args(args)
            .err()
            .and_then(|e| e.downcast_ref::<PlusCodeError>().cloned())
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_encode_command() -> Result<(), Box<dyn Error>> {
        let out = run_args(&[
            "pluscode",
            "encode",
            "--lat",
            "51.3701125",
            "--lng",
            "-1.217765625",
        ])?;
        assert_eq!(out, "9C3W9QCJ+2V");

        let out = run_args(&[
            "pluscode", "encode", "--lat", "20.375", "--lng", "2.775", "--length", "6",
        ])?;
        assert_eq!(out, "7FG49Q00+");
        Ok(())
    }

    #[test]
    fn test_encode_command_huge_longitude() -> Result<(), Box<dyn Error>> {
        let out = run_args(&["pluscode", "encode", "--lat", "0", "--lng", "1e20"])?;
        assert!(is_valid(&out));
        Ok(())
    }

    #[test]
    fn test_decode_formats() -> Result<(), Box<dyn Error>> {
        let text = run_args(&["pluscode", "decode", "7FG49Q00+"])?;
        assert!(text.contains("Length: 6"));

        let wkt = run_args(&["pluscode", "decode", "7FG49Q00+", "--format", "wkt"])?;
        assert!(wkt.starts_with("POLYGON"));

        let json = run_args(&["pluscode", "decode", "7FG49Q00+", "--format", "json"])?;
        assert!(json.contains("\"code_length\":6"));

        let geojson = run_args(&["pluscode", "decode", "7FG49Q00+", "--format", "geojson"])?;
        assert!(geojson.contains("Polygon"));
        Ok(())
    }

    #[test]
    fn test_decode_short_code_fails() {
        assert!(matches!(
            run_err(&["pluscode", "decode", "9QCJ+2VX"]),
            Some(PlusCodeError::NotFullCode(_))
        ));
    }

    #[test]
    fn test_bad_arguments_are_not_code_errors() {
        assert!(run_args(&["pluscode", "encode", "--lat", "north"]).is_err());
        assert_eq!(run_err(&["pluscode", "encode", "--lat", "north"]), None);
    }

    #[test]
    fn test_shorten_and_recover_commands() -> Result<(), Box<dyn Error>> {
        let short = run_args(&[
            "pluscode",
            "shorten",
            "9C3W9QCJ+2VX",
            "--lat",
            "51.3701125",
            "--lng",
            "-1.217765625",
        ])?;
        assert_eq!(short, "+2VX");

        let full = run_args(&[
            "pluscode",
            "recover",
            "+2VX",
            "--lat",
            "51.3708675",
            "--lng",
            "-1.217765625",
        ])?;
        assert_eq!(full, "9C3W9QCJ+2VX");
        Ok(())
    }

    #[test]
    fn test_validate_command() -> Result<(), Box<dyn Error>> {
        let out = run_args(&["pluscode", "validate", "9QCJ+2VX"])?;
        assert_eq!(out, "valid: true\nshort: true\nfull: false\nlength: 7");

        let out = run_args(&["pluscode", "validate", "8FVC9G8F+6W"])?;
        assert_eq!(out, "valid: true\nshort: false\nfull: true\nlength: 10");

        assert!(matches!(
            run_err(&["pluscode", "validate", "7FG49Q0+0"]),
            Some(PlusCodeError::InvalidCode(_))
        ));
        Ok(())
    }

    #[test]
    fn test_verbose_flag_counts() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from(["pluscode", "-vv", "validate", "8FVC9G8F+6W"])?;
        assert_eq!(cli.verbose, 2);
        Ok(())
    }
}
