//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse and validate a threshold cutoff (any finite number)
pub fn parse_threshold(s: &str) -> Result<f32, String> {
    let threshold: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !threshold.is_finite() {
        return Err(format!("Threshold must be a finite number, got {}", s));
    }
    Ok(threshold)
}

/// Convert colour bitmaps to inverted, normalized grayscale CSV matrices
#[derive(Parser, Debug)]
#[command(name = "graymat")]
#[command(version, about = "Bitmap to grayscale CSV converter", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "EXAMPLES:
    # Write photo.csv next to photo.bmp
    graymat photo.bmp

    # Custom output name and a binarized copy (out.csv, out_threshold.csv)
    graymat photo.bmp -o out -t 128

    # Create a default config file
    graymat config init")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Bitmap file to convert
    pub input: Option<PathBuf>,

    /// Output name without extension (default: input path minus extension)
    #[arg(long, short)]
    pub output: Option<String>,

    /// Extension appended to output names (default: .csv or from config file)
    #[arg(long)]
    pub ext: Option<String>,

    /// Also write a binarized copy: 255 where round(value) > THRESHOLD, else 0
    #[arg(long, short, value_parser = parse_threshold, allow_negative_numbers = true)]
    pub threshold: Option<f32>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["graymat", "image.bmp"]);
        assert_eq!(args.input, Some(PathBuf::from("image.bmp")));
        assert!(args.output.is_none());
        assert!(args.ext.is_none());
        assert!(args.threshold.is_none());
        assert!(args.config.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_args_no_input() {
        let args = Args::parse_from(["graymat"]);
        assert!(args.input.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_args_output_option() {
        let args = Args::parse_from(["graymat", "in.bmp", "--output", "out/gray"]);
        assert_eq!(args.output, Some("out/gray".to_string()));

        let args = Args::parse_from(["graymat", "in.bmp", "-o", "gray"]);
        assert_eq!(args.output, Some("gray".to_string()));
    }

    #[test]
    fn test_args_ext_option() {
        let args = Args::parse_from(["graymat", "in.bmp", "--ext", ".txt"]);
        assert_eq!(args.ext, Some(".txt".to_string()));
    }

    #[test]
    fn test_args_threshold_option() {
        let args = Args::parse_from(["graymat", "in.bmp", "--threshold", "128"]);
        assert_eq!(args.threshold, Some(128.0));

        let args = Args::parse_from(["graymat", "in.bmp", "-t", "-1.5"]);
        assert_eq!(args.threshold, Some(-1.5));
    }

    #[test]
    fn test_args_threshold_rejects_garbage() {
        assert!(Args::try_parse_from(["graymat", "in.bmp", "-t", "bright"]).is_err());
        assert!(Args::try_parse_from(["graymat", "in.bmp", "-t", "inf"]).is_err());
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold("0.5"), Ok(0.5));
        assert!(parse_threshold("NaN").is_err());
        assert!(parse_threshold("").is_err());
    }

    #[test]
    fn test_args_config_option() {
        let args = Args::parse_from(["graymat", "in.bmp", "--config", "/tmp/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/config.toml")));

        let args = Args::parse_from(["graymat", "in.bmp", "-c", "/tmp/test.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/test.toml")));
    }

    #[test]
    fn test_args_config_show_subcommand() {
        let args = Args::parse_from(["graymat", "config", "show"]);
        match args.command {
            Some(Command::Config {
                action: ConfigAction::Show,
            }) => (),
            _ => panic!("Expected Config Show subcommand"),
        }
    }

    #[test]
    fn test_args_config_init_subcommand() {
        let args = Args::parse_from(["graymat", "config", "init"]);
        match args.command {
            Some(Command::Config {
                action: ConfigAction::Init,
            }) => (),
            _ => panic!("Expected Config Init subcommand"),
        }
    }

    #[test]
    fn test_args_combined_options() {
        let args = Args::parse_from([
            "graymat",
            "scans/page.bmp",
            "-o",
            "page",
            "--ext",
            ".dat",
            "-t",
            "200",
        ]);
        assert_eq!(args.input, Some(PathBuf::from("scans/page.bmp")));
        assert_eq!(args.output, Some("page".to_string()));
        assert_eq!(args.ext, Some(".dat".to_string()));
        assert_eq!(args.threshold, Some(200.0));
    }
}
