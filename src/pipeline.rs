//! Bitmap to CSV conversion pipeline.
//!
//! Wires the decoder, grayscale converter, optional threshold classifier and
//! CSV exporter together:
//!
//! ```text
//! image file -> Bitmap -> to_grayscale -> Mat -> <name><ext>
//!                                           \-> suppress_threshold -> <name><suffix><ext>
//! ```

use std::path::{Path, PathBuf};

use crate::bitmap::{imread_gray_with_max, BitmapError};
use crate::config::Config;
use crate::csv::{export_csv_named, ExportError};
use crate::mat::Mat;

/// Errors that abort a pipeline run.
///
/// Export failures are not in here: they are collected in the
/// [`PipelineReport`] and the run carries on with the remaining outputs.
#[derive(Debug)]
pub enum PipelineError {
    /// Input could not be read or converted
    Read(BitmapError),
    /// Output name is not valid UTF-8
    OutputName(PathBuf),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::Read(e) => write!(f, "{}", e),
            PipelineError::OutputName(path) => {
                write!(f, "Output name '{}' is not valid UTF-8", path.display())
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Read(e) => Some(e),
            PipelineError::OutputName(_) => None,
        }
    }
}

impl From<BitmapError> for PipelineError {
    fn from(e: BitmapError) -> Self {
        PipelineError::Read(e)
    }
}

/// Settings for a single conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOptions {
    /// Image file to convert
    pub input: PathBuf,
    /// Output name without extension
    pub output_name: String,
    /// Appended verbatim to output names
    pub extension: String,
    /// Inserted between output name and extension for the thresholded file
    pub threshold_suffix: String,
    /// Cutoff for the binarized output, if any
    pub threshold: Option<f32>,
}

impl PipelineOptions {
    /// Build options from config values, with explicit overrides taking
    /// precedence.
    ///
    /// Without an explicit output name, the input path minus its extension
    /// is used, so `photos/cat.bmp` becomes `photos/cat`.
    pub fn resolve(
        input: &Path,
        output_name: Option<String>,
        extension: Option<String>,
        threshold: Option<f32>,
        config: &Config,
    ) -> Result<Self, PipelineError> {
        let output_name = match output_name {
            Some(name) => name,
            None => default_output_name(input)?,
        };

        Ok(Self {
            input: input.to_path_buf(),
            output_name,
            extension: extension.unwrap_or_else(|| config.output.extension.clone()),
            threshold_suffix: config.output.threshold_suffix.clone(),
            threshold: threshold.or(config.threshold.value),
        })
    }
}

/// Outcome of a pipeline run.
#[derive(Debug)]
pub struct PipelineReport {
    /// Width of the converted image
    pub width: usize,
    /// Height of the converted image
    pub height: usize,
    /// Largest value in the grayscale output
    pub gray_max: f32,
    /// Files written successfully
    pub written: Vec<PathBuf>,
    /// Exports that failed
    pub failed: Vec<ExportError>,
}

impl PipelineReport {
    /// True when every requested output was written.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, result: Result<PathBuf, ExportError>) {
        match result {
            Ok(path) => {
                log::info!("Wrote {}", path.display());
                self.written.push(path);
            }
            Err(e) => {
                log::error!("Export failed: {}", e);
                self.failed.push(e);
            }
        }
    }
}

/// Convert `options.input` and export the results.
///
/// # Errors
/// Decoding and matrix errors abort the run. Export errors are reported in
/// the returned [`PipelineReport`].
pub fn run(options: &PipelineOptions) -> Result<PipelineReport, PipelineError> {
    log::info!("Converting {}", options.input.display());
    let (gray, gray_max) = imread_gray_with_max(&options.input)?;

    let mut report = PipelineReport {
        width: gray.width(),
        height: gray.height(),
        gray_max,
        written: Vec::new(),
        failed: Vec::new(),
    };

    report.record(export_csv_named(
        &options.output_name,
        &options.extension,
        &gray,
    ));

    if let Some(threshold) = options.threshold {
        let binary = binarize(&gray, threshold);
        let name = format!("{}{}", options.output_name, options.threshold_suffix);
        report.record(export_csv_named(&name, &options.extension, &binary));
        binary.release();
    }

    gray.release();
    Ok(report)
}

/// Thresholded copy of `gray`; the source is left untouched.
pub fn binarize(gray: &Mat, threshold: f32) -> Mat {
    let mut binary = gray.copy();
    binary.suppress_threshold(threshold);
    binary
}

fn default_output_name(input: &Path) -> Result<String, PipelineError> {
    input
        .with_extension("")
        .into_os_string()
        .into_string()
        .map_err(|name| PipelineError::OutputName(PathBuf::from(name)))
}
