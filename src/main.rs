use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;

use idscan::{classify_and_extract, extract, DocumentType, ScanError, ScanResult};

#[derive(Parser)]
#[command(name = "idscan", version, about = "Classify Indian ID documents and extract their fields")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract fields from OCR text (a file, or stdin when omitted)
    Extract {
        file: Option<PathBuf>,
        /// Skip classification and extract as this type
        #[arg(long)]
        document_type: Option<DocumentType>,
    },
    /// Recognize an image and extract its fields
    Scan {
        image: PathBuf,
        /// JSON scan configuration
        #[arg(long)]
        config: Option<PathBuf>,
        /// The file holds a `data:image/...;base64,` capture
        #[arg(long)]
        data_url: bool,
        /// Append the row to this JSON-lines file
        #[arg(long, requires = "sheet_id")]
        sheet: Option<PathBuf>,
        #[arg(long)]
        sheet_id: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Extract {
            file,
            document_type,
        } => run_extract(file, document_type),
        Command::Scan {
            image,
            config,
            data_url,
            sheet,
            sheet_id,
        } => run_scan(image, config, data_url, sheet, sheet_id),
    };

    match outcome {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_extract(file: Option<PathBuf>, document_type: Option<DocumentType>) -> Result<String, ScanError> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    let result = match document_type {
        Some(document_type) => ScanResult {
            document_type,
            extracted_data: extract(&text, document_type),
        },
        None => classify_and_extract(&text),
    };
    to_json(&result)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ScanError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ScanError::IoError(format!("Failed to serialize output: {}", e)))
}

#[cfg(feature = "tesseract")]
fn run_scan(
    image: PathBuf,
    config: Option<PathBuf>,
    data_url: bool,
    sheet: Option<PathBuf>,
    sheet_id: Option<String>,
) -> Result<String, ScanError> {
    use idscan::processing::{ImageProcessor, TesseractRecognizer};
    use idscan::sheets::JsonLinesSheet;
    use idscan::{DocumentScanner, ScanConfig};

    let config = match config {
        Some(path) => ScanConfig::from_file(path)?,
        None => ScanConfig::default(),
    };
    let image_data = if data_url {
        ImageProcessor::decode_data_url(&std::fs::read_to_string(image)?)?
    } else {
        std::fs::read(image)?
    };

    let scanner = DocumentScanner::new(TesseractRecognizer::new(config.clone()), config);
    let record = match (sheet, sheet_id) {
        (Some(path), Some(sheet_id)) => {
            let mut writer = JsonLinesSheet::new(path);
            scanner.scan_and_record(&image_data, &mut writer, &sheet_id)?
        }
        _ => scanner.scan(&image_data)?,
    };
    to_json(&record)
}

#[cfg(not(feature = "tesseract"))]
fn run_scan(
    _image: PathBuf,
    _config: Option<PathBuf>,
    _data_url: bool,
    _sheet: Option<PathBuf>,
    _sheet_id: Option<String>,
) -> Result<String, ScanError> {
    Err(ScanError::ConfigError(
        "image scanning requires the `tesseract` feature".to_string(),
    ))
}
