//! Tag command - extract fields from a single recognized-text document.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use console::style;
use tracing::{debug, info};

use recibo_core::ocr::{flatten_blocks, KeyValueBlock, RecognizedText};
use recibo_core::{extract_banking_fields, ReceiptExport, ReceiptField, ReceiptRecord};

/// Marker shown for fields without a detected value. Absent fields are never
/// rendered as empty strings.
pub const NOT_DETECTED: &str = "no detectado";

/// Arguments for the tag command.
#[derive(Args)]
pub struct TagArgs {
    /// Input file with the recognized receipt document
    #[arg(required = true)]
    input: PathBuf,

    /// Output file or directory (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// How the input file encodes the recognized document
    #[arg(long, value_enum, default_value = "text")]
    input_format: InputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON export document
    Json,
    /// Long-format CSV rows (campo, valor, detectado)
    Csv,
    /// Field table for terminals
    Text,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum InputFormat {
    /// Raw text blob
    Text,
    /// JSON array of recognized lines
    Lines,
    /// JSON array of key/value blocks
    Blocks,
}

pub fn run(args: TagArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let raw = fs::read_to_string(&args.input)?;
    let text = read_document(&raw, args.input_format)?;

    info!("Tagging {} characters of recognized text", text.len());

    let record = extract_banking_fields(&text);
    debug!("Detected {} fields", record.present_count());

    let export = ReceiptExport::now(record);
    let output = format_export(&export, args.format)?;

    match &args.output {
        Some(path) if path.is_dir() => {
            let stamp = Local::now().format("%Y%m%d_%H%M%S");
            let target = path.join(format!("recibo_{}.{}", stamp, extension(args.format)));
            fs::write(&target, output)?;
            println!(
                "{} Output written to {}",
                style("✓").green(),
                target.display()
            );
        }
        Some(path) => {
            fs::write(path, output)?;
            println!(
                "{} Output written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", output),
    }

    Ok(())
}

/// Render the input to the flat text blob the tagger consumes.
///
/// Structured provider output (lines or key/value blocks) is flattened here,
/// on the caller side of the tagging boundary.
pub fn read_document(raw: &str, format: InputFormat) -> anyhow::Result<String> {
    match format {
        InputFormat::Text => Ok(raw.to_string()),
        InputFormat::Lines => {
            let lines: Vec<String> = serde_json::from_str(raw)?;
            Ok(RecognizedText::from(lines).text())
        }
        InputFormat::Blocks => {
            let blocks: Vec<KeyValueBlock> = serde_json::from_str(raw)?;
            Ok(flatten_blocks(&blocks))
        }
    }
}

pub fn extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Json => "json",
        OutputFormat::Csv => "csv",
        OutputFormat::Text => "txt",
    }
}

pub fn format_export(export: &ReceiptExport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(export.to_json()?),
        OutputFormat::Csv => format_csv(&export.fields),
        OutputFormat::Text => Ok(format_table(export)),
    }
}

fn format_csv(record: &ReceiptRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["campo", "valor", "detectado"])?;

    for field in ReceiptField::ALL {
        let value = record.get(field);
        wtr.write_record([
            field.key(),
            value.unwrap_or(NOT_DETECTED),
            if value.is_some() { "si" } else { "no" },
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_table(export: &ReceiptExport) -> String {
    let mut output = String::new();

    output.push_str("Información extraída del comprobante\n\n");

    for field in ReceiptField::ALL {
        match export.fields.get(field) {
            Some(value) => output.push_str(&format!(
                "  {} {:<22} {}\n",
                style("✓").green(),
                field.label(),
                value
            )),
            None => output.push_str(&format!(
                "  {} {:<22} {}\n",
                style("✗").red(),
                field.label(),
                NOT_DETECTED
            )),
        }
    }

    output.push_str(&format!(
        "\nCompletitud: {}/{} campos ({:.2})\n",
        export.summary.detected_fields,
        export.summary.total_fields,
        export.summary.completeness
    ));

    output
}
