//! Batch command - tag fields across many recognized-text documents.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, error, warn};

use recibo_core::{extract_banking_fields, ReceiptExport};

use super::tag::{self, InputFormat, OutputFormat, NOT_DETECTED};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file documents
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// How the input files encode recognized documents
    #[arg(long, value_enum, default_value = "text")]
    input_format: InputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of tagging a single file.
struct FileResult {
    path: PathBuf,
    export: Option<ReceiptExport>,
    error: Option<String>,
}

/// One row of the summary CSV. Key reconciliation fields carry an explicit
/// marker when absent.
#[derive(Serialize)]
struct SummaryRow<'a> {
    archivo: &'a str,
    estado: &'a str,
    campos_detectados: usize,
    completitud: f64,
    importe_enviado: &'a str,
    entidad_destino: &'a str,
    numero_operacion: &'a str,
    fecha_hora: &'a str,
    error: &'a str,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match tag_file(&path, args.input_format) {
            Ok(export) => {
                results.push(FileResult {
                    path: path.clone(),
                    export: Some(export),
                    error: None,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(FileResult {
                        path: path.clone(),
                        export: None,
                        error: Some(error_msg),
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    // Write per-file outputs
    for result in &results {
        if let (Some(export), Some(output_dir)) = (&result.export, &args.output_dir) {
            let output_name = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("recibo");

            let output_path =
                output_dir.join(format!("{}.{}", output_name, tag::extension(args.format)));

            fs::write(&output_path, tag::format_export(export, args.format)?)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let successful = results.iter().filter(|r| r.export.is_some()).count();
    let failed = results.len() - successful;

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful).green(),
        style(failed).red()
    );

    if failed > 0 {
        println!();
        println!("{}", style("Failed files:").red());
        for result in results.iter().filter(|r| r.error.is_some()) {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn tag_file(path: &PathBuf, input_format: InputFormat) -> anyhow::Result<ReceiptExport> {
    let raw = fs::read_to_string(path)?;
    let text = tag::read_document(&raw, input_format)?;
    Ok(ReceiptExport::now(extract_banking_fields(&text)))
}

fn write_summary(path: &PathBuf, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        match &result.export {
            Some(export) => {
                let fields = &export.fields;
                wtr.serialize(SummaryRow {
                    archivo: filename,
                    estado: "ok",
                    campos_detectados: export.summary.detected_fields,
                    completitud: export.summary.completeness,
                    importe_enviado: fields.importe_enviado.as_deref().unwrap_or(NOT_DETECTED),
                    entidad_destino: fields.entidad_destino.as_deref().unwrap_or(NOT_DETECTED),
                    numero_operacion: fields.numero_operacion.as_deref().unwrap_or(NOT_DETECTED),
                    fecha_hora: fields.fecha_hora.as_deref().unwrap_or(NOT_DETECTED),
                    error: "",
                })?;
            }
            None => {
                wtr.serialize(SummaryRow {
                    archivo: filename,
                    estado: "error",
                    campos_detectados: 0,
                    completitud: 0.0,
                    importe_enviado: "",
                    entidad_destino: "",
                    numero_operacion: "",
                    fecha_hora: "",
                    error: result.error.as_deref().unwrap_or(""),
                })?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
