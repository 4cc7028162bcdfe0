use clap::Parser;
use clap::error::ErrorKind;
use colored::*;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use excel_to_csv::logging::{self, Verbosity};
use excel_to_csv::{ConversionOptions, convert};

/// Export each sheet of an Excel workbook to its own CSV file.
///
/// For `datos.xlsx` with sheets `Sheet1` and `Sheet2` this writes
/// `datos (Sheet1 sheet).csv` and `datos (Sheet2 sheet).csv`.
#[derive(Parser, Debug)]
#[command(name = "excel-to-csv", version, about)]
struct Cli {
    /// Workbook to convert (xlsx, xlsm, xlsb, xls, ods)
    workbook: Option<PathBuf>,

    /// Output directory for the CSV files (default: the workbook's directory)
    output_dir: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long)]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Extra positional arguments, ignored
    #[arg(hide = true)]
    extra: Vec<OsString>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    if cli.no_color {
        colored::control::set_override(false);
    }

    let Some(workbook) = cli.workbook else {
        print_usage();
        return ExitCode::FAILURE;
    };

    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    if !cli.extra.is_empty() {
        log::debug!("Ignoring {} extra argument(s)", cli.extra.len());
    }

    let options = ConversionOptions {
        output_dir: cli.output_dir,
    };

    match convert(&workbook, &options) {
        Ok(report) => {
            println!();
            println!("{}", "Archivos generados:".bold());
            for path in report.written_paths() {
                println!("  • {}", path.display().to_string().green());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Error durante la conversión: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "excel-to-csv".to_string());

    println!(
        "{}",
        "Error: Debes proporcionar la ruta al archivo Excel".red()
    );
    println!();
    println!("Uso: {} <archivo.xlsx> [output_dir]", program);
    println!();
    println!("Ejemplo:");
    println!("  {} datos.xlsx", program);
    println!("  {} datos.xlsx /ruta/salida/", program);
}
