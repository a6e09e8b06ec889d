use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::commands::CommandReport;
use crate::error::CliError;

pub fn render(report: &CommandReport, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => writeln!(handle, "{}", report.text)?,
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut handle, &report.json)?;
            } else {
                serde_json::to_writer(&mut handle, &report.json)?;
            }
            writeln!(handle)?;
        }
    }

    handle.flush()?;
    Ok(())
}
