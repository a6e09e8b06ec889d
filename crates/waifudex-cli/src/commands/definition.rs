use waifudex_core::CommandDefinition;

use crate::error::CliError;

use super::CommandReport;

pub fn run() -> Result<CommandReport, CliError> {
    let json = serde_json::to_value(CommandDefinition::waifu())?;
    let text = serde_json::to_string_pretty(&json)?;
    Ok(CommandReport::found(text, json))
}
