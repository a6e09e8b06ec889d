use waifudex_core::Resolver;

use crate::error::CliError;

use super::CommandReport;

pub fn run(resolver: &Resolver) -> Result<CommandReport, CliError> {
    let chain = resolver.chain();

    let text = if chain.is_empty() {
        String::from("no providers enabled")
    } else {
        chain
            .iter()
            .map(|entry| {
                format!(
                    "{}. {} ({})",
                    entry.position, entry.provider, entry.gender_policy
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    Ok(CommandReport::found(text, serde_json::to_value(&chain)?))
}
