use std::sync::Arc;

use waifudex_core::{
    BotConfig, DiscordClient, Envelope, HttpClient, ReqwestHttpClient, Resolver, WaifuCommand,
};

use crate::cli::WaifuArgs;
use crate::error::CliError;

use super::CommandReport;

pub async fn run(
    args: &WaifuArgs,
    resolver: Resolver,
    user_agent: &str,
) -> Result<CommandReport, CliError> {
    let command = WaifuCommand::new(resolver);
    let outcome = command.handle(&args.joined_name()).await;

    if let Some(channel_id) = &args.channel {
        let http_client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new(user_agent));
        let discord = DiscordClient::from_config(http_client, &BotConfig::from_env())?;
        discord.send_reply(channel_id, &outcome.reply).await?;
    }

    let envelope = Envelope::from_outcome(&outcome, outcome.reply.to_message_payload());

    Ok(CommandReport {
        text: outcome.reply.to_text(),
        json: serde_json::to_value(&envelope)?,
        found: outcome.reply.is_found(),
    })
}
