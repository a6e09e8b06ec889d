mod definition;
mod providers;
mod waifu;

use serde_json::Value;
use waifudex_core::{GenderPolicy, Resolver, ResolverBuilder, ResolverConfig};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// What a subcommand hands to the renderer.
pub struct CommandReport {
    pub text: String,
    pub json: Value,
    /// False when the lookup ended in the not-found reply.
    pub found: bool,
}

impl CommandReport {
    pub fn found(text: String, json: Value) -> Self {
        Self {
            text,
            json,
            found: true,
        }
    }
}

pub async fn run(cli: &Cli) -> Result<CommandReport, CliError> {
    match &cli.command {
        Command::Waifu(args) => {
            let config = resolver_config(cli)?;
            let user_agent = config.user_agent().to_owned();
            waifu::run(args, build_resolver(cli, config), &user_agent).await
        }
        Command::Definition => definition::run(),
        Command::Providers => providers::run(&build_resolver(cli, resolver_config(cli)?)),
    }
}

fn resolver_config(cli: &Cli) -> Result<ResolverConfig, CliError> {
    let mut config = ResolverConfig::default()
        .with_timeout_ms(cli.timeout_ms)
        .with_max_field_chars(cli.max_field_chars)?
        .with_waifu_it_token(cli.waifu_it_token.clone());
    if let Some(user_agent) = &cli.user_agent {
        config = config.with_user_agent(user_agent.as_str());
    }
    Ok(config)
}

fn build_resolver(cli: &Cli, config: ResolverConfig) -> Resolver {
    let mut builder = ResolverBuilder::new(config);
    for provider in &cli.skip {
        builder = builder.with_provider_enabled(*provider, false);
    }
    if cli.filter_all {
        builder = builder.with_uniform_gender_policy(GenderPolicy::RequireFemale);
    }

    builder.build()
}
