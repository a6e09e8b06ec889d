use serde::{Deserialize, Serialize};

use crate::reply::Reply;
use crate::resolver::{AttemptFailure, Resolver};
use crate::{CharacterQuery, ProviderId, ValidationError, MAX_QUERY_CHARS};

pub const COMMAND_NAME: &str = "waifu";
pub const COMMAND_DESCRIPTION: &str = "Get details about your favorite anime waifu";

const CHAT_INPUT: u8 = 1;
const STRING_OPTION: u8 = 3;

/// Slash-command option in Discord's application-command shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOption {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: String,
    pub description: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

/// Declaration of the `waifu` slash command, for inspection and manual registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: String,
    pub description: String,
    pub options: Vec<CommandOption>,
}

impl CommandDefinition {
    pub fn waifu() -> Self {
        Self {
            kind: CHAT_INPUT,
            name: String::from(COMMAND_NAME),
            description: String::from(COMMAND_DESCRIPTION),
            options: vec![CommandOption {
                kind: STRING_OPTION,
                name: String::from("name"),
                description: String::from("Character name to look up"),
                required: true,
                max_length: Some(MAX_QUERY_CHARS),
            }],
        }
    }
}

/// Result of one `waifu` invocation: the reply plus the trail that produced it.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub query: String,
    pub reply: Reply,
    pub selected_source: Option<ProviderId>,
    pub source_chain: Vec<ProviderId>,
    pub failures: Vec<AttemptFailure>,
    pub latency_ms: u64,
    /// Set when the name was rejected before any provider was called.
    pub input_error: Option<ValidationError>,
}

/// Handler behind the `waifu` command.
pub struct WaifuCommand {
    resolver: Resolver,
}

impl WaifuCommand {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Resolves `name` and renders the reply. Never fails: bad input and
    /// exhausted providers both produce the not-found reply.
    pub async fn handle(&self, name: &str) -> CommandOutcome {
        let query = match CharacterQuery::parse(name) {
            Ok(query) => query,
            Err(error) => {
                tracing::debug!(%error, "rejected command input");
                return CommandOutcome {
                    query: name.trim().to_owned(),
                    reply: Reply::NotFound,
                    selected_source: None,
                    source_chain: Vec::new(),
                    failures: Vec::new(),
                    latency_ms: 0,
                    input_error: Some(error),
                };
            }
        };

        let result = self.resolver.resolve(&query).await;
        let reply = Reply::from_resolution(&result, self.resolver.max_field_chars());

        let (selected_source, source_chain, failures, latency_ms) = match result {
            Ok(success) => (
                Some(success.selected_source),
                success.source_chain,
                success.failures,
                success.latency_ms,
            ),
            Err(failure) => (
                None,
                failure.source_chain,
                failure.failures,
                failure.latency_ms,
            ),
        };

        CommandOutcome {
            query: query.into(),
            reply,
            selected_source,
            source_chain,
            failures,
            latency_ms,
            input_error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_serializes_as_chat_input_command() {
        let value = serde_json::to_value(CommandDefinition::waifu()).expect("serializes");

        assert_eq!(value["type"], 1);
        assert_eq!(value["name"], "waifu");
        assert_eq!(value["description"], COMMAND_DESCRIPTION);
        assert_eq!(value["options"][0]["type"], 3);
        assert_eq!(value["options"][0]["name"], "name");
        assert_eq!(value["options"][0]["required"], true);
        assert_eq!(value["options"][0]["max_length"], 100);
    }
}
