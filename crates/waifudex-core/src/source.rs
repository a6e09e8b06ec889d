use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Canonical provider identifiers used in the fallback chain and in output metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderId {
    Anilist,
    Jikan,
    WaifuIm,
    WaifuIt,
}

impl ProviderId {
    /// Every provider, in fallback order.
    pub const ALL: [Self; 4] = [Self::Anilist, Self::Jikan, Self::WaifuIm, Self::WaifuIt];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anilist => "anilist",
            Self::Jikan => "jikan",
            Self::WaifuIm => "waifu_im",
            Self::WaifuIt => "waifu_it",
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "anilist" => Ok(Self::Anilist),
            "jikan" | "mal" => Ok(Self::Jikan),
            "waifu_im" | "waifu-im" | "waifu.im" | "waifuim" => Ok(Self::WaifuIm),
            "waifu_it" | "waifu-it" | "waifu.it" | "waifuit" => Ok(Self::WaifuIt),
            other => Err(ValidationError::InvalidProvider {
                value: other.to_owned(),
            }),
        }
    }
}
