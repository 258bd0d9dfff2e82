//! Sections of the how-to guide.

use super::GuideError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One page of the how-to guide, in sidebar order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuideSection {
    /// Tooling required before using any agent.
    #[default]
    Prerequisites,
    /// Running agents on a development machine.
    LocalSetup,
    /// Putting agents behind a gateway.
    GatewaySetup,
    /// Calling agents from client code.
    UsingAgents,
    /// Production deployment checklist.
    Production,
}

impl GuideSection {
    /// Every section in sidebar order.
    pub const ALL: [Self; 5] = [
        Self::Prerequisites,
        Self::LocalSetup,
        Self::GatewaySetup,
        Self::UsingAgents,
        Self::Production,
    ];

    /// Returns the identifier used in guide URLs.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Prerequisites => "prerequisites",
            Self::LocalSetup => "local-setup",
            Self::GatewaySetup => "gateway-setup",
            Self::UsingAgents => "using-agents",
            Self::Production => "production",
        }
    }

    /// Returns the sidebar title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Prerequisites => "Prerequisites",
            Self::LocalSetup => "Local Development",
            Self::GatewaySetup => "Gateway Setup",
            Self::UsingAgents => "Using Agents",
            Self::Production => "Production Setup",
        }
    }

    /// Returns the sidebar icon.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Prerequisites => "📋",
            Self::LocalSetup => "💻",
            Self::GatewaySetup => "🚀",
            Self::UsingAgents => "🤖",
            Self::Production => "🏭",
        }
    }
}

impl fmt::Display for GuideSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl TryFrom<&str> for GuideSection {
    type Error = GuideError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == value)
            .ok_or_else(|| GuideError::UnknownSection(value.to_owned()))
    }
}
