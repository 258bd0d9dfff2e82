//! Page routes of the catalog front-end.

use super::GuideSection;
use std::fmt;

/// Page a URL path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// The agent catalog listing.
    Agents,
    /// A section of the how-to guide.
    Guide(GuideSection),
}

impl Route {
    /// Resolves a URL path to a page.
    ///
    /// `/` and unknown paths land on the catalog, `/how-to/` opens the first
    /// guide section, and an unknown guide section falls back to the first
    /// one. Trailing slashes are optional.
    ///
    /// ```
    /// use agent_catalog::guide::{GuideSection, Route};
    ///
    /// assert_eq!(Route::resolve("/"), Route::Agents);
    /// assert_eq!(
    ///     Route::resolve("/how-to/gateway-setup/"),
    ///     Route::Guide(GuideSection::GatewaySetup)
    /// );
    /// ```
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["how-to"] => Self::Guide(GuideSection::default()),
            ["how-to", section] => Self::Guide(GuideSection::try_from(*section).unwrap_or_default()),
            _ => Self::Agents,
        }
    }

    /// Returns the canonical path of this page.
    #[must_use]
    pub fn canonical_path(self) -> String {
        match self {
            Self::Agents => "/agents/".to_owned(),
            Self::Guide(section) => format!("/how-to/{}/", section.id()),
        }
    }

    /// Returns whether `path` must be redirected to the canonical path.
    #[must_use]
    pub fn needs_redirect(path: &str) -> bool {
        Self::resolve(path).canonical_path() != path
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_path())
    }
}
