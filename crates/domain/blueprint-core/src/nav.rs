use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Dashboard,
    Upload,
    Parameters,
    Output,
    Walkthrough,
}

impl Page {
    /// Nav order.
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Upload,
        Page::Parameters,
        Page::Output,
        Page::Walkthrough,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Upload => "upload",
            Page::Parameters => "parameters",
            Page::Output => "output",
            Page::Walkthrough => "walkthrough",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Upload => "Upload Blueprint",
            Page::Parameters => "Parameters",
            Page::Output => "3D Output",
            Page::Walkthrough => "Walkthrough",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page token '{0}'")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.token() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Which page is visible. Any page can be selected from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current: Page,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current: Page::Dashboard,
        }
    }
}

impl NavigationState {
    pub fn current(&self) -> Page {
        self.current
    }

    pub fn select(&mut self, page: Page) {
        self.current = page;
    }

    /// Selects the page named by `token`. Unknown tokens leave the state untouched.
    pub fn select_token(&mut self, token: &str) -> bool {
        match token.parse::<Page>() {
            Ok(page) => {
                self.select(page);
                true
            }
            Err(e) => {
                tracing::trace!("ignoring navigation request: {e}");
                false
            }
        }
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.current == page
    }
}
