use sheetlist_core::{DEFAULT_SHEETS_BASE_URL, DEFAULT_TOKEN_URL};

/// Remote endpoints used by the token manager and record client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Token exchange URL; also the assertion audience.
    pub token_url: String,
    pub sheets_base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            sheets_base_url: DEFAULT_SHEETS_BASE_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Serves both APIs from one origin, with the token endpoint at `/token`.
    pub fn rooted_at(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            token_url: format!("{base}/token"),
            sheets_base_url: base.to_string(),
        }
    }

    pub(crate) fn sheets_base(&self) -> &str {
        self.sheets_base_url.trim_end_matches('/')
    }
}
