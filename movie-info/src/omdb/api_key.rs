/// Key used when none is configured.
pub const DEFAULT_API_KEY: &str = "eacaff60";

/// OMDb API key after configuration has been resolved.
///
/// Precedence: an explicitly configured value, then [`DEFAULT_API_KEY`]. A key
/// configured as an empty string is treated as not configured.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Option<String>);

impl ApiKey {
    pub fn resolve(configured: Option<String>) -> Self {
        match configured {
            Some(key) if key.trim().is_empty() => ApiKey(None),
            Some(key) => ApiKey(Some(key.trim().to_string())),
            None => ApiKey(Some(DEFAULT_API_KEY.to_string())),
        }
    }

    pub fn get(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.0.is_some()
    }
}

impl Default for ApiKey {
    fn default() -> Self {
        Self::resolve(None)
    }
}

// Keys stay out of debug output
impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(_) => f.write_str("ApiKey(***)"),
            None => f.write_str("ApiKey(None)"),
        }
    }
}
