use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("parameter '{name}' must be an integer, got '{value}'")]
    NotAnInteger { name: String, value: String },
    #[error("parameter '{name}' must be a positive integer, got '{value}'")]
    NotACount { name: String, value: String },
    #[error("parameter '{name}' must be at most {max}, got {value}")]
    TooLarge { name: String, max: u32, value: u32 },
}

/// Decoded `application/x-www-form-urlencoded` query string.
///
/// Lookups return the first occurrence of a key. Empty values are kept
/// verbatim by [`QueryParams::raw`] but count as absent everywhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(query: &str) -> Self {
        let pairs = url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn raw(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Non-empty string value.
    pub fn text(&self, name: &str) -> Option<String> {
        self.raw(name).filter(|v| !v.is_empty()).map(str::to_string)
    }

    pub fn text_or(&self, name: &str, default: &str) -> String {
        self.raw(name).unwrap_or(default).to_string()
    }

    pub fn int(&self, name: &str) -> Result<Option<i64>, ParamError> {
        let Some(v) = self.raw(name).map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(None);
        };
        v.parse::<i64>().map(Some).map_err(|_| ParamError::NotAnInteger {
            name: name.to_string(),
            value: v.to_string(),
        })
    }

    /// Unsigned count such as `page` or `per_page`, falling back to `default`
    /// when the key is missing or empty.
    pub fn count_or(&self, name: &str, default: u32) -> Result<u32, ParamError> {
        let Some(v) = self.raw(name).map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(default);
        };
        v.parse::<u32>().map_err(|_| ParamError::NotACount {
            name: name.to_string(),
            value: v.to_string(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
