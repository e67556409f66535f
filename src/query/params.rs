//! RawParams - request parameters as they arrive from a list or edit form.

use std::collections::HashMap;

/// Parameter names shared by every list view.
pub mod keys {
    /// Which control submitted the form: a sort column or the filter button.
    pub const ACTION_BUTTON: &str = "actionButton";
    /// Sort field echoed from the previous response.
    pub const SORT_FIELD: &str = "sortField";
    /// Sort direction echoed from the previous response (`asc`/`desc`).
    pub const SORT_DIRECTION: &str = "sortDirection";
    /// Sort field picked in the filter panel.
    pub const SORT_FIELD_ID: &str = "sortFieldID";
    /// Descending checkbox in the filter panel.
    pub const SORT_DIRECTION_CHECK: &str = "sortDirectionCheck";
    pub const PAGE: &str = "page";
    pub const PAGE_SIZE_ID: &str = "pageSizeID";
}

/// Loosely-typed request parameters.
///
/// Nothing here fails: missing, empty, or unparsable values read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams {
    values: HashMap<String, String>,
}

impl RawParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse an `application/x-www-form-urlencoded` query string.
    /// Later occurrences of a key win; undecodable pairs are skipped.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut values = HashMap::new();
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = urlencoding::decode(&key.replace('+', " ")).map(|k| k.into_owned());
            let value = urlencoding::decode(&value.replace('+', " ")).map(|v| v.into_owned());
            if let (Ok(key), Ok(value)) = (key, value) {
                values.insert(key, value);
            }
        }
        Self { values }
    }

    /// Builder-style setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Raw value, including empty strings.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Non-empty value.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Integer value; anything that does not parse is absent.
    pub fn int(&self, key: &str) -> Option<i64> {
        self.text(key).and_then(|value| value.trim().parse().ok())
    }

    /// Checkbox-style flag: present and non-empty.
    pub fn flag(&self, key: &str) -> bool {
        self.text(key).is_some()
    }

    /// Serialize back to a query string, keys sorted for stable links.
    pub fn to_query(&self) -> String {
        let mut pairs: Vec<_> = self.values.iter().collect();
        pairs.sort();
        pairs
            .into_iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
