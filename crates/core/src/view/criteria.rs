use super::{ViewConfig, FILTER_ALL};

/// Errors raised by criteria manipulation.
///
/// These are programming errors on the caller's side, not user-facing
/// runtime conditions, and fail fast rather than silently no-opping.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("unknown filter key: {0}")]
    UnknownFilterKey(String),
}

/// The current search term plus categorical filter selections for one view.
///
/// The filter key set is fixed at construction from the view configuration;
/// every filter starts at the identity sentinel `"all"` and the search term
/// starts empty, which together pass every record through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    search_term: String,
    filters: Vec<(&'static str, String)>,
}

impl Criteria {
    /// Criteria in the all-pass state for the given view.
    pub fn for_view(config: &ViewConfig) -> Self {
        Self {
            search_term: String::new(),
            filters: config
                .category_fields
                .iter()
                .map(|key| (*key, FILTER_ALL.to_owned()))
                .collect(),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Replaces the search term. An empty string means "no search".
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The current value of one categorical filter.
    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces one categorical filter by key.
    ///
    /// The key must be one of the view's configured category fields;
    /// anything else is a caller error.
    pub fn set_filter(&mut self, key: &str, value: impl Into<String>) -> Result<(), ViewError> {
        match self.filters.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(ViewError::UnknownFilterKey(key.to_owned())),
        }
    }

    /// Resets the search term and every categorical filter to their
    /// defaults in one step. Idempotent.
    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        for (_, value) in &mut self.filters {
            *value = FILTER_ALL.to_owned();
        }
    }

    /// True iff the search term is non-empty or any categorical filter is
    /// away from its identity value.
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty()
            || self
                .filters
                .iter()
                .any(|(_, value)| !value.is_empty() && !value.eq_ignore_ascii_case(FILTER_ALL))
    }

    /// Iterates the categorical filters in configuration order.
    pub fn filters(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.filters.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
