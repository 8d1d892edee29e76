//! REST handlers, one module per resource.

pub mod consultations;
pub mod health;
pub mod patients;
pub mod queue;
pub mod staff;
pub mod visits;

use crate::error::{map_error, ApiError};
use clinidesk_core::{Criteria, ViewConfig};

/// Builds view criteria from query parameters.
///
/// An absent parameter leaves the corresponding filter at its identity
/// value; the filter keys come from the handler and must belong to the
/// view configuration.
pub(crate) fn build_criteria(
    config: &ViewConfig,
    search: Option<String>,
    filters: Vec<(&'static str, Option<String>)>,
) -> Result<Criteria, ApiError> {
    let mut criteria = Criteria::for_view(config);
    if let Some(term) = search {
        criteria.set_search_term(term);
    }
    for (key, value) in filters {
        if let Some(value) = value {
            criteria
                .set_filter(key, value)
                .map_err(|e| map_error(e.into()))?;
        }
    }
    Ok(criteria)
}
