use super::{Criteria, NumericSearchMode, Record, ViewConfig, FILTER_ALL};

/// Decides whether one record appears in the derived view under the given
/// criteria.
///
/// A record is included iff the search term matches and every categorical
/// filter away from its identity value passes.
pub fn record_matches<R: Record>(record: &R, criteria: &Criteria, config: &ViewConfig) -> bool {
    matches_search(record, criteria.search_term(), config)
        && criteria
            .filters()
            .all(|(key, value)| category_passes(record, key, value))
}

fn matches_search<R: Record>(record: &R, term: &str, config: &ViewConfig) -> bool {
    if term.is_empty() {
        return true;
    }

    if is_all_digits(term) {
        match config.numeric_mode {
            NumericSearchMode::IdSubstring => {
                return record.id().to_ascii_lowercase().contains(term);
            }
            NumericSearchMode::IdExact => return id_equals(record.id().as_ref(), term),
            NumericSearchMode::TextFields => {}
        }
    }

    let needle = term.to_ascii_lowercase();
    config.text_fields.iter().any(|field| {
        record
            .field(field)
            .is_some_and(|value| value.to_ascii_lowercase().contains(&needle))
    })
}

fn category_passes<R: Record>(record: &R, key: &str, selected: &str) -> bool {
    if is_identity(selected) {
        return true;
    }
    match record.field(key) {
        Some(actual) => actual.eq_ignore_ascii_case(selected),
        None => false,
    }
}

/// `"all"` and the empty string are the universal identity values: they
/// must never exclude records.
fn is_identity(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case(FILTER_ALL)
}

fn is_all_digits(term: &str) -> bool {
    !term.is_empty() && term.bytes().all(|b| b.is_ascii_digit())
}

fn id_equals(id: &str, term: &str) -> bool {
    if id == term {
        return true;
    }
    // "7" should find the record numbered 7 even when the id renders as
    // "007"; compare numerically when both sides parse.
    match (id.parse::<u64>(), term.parse::<u64>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
