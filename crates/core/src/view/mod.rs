//! The collection view derivation engine.
//!
//! Every list page in the system shows the same shape of data: an in-memory
//! collection of records, a free-text search term, a handful of categorical
//! filters with an `"all"` sentinel, and a row of stat cards computed from
//! whatever survives the filters. This module implements that once,
//! parameterised by a per-record-kind [`ViewConfig`], instead of once per
//! page.
//!
//! Filtering is a pure function of (records, criteria): the store is never
//! mutated and the derived view is recomputed on demand, never cached.

mod criteria;
mod derive;
mod predicate;

pub use criteria::{Criteria, ViewError};
pub use derive::derive_view;
pub use predicate::record_matches;

use serde::Serialize;
use std::borrow::Cow;

/// The categorical filter value that matches everything.
pub const FILTER_ALL: &str = "all";

/// Uniform, read-only access to a record's identifier and named fields.
///
/// `field` returns `None` for fields the record does not carry; a missing
/// field never matches a categorical constraint other than the identity
/// sentinel and is skipped by text search. Malformed records therefore
/// filter safely instead of erroring.
pub trait Record {
    /// The record identifier in string form.
    fn id(&self) -> Cow<'_, str>;

    /// The value of a named field, if the record has one.
    fn field(&self, key: &str) -> Option<Cow<'_, str>>;
}

/// How a search term consisting solely of ASCII digits is routed.
///
/// Views disagree on what a digit-only term means: an id lookup by
/// substring, an exact id lookup, or ordinary text (what a phone-number
/// search needs). The choice is explicit per view rather than implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericSearchMode {
    /// All-digit terms match iff the record id contains the term.
    /// Text fields are not consulted.
    IdSubstring,
    /// All-digit terms match iff the record id equals the term
    /// (string-wise, or numerically when both sides parse).
    IdExact,
    /// No special casing: digit terms search the text fields like any
    /// other term.
    TextFields,
}

/// What a stat card counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// Number of records in the filtered view.
    Total,
    /// Number of filtered records whose `field` equals `value`
    /// (ASCII case-insensitive).
    Matching {
        field: &'static str,
        value: &'static str,
    },
    /// Number of distinct values of `field` among the filtered records.
    Distinct { field: &'static str },
}

/// Specification of one stat card.
#[derive(Debug, Clone, Copy)]
pub struct StatSpec {
    pub title: &'static str,
    pub detail: &'static str,
    pub kind: StatKind,
}

/// A computed stat card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub title: String,
    pub value: usize,
    pub detail: String,
}

/// Per-record-kind parameters of the derivation engine.
#[derive(Debug, Clone, Copy)]
pub struct ViewConfig {
    /// Fields consulted by non-numeric text search, in order.
    pub text_fields: &'static [&'static str],
    /// Keys of the categorical filters this view accepts.
    pub category_fields: &'static [&'static str],
    /// Routing for all-digit search terms.
    pub numeric_mode: NumericSearchMode,
    /// Stat cards computed from the filtered records.
    pub stats: &'static [StatSpec],
}

/// The filtered records plus their stat cards.
///
/// Record order is store order; stats are always derived from the filtered
/// records, not the raw store, so the cards reflect the current filter
/// state.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedView<R> {
    pub records: Vec<R>,
    pub stats: Vec<Stat>,
}

impl<R> DerivedView<R> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
