use super::{record_matches, Criteria, DerivedView, Record, Stat, StatKind, StatSpec, ViewConfig};
use std::collections::BTreeSet;

/// Recomputes the filtered records and their stat cards.
///
/// Pure and total: the input records are untouched, order is preserved, and
/// malformed records (missing fields) filter safely. Stats are computed
/// from the filtered records so the cards reflect the current filter state.
pub fn derive_view<R>(records: &[R], criteria: &Criteria, config: &ViewConfig) -> DerivedView<R>
where
    R: Record + Clone,
{
    let filtered: Vec<R> = records
        .iter()
        .filter(|record| record_matches(*record, criteria, config))
        .cloned()
        .collect();

    let stats = compute_stats(&filtered, config.stats);

    DerivedView {
        records: filtered,
        stats,
    }
}

fn compute_stats<R: Record>(records: &[R], specs: &[StatSpec]) -> Vec<Stat> {
    specs
        .iter()
        .map(|spec| {
            let value = match spec.kind {
                StatKind::Total => records.len(),
                StatKind::Matching { field, value } => records
                    .iter()
                    .filter(|record| {
                        record
                            .field(field)
                            .is_some_and(|actual| actual.eq_ignore_ascii_case(value))
                    })
                    .count(),
                StatKind::Distinct { field } => {
                    let distinct: BTreeSet<String> = records
                        .iter()
                        .filter_map(|record| record.field(field))
                        .map(|value| value.to_ascii_lowercase())
                        .collect();
                    distinct.len()
                }
            };

            Stat {
                title: spec.title.to_owned(),
                value,
                detail: spec.detail.to_owned(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::NumericSearchMode;
    use std::borrow::Cow;

    #[derive(Clone, PartialEq, Debug)]
    struct Person {
        id: u32,
        name: &'static str,
        gender: &'static str,
    }

    impl Record for Person {
        fn id(&self) -> Cow<'_, str> {
            Cow::Owned(self.id.to_string())
        }

        fn field(&self, key: &str) -> Option<Cow<'_, str>> {
            match key {
                "name" => Some(Cow::Borrowed(self.name)),
                "gender" => Some(Cow::Borrowed(self.gender)),
                _ => None,
            }
        }
    }

    const CONFIG: ViewConfig = ViewConfig {
        text_fields: &["name"],
        category_fields: &["gender"],
        numeric_mode: NumericSearchMode::IdSubstring,
        stats: &[
            StatSpec {
                title: "Total",
                detail: "All records",
                kind: StatKind::Total,
            },
            StatSpec {
                title: "Male",
                detail: "",
                kind: StatKind::Matching {
                    field: "gender",
                    value: "Male",
                },
            },
            StatSpec {
                title: "Female",
                detail: "",
                kind: StatKind::Matching {
                    field: "gender",
                    value: "Female",
                },
            },
        ],
    };

    fn people() -> Vec<Person> {
        vec![
            Person {
                id: 1,
                name: "Maria Santos",
                gender: "Female",
            },
            Person {
                id: 2,
                name: "Juan Dela Cruz",
                gender: "Male",
            },
            Person {
                id: 3,
                name: "Ana Reyes",
                gender: "Female",
            },
        ]
    }

    fn stat(view: &DerivedView<Person>, title: &str) -> usize {
        view.stats
            .iter()
            .find(|s| s.title == title)
            .map(|s| s.value)
            .expect("stat present")
    }

    #[test]
    fn identity_criteria_pass_everything_through_in_order() {
        let records = people();
        let criteria = Criteria::for_view(&CONFIG);

        let view = derive_view(&records, &criteria, &CONFIG);

        assert_eq!(view.records, records);
        assert_eq!(stat(&view, "Total"), 3);
    }

    #[test]
    fn worked_example_searching_ana() {
        let records = people();
        let mut criteria = Criteria::for_view(&CONFIG);
        criteria.set_search_term("ana");

        let view = derive_view(&records, &criteria, &CONFIG);

        assert_eq!(view.records.len(), 1);
        assert_eq!(view.records[0].id, 3);
        assert_eq!(stat(&view, "Total"), 1);
        assert_eq!(stat(&view, "Male"), 0);
        assert_eq!(stat(&view, "Female"), 1);
    }

    #[test]
    fn adding_a_category_constraint_narrows_monotonically() {
        let records = people();
        let mut criteria = Criteria::for_view(&CONFIG);
        criteria.set_search_term("a");

        let unconstrained = derive_view(&records, &criteria, &CONFIG);
        criteria.set_filter("gender", "Female").unwrap();
        let constrained = derive_view(&records, &criteria, &CONFIG);

        assert!(constrained.records.len() <= unconstrained.records.len());
        for record in &constrained.records {
            assert!(unconstrained.records.contains(record));
        }
    }

    #[test]
    fn stats_derive_from_filtered_not_raw() {
        let records = vec![
            Person {
                id: 1,
                name: "A",
                gender: "Female",
            },
            Person {
                id: 2,
                name: "B",
                gender: "Female",
            },
            Person {
                id: 3,
                name: "C",
                gender: "Female",
            },
            Person {
                id: 4,
                name: "D",
                gender: "Male",
            },
            Person {
                id: 5,
                name: "E",
                gender: "Male",
            },
        ];

        let mut criteria = Criteria::for_view(&CONFIG);
        criteria.set_filter("gender", "Male").unwrap();

        let view = derive_view(&records, &criteria, &CONFIG);
        assert_eq!(stat(&view, "Total"), 2);
    }

    #[test]
    fn distinct_counts_unique_values_case_insensitively() {
        let records = vec![
            Person {
                id: 1,
                name: "Maria Santos",
                gender: "Female",
            },
            Person {
                id: 2,
                name: "maria santos",
                gender: "Female",
            },
            Person {
                id: 3,
                name: "Ana Reyes",
                gender: "Female",
            },
        ];
        let config = ViewConfig {
            stats: &[StatSpec {
                title: "Unique",
                detail: "",
                kind: StatKind::Distinct { field: "name" },
            }],
            ..CONFIG
        };

        let view = derive_view(&records, &Criteria::for_view(&config), &config);
        assert_eq!(view.stats[0].value, 2);
    }
}
