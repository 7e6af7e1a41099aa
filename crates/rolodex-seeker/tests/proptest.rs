//! Property-based tests for seeker using proptest.

use proptest::prelude::*;
use rolodex_seeker::{search, Accessor, Criterion, Field, MatchMode, SeekerError, Searchable};

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Item {
    label: String,
    signed: i64,
    unsigned: u64,
    ratio: f32,
    flag: bool,
}

fn label(item: &Item) -> &str {
    &item.label
}

fn signed(item: &Item) -> i64 {
    item.signed
}

fn unsigned(item: &Item) -> u64 {
    item.unsigned
}

fn ratio(item: &Item) -> f32 {
    item.ratio
}

fn flag(item: &Item) -> bool {
    item.flag
}

impl Searchable for Item {
    const FIELDS: &'static [Field<Self>] = &[
        Field::new("label", Accessor::Text(label)),
        Field::new("signed", Accessor::Signed(signed)),
        Field::new("unsigned", Accessor::Unsigned(unsigned)),
        Field::new("ratio", Accessor::Float32(ratio)),
        Field::new("flag", Accessor::Bool(flag)),
    ];
}

fn item_strategy() -> impl Strategy<Value = Item> {
    (
        "[a-zA-Zα-ωΑ-Ω ]{1,12}",
        any::<i64>(),
        any::<u64>(),
        -1.0e6f32..1.0e6f32,
        any::<bool>(),
    )
        .prop_map(|(label, signed, unsigned, ratio, flag)| Item {
            label,
            signed,
            unsigned,
            ratio,
            flag,
        })
}

fn number_mode() -> impl Strategy<Value = MatchMode> {
    prop::sample::select(vec![
        MatchMode::Equals,
        MatchMode::NotEquals,
        MatchMode::GreaterThan,
        MatchMode::GreaterThanOrEqual,
        MatchMode::LessThan,
        MatchMode::LessThanOrEqual,
    ])
}

fn text_mode() -> impl Strategy<Value = MatchMode> {
    prop::sample::select(vec![
        MatchMode::Contains,
        MatchMode::StartsWith,
        MatchMode::EndsWith,
        MatchMode::Exact,
    ])
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Any substring of a label is found by the default (Contains) mode.
    #[test]
    fn contains_finds_every_substring(
        item in item_strategy(),
        start in 0usize..12,
        len in 0usize..12,
    ) {
        let chars: Vec<char> = item.label.chars().collect();
        let start = start.min(chars.len());
        let end = (start + len).min(chars.len());
        let needle: String = chars[start..end].iter().collect();

        let items = vec![item];
        let found = search(&items, &Criterion::new("label", needle)).unwrap();
        prop_assert_eq!(found.len(), 1);
    }

    /// Text matching ignores case on both sides.
    #[test]
    fn text_matching_is_case_insensitive(
        items in prop::collection::vec(item_strategy(), 0..30),
        needle in "[a-zA-Z]{0,3}",
        mode in text_mode(),
    ) {
        let upper_items: Vec<Item> = items
            .iter()
            .cloned()
            .map(|mut i| { i.label = i.label.to_uppercase(); i })
            .collect();

        let base = search(&items, &Criterion::new("label", needle.clone()).with_mode(mode))
            .unwrap()
            .len();
        let upper_needle = search(
            &items,
            &Criterion::new("label", needle.to_uppercase()).with_mode(mode),
        )
        .unwrap()
        .len();
        let upper_records = search(
            &upper_items,
            &Criterion::new("label", needle.to_lowercase()).with_mode(mode),
        )
        .unwrap()
        .len();

        prop_assert_eq!(base, upper_needle);
        prop_assert_eq!(base, upper_records);
    }

    /// Equals against the printed value holds for exactly the records with
    /// that value, for every numeric kind.
    #[test]
    fn equals_printed_value(
        items in prop::collection::vec(item_strategy(), 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let chosen = &items[pick.index(items.len())];

        let value = chosen.signed.to_string();
        let found = search(&items, &Criterion::new("signed", value)).unwrap();
        prop_assert!(found.iter().all(|i| i.signed == chosen.signed));
        prop_assert_eq!(found.len(), items.iter().filter(|i| i.signed == chosen.signed).count());

        let value = chosen.unsigned.to_string();
        let found = search(&items, &Criterion::new("unsigned", value)).unwrap();
        prop_assert_eq!(found.len(), items.iter().filter(|i| i.unsigned == chosen.unsigned).count());

        let value = chosen.ratio.to_string();
        let found = search(&items, &Criterion::new("ratio", value)).unwrap();
        prop_assert_eq!(found.len(), items.iter().filter(|i| i.ratio == chosen.ratio).count());
    }

    /// Complementary ordering modes partition the collection.
    #[test]
    fn ordering_modes_partition(
        items in prop::collection::vec(item_strategy(), 0..50),
        threshold in any::<i64>(),
    ) {
        let value = threshold.to_string();
        let count = |mode| {
            search(&items, &Criterion::new("signed", value.clone()).with_mode(mode))
                .unwrap()
                .len()
        };

        prop_assert_eq!(count(MatchMode::GreaterThan) + count(MatchMode::LessThanOrEqual), items.len());
        prop_assert_eq!(count(MatchMode::LessThan) + count(MatchMode::GreaterThanOrEqual), items.len());
        prop_assert_eq!(count(MatchMode::Equals) + count(MatchMode::NotEquals), items.len());
        prop_assert_eq!(
            count(MatchMode::GreaterThan),
            items.iter().filter(|i| i.signed > threshold).count()
        );
    }

    /// Search never grows the collection and never reorders it.
    #[test]
    fn search_preserves_encounter_order(
        items in prop::collection::vec(item_strategy(), 0..50),
        threshold in any::<u64>(),
        mode in number_mode(),
    ) {
        let criterion = Criterion::new("unsigned", threshold.to_string()).with_mode(mode);
        let found = search(&items, &criterion).unwrap();
        prop_assert!(found.len() <= items.len());

        let mut cursor = items.iter();
        for hit in &found {
            prop_assert!(cursor.any(|i| std::ptr::eq(i, *hit)));
        }
    }

    /// Repeated searches return the same records.
    #[test]
    fn search_is_idempotent(
        items in prop::collection::vec(item_strategy(), 0..50),
        flag in any::<bool>(),
    ) {
        let criterion = Criterion::new("flag", flag.to_string());
        let first = search(&items, &criterion).unwrap();
        let second = search(&items, &criterion).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Unknown field names fail regardless of value or mode.
    #[test]
    fn unknown_field_always_fails(
        items in prop::collection::vec(item_strategy(), 0..10),
        field in "[a-z]{1,10}",
        value in ".{0,10}",
        mode in prop::sample::select(MatchMode::ALL.to_vec()),
    ) {
        prop_assume!(Item::field(&field).is_none());
        let err = search(&items, &Criterion::new(field.clone(), value).with_mode(mode)).unwrap_err();
        prop_assert_eq!(err, SeekerError::InvalidField(field));
    }

    /// Non-numeric text never parses as a numeric criterion.
    #[test]
    fn alphabetic_values_are_invalid_for_numbers(
        value in "[g-zG-Z]{1,8}",
        field in prop::sample::select(vec!["signed", "unsigned"]),
    ) {
        let items: Vec<Item> = Vec::new();
        let err = search(&items, &Criterion::new(field, value)).unwrap_err();
        let is_invalid_value = matches!(err, SeekerError::InvalidCriteriaValue { .. });
        prop_assert!(is_invalid_value);
    }
}
