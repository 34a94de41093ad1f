//! Property-based tests for feature encoding.

use proptest::prelude::*;

use reason::data::ValueRef;
use reason::encoding::{bucket_hash, category_of, encode, Encoded};
use reason::inference::ftrl::SlotLayout;
use reason::model::{Feature, Model};

fn arb_vocabulary() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,6}", 0..8).prop_map(|set| set.into_iter().collect())
}

proptest! {
    #[test]
    fn vocabulary_takes_precedence(
        vocabulary in arb_vocabulary(),
        buckets in 0u32..64,
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!vocabulary.is_empty());
        let feature =
            Feature::categorical_vocabulary_hash_buckets("f", vocabulary.clone(), buckets);
        let i = pick.index(vocabulary.len());
        prop_assert_eq!(category_of(&feature, ValueRef::Text(&vocabulary[i])), Some(i));
    }

    #[test]
    fn hashed_categories_stay_in_range(
        vocabulary in arb_vocabulary(),
        buckets in 1u32..1024,
        value in "\\PC{0,16}",
    ) {
        prop_assume!(!vocabulary.contains(&value));
        let feature =
            Feature::categorical_vocabulary_hash_buckets("f", vocabulary.clone(), buckets);
        let category = category_of(&feature, ValueRef::Text(&value)).unwrap();
        prop_assert!(category >= vocabulary.len());
        prop_assert!(category < vocabulary.len() + buckets as usize);
        prop_assert_eq!(feature.num_categories(), Some(vocabulary.len() + buckets as usize));
    }

    #[test]
    fn encoding_is_deterministic(value in "\\PC{0,32}", buckets in 1u32..4096) {
        let feature = Feature::categorical_hash_buckets("f", buckets);
        let a = encode(&feature, Some(ValueRef::Text(&value)));
        let b = encode(&feature, Some(ValueRef::Text(&value)));
        prop_assert_eq!(a, b);
        prop_assert_eq!(a, bucket_hash(&value, buckets).map(Encoded::Category));
    }

    #[test]
    fn zero_buckets_never_hash(vocabulary in arb_vocabulary(), value in "[0-9]{1,6}") {
        let feature = Feature::categorical("f", vocabulary);
        prop_assert_eq!(category_of(&feature, ValueRef::Text(&value)), None);
        prop_assert_eq!(bucket_hash(&value, 0), None);
    }

    #[test]
    fn encoding_ignores_other_features(
        value in "[a-z]{1,8}",
        extra_buckets in 1u32..64,
        extra_vocabulary in arb_vocabulary(),
    ) {
        let own = Feature::categorical_vocabulary_hash_buckets("m", ["p", "q"], 16);
        let alone = Model::new("y", [own.clone(), Feature::numerical("z")]);
        let crowded = Model::new(
            "y",
            [
                own.clone(),
                Feature::categorical_vocabulary_hash_buckets(
                    "b",
                    extra_vocabulary.clone(),
                    extra_buckets,
                ),
                Feature::numerical("z"),
            ],
        );

        // Same category within the feature, whatever the rest of the model is.
        let value = ValueRef::Text(&value);
        let in_alone = encode(alone.feature("m").unwrap(), Some(value));
        let in_crowded = encode(crowded.feature("m").unwrap(), Some(value));
        prop_assert_eq!(in_alone, in_crowded);
        prop_assert_eq!(in_alone, encode(&own, Some(value)));

        // Only the base offset moves, by the width of the features sorted before it.
        let shift = extra_vocabulary.len() + extra_buckets as usize;
        prop_assert_eq!(SlotLayout::new(&alone).offset_of("m"), Some(0));
        prop_assert_eq!(SlotLayout::new(&crowded).offset_of("m"), Some(shift));
    }

    #[test]
    fn numbers_pass_through(x in -1e12f64..1e12) {
        let feature = Feature::numerical("n");
        prop_assert_eq!(encode(&feature, Some(ValueRef::Number(x))), Some(Encoded::Number(x)));
        prop_assert_eq!(encode(&feature, Some(ValueRef::Text("1"))), None);
    }
}
