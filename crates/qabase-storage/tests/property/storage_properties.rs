//! Property tests: stored text survives verbatim, table order is insertion order,
//! synonym lookup is exact.

use proptest::prelude::*;

use qabase_core::models::NewRequest;
use qabase_core::traits::IQaStorage;
use qabase_storage::StorageEngine;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_requests_round_trip_in_order(
        rows in prop::collection::vec(("\\PC{0,24}", "\\PC{0,24}"), 0..12)
    ) {
        let storage = StorageEngine::open_in_memory().unwrap();
        for (request, answer) in &rows {
            storage
                .insert_request(&NewRequest { request: request.clone(), answer: answer.clone() })
                .unwrap();
        }

        let stored = storage.list_requests().unwrap();
        prop_assert_eq!(stored.len(), rows.len());
        prop_assert_eq!(storage.count_requests().unwrap(), rows.len());
        for (row, (request, answer)) in stored.iter().zip(&rows) {
            prop_assert_eq!(&row.request, request);
            prop_assert_eq!(&row.answer, answer);
        }
        prop_assert!(stored.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn prop_synonym_lookup_is_exact(
        cores in prop::collection::vec("[а-я]{1,6}", 1..8),
        probe in prop::collection::vec("[а-я]{1,6}", 0..8)
    ) {
        let storage = StorageEngine::open_in_memory().unwrap();
        for core in &cores {
            storage.insert_synonym(core, "х").unwrap();
        }

        let found = storage.synonyms_for(&probe).unwrap();
        let expected: Vec<&String> = cores.iter().filter(|c| probe.contains(c)).collect();
        let got: Vec<&String> = found.iter().map(|s| &s.core_word).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_service_word_batches_count_every_row(
        words in prop::collection::vec("[а-я]{1,10}", 0..40)
    ) {
        let storage = StorageEngine::open_in_memory().unwrap();
        prop_assert_eq!(storage.insert_service_words(&words).unwrap(), words.len());
        let stored: Vec<String> = storage
            .list_service_words()
            .unwrap()
            .into_iter()
            .map(|w| w.word)
            .collect();
        prop_assert_eq!(stored, words);
    }
}
