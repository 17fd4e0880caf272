//! Property-based tests for the changed file set.
//!
//! These tests use proptest to generate random sequences of diff output and
//! verify that the deduplication and ordering invariants hold.

#[cfg(test)]
mod proptest_tests {
    use crate::changes::ChangedFiles;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn path_strategy() -> impl Strategy<Value = PathBuf> {
        // A small alphabet so that duplicates are common
        "/repo/[abc]{1,2}/[xyz]\\.(m|h)".prop_map(PathBuf::from)
    }

    proptest! {
        /// Property: no path is ever reported twice
        #[test]
        fn collected_paths_are_unique(input in prop::collection::vec(path_strategy(), 0..64)) {
            let files: ChangedFiles = input.into_iter().collect();
            let unique: HashSet<_> = files.iter().collect();
            prop_assert_eq!(unique.len(), files.len());
        }

        /// Property: output order is the order of first discovery
        #[test]
        fn collected_paths_follow_first_discovery(input in prop::collection::vec(path_strategy(), 0..64)) {
            let mut expected: Vec<PathBuf> = Vec::new();
            for path in &input {
                if !expected.contains(path) {
                    expected.push(path.clone());
                }
            }

            let files: ChangedFiles = input.into_iter().collect();
            let collected: Vec<PathBuf> = files.iter().cloned().collect();
            prop_assert_eq!(collected, expected);
        }

        /// Property: splitting the input across several diffs changes nothing
        #[test]
        fn batching_does_not_change_result(
            first in prop::collection::vec(path_strategy(), 0..32),
            second in prop::collection::vec(path_strategy(), 0..32),
        ) {
            let mut batched = ChangedFiles::new();
            batched.extend(first.clone());
            batched.extend(second.clone());

            let single: ChangedFiles = first.into_iter().chain(second).collect();
            prop_assert_eq!(batched, single);
        }
    }
}
