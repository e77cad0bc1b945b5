//! Property-based tests for the Puppet section structure.
//!
//! These tests use proptest to drive the builder with arbitrary call
//! sequences and lookups, and check them against the declarative shape.

#[cfg(test)]
mod proptest_tests {
    use crate::section::{PulpCli, SectionTree};
    use crate::structure::{
        ensure_puppet_root, ensure_subtree, find_section, SectionShape, Topic, STRUCTURE,
    };
    use proptest::prelude::*;

    /// Segment names that appear in the tree, plus one that never does.
    const SEGMENTS: &[&str] = &[
        "puppet",
        "consumer",
        "repo",
        "install",
        "update",
        "uninstall",
        "uploads",
        "sync",
        "publish",
        "schedules",
        "bogus",
    ];

    #[derive(Debug, Clone, Copy)]
    enum Call {
        Root,
        Ensure(Topic),
    }

    fn call_strategy() -> impl Strategy<Value = Call> {
        prop_oneof![
            Just(Call::Root),
            Just(Call::Ensure(Topic::Consumer)),
            Just(Call::Ensure(Topic::Repo)),
        ]
    }

    fn shape_size(shape: &SectionShape) -> usize {
        1 + shape.children.iter().map(shape_size).sum::<usize>()
    }

    fn shape_contains(shape: &SectionShape, path: &[&str]) -> bool {
        match path.split_first() {
            None => true,
            Some((first, rest)) => shape
                .children
                .iter()
                .find(|c| c.name == *first)
                .is_some_and(|child| shape_contains(child, rest)),
        }
    }

    proptest! {
        /// Property: any sequence of ensure calls yields exactly the union of
        /// the requested subtrees, never duplicates
        #[test]
        fn ensure_calls_never_duplicate(calls in prop::collection::vec(call_strategy(), 1..12)) {
            let mut cli = PulpCli::new();
            let mut consumer = false;
            let mut repo = false;

            for call in &calls {
                match call {
                    Call::Root => {
                        ensure_puppet_root(&mut cli).unwrap();
                    }
                    Call::Ensure(topic) => {
                        ensure_subtree(&mut cli, *topic).unwrap();
                        match topic {
                            Topic::Consumer => consumer = true,
                            Topic::Repo => repo = true,
                        }
                    }
                }
            }

            let mut expected = 1;
            if consumer {
                expected += shape_size(Topic::Consumer.shape());
            }
            if repo {
                expected += shape_size(Topic::Repo.shape());
            }
            prop_assert_eq!(cli.root_section().descendant_count(), expected);
        }

        /// Property: on a fully built tree, lookups succeed exactly for the
        /// paths present in the declarative shape
        #[test]
        fn find_section_matches_shape(
            indices in prop::collection::vec(0..SEGMENTS.len(), 0..5)
        ) {
            let mut cli = PulpCli::new();
            ensure_subtree(&mut cli, Topic::Repo).unwrap();
            ensure_subtree(&mut cli, Topic::Consumer).unwrap();

            let path: Vec<&str> = indices.iter().map(|&i| SEGMENTS[i]).collect();
            let expected = match path.split_first() {
                None => true,
                Some((first, rest)) => *first == STRUCTURE.name && shape_contains(&STRUCTURE, rest),
            };

            prop_assert_eq!(find_section(&cli, &path).is_some(), expected, "path: {:?}", path);
        }
    }
}
