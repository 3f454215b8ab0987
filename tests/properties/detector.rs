//! Property tests for change detection over an in-memory tree.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use proptest::prelude::*;

use livepoll::domain::services::PathFilter;
use livepoll::domain::value_objects::IgnoreSet;
use livepoll::infrastructure::{InMemorySessionStore, MemoryFs};
use livepoll::{PollOutcome, PollUseCase, SessionId, WatchRoot};

/// Relative file paths up to two directories deep
fn tree() -> impl Strategy<Value = BTreeSet<String>> {
    let segment = proptest::string::string_regex("[a-d]{1,2}").unwrap();
    let file = proptest::collection::vec(segment, 1..=3)
        .prop_map(|parts| format!("{}.txt", parts.join("/")));
    proptest::collection::btree_set(file, 1..12)
}

type SiteUseCase = PollUseCase<Arc<MemoryFs>, InMemorySessionStore>;

fn build(files: &BTreeSet<String>, ignored_dir: Option<&str>) -> (Arc<MemoryFs>, SiteUseCase) {
    let fs = Arc::new(MemoryFs::new());
    fs.add_dir("/site");
    for file in files {
        fs.add_file(format!("/site/{}", file), 1_000);
    }
    let ignores = IgnoreSet::from_paths(
        ignored_dir.map(|d| PathBuf::from(format!("/site/{}", d))),
        Vec::<PathBuf>::new(),
    );
    let use_case = PollUseCase::new(
        WatchRoot::from_normalized(PathBuf::from("/site")),
        PathFilter::new(ignores),
        fs.clone(),
        InMemorySessionStore::new(),
    );
    (fs, use_case)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After a baseline, a poll reports a change iff some file was touched.
    #[test]
    fn property_change_iff_touched(
        files in tree(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..4),
    ) {
        let (fs, use_case) = build(&files, None);
        let session = SessionId::generate();
        prop_assert_eq!(use_case.poll(&session).unwrap(), PollOutcome::NoChange);

        let listed: Vec<&String> = files.iter().collect();
        for pick in &picks {
            fs.touch(format!("/site/{}", pick.get(&listed)), 2_000);
        }

        let expected = if picks.is_empty() { PollOutcome::NoChange } else { PollOutcome::Change };
        prop_assert_eq!(use_case.poll(&session).unwrap(), expected);
        // Whatever happened, the next poll starts from the current disk.
        prop_assert_eq!(use_case.poll(&session).unwrap(), PollOutcome::NoChange);
    }

    /// PROPERTY: Edits inside an ignored directory are never reported.
    #[test]
    fn property_ignored_dir_is_silent(files in tree()) {
        let (fs, use_case) = build(&files, Some("a"));
        let session = SessionId::generate();
        use_case.poll(&session).unwrap();

        for file in files.iter().filter(|f| f.starts_with("a/")) {
            fs.touch(format!("/site/{}", file), 2_000);
        }

        prop_assert_eq!(use_case.poll(&session).unwrap(), PollOutcome::NoChange);
    }

    /// PROPERTY: New files never produce a change on their own.
    #[test]
    fn property_new_files_are_absorbed(files in tree(), extra in tree()) {
        let (fs, use_case) = build(&files, None);
        let session = SessionId::generate();
        use_case.poll(&session).unwrap();

        for file in &extra {
            fs.add_file(format!("/site/new/{}", file), 5_000);
        }

        prop_assert_eq!(use_case.poll(&session).unwrap(), PollOutcome::NoChange);
    }

    /// PROPERTY: The baseline indexes every file exactly once.
    #[test]
    fn property_baseline_covers_tree(files in tree()) {
        let (_fs, use_case) = build(&files, None);

        let indexed: BTreeSet<PathBuf> = use_case
            .snapshot()
            .unwrap()
            .into_iter()
            .map(|(path, _)| path)
            .collect();
        let expected: BTreeSet<PathBuf> = files
            .iter()
            .map(|f| PathBuf::from(format!("/site/{}", f)))
            .collect();

        prop_assert_eq!(indexed, expected);
    }
}
