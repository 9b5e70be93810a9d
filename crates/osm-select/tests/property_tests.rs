use osm_select::{Directive, ResultSet, Verb, resolve};
use proptest::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FILES: &[&str] = &[
    "README.md",
    "app.json",
    "appearance.json",
    "workspace.json",
    "snippets/x.md",
    "snippets/y.css",
    "themes/Minimal/theme.css",
    "plugins/buttons/main.js",
    "plugins/buttons/styles.css",
    "plugins/tag-wrangler/index.js",
];

const PATTERNS: &[&str] = &[
    ".",
    "*.json",
    "workspace*",
    "snippets",
    "plugins",
    "plugins/buttons",
    "plugins/buttons/styles.css",
    "**/*.css",
    "themes/*",
    "missing",
];

fn build_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    for file in FILES {
        let path = dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, file).unwrap();
    }
    dir
}

fn directive_strategy() -> impl Strategy<Value = Directive> {
    (any::<bool>(), 0..PATTERNS.len()).prop_map(|(include, idx)| {
        let verb = if include { Verb::Include } else { Verb::Exclude };
        Directive::new(verb, PATTERNS[idx])
    })
}

fn select(root: &Path, directives: &[Directive]) -> ResultSet {
    resolve(root, directives).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn selection_only_holds_existing_files(directives in prop::collection::vec(directive_strategy(), 0..8)) {
        let dir = build_tree();
        let set = select(dir.path(), &directives);

        for path in set.iter() {
            prop_assert!(path.under(dir.path()).is_file(), "{} is not a file", path);
            prop_assert!(FILES.contains(&path.as_str()));
        }
    }

    #[test]
    fn repeating_the_last_directive_changes_nothing(directives in prop::collection::vec(directive_strategy(), 1..8)) {
        let dir = build_tree();
        let mut repeated = directives.clone();
        repeated.push(directives.last().unwrap().clone());

        prop_assert_eq!(select(dir.path(), &directives), select(dir.path(), &repeated));
    }

    #[test]
    fn trailing_exclude_wins(directives in prop::collection::vec(directive_strategy(), 0..8), idx in 0..PATTERNS.len()) {
        let dir = build_tree();
        let mut with_exclude = directives.clone();
        with_exclude.push(Directive::exclude(PATTERNS[idx]));

        let excluded = select(dir.path(), &[Directive::include(PATTERNS[idx])]);
        let set = select(dir.path(), &with_exclude);
        for path in excluded.iter() {
            prop_assert!(!set.contains(path));
        }
    }
}
