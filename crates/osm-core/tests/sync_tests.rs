//! Tests for the SyncEngine

use osm_core::{ActionKind, Error, OsmConfig, Selection, SyncEngine, SyncOptions};
use osm_select::{Directive, DirectivePolicy, parse_lines};
use osm_test_utils::TestVault;
use pretty_assertions::assert_eq;

/// Files the default configuration selects from the standard settings tree.
const DEFAULT_SELECTION: &[&str] = &[
    "README.md",
    "appearance.json",
    "config",
    "hotkeys.json",
    "plugins/buttons/data.json",
    "plugins/buttons/main.js",
    "snippets/x.md",
    "themes/Minimal/theme.css",
];

fn copied(report: &osm_core::SyncReport) -> Vec<&str> {
    report
        .actions
        .iter()
        .filter(|a| a.kind == ActionKind::Copy)
        .map(|a| a.path.as_str())
        .collect()
}

#[test]
fn test_sync_default_config_into_empty_vault() {
    let source = TestVault::with_settings_tree();
    let dest = TestVault::new();

    let engine = SyncEngine::new(source.root(), &OsmConfig::default()).unwrap();
    let report = engine.sync_to(dest.root(), SyncOptions::default()).unwrap();

    assert_eq!(copied(&report), DEFAULT_SELECTION);
    for file in DEFAULT_SELECTION {
        dest.assert_file_content(file, file);
    }
    dest.assert_file_not_exists("app.json");
    dest.assert_file_not_exists("workspace-mobile.json");
    dest.assert_file_not_exists("core-plugins-migration.json");
    dest.assert_file_not_exists("plugins/auto-note-mover/main.js");
}

#[test]
fn test_second_sync_is_a_noop() {
    let source = TestVault::with_settings_tree();
    let dest = TestVault::new();
    let engine = SyncEngine::new(source.root(), &OsmConfig::default()).unwrap();

    engine.sync_to(dest.root(), SyncOptions::default()).unwrap();
    let report = engine.sync_to(dest.root(), SyncOptions::default()).unwrap();

    assert!(report.is_noop());
    assert_eq!(report.count(ActionKind::Unchanged), DEFAULT_SELECTION.len());
}

#[test]
fn test_changed_destination_file_is_overwritten() {
    let source = TestVault::with_settings_tree();
    let dest = TestVault::new();
    dest.write("hotkeys.json", "{\"local\": true}");
    let engine = SyncEngine::new(source.root(), &OsmConfig::default()).unwrap();

    engine.sync_to(dest.root(), SyncOptions::default()).unwrap();

    dest.assert_file_content("hotkeys.json", "hotkeys.json");
}

#[test]
fn test_dry_run_writes_nothing() {
    let source = TestVault::with_settings_tree();
    let dest = TestVault::new();
    dest.write("snippets/stale.css", "old");
    let engine = SyncEngine::new(source.root(), &OsmConfig::default()).unwrap();

    let options = SyncOptions {
        dry_run: true,
        remove_stale: true,
    };
    let report = engine.sync_to(dest.root(), options).unwrap();

    assert!(report.dry_run);
    assert_eq!(report.count(ActionKind::Copy), DEFAULT_SELECTION.len());
    assert_eq!(report.count(ActionKind::Remove), 1);
    dest.assert_file_not_exists("README.md");
    dest.assert_file_exists("snippets/stale.css");
}

#[test]
fn test_remove_stale_only_touches_selected_paths() {
    let source = TestVault::with_settings_tree();
    let dest = TestVault::new();
    dest.write("snippets/stale.css", "old");
    // Not selected on either side: the directives exclude it
    dest.write("workspace.json", "{}");
    let engine = SyncEngine::new(source.root(), &OsmConfig::default()).unwrap();

    let options = SyncOptions {
        dry_run: false,
        remove_stale: true,
    };
    let report = engine.sync_to(dest.root(), options).unwrap();

    let removed: Vec<&str> = report
        .actions
        .iter()
        .filter(|a| a.kind == ActionKind::Remove)
        .map(|a| a.path.as_str())
        .collect();
    assert_eq!(removed, vec!["snippets/stale.css"]);
    dest.assert_file_not_exists("snippets/stale.css");
    dest.assert_file_exists("workspace.json");
}

#[test]
fn test_stale_files_are_kept_by_default() {
    let source = TestVault::with_settings_tree();
    let dest = TestVault::new();
    dest.write("snippets/stale.css", "old");
    let engine = SyncEngine::new(source.root(), &OsmConfig::default()).unwrap();

    let report = engine.sync_to(dest.root(), SyncOptions::default()).unwrap();

    assert_eq!(report.count(ActionKind::Remove), 0);
    dest.assert_file_exists("snippets/stale.css");
}

#[test]
fn test_failing_directive_leaves_destination_untouched() {
    let source = TestVault::with_settings_tree();
    let dest = TestVault::new();
    let directives = parse_lines(
        "Include: snippets\nInclude: [abc\n",
        DirectivePolicy::Strict,
    )
    .unwrap();
    let engine =
        SyncEngine::from_selection(Selection::with_directives(source.root(), directives).unwrap());

    let err = engine
        .sync_to(dest.root(), SyncOptions::default())
        .unwrap_err();

    assert!(matches!(err, Error::Select(osm_select::Error::Pattern { .. })));
    dest.assert_file_not_exists("snippets/x.md");
}

#[test]
fn test_missing_destination_is_root_not_found() {
    let source = TestVault::with_settings_tree();
    let engine = SyncEngine::new(source.root(), &OsmConfig::default()).unwrap();

    let err = engine
        .sync_to(source.path("no-such-vault"), SyncOptions::default())
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Select(osm_select::Error::RootNotFound { .. })
    ));
}

#[test]
fn test_same_root_through_different_spelling_is_skipped() {
    let source = TestVault::with_settings_tree();
    source.mkdir("sub");
    let engine = SyncEngine::from_selection(
        Selection::with_directives(source.root(), vec![Directive::include(".")]).unwrap(),
    );

    let report = engine
        .sync_to(source.path("sub/.."), SyncOptions::default())
        .unwrap();

    assert!(report.skipped_same_root);
    assert!(report.actions.is_empty());
}

#[test]
fn test_sync_all_checks_every_destination_first() {
    let source = TestVault::with_settings_tree();
    let first = TestVault::new();
    let engine = SyncEngine::new(source.root(), &OsmConfig::default()).unwrap();

    let dests = [first.root().to_path_buf(), first.path("no-such-vault")];
    let err = engine.sync_all(&dests, SyncOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        Error::Select(osm_select::Error::RootNotFound { .. })
    ));
    first.assert_file_not_exists("README.md");
}

#[test]
fn test_sync_all_reports_each_destination_in_order() {
    let source = TestVault::with_settings_tree();
    let first = TestVault::new();
    let second = TestVault::new();
    let engine = SyncEngine::new(source.root(), &OsmConfig::default()).unwrap();

    let reports = engine
        .sync_all(&[first.root(), second.root()], SyncOptions::default())
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert!(reports[1].dest.ends_with(second.root().file_name().unwrap()));
    second.assert_file_content("README.md", "README.md");
}
