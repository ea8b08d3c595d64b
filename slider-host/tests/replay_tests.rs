use std::path::PathBuf;

use slider_core::{CancelPolicy, SliderConfig};
use slider_host::fixture::FixtureError;
use slider_host::{PageFixture, Script, replay};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

#[test]
fn bundled_fixtures_replay() {
    let page = PageFixture::load(fixture("page.toml")).expect("page fixture");
    let script = Script::load(fixture("script.toml")).expect("script fixture");
    let outcome = replay(&page, &script, SliderConfig::default());

    assert_eq!(outcome.registry.len(), 2);
    assert_eq!(outcome.registry.skipped().len(), 1);
    assert_eq!(outcome.delivered, 9);
    assert_eq!(outcome.recomputes, 2);

    let snapshots = outcome.registry.snapshots();
    // 200px cards with a 16px gap in a 1200px viewport: five visible of eight
    assert_eq!(snapshots[0].card_step, 216.0);
    assert_eq!(snapshots[0].max_index, 3);
    assert_eq!(snapshots[0].current_index, 2);
    assert_eq!(snapshots[0].offset_px, 432.0);
    // Every card of the second slider fits after widening
    // Column half of `gap: 8px 12px`
    assert_eq!(snapshots[1].card_step, 162.0);
    assert_eq!(snapshots[1].max_index, 0);
    assert_eq!(snapshots[1].current_index, 0);
    assert!(snapshots[1].next_disabled);
}

#[test]
fn bundled_config_loads() {
    let config = SliderConfig::from_path(fixture("slider.toml")).expect("config fixture");
    assert_eq!(config.drag_threshold_px, 40.0);
    assert_eq!(config.resize_debounce_ms, 150);
    assert_eq!(config.transition_ms, 300);
    assert_eq!(config.cancel_policy, CancelPolicy::SnapBack);
}

#[test]
fn missing_page_reports_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        PageFixture::load(&path),
        Err(FixtureError::Io { .. })
    ));
}

#[test]
fn script_written_to_disk_replays() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("script.toml");
    std::fs::write(
        &path,
        "[[event]]\nat_ms = 0\nslider = 0\ntype = \"mouse-down\"\nx = 400.0\n\n\
         [[event]]\nat_ms = 5\ntype = \"mouse-move\"\nx = 380.0\n\n\
         [[event]]\nat_ms = 10\ntype = \"mouse-up\"\n",
    )
    .expect("write script");

    let page = PageFixture::load(fixture("page.toml")).expect("page fixture");
    let script = Script::load(&path).expect("script");
    let outcome = replay(&page, &script, SliderConfig::default());

    // 20px is under the threshold: snap back
    let snapshots = outcome.registry.snapshots();
    let first = &snapshots[0];
    assert_eq!(first.current_index, 0);
    assert_eq!(first.offset_px, 0.0);
}
