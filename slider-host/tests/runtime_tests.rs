use std::time::Duration;

use slider_core::{Control, SliderConfig};
use slider_host::document::classes;
use slider_host::{Document, HostEvent, InputEvent, NodeSpec, SliderRegistry, run};
use tokio::sync::mpsc;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn resize_burst_recomputes_once() {
    let document = Document::from_specs(&[NodeSpec::slider(6, 100.0, "0px", 200.0)]).into_shared();
    let mut registry = SliderRegistry::bootstrap(document.clone(), SliderConfig::default());
    let root = registry.roots()[0];
    let (tx, rx) = mpsc::unbounded_channel();

    let producer = async move {
        for _ in 0..3 {
            tx.send(HostEvent::on(root, InputEvent::Click { control: Control::Next }))
                .expect("loop running");
        }
        sleep(Duration::from_millis(10)).await;

        let viewport = document
            .borrow()
            .query_within(root.0, classes::VIEWPORT)
            .expect("viewport");
        document.borrow_mut().set_width(viewport, 400.0);

        for _ in 0..3 {
            tx.send(HostEvent::window(InputEvent::Resize)).expect("loop running");
            sleep(Duration::from_millis(50)).await;
        }
        sleep(Duration::from_millis(200)).await;
    };

    let (summary, ()) = tokio::join!(run(&mut registry, rx), producer);

    assert_eq!(summary.events, 6);
    assert_eq!(summary.recomputes, 1);
    let snapshot = registry.snapshot(root).expect("slider");
    assert_eq!(snapshot.visible_count, 4);
    assert_eq!(snapshot.max_index, 2);
    assert_eq!(snapshot.current_index, 2);
    assert_eq!(snapshot.offset_px, 200.0);
}

#[tokio::test(start_paused = true)]
async fn pending_recompute_is_dropped_when_channel_closes() {
    let document = Document::from_specs(&[NodeSpec::slider(6, 100.0, "0px", 200.0)]).into_shared();
    let mut registry = SliderRegistry::bootstrap(document, SliderConfig::default());
    let (tx, rx) = mpsc::unbounded_channel();

    tx.send(HostEvent::window(InputEvent::Resize)).expect("open channel");
    drop(tx);

    let summary = run(&mut registry, rx).await;
    assert_eq!(summary.events, 1);
    assert_eq!(summary.recomputes, 0);
    assert!(registry.next_deadline().is_some());
}
