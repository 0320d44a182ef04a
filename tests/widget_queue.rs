#![cfg(not(target_arch = "wasm32"))]

use futures::executor::block_on;
use s3upload::facades::native::{UploadNotifier, UploadWidget};
use s3upload::ports::UploadItemPort;
use s3upload::{FileVisualState, HttpReply, NotifyError, WidgetOptions};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use test_utils::*;

fn widget_with(parallel_uploads: usize, files: &[&str]) -> UploadWidget {
    let widget =
        UploadWidget::new(WidgetOptions::default().with_parallel_uploads(parallel_uploads))
            .unwrap();
    for name in files {
        widget.add_file(*name).complete_transfer(post_response(name));
    }
    widget
}

#[test]
fn test_notifications_respect_parallel_uploads() {
    let http = ScriptedHttp::replying(204, "");
    let notifier = UploadNotifier::new(platform_with(http.clone()), TARGET);
    let widget = widget_with(2, &["a", "b", "c", "d", "e"]);

    let results = block_on(widget.notify_completed(&notifier));

    assert_eq!(results.len(), 5);
    assert!(results.iter().all(|(_, result)| result.is_ok()));
    assert_eq!(http.requests().len(), 5);
    assert_eq!(http.max_in_flight(), 2);
    assert!(widget
        .items()
        .iter()
        .all(|item| item.visual_state() == FileVisualState::Success));
}

#[test]
fn test_default_parallelism_is_five() {
    let http = ScriptedHttp::replying(204, "");
    let notifier = UploadNotifier::new(platform_with(http.clone()), TARGET);
    let widget = UploadWidget::new(WidgetOptions::default()).unwrap();
    for name in ["a", "b", "c", "d", "e", "f", "g"] {
        widget.add_file(name).complete_transfer(post_response(name));
    }

    block_on(widget.notify_completed(&notifier));

    assert_eq!(http.max_in_flight(), 5);
}

#[test]
fn test_each_item_settles_independently() {
    let http = ScriptedHttp::new(|request| {
        if request.result().key.starts_with("bad") {
            Ok(HttpReply::new(500, "{\"error\":\"disk full\"}"))
        } else if request.result().key.starts_with("offline") {
            Err(NotifyError::transport("connection reset"))
        } else {
            Ok(HttpReply::new(204, ""))
        }
    });
    let notifier = UploadNotifier::new(platform_with(http), TARGET);
    let widget = widget_with(3, &["good", "bad", "offline"]);

    let errors_seen = Arc::new(AtomicUsize::new(0));
    let counter = errors_seen.clone();
    widget.on_error(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let results: HashMap<String, _> = block_on(widget.notify_completed(&notifier))
        .into_iter()
        .collect();

    assert!(results["good"].is_ok());
    assert!(matches!(
        results["bad"],
        Err(NotifyError::Rejected { status: 500, .. })
    ));
    assert!(results["offline"].as_ref().unwrap_err().is_connection_error());

    let state = |id: &str| widget.item(id).unwrap().visual_state();
    assert_eq!(state("good"), FileVisualState::Success);
    assert_eq!(state("bad"), FileVisualState::Error);
    assert_eq!(state("offline"), FileVisualState::Pending);

    assert_eq!(errors_seen.load(Ordering::SeqCst), 1);
    assert_eq!(widget.errors()[0].item_id, "bad");
    assert_eq!(widget.errors()[0].message, "{\"error\":\"disk full\"}");
}

#[test]
fn test_untransferred_and_settled_items_are_skipped() {
    let http = ScriptedHttp::replying(204, "");
    let notifier = UploadNotifier::new(platform_with(http.clone()), TARGET);
    let widget = widget_with(5, &["a"]);
    widget.add_file("still-uploading");

    let first = block_on(widget.notify_completed(&notifier));
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].0, "a");

    let second = block_on(widget.notify_completed(&notifier));
    assert!(second.is_empty());
    assert_eq!(http.requests().len(), 1);

    widget
        .item("still-uploading")
        .unwrap()
        .complete_transfer(post_response("still-uploading"));
    let third = block_on(widget.notify_completed(&notifier));
    assert_eq!(third.len(), 1);
    assert_eq!(http.requests().len(), 2);
}

#[test]
fn test_transport_failure_is_not_retried_by_next_pass() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let http = ScriptedHttp::new(move |_| {
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(NotifyError::transport("down"))
        } else {
            Ok(HttpReply::new(204, ""))
        }
    });
    let notifier = UploadNotifier::new(platform_with(http.clone()), TARGET);
    let widget = widget_with(5, &["a"]);

    let first = block_on(widget.notify_completed(&notifier));
    assert_eq!(first.len(), 1);
    assert!(first[0].1.as_ref().unwrap_err().is_connection_error());

    let second = block_on(widget.notify_completed(&notifier));
    assert!(second.is_empty());
    assert_eq!(http.requests().len(), 1);
    assert_eq!(widget.item("a").unwrap().visual_state(), FileVisualState::Pending);
}

#[test]
fn test_overlapping_passes_notify_each_item_once() {
    let http = ScriptedHttp::replying(204, "");
    let notifier = UploadNotifier::new(platform_with(http.clone()), TARGET);
    let widget = widget_with(5, &["a", "b"]);

    let (first, second) = block_on(futures::future::join(
        widget.notify_completed(&notifier),
        widget.notify_completed(&notifier),
    ));

    assert_eq!(first.len() + second.len(), 2);
    assert!(first.iter().chain(&second).all(|(_, result)| result.is_ok()));
    assert_eq!(http.requests().len(), 2);
    assert!(widget
        .items()
        .iter()
        .all(|item| item.history() == vec![FileVisualState::Success]));
}
