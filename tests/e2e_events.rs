//! Event and log hooks emitted by the control.
//!
//! The hooks are process-global, so this binary holds a single test.

mod common;

use common::{laid_out, settle};
use segstrip::{LayoutMode, LayoutStyle, LogLevel, Options, Rgba};
use std::sync::{Arc, Mutex};

#[test]
fn test_events_and_logs_in_order() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    segstrip::set_event_callback(move |name, data| {
        sink.lock().unwrap().push((name.to_string(), data.to_string()));
    });

    let warnings = Arc::new(Mutex::new(Vec::new()));
    let log_sink = Arc::clone(&warnings);
    segstrip::set_log_callback(move |level, message| {
        if level == LogLevel::Warn {
            log_sink.lock().unwrap().push(message.to_string());
        }
        tracing::debug!(?level, "{message}");
    });

    let mut control = laid_out(3, LayoutMode::Fixed { max_visible: 3 }, 300, 3);
    control.set_selected_index(0).unwrap();
    control.set_selected_index(2).unwrap();
    settle(&mut control);
    control.add_badge(1, 5, Rgba::RED).unwrap();
    control.remove_badge(1).unwrap();

    control
        .setup(common::disaster_segments(2), LayoutStyle::OnlyLabel, Options::default())
        .unwrap();

    segstrip::clear_event_callback();
    segstrip::clear_log_callback();

    let expected = [
        ("segment.selected", "{\"index\":0}"),
        ("segment.selected", "{\"index\":2}"),
        ("indicator.settled", "{\"index\":2}"),
        ("segment.badge", "{\"index\":1,\"count\":5}"),
        ("segment.badge", "{\"index\":1,\"count\":null}"),
    ];
    let events = events.lock().unwrap();
    let actual: Vec<(&str, &str)> = events.iter().map(|(n, d)| (n.as_str(), d.as_str())).collect();
    assert_eq!(actual, expected);

    let warnings = warnings.lock().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("selection reset"), "{}", warnings[0]);
    assert_eq!(control.selected_index(), None);
}
