use std::cell::RefCell;
use std::rc::Rc;

use kumo_charts::ChartError;
use kumo_charts::api::{
    AdapterState, ChartAction, ChartAdapter, ChartEventKind, ChartOption, ChartProps,
    EngineTheme, EventHandlers, EventParams, MouseEventParams, SeriesOption, SetOptionOpts,
};
use kumo_charts::core::{TimePoint, Viewport};
use kumo_charts::render::{EngineCall, NullEngineFactory};

fn sample_option(value: f64) -> ChartOption {
    ChartOption::default().with_series(vec![SeriesOption::line(
        "Requests",
        "#82B6FF",
        vec![TimePoint::new(0.0, value)],
    )])
}

fn container() -> Option<Viewport> {
    Some(Viewport::new(800, 350))
}

fn click() -> EventParams {
    EventParams::Mouse(MouseEventParams {
        component_type: "series".to_owned(),
        ..MouseEventParams::default()
    })
}

#[test]
fn mount_applies_option_and_binds_events() {
    let factory = NullEngineFactory::new();
    let probe = factory.probe();
    let mut adapter = ChartAdapter::new(factory, ChartProps::new(sample_option(1.0)));
    adapter.set_events(
        EventHandlers::new()
            .with(ChartEventKind::Click, |_| {})
            .with(ChartEventKind::MouseOver, |_| {}),
    );
    assert_eq!(probe.listener_count(), 0);

    let state = adapter.mount(container()).expect("mount");
    assert_eq!(state, AdapterState::Ready);
    assert_eq!(
        probe.calls(),
        vec![
            EngineCall::Init {
                instance: 1,
                theme: EngineTheme::for_mode(false),
            },
            EngineCall::SetOption {
                instance: 1,
                opts: SetOptionOpts::REPLACE_LAZY,
            },
            EngineCall::On {
                instance: 1,
                event: ChartEventKind::Click,
            },
            EngineCall::On {
                instance: 1,
                event: ChartEventKind::MouseOver,
            },
        ]
    );
    assert_eq!(probe.last_option(), Some(sample_option(1.0)));
    assert_eq!(
        adapter.bound_events().collect::<Vec<_>>(),
        [ChartEventKind::Click, ChartEventKind::MouseOver]
    );
}

#[test]
fn unmount_removes_every_listener_and_disposes_once() {
    let factory = NullEngineFactory::new();
    let probe = factory.probe();
    let mut adapter = ChartAdapter::new(factory, ChartProps::new(sample_option(1.0)));
    adapter.set_events(
        EventHandlers::new()
            .with(ChartEventKind::Click, |_| {})
            .with(ChartEventKind::LegendSelectChanged, |_| {}),
    );
    adapter.mount(container()).expect("mount");
    let handle = adapter.handle();
    assert!(handle.is_live());

    adapter.unmount();
    adapter.unmount();

    assert_eq!(adapter.state(), AdapterState::Unmounted);
    assert_eq!(probe.listener_count(), 0);
    assert_eq!(probe.instances_disposed(), 1);
    assert!(!handle.is_live());
    assert!(!handle.dispatch_action(ChartAction::clear_brush()));
}

#[test]
fn missing_container_defers_initialization() {
    let factory = NullEngineFactory::new();
    let probe = factory.probe();
    let mut adapter = ChartAdapter::new(factory, ChartProps::new(sample_option(1.0)));

    assert_eq!(adapter.mount(None).expect("deferred"), AdapterState::Unmounted);
    assert_eq!(probe.instances_created(), 0);

    assert_eq!(adapter.mount(container()).expect("mount"), AdapterState::Ready);
    assert_eq!(probe.instances_created(), 1);

    // Re-mounting keeps the live engine.
    assert_eq!(adapter.mount(container()).expect("remount"), AdapterState::Ready);
    assert_eq!(probe.instances_created(), 1);
}

#[test]
fn engine_init_failure_leaves_adapter_unmounted() {
    let factory = NullEngineFactory::new();
    let mut adapter = ChartAdapter::new(factory, ChartProps::new(sample_option(1.0)));

    let err = adapter
        .mount(Some(Viewport::new(0, 350)))
        .expect_err("zero-width container");
    assert!(matches!(err, ChartError::EngineInit(_)));
    assert_eq!(adapter.state(), AdapterState::Unmounted);
    assert!(!adapter.handle().is_live());
}

#[test]
fn mount_without_option_stays_initializing() {
    let factory = NullEngineFactory::new();
    let probe = factory.probe();
    let mut adapter = ChartAdapter::new(factory, ChartProps::default());

    assert_eq!(adapter.mount(container()).expect("mount"), AdapterState::Initializing);
    assert_eq!(probe.last_option(), None);

    adapter.set_option(sample_option(2.0));
    assert_eq!(adapter.state(), AdapterState::Ready);
    assert_eq!(probe.last_option(), Some(sample_option(2.0)));
}

#[test]
fn option_changes_replace_lazily_and_skip_identical_options() {
    let factory = NullEngineFactory::new();
    let probe = factory.probe();
    let mut adapter = ChartAdapter::new(factory, ChartProps::new(sample_option(1.0)));
    adapter.mount(container()).expect("mount");
    probe.clear_calls();

    adapter.set_option(sample_option(1.0));
    assert!(probe.calls().is_empty());

    adapter.set_option(sample_option(5.0));
    assert_eq!(
        probe.calls(),
        vec![EngineCall::SetOption {
            instance: 1,
            opts: SetOptionOpts::REPLACE_LAZY,
        }]
    );
    assert_eq!(probe.last_option(), Some(sample_option(5.0)));
}

#[test]
fn event_changes_bind_and_unbind_only_the_difference() {
    let factory = NullEngineFactory::new();
    let probe = factory.probe();
    let mut adapter = ChartAdapter::new(factory, ChartProps::new(sample_option(1.0)));
    adapter.set_events(EventHandlers::new().with(ChartEventKind::Click, |_| {}));
    adapter.mount(container()).expect("mount");
    probe.clear_calls();

    adapter.set_events(
        EventHandlers::new()
            .with(ChartEventKind::Click, |_| {})
            .with(ChartEventKind::DataZoom, |_| {}),
    );
    assert_eq!(
        probe.calls(),
        vec![EngineCall::On {
            instance: 1,
            event: ChartEventKind::DataZoom,
        }]
    );

    probe.clear_calls();
    adapter.set_events(EventHandlers::new().with(ChartEventKind::DataZoom, |_| {}));
    assert_eq!(
        probe.calls(),
        vec![EngineCall::Off {
            instance: 1,
            event: ChartEventKind::Click,
        }]
    );
    assert_eq!(probe.listener_kinds(), [ChartEventKind::DataZoom]);
}

#[test]
fn swapping_a_handler_keeps_the_engine_binding() {
    let factory = NullEngineFactory::new();
    let probe = factory.probe();
    let mut adapter = ChartAdapter::new(factory, ChartProps::new(sample_option(1.0)));

    let first = Rc::new(RefCell::new(0));
    let second = Rc::new(RefCell::new(0));

    let counter = Rc::clone(&first);
    adapter.set_events(
        EventHandlers::new().with(ChartEventKind::Click, move |_| *counter.borrow_mut() += 1),
    );
    adapter.mount(container()).expect("mount");
    assert_eq!(probe.emit(ChartEventKind::Click, &click()), 1);
    probe.clear_calls();

    let counter = Rc::clone(&second);
    adapter.set_events(
        EventHandlers::new().with(ChartEventKind::Click, move |_| *counter.borrow_mut() += 1),
    );
    assert!(probe.calls().is_empty());

    assert_eq!(probe.emit(ChartEventKind::Click, &click()), 1);
    assert_eq!(*first.borrow(), 1);
    assert_eq!(*second.borrow(), 1);
}

#[test]
fn unbound_events_are_not_delivered() {
    let factory = NullEngineFactory::new();
    let probe = factory.probe();
    let mut adapter = ChartAdapter::new(factory, ChartProps::new(sample_option(1.0)));
    adapter.set_events(EventHandlers::new().with(ChartEventKind::Click, |_| {}));
    adapter.mount(container()).expect("mount");

    assert_eq!(probe.emit(ChartEventKind::MouseOver, &click()), 0);
    adapter.set_events(EventHandlers::new());
    assert_eq!(probe.emit(ChartEventKind::Click, &click()), 0);
}

#[test]
fn theme_change_disposes_before_recreating() {
    let factory = NullEngineFactory::new();
    let probe = factory.probe();
    let mut adapter = ChartAdapter::new(factory, ChartProps::new(sample_option(1.0)));
    adapter.set_events(EventHandlers::new().with(ChartEventKind::Click, |_| {}));
    adapter.mount(container()).expect("mount");
    probe.clear_calls();

    adapter.set_dark_mode(true).expect("re-theme");

    assert_eq!(
        probe.calls(),
        vec![
            EngineCall::Off {
                instance: 1,
                event: ChartEventKind::Click,
            },
            EngineCall::Dispose { instance: 1 },
            EngineCall::Init {
                instance: 2,
                theme: EngineTheme::Named("dark".to_owned()),
            },
            EngineCall::SetOption {
                instance: 2,
                opts: SetOptionOpts::REPLACE_LAZY,
            },
            EngineCall::On {
                instance: 2,
                event: ChartEventKind::Click,
            },
        ]
    );
    assert_eq!(probe.listener_count(), 1);
    assert_eq!(probe.instances_disposed(), 1);

    probe.clear_calls();
    adapter.set_dark_mode(true).expect("same theme");
    assert!(probe.calls().is_empty());
}

#[test]
fn theme_change_before_mount_only_records_the_mode() {
    let factory = NullEngineFactory::new();
    let probe = factory.probe();
    let mut adapter = ChartAdapter::new(factory, ChartProps::new(sample_option(1.0)));

    adapter.set_dark_mode(true).expect("unmounted re-theme");
    assert_eq!(probe.instances_created(), 0);

    adapter.mount(container()).expect("mount");
    assert!(matches!(
        probe.calls().first(),
        Some(EngineCall::Init { theme, .. }) if theme.is_dark()
    ));
}

#[test]
fn every_resize_reaches_the_engine() {
    let factory = NullEngineFactory::new();
    let probe = factory.probe();
    let mut adapter = ChartAdapter::new(factory, ChartProps::new(sample_option(1.0)));

    assert!(!adapter.container_resized(Viewport::new(640, 350)));
    adapter.mount(container()).expect("mount");
    probe.clear_calls();

    assert!(adapter.container_resized(Viewport::new(640, 350)));
    assert!(adapter.container_resized(Viewport::new(641, 350)));
    assert_eq!(
        probe.calls(),
        vec![
            EngineCall::Resize { instance: 1 },
            EngineCall::Resize { instance: 1 }
        ]
    );
}

#[test]
fn dropping_a_mounted_adapter_disposes_the_engine() {
    let factory = NullEngineFactory::new();
    let probe = factory.probe();
    {
        let mut adapter = ChartAdapter::new(factory, ChartProps::new(sample_option(1.0)));
        adapter.set_events(EventHandlers::new().with(ChartEventKind::Click, |_| {}));
        adapter.mount(container()).expect("mount");
    }
    assert_eq!(probe.instances_disposed(), 1);
    assert_eq!(probe.listener_count(), 0);
}

#[test]
fn handle_dispatches_actions_to_the_live_engine() {
    let factory = NullEngineFactory::new();
    let probe = factory.probe();
    let mut adapter = ChartAdapter::new(factory, ChartProps::new(sample_option(1.0)));
    adapter.mount(container()).expect("mount");

    assert!(adapter.handle().dispatch_action(ChartAction::clear_brush()));
    assert_eq!(probe.actions(), [ChartAction::clear_brush()]);
}

#[test]
fn event_names_round_trip_through_the_whitelist() {
    for &kind in ChartEventKind::ALL {
        assert_eq!(kind.name().parse::<ChartEventKind>().expect("known"), kind);
    }
    assert!("wheel".parse::<ChartEventKind>().is_err());
}

#[test]
fn raw_payloads_decode_into_typed_params() {
    let params = EventParams::decode(
        ChartEventKind::BrushEnd,
        serde_json::json!({ "areas": [{ "coordRange": [1.0, 2.0], "brushType": "lineX" }] }),
    )
    .expect("brushend payload");
    let EventParams::BrushEnd(brush) = params else {
        panic!("expected brushend params");
    };
    assert_eq!(brush.first_range().map(|r| (r.from, r.to)), Some((1.0, 2.0)));

    let legend = EventParams::decode(
        ChartEventKind::LegendSelectChanged,
        serde_json::json!({ "name": "Errors", "selected": { "Requests": true, "Errors": false } }),
    )
    .expect("legend payload");
    assert!(matches!(
        legend,
        EventParams::LegendSelectChanged(ref p) if p.name == "Errors" && p.selected.len() == 2
    ));

    let raw = serde_json::json!({ "start": 10 });
    assert_eq!(
        EventParams::decode(ChartEventKind::DataZoom, raw.clone()).expect("raw"),
        EventParams::Raw(raw)
    );
}

#[test]
fn new_container_while_mounted_applies_on_next_re_init() {
    let factory = NullEngineFactory::new();
    let probe = factory.probe();
    let mut adapter = ChartAdapter::new(factory, ChartProps::new(sample_option(1.0)));
    adapter.mount(container()).expect("mount");

    assert_eq!(
        adapter.mount(Some(Viewport::new(0, 0))).expect("live engine kept"),
        AdapterState::Ready
    );
    assert_eq!(probe.instances_created(), 1);
    assert_eq!(probe.instances_disposed(), 0);

    let err = adapter.set_dark_mode(true).expect_err("re-init on zero-area container");
    assert!(matches!(err, ChartError::EngineInit(_)));
    assert_eq!(adapter.state(), AdapterState::Unmounted);
    assert_eq!(probe.instances_disposed(), 1);
    assert!(!adapter.handle().is_live());

    assert_eq!(adapter.mount(container()).expect("remount"), AdapterState::Ready);
    assert!(matches!(
        probe.calls().last(),
        Some(EngineCall::SetOption { instance: 2, .. })
    ));
}
