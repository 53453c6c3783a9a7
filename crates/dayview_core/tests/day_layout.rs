use dayview_core::{
    CalendarService, ContainerGeometry, DayViewEngine, EventConfig, EventId, EventStyle, Interval,
    StyleProperty, StyleTable,
};

fn reference_geometry() -> ContainerGeometry {
    ContainerGeometry::new(720.0, 620.0, 10.0, 0.0).expect("reference geometry")
}

fn style(top: f64, height: f64, left: f64, width: f64) -> EventStyle {
    EventStyle {
        top,
        height,
        left,
        width,
    }
}

#[test]
fn overlapping_events_widen_previous_lanes() {
    let mut engine = DayViewEngine::new(reference_geometry());

    let first = engine.add_event(Interval::new(100, 300).unwrap());
    assert_eq!(first.record.column(), 0);
    assert_eq!(first.record.lane_count(), 1);
    assert_eq!(
        first.restyled,
        vec![(EventId(0), style(100.0, 200.0, 10.0, 600.0))]
    );

    let second = engine.add_event(Interval::new(90, 200).unwrap());
    assert_eq!(second.record.column(), 1);
    assert_eq!(second.record.lane_count(), 2);
    assert_eq!(
        second.restyled,
        vec![
            (EventId(0), style(100.0, 200.0, 10.0, 300.0)),
            (EventId(1), style(90.0, 110.0, 310.0, 300.0)),
        ]
    );

    let third = engine.add_event(Interval::new(125, 225).unwrap());
    assert_eq!(third.record.column(), 2);
    assert_eq!(third.record.lane_count(), 3);
    assert_eq!(
        third.restyled,
        vec![
            (EventId(0), style(100.0, 200.0, 10.0, 200.0)),
            (EventId(1), style(90.0, 110.0, 210.0, 200.0)),
            (EventId(2), style(125.0, 100.0, 410.0, 200.0)),
        ]
    );

    for record in engine.records() {
        assert_eq!(record.lane_count(), 3);
    }
}

#[test]
fn calendar_applies_styles_in_render_order() {
    let mut calendar = CalendarService::with_view("day", reference_geometry()).unwrap();
    let mut table = StyleTable::new();
    calendar
        .create_events(
            &[
                EventConfig::new(100, 300),
                EventConfig::new(90, 200),
                EventConfig::new(125, 225),
            ],
            &mut table,
        )
        .unwrap();

    let calls = table
        .history()
        .iter()
        .map(|(id, property, px)| (id.index(), property.as_str(), *px))
        .collect::<Vec<_>>();

    assert_eq!(
        calls,
        vec![
            (0, "top", 100.0),
            (0, "height", 200.0),
            (0, "left", 10.0),
            (0, "width", 600.0),
            (0, "top", 100.0),
            (0, "height", 200.0),
            (0, "left", 10.0),
            (0, "width", 300.0),
            (1, "top", 90.0),
            (1, "height", 110.0),
            (1, "left", 310.0),
            (1, "width", 300.0),
            (0, "top", 100.0),
            (0, "height", 200.0),
            (0, "left", 10.0),
            (0, "width", 200.0),
            (1, "top", 90.0),
            (1, "height", 110.0),
            (1, "left", 210.0),
            (1, "width", 200.0),
            (2, "top", 125.0),
            (2, "height", 100.0),
            (2, "left", 410.0),
            (2, "width", 200.0),
        ]
    );

    assert_eq!(
        table.get(EventId(2), StyleProperty::Left),
        Some(410.0),
        "last applied value wins"
    );
}

#[test]
fn sample_day_reuses_freed_column() {
    let mut calendar = CalendarService::with_view("day", reference_geometry()).unwrap();
    let mut table = StyleTable::new();
    let placed = calendar
        .create_events(
            &[
                EventConfig::new(30, 150),
                EventConfig::new(540, 600),
                EventConfig::new(560, 620),
                EventConfig::new(610, 670),
            ],
            &mut table,
        )
        .unwrap();

    let columns = placed
        .iter()
        .map(|record| (record.column(), record.lane_count()))
        .collect::<Vec<_>>();
    assert_eq!(columns, vec![(0, 1), (0, 1), (1, 2), (0, 2)]);

    assert_eq!(table.style(EventId(0)), Some(style(30.0, 120.0, 10.0, 600.0)));
    assert_eq!(table.style(EventId(1)), Some(style(540.0, 60.0, 10.0, 300.0)));
    assert_eq!(table.style(EventId(2)), Some(style(560.0, 60.0, 310.0, 300.0)));
    assert_eq!(table.style(EventId(3)), Some(style(610.0, 60.0, 10.0, 300.0)));

    let engine = calendar.view().unwrap();
    assert_eq!(engine.snapshot().len(), 4);
    for (id, expected) in engine.snapshot() {
        assert_eq!(table.style(id), Some(expected));
    }
}

#[test]
fn touching_events_share_a_column() {
    let mut engine = DayViewEngine::new(reference_geometry());
    engine.add_event(Interval::new(540, 600).unwrap());
    let next = engine.add_event(Interval::new(600, 660).unwrap());

    assert_eq!(next.record.column(), 0);
    assert_eq!(next.record.lane_count(), 1);
    assert!(next.record.neighbors().is_empty());
}

#[test]
fn identical_events_stack_side_by_side() {
    let mut engine = DayViewEngine::new(reference_geometry());
    for _ in 0..4 {
        engine.add_event(Interval::new(60, 120).unwrap());
    }

    let layout = engine
        .records()
        .iter()
        .map(|record| (record.column(), record.lane_count()))
        .collect::<Vec<_>>();
    assert_eq!(layout, vec![(0, 4), (1, 4), (2, 4), (3, 4)]);

    let lefts = engine
        .snapshot()
        .into_iter()
        .map(|(_, style)| style.left)
        .collect::<Vec<_>>();
    assert_eq!(lefts, vec![10.0, 160.0, 310.0, 460.0]);
}

#[test]
fn widened_neighbor_receives_every_property() {
    let mut calendar = CalendarService::with_view("day", reference_geometry()).unwrap();
    let mut first_batch = StyleTable::new();
    calendar
        .create_events(&[EventConfig::new(100, 300)], &mut first_batch)
        .unwrap();

    let mut second_batch = StyleTable::new();
    calendar
        .create_events(&[EventConfig::new(90, 200)], &mut second_batch)
        .unwrap();

    let reapplied = second_batch
        .history()
        .iter()
        .filter(|(id, _, _)| *id == EventId(0))
        .map(|(_, property, _)| *property)
        .collect::<Vec<_>>();
    assert_eq!(
        reapplied,
        vec![
            StyleProperty::Top,
            StyleProperty::Height,
            StyleProperty::Left,
            StyleProperty::Width,
        ]
    );
    assert_eq!(
        second_batch.style(EventId(0)),
        Some(style(100.0, 200.0, 10.0, 300.0))
    );
}
