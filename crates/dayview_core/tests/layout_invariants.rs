//! Property-style invariants for incremental day layout.
//!
//! Random arrival sequences are replayed against the public engine API and
//! the layout is checked after every insertion.

use dayview_core::{is_parallel, ContainerGeometry, DayViewEngine, Interval, LayoutRecord};
use proptest::prelude::*;

fn geometry() -> ContainerGeometry {
    ContainerGeometry::new(720.0, 620.0, 10.0, 0.0).expect("geometry")
}

fn interval_strategy() -> impl Strategy<Value = Interval> {
    (0u32..720, 1u32..240).prop_map(|(start, length)| {
        Interval::new(start, start + length).expect("positive length")
    })
}

fn layout_of(records: &[LayoutRecord]) -> Vec<(usize, usize)> {
    records
        .iter()
        .map(|record| (record.column(), record.lane_count()))
        .collect()
}

fn assert_layout_invariants(records: &[LayoutRecord]) {
    for a in records {
        assert!(a.lane_count() > a.column(), "{:?} exceeds its lanes", a.id());

        for b in records {
            if a.id() == b.id() {
                continue;
            }
            let parallel = is_parallel(&a.interval(), &b.interval());
            assert_eq!(
                parallel,
                a.neighbors().contains(&b.id()),
                "neighbor set of {:?} disagrees with overlap of {:?}",
                a.id(),
                b.id()
            );
            if parallel {
                assert_ne!(a.column(), b.column(), "{:?} and {:?} collide", a.id(), b.id());
            }
        }

        let widest_neighbor = a
            .neighbors()
            .iter()
            .map(|id| records[id.index()].column())
            .max();
        if let Some(column) = widest_neighbor {
            assert!(
                a.lane_count() > column,
                "{:?} has {} lanes but a neighbor sits in column {}",
                a.id(),
                a.lane_count(),
                column
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_prefix_keeps_layout_invariants(
        intervals in prop::collection::vec(interval_strategy(), 1..40),
    ) {
        let mut engine = DayViewEngine::new(geometry());
        for interval in intervals {
            engine.add_event(interval);
            assert_layout_invariants(engine.records());
        }
    }

    #[test]
    fn replaying_arrivals_is_deterministic(
        intervals in prop::collection::vec(interval_strategy(), 1..40),
    ) {
        let mut first = DayViewEngine::new(geometry());
        let mut second = DayViewEngine::new(geometry());
        for interval in &intervals {
            first.add_event(*interval);
            second.add_event(*interval);
        }
        prop_assert_eq!(layout_of(first.records()), layout_of(second.records()));
        prop_assert_eq!(first.snapshot(), second.snapshot());
    }

    #[test]
    fn disjoint_events_keep_a_single_lane(
        lengths in prop::collection::vec(1u32..60, 1..20),
        reversed in any::<bool>(),
    ) {
        let mut cursor = 0;
        let mut intervals = Vec::with_capacity(lengths.len());
        for length in lengths {
            intervals.push(Interval::new(cursor, cursor + length).expect("positive length"));
            cursor += length;
        }
        if reversed {
            intervals.reverse();
        }

        let mut engine = DayViewEngine::new(geometry());
        for interval in intervals {
            engine.add_event(interval);
        }
        for record in engine.records() {
            prop_assert_eq!(record.column(), 0);
            prop_assert_eq!(record.lane_count(), 1);
            prop_assert!(record.neighbors().is_empty());
        }
    }

    #[test]
    fn lane_widths_fill_the_drawable_area(
        intervals in prop::collection::vec(interval_strategy(), 1..30),
    ) {
        let mut engine = DayViewEngine::new(geometry());
        for interval in intervals {
            engine.add_event(interval);
        }
        for (id, style) in engine.snapshot() {
            let record = engine.record(id).expect("record");
            let total = style.width * record.lane_count() as f64;
            prop_assert!((total - 600.0).abs() < 1e-9);
            prop_assert!(style.left >= 10.0);
            prop_assert!(style.left + style.width <= 610.0 + 1e-9);
        }
    }
}
