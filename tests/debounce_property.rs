use std::path::PathBuf;
use std::time::{Duration, Instant};

use notify::event::{CreateKind, DataChange, MetadataKind, ModifyKind, RemoveKind, RenameMode};
use notify::{Event, EventKind};
use proptest::prelude::*;

use watchpath::watch::{DEBOUNCE_WINDOW, EventFilter, OperationKind, OperationSet};

// Strategy over the kinds the backends actually emit, plus unmapped noise
// (access events and the catch-all kinds).
fn event_kind_strategy() -> impl Strategy<Value = EventKind> {
    prop_oneof![
        Just(EventKind::Create(CreateKind::File)),
        Just(EventKind::Create(CreateKind::Folder)),
        Just(EventKind::Modify(ModifyKind::Data(DataChange::Any))),
        Just(EventKind::Modify(ModifyKind::Data(DataChange::Content))),
        Just(EventKind::Modify(ModifyKind::Metadata(MetadataKind::Any))),
        Just(EventKind::Modify(ModifyKind::Name(RenameMode::From))),
        Just(EventKind::Modify(ModifyKind::Name(RenameMode::To))),
        Just(EventKind::Modify(ModifyKind::Any)),
        Just(EventKind::Remove(RemoveKind::File)),
        Just(EventKind::Any),
        Just(EventKind::Other),
    ]
}

fn operation_set_strategy() -> impl Strategy<Value = OperationSet> {
    proptest::collection::vec(any::<bool>(), 5).prop_map(|flags| {
        let kinds: Vec<OperationKind> = OperationKind::ALL
            .into_iter()
            .zip(flags)
            .filter_map(|(op, enabled)| enabled.then_some(op))
            .collect();
        OperationSet::from_kinds(&kinds)
    })
}

proptest! {
    // Feed an arbitrary timed sequence of notifications through the filter
    // and check the debounce invariants:
    // 1. only notifications matching an enabled kind are ever accepted,
    // 2. two acceptances are always at least one window apart,
    // 3. a matching notification is only suppressed inside the window.
    #[test]
    fn debounce_invariants_hold_for_arbitrary_sequences(
        ops in operation_set_strategy(),
        steps in proptest::collection::vec((0u64..3000, event_kind_strategy()), 1..40),
    ) {
        let base = Instant::now();
        let mut filter = EventFilter::new(ops);
        let mut t = Duration::ZERO;
        let mut last_accept: Option<Duration> = None;

        for (delta_ms, kind) in steps {
            t += Duration::from_millis(delta_ms);

            let matches_enabled = OperationKind::ALL
                .iter()
                .any(|op| ops.contains(*op) && op.matches(&kind));

            let event = Event::new(kind).add_path(PathBuf::from("f"));
            let accepted = filter.apply(&event, base + t);

            if !accepted.is_empty() {
                prop_assert!(matches_enabled, "accepted a kind that matches nothing: {kind:?}");
                if let Some(prev) = last_accept {
                    prop_assert!(
                        t - prev >= DEBOUNCE_WINDOW,
                        "two acceptances only {:?} apart",
                        t - prev,
                    );
                }
                last_accept = Some(t);
            } else if matches_enabled {
                prop_assert!(
                    last_accept.is_some_and(|prev| t - prev < DEBOUNCE_WINDOW),
                    "matching notification suppressed with the window open",
                );
            }
        }
    }
}
