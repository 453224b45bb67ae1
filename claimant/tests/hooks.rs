//! Hook behavior: failure propagation, mutation from hooks, logging.

use claimant::{
    Dispatcher, Listener, Outcome, ready,
    listeners::{always, fallback},
    testing::{CallCounter, EventLog, collecting, recording},
};
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing_subscriber::EnvFilter;

#[test]
#[should_panic(expected = "predicate exploded")]
fn test_predicate_panic_propagates() {
    let dispatcher = Dispatcher::<u8>::new();
    dispatcher.attach(&Listener::new().with_corroborate(|_| panic!("predicate exploded")));
    dispatcher.dispatch(ready(1));
}

#[test]
fn test_action_panic_propagates_and_dispatcher_survives() {
    let dispatcher = Dispatcher::<u8>::new();
    let volatile = always().with_accept(|n: u8| {
        if n == 0 {
            panic!("action exploded");
        }
    });
    dispatcher.attach(&volatile);

    let result = catch_unwind(AssertUnwindSafe(|| dispatcher.dispatch(ready(0))));
    assert!(result.is_err());

    // The roster is intact after the unwind.
    assert_eq!(dispatcher.len(), 1);
    assert_eq!(dispatcher.dispatch(ready(1)), Outcome::Claimed);
}

#[test]
fn test_listener_detaching_itself_on_claim() {
    let once = EventLog::new();
    let rest = EventLog::new();
    let dispatcher = Dispatcher::<u8>::new();
    dispatcher.attach(&fallback(collecting(&rest)));

    let one_shot = always::<u8, u8>();
    {
        let dispatcher = dispatcher.clone();
        let this = one_shot.clone();
        let once = once.clone();
        one_shot.set_accept(move |n| {
            once.record(n);
            dispatcher.detach(&this);
        });
    }
    dispatcher.attach(&one_shot);

    dispatcher.dispatch(ready(1));
    dispatcher.dispatch(ready(2));
    dispatcher.dispatch(ready(3));

    assert_eq!(once.entries(), [1]);
    assert_eq!(rest.entries(), [2, 3]);
    assert!(!dispatcher.contains(&one_shot));
}

#[test]
fn test_priority_change_inside_scan_applies_to_next_invoke() {
    let scans = EventLog::new();
    let dispatcher = Dispatcher::<()>::new();

    let shy = Listener::new();
    {
        let this = shy.clone();
        let scans = scans.clone();
        shy.set_corroborate(move |_: &()| {
            scans.record("shy");
            this.set_priority(10);
            false
        });
    }
    dispatcher.attach(&shy);
    dispatcher.attach(&recording("steady", &scans, false).with_priority(5));

    dispatcher.dispatch(ready(()));
    assert_eq!(scans.entries(), ["shy", "steady"]);

    scans.clear();
    dispatcher.dispatch(ready(()));
    assert_eq!(scans.entries(), ["steady", "shy"]);
}

#[test]
fn test_dispatch_with_tracing_enabled() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("claimant_core=trace"))
        .with_test_writer()
        .try_init();

    let claims = CallCounter::new();
    let dispatcher = Dispatcher::<&'static str>::new();
    dispatcher.attach(&recording("quiet", &EventLog::new(), false).named("quiet"));
    dispatcher.attach(&always().named("loud").with_accept({
        let claims = claims.clone();
        move |_: &'static str| claims.bump()
    }));

    assert!(dispatcher.dispatch(ready("event")).is_claimed());
    assert!(Dispatcher::<&'static str>::new().dispatch(ready("lost")).is_unclaimed());
    assert_eq!(claims.count(), 1);
}
