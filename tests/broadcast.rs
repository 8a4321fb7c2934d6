//! Fan-out contract of [`Broadcast`]: same stream, same arguments, to every
//! registered formatter, in registration order.

mod common;

use std::{cell::RefCell, rc::Rc};

use gherkin_report::{Broadcast, Error, Formatter, Report, Result};

use self::common::{entries, feature, log, outcomes, scenario, step, Recorder};

#[test]
fn every_formatter_receives_the_identical_stream() {
    let features =
        [feature(vec![scenario(vec![step("passing"), step("failing")])])];

    let log = log();
    let mut formatters = Broadcast::new();
    formatters.register(Recorder::tagged(&log, "a"));
    formatters.register(Recorder::tagged(&log, "b"));

    Report::new(formatters)
        .run(&features, &mut outcomes)
        .expect("run aborted");

    let entries = entries(&log);
    let stream = |id: &str| {
        entries
            .iter()
            .filter_map(|e| e.strip_prefix(&format!("{id}:")))
            .collect::<Vec<_>>()
    };
    assert_eq!(stream("a"), stream("b"));
    assert!(!stream("a").is_empty());
}

#[test]
fn delivery_follows_registration_order_per_notification() {
    let features = [feature(vec![scenario(vec![step("passing")])])];

    let log = log();
    let mut formatters = Broadcast::new();
    formatters.register(Recorder::tagged(&log, "a"));
    formatters.register(Recorder::tagged(&log, "b"));

    Report::new(formatters)
        .run(&features, &mut outcomes)
        .expect("run aborted");

    // Each notification reaches `a` and then `b` before the traversal moves
    // on to the next one.
    for pair in entries(&log).chunks(2) {
        let [first, second] = pair else {
            panic!("odd number of deliveries: {pair:?}");
        };
        assert_eq!(
            first.strip_prefix("a:"),
            second.strip_prefix("b:"),
            "out-of-order delivery: {first} / {second}",
        );
    }
}

#[test]
fn identical_arguments_reach_every_formatter() {
    let features = [feature(vec![scenario(vec![])])];

    struct Names(&'static str, Rc<RefCell<Vec<String>>>);
    impl Formatter for Names {
        fn scenario_name(&mut self, name: &str) -> Result<()> {
            self.1.borrow_mut().push(format!("{}:{name}", self.0));
            Ok(())
        }
    }

    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut formatters = Broadcast::new();
    formatters.register(Names("a", Rc::clone(&seen)));
    formatters.register(Names("b", Rc::clone(&seen)));

    Report::new(formatters)
        .run(&features, &mut outcomes)
        .expect("run aborted");

    assert_eq!(*seen.borrow(), ["a:eating", "b:eating"]);
}

#[test]
fn formatter_error_stops_the_fanout_and_the_run() {
    let features = [feature(vec![scenario(vec![step("passing")])])];

    let log = log();
    let mut formatters = Broadcast::new();
    formatters.register(Recorder::tagged(&log, "a").failing_at("feature_name"));
    formatters.register(Recorder::tagged(&log, "b"));

    let err = Report::new(formatters)
        .run(&features, &mut outcomes)
        .expect_err("run should abort");
    assert!(matches!(err, Error::Formatter(_)), "{err}");

    let entries = entries(&log);
    // `a` crashed on `feature_name`, so `b` never saw it and the traversal
    // emitted nothing further to anyone.
    assert_eq!(entries.last().map(String::as_str), Some("a:feature_name"));
    assert!(!entries.contains(&"b:feature_name".to_owned()));
}
