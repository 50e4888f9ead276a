use chronograph::prelude::*;
use chronograph::tracing::{Dispatch, Level};
use std::io;
use std::sync::{Arc, Mutex};
use std::thread::sleep;
use std::time::Duration;

fn assert_secs(actual: Duration, expected: f64) {
    let actual = actual.as_secs_f64();
    assert!(
        actual >= expected && actual < expected + 0.2,
        "expected about {}s, got {}s",
        expected,
        actual
    );
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capturing_logger() -> (Dispatch, Captured) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    (Dispatch::new(subscriber), captured)
}

fn line_containing<'a>(text: &'a str, needle: &str) -> &'a str {
    text.lines()
        .find(|line| line.contains(needle))
        .unwrap_or_else(|| panic!("no line containing {:?} in {:?}", needle, text))
}

#[test]
fn sections_with_real_clock() {
    let mut cg = Chronograph::new("Testing Chronograph");

    cg.start(Some("first section")).unwrap();
    sleep(Duration::from_millis(100));
    cg.stop().unwrap();

    cg.start(Some("second section")).unwrap();
    sleep(Duration::from_millis(50));
    cg.stop().unwrap();

    assert_secs(cg.total_elapsed_time(), 0.15);
    assert_secs(cg.last_split_time().unwrap(), 0.05);
    assert!(cg.as_secs_f64() >= 0.15);

    let splits = cg.splits();
    assert_eq!(splits[0].label(), Some("first section"));
    assert_secs(splits[0].elapsed().unwrap(), 0.1);
    assert_eq!(splits[1].label(), Some("second section"));
}

#[test]
fn total_is_sum_of_closed_splits() {
    let mut cg = Chronograph::new("sum");

    cg.start(Some("a")).unwrap();
    sleep(Duration::from_millis(5));
    cg.split(Some("b")).unwrap();
    sleep(Duration::from_millis(5));
    cg.split(None).unwrap();
    cg.stop().unwrap();
    cg.start(Some("d")).unwrap();
    cg.stop().unwrap();

    let sum: Duration = cg.splits().iter().filter_map(Split::elapsed).sum();
    assert_eq!(cg.total_elapsed_time(), sum);
    assert_eq!(cg.splits().len(), 4);
    assert!(cg.splits().iter().all(Split::is_closed));
}

#[test]
fn named_chronographs_accumulate_across_functions() {
    fn func1() {
        let cg = get_chronograph("tests::my first chronograph");
        cg.start(None).unwrap();
        sleep(Duration::from_millis(50));
        cg.stop().unwrap();
    }

    fn func2() {
        let cg = get_chronograph("tests::my second chronograph");
        cg.start(None).unwrap();
        sleep(Duration::from_millis(25));
        cg.stop().unwrap();
    }

    let cg1 = get_chronograph_with(
        "tests::my first chronograph",
        ChronographOptions::default().with_start_timing(true),
    );
    sleep(Duration::from_millis(75));
    cg1.stop().unwrap();
    func1();
    func2();

    assert_secs(cg1.total_elapsed_time(), 0.125);
    assert_secs(
        get_chronograph("tests::my second chronograph").total_elapsed_time(),
        0.025,
    );
}

#[test]
fn scoped_registry_chronograph() {
    {
        let _scope = get_chronograph("tests::hello").scope(None).unwrap();
        sleep(Duration::from_millis(50));
    }

    let hello = get_chronograph("tests::hello");
    assert_eq!(hello.state(), State::Stopped);
    assert_secs(hello.total_elapsed_time(), 0.05);
}

#[test]
fn wrapped_functions_record_one_split_per_call() {
    chronograph_fn! {
        fn tests_func1() {
            sleep(Duration::from_millis(10));
        }
    }

    chronograph_fn! {
        name = "tests::my func2 timer";
        fn tests_func2(millis: u64) -> u64 {
            sleep(Duration::from_millis(millis));
            millis
        }
    }

    tests_func1();
    tests_func1();
    tests_func1();
    assert_eq!(tests_func2(5), 5);

    let cg1 = get_chronograph("tests_func1");
    assert_eq!(cg1.lock().splits().len(), 3);
    assert_secs(cg1.total_elapsed_time(), 0.03);

    let cg2 = get_chronograph("tests::my func2 timer");
    assert_eq!(cg2.lock().splits()[0].label(), Some("tests_func2"));
    assert_secs(cg2.total_elapsed_time(), 0.005);
}

#[test]
fn json_round_trip_keeps_splits() {
    let mut cg = Chronograph::with_options(
        ChronographOptions::new("json").with_start_timing(true),
    );
    sleep(Duration::from_millis(5));
    cg.split(Some("s2")).unwrap();
    sleep(Duration::from_millis(10));
    cg.stop().unwrap();

    let splits = splits_from_json(&cg.to_json().unwrap()).unwrap();

    assert_eq!(splits, cg.splits());
    assert_eq!(splits[0].label(), None);
    assert_eq!(splits[1].label(), Some("s2"));
    assert_eq!(splits[1].elapsed(), cg.last_split_time());
}

#[test]
fn logger_receives_messages_and_report() {
    let (logger, captured) = capturing_logger();
    let mut cg = Chronograph::with_options(
        ChronographOptions::new("logged")
            .with_logger(logger)
            .with_log_level(Level::DEBUG)
            .with_verbosity(1),
    );

    cg.start(Some("work")).unwrap();
    cg.stop().unwrap();
    let report = cg.report(true);

    let text = captured.text();
    assert!(text.contains("Chronograph logged started"));
    assert!(text.contains("Chronograph logged stopped"));
    assert!(text.contains("DEBUG"));
    assert!(report.starts_with("Chronograph: logged\n  work: "));
    assert!(text.contains("Total:"));
}

#[test]
fn detailed_messages_at_verbosity_two() {
    let (logger, captured) = capturing_logger();
    let mut cg = Chronograph::with_options(
        ChronographOptions::new("detailed")
            .with_logger(logger)
            .with_verbosity(2),
    );

    cg.start(Some("a")).unwrap();
    cg.split(None).unwrap();
    cg.stop().unwrap();
    cg.reset();

    let text = captured.text();
    let start = line_containing(&text, "Chronograph detailed started split a at ");
    let instant = start.rsplit(" at ").next().unwrap().trim();
    assert!(chrono::DateTime::parse_from_rfc3339(instant).is_ok());
    assert!(text.contains("Chronograph detailed stopped split a after 0."));
    assert!(text.contains("Chronograph detailed started split split 2 at "));
    assert!(text.contains("Chronograph detailed stopped split split 2 after 0."));
    assert!(text.contains("Chronograph detailed was reset"));
    assert!(!text.contains("Chronograph detailed started\n"));
}

#[test]
fn lenient_misuse_is_logged_as_warning() {
    let (logger, captured) = capturing_logger();
    let mut cg = Chronograph::with_options(
        ChronographOptions::new("TestCase")
            .with_logger(logger)
            .with_verbosity(0)
            .with_throw_exceptions(false),
    );

    assert_eq!(cg.stop(), Ok(false));
    cg.start(None).unwrap();
    assert_eq!(cg.start(None), Ok(false));
    assert_eq!(cg.splits().len(), 1);

    let text = captured.text();
    assert!(text.contains("WARN"));
    assert!(text.contains("Cannot start Chronograph 'TestCase' while it is running"));
    assert!(text.contains("Cannot stop Chronograph 'TestCase' while it is idle"));
}

#[test]
fn strict_misuse_returns_error() {
    let mut cg = Chronograph::with_options(
        ChronographOptions::new("TestCase").with_throw_exceptions(true),
    );
    cg.start(None).unwrap();

    match cg.start(None) {
        Err(ChronographError::InvalidState { name, action, state }) => {
            assert_eq!(name, "TestCase");
            assert_eq!(action, Action::Start);
            assert_eq!(state, State::Running);
        }
        other => panic!("expected an invalid state error, got {:?}", other),
    }
}
