//! End-to-end waits with realistic timing on a paused clock.

use std::env;
use std::io::Write;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;
use tokio::time::Instant;
use tokio_test::{assert_err, assert_ok};
use waitkit_core::{PollOptions, blocking, wait_for, wait_for_configured, wait_for_with};

use crate::common::{Script, init_tracing};

#[tokio::test(start_paused = true)]
async fn undefined_twice_then_ready() {
    init_tracing();
    let script = Script::new(vec![None, None, Some("ready")]);
    let start = Instant::now();

    let value = assert_ok!(
        wait_for_with(|| script.step(), "ready flag", PollOptions::from_millis(5000, 10)).await
    );

    assert_eq!(value, "ready");
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(20), "elapsed {elapsed:?}");
    assert!(elapsed < Duration::from_millis(5000), "elapsed {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn always_false_reports_description_and_timeout() {
    init_tracing();
    let err = assert_err!(wait_for_with(|| false, "X", PollOptions::from_millis(50, 10)).await);
    assert_eq!(err.to_string(), "Timeout waiting for X after 50ms");
    assert_eq!(err.description(), "X");
    assert_eq!(err.timeout(), Duration::from_millis(50));
}

#[tokio::test(start_paused = true)]
async fn ready_after_n_evaluations_takes_about_n_intervals() {
    for n in 1..=5_usize {
        let mut values = vec![Option::<usize>::None; n - 1];
        values.push(Some(n));
        let script = Script::new(values);
        let start = Instant::now();

        let value = assert_ok!(
            wait_for_with(|| script.step(), "nth call", PollOptions::from_millis(1000, 10)).await
        );

        assert_eq!(value, n);
        assert_eq!(script.calls(), n);
        let expected = Duration::from_millis(10 * (n as u64 - 1));
        let elapsed = start.elapsed();
        assert!(elapsed >= expected, "n={n} elapsed {elapsed:?}");
        assert!(
            elapsed < expected + Duration::from_millis(10),
            "n={n} elapsed {elapsed:?}"
        );
    }
}

#[tokio::test(start_paused = true)]
async fn default_timeout_is_five_seconds() {
    let start = Instant::now();
    let err = assert_err!(wait_for(|| None::<u8>, "default window").await);
    assert_eq!(err.to_string(), "Timeout waiting for default window after 5000ms");
    assert!(start.elapsed() >= Duration::from_millis(5000));
    assert!(start.elapsed() <= Duration::from_millis(5011));
}

#[tokio::test(start_paused = true)]
async fn configured_wait_uses_config_file_timing() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[poll]\ntimeout_ms = 30\ninterval_ms = 10").unwrap();
    // Only this test reads the waitkit environment in this binary.
    unsafe {
        env::set_var("WAITKIT_CONFIG", file.path());
        env::remove_var("WAITKIT_TIMEOUT_SCALE");
    }

    let value = assert_ok!(wait_for_configured(|| Some(3_u8), "configured").await);
    assert_eq!(value, 3);

    let start = Instant::now();
    let err = assert_err!(wait_for_configured(|| false, "configured flag").await);
    assert_eq!(err.to_string(), "Timeout waiting for configured flag after 30ms");
    assert!(start.elapsed() < PollOptions::DEFAULT_TIMEOUT);

    unsafe {
        env::remove_var("WAITKIT_CONFIG");
    }
}

#[test]
fn blocking_wait_from_plain_test() {
    init_tracing();
    let script = Script::new(vec![0_u32, 0, 9]);
    let value = assert_ok!(blocking::wait_for(
        || script.step(),
        "third value",
        PollOptions::from_millis(2000, 1),
    ));
    assert_eq!(value, 9);
    assert_eq!(script.calls(), 3);
}
