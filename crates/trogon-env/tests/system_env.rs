//! Accessors over the real process environment. Keys are unique per test
//! so the suite can run in parallel.

use trogon_env::{EnvAccessor, Error, ReadEnv};
use uuid::Uuid;

fn test_key() -> String {
    format!("TROGON_ENV_TEST_{}", Uuid::new_v4().simple())
}

#[test]
fn string_round_trips_through_process_env() {
    let env = EnvAccessor::system();
    let key = test_key();

    env.set_string(&key, "TEST_KEY_VALUE").unwrap();

    assert_eq!(std::env::var(&key).unwrap(), "TEST_KEY_VALUE");
    assert_eq!(env.get_string_or_error(&key).unwrap(), "TEST_KEY_VALUE");
}

#[test]
fn absent_key_is_empty_variable() {
    let env = EnvAccessor::system();
    let key = test_key();

    let err = env.get_string_or_error(&key).unwrap_err();
    assert!(matches!(err, Error::EmptyVariable { .. }));
    assert_eq!(err.key(), key);
}

#[test]
fn absent_key_falls_back_to_default() {
    let env = EnvAccessor::system();

    assert_eq!(env.get_string_or_default(&test_key(), "fallback"), "fallback");
    assert_eq!(env.get_int_or_default(&test_key(), 42), 42);
    assert_eq!(env.get_float64_or_default(&test_key(), 1.23456), 1.23456);
    assert!(env.get_bool_or_default(&test_key(), true));
}

#[test]
fn port_set_as_int_is_read_back() {
    let env = EnvAccessor::system();
    let key = test_key();

    env.set_int(&key, 8080).unwrap();

    assert_eq!(env.get_int_or_panic(&key), 8080);
}

#[test]
fn non_numeric_port_is_parse_error() {
    let env = EnvAccessor::system();
    let key = test_key();

    env.set_string(&key, "not-a-number").unwrap();

    assert!(matches!(
        env.get_int_or_error(&key),
        Err(Error::Parse { kind: "int", .. })
    ));
}

#[test]
fn float_and_bool_round_trip() {
    let env = EnvAccessor::system();
    let ratio = test_key();
    let flag = test_key();

    env.set_float64(&ratio, 12.345).unwrap();
    env.set_bool(&flag, true).unwrap();

    assert_eq!(env.env().var(&ratio).unwrap(), "12.345000");
    assert_eq!(env.get_float64_or_error(&ratio).unwrap(), 12.345);
    assert!(env.get_bool_or_error(&flag).unwrap());
}

#[test]
fn invalid_key_is_io_error() {
    let env = EnvAccessor::system();

    assert!(matches!(
        env.set_string("TROGON=ENV", "value"),
        Err(Error::Io { .. })
    ));
    assert!(matches!(env.set_bool("", true), Err(Error::Io { .. })));
}

#[test]
#[should_panic(expected = "is empty")]
fn required_variable_missing_panics() {
    EnvAccessor::system().get_string_or_panic(&test_key());
}
