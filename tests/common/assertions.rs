//! Custom assertion macros
//!
//! Shorthands for the checks the API tests repeat: unwrapping results with a
//! readable panic, and matching the JSON error bodies the server returns.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a result is an error, optionally of a given shape
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        assert!($result.is_err(), "Expected Err, got Ok");
    };
    ($result:expr, $pattern:pat) => {
        match $result {
            Err($pattern) => {}
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => panic!("Expected different error variant, got: {:?}", e),
        }
    };
}

/// Assert an `axum_test::TestResponse` has the given status and that its
/// JSON body carries `$message` under `$key`
#[macro_export]
macro_rules! assert_json_error {
    ($response:expr, $status:expr, $key:expr, $message:expr) => {{
        let response = &$response;
        assert_eq!(response.status_code(), $status, "unexpected status");
        let body: serde_json::Value = response.json();
        assert_eq!(
            body[$key], $message,
            "expected {:?} under {:?} in {}",
            $message, $key, body
        );
    }};
}
