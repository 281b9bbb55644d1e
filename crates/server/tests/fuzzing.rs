//! Random users pushed through the HTTP layer, the way a property-based
//! fuzzer would drive the API.

mod support;

use axum::http::StatusCode;
use proptest::prelude::*;
use proptest::test_runner::{Config, TestRunner};
use service::users::User;

fn user_strategy(age: impl Strategy<Value = i64>) -> impl Strategy<Value = User> {
    (".{0,24}", ".{0,24}", age)
        .prop_map(|(first_name, last_name, age)| User { first_name, last_name, age })
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime")
}

#[test]
fn inserting_random_users() {
    let rt = runtime();
    let app = server::app();
    let mut runner = TestRunner::new(Config::with_cases(128));
    runner
        .run(&user_strategy(any::<i64>()), |user| {
            let body = serde_json::to_value(&user).expect("user serializes");
            let res = rt.block_on(support::put_json(&app, "/user", &body));
            prop_assert_eq!(res.status, StatusCode::OK);
            Ok(())
        })
        .unwrap();
}

#[test]
fn inserting_random_users_and_check_for_existence() {
    let rt = runtime();
    let app = server::app();
    let mut runner = TestRunner::new(Config::with_cases(128));
    runner
        .run(&user_strategy(1i64..100), |user| {
            let body = serde_json::to_value(&user).expect("user serializes");
            let res = rt.block_on(support::put_json(&app, "/user", &body));
            prop_assert_eq!(res.status, StatusCode::OK);
            let user_id: i64 = res.text.parse().expect("id is an integer");

            let res = rt.block_on(support::get(&app, &format!("/user/{user_id}")));
            prop_assert_eq!(res.status, StatusCode::OK);
            prop_assert_eq!(res.json(), body);
            Ok(())
        })
        .unwrap();
}

#[test]
fn random_ids_never_error_on_empty_store() {
    let rt = runtime();
    let app = server::app();
    let mut runner = TestRunner::new(Config::with_cases(64));
    runner
        .run(&any::<i64>(), |id| {
            let res = rt.block_on(support::get(&app, &format!("/user/{id}")));
            prop_assert_eq!(res.status, StatusCode::NOT_FOUND);
            let expected = format!("User '{id}' does not exist.");
            let body = res.json();
            prop_assert_eq!(body["detail"].as_str(), Some(expected.as_str()));
            Ok(())
        })
        .unwrap();
}
