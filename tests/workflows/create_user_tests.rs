//! Create User Workflow Tests

use std::sync::Arc;

use pretty_assertions::assert_eq;
use test_case::test_case;

use user_management::application::use_cases::{
    CreateUserCommand, CreateUserResult, GetUserQuery, GetUserResult, EMAIL_IN_USE,
};
use user_management::domain::{Email, UserRepository};

use crate::common::{unique_email, TestApp, TEST_USER};

fn command(email: &str) -> CreateUserCommand {
    CreateUserCommand::new(email, TEST_USER.name, TEST_USER.password)
}

/// Created users can be read back by id
#[tokio::test]
async fn test_create_then_get_by_id() {
    let test = TestApp::new();

    let result = test.app.create_user().execute(command(TEST_USER.email)).await;
    let CreateUserResult::Success(id) = result else {
        panic!("expected success, got {:?}", result);
    };

    match test.app.get_user().execute(GetUserQuery::new(id)).await {
        GetUserResult::Found(user) => {
            assert_eq!(user.id(), &id);
            assert_eq!(user.email().as_str(), TEST_USER.email);
            assert_eq!(user.name(), TEST_USER.name);
            assert!(user.password().matches(TEST_USER.password));
            assert!(user.is_active());
            assert!(!user.can_change_email());
        }
        other => panic!("expected Found, got {:?}", other),
    }
}

/// A second registration with the same email is refused
#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let test = TestApp::new();

    let first = test.app.create_user().execute(command(TEST_USER.email)).await;
    assert!(matches!(first, CreateUserResult::Success(_)));

    let second = test
        .app
        .create_user()
        .execute(CreateUserCommand::new(TEST_USER.email, "Jane Doe", "different456"))
        .await;

    assert_eq!(second, CreateUserResult::Failure(vec![EMAIL_IN_USE.to_string()]));
    assert_eq!(test.repo.len(), 1);
    assert_eq!(test.repo.save_calls(), 1);

    let email = Email::new(TEST_USER.email).unwrap();
    let stored = test.repo.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(stored.name(), TEST_USER.name);
}

/// Malformed input never reaches the repository
#[test_case("not-an-email", "John Doe", "password123" ; "invalid email")]
#[test_case("", "John Doe", "password123" ; "empty email")]
#[test_case("john@example.com", "John Doe", "short" ; "weak password")]
#[tokio::test]
async fn test_invalid_input_skips_save(email: &str, name: &str, password: &str) {
    let test = TestApp::new();

    let result = test
        .app
        .create_user()
        .execute(CreateUserCommand::new(email, name, password))
        .await;

    match result {
        CreateUserResult::Failure(errors) => assert!(!errors.is_empty()),
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(test.repo.save_calls(), 0);
    assert!(test.repo.is_empty());
}

/// Name rules surface every failed message
#[tokio::test]
async fn test_invalid_name_returns_validation_errors() {
    let test = TestApp::new();

    let result = test
        .app
        .create_user()
        .execute(CreateUserCommand::new(unique_email(), "J@", TEST_USER.password))
        .await;

    assert_eq!(
        result,
        CreateUserResult::Failure(vec!["name must not contain special characters".to_string()])
    );
    assert_eq!(test.repo.save_calls(), 0);
}

/// Concurrent registrations for one email: exactly one wins
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_keep_email_unique() {
    let test = Arc::new(TestApp::new());
    let email = unique_email();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let test = Arc::clone(&test);
            let email = email.clone();
            tokio::spawn(async move { test.app.create_user().execute(command(&email)).await })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            CreateUserResult::Success(_) => successes += 1,
            CreateUserResult::Failure(errors) => {
                assert_eq!(errors, vec![EMAIL_IN_USE.to_string()]);
            }
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(test.repo.len(), 1);
}

/// Distinct emails all succeed and are counted
#[tokio::test]
async fn test_many_users_are_counted_as_active() {
    let test = TestApp::new();
    let started = chrono::Utc::now() - chrono::Duration::seconds(1);

    for _ in 0..5 {
        let result = test.app.create_user().execute(command(&unique_email())).await;
        assert!(matches!(result, CreateUserResult::Success(_)), "{:?}", result);
    }

    assert_eq!(test.repo.find_all_active_users().await.unwrap().len(), 5);
    assert_eq!(test.repo.count_users_created_after(started).await.unwrap(), 5);
}
