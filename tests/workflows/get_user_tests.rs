//! Get User Workflow Tests

use pretty_assertions::assert_eq;

use user_management::application::dto::UserDto;
use user_management::application::use_cases::{
    CreateUserCommand, CreateUserResult, GetUserByEmailQuery, GetUserByEmailResult, GetUserQuery,
    GetUserResult,
};
use user_management::domain::{UserId, UserRepository};

use crate::common::{unique_email, TestApp, TEST_USER};

async fn create(test: &TestApp, email: &str) -> UserId {
    match test
        .app
        .create_user()
        .execute(CreateUserCommand::new(email, TEST_USER.name, TEST_USER.password))
        .await
    {
        CreateUserResult::Success(id) => id,
        other => panic!("expected success, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let test = TestApp::new();

    let result = test.app.get_user().execute(GetUserQuery::new(UserId::generate())).await;

    assert_eq!(result, GetUserResult::NotFound);
}

#[tokio::test]
async fn test_get_by_email_finds_created_user() {
    let test = TestApp::new();
    let email = unique_email();
    let id = create(&test, &email).await;

    match test.app.get_user_by_email().execute(GetUserByEmailQuery::new(&email)).await {
        GetUserByEmailResult::Found(user) => {
            assert_eq!(user.id(), &id);
            assert_eq!(user.email().as_str(), email);
        }
        other => panic!("expected Found, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_by_email_is_exact_match() {
    let test = TestApp::new();
    create(&test, TEST_USER.email).await;

    let result = test
        .app
        .get_user_by_email()
        .execute(GetUserByEmailQuery::new("JOHN@example.com"))
        .await;

    assert_eq!(result, GetUserByEmailResult::NotFound);
}

#[tokio::test]
async fn test_get_by_malformed_email_is_invalid() {
    let test = TestApp::new();

    for raw in ["invalid-email", ""] {
        match test.app.get_user_by_email().execute(GetUserByEmailQuery::new(raw)).await {
            GetUserByEmailResult::InvalidEmail(message) => assert!(!message.is_empty()),
            other => panic!("expected InvalidEmail for {:?}, got {:?}", raw, other),
        }
    }
}

#[tokio::test]
async fn test_deleted_user_is_not_found() {
    let test = TestApp::new();
    let id = create(&test, TEST_USER.email).await;

    test.repo.delete(&id).await.unwrap();

    assert_eq!(test.app.get_user().execute(GetUserQuery::new(id)).await, GetUserResult::NotFound);
    // the email is free again
    create(&test, TEST_USER.email).await;
}

#[tokio::test]
async fn test_found_user_maps_to_dto_without_password() {
    let test = TestApp::new();
    let id = create(&test, TEST_USER.email).await;

    let GetUserResult::Found(user) = test.app.get_user().execute(GetUserQuery::new(id)).await else {
        panic!("user should exist");
    };
    let dto = UserDto::from(user);

    assert_eq!(dto.id, id.to_string());
    assert_eq!(dto.email, TEST_USER.email);
    assert_eq!(dto.name, TEST_USER.name);
    assert!(dto.active);

    let json = serde_json::to_string(&dto).unwrap();
    assert!(!json.contains("password"));
}
