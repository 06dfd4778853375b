use crate::{User, UserRole};

use googletest::prelude::*;

fn ana() -> User {
    User {
        id: 1,
        name: "Ana".to_string(),
        email: "a@x.com".to_string(),
        password: "p1".to_string(),
        surname: None,
        role: UserRole::Cliente,
        active: true,
        national_id: None,
        phone: None,
    }
}

#[test]
fn given_exact_credential_when_compared_then_matches() {
    assert_that!(ana().password_matches("p1"), eq(true));
}

#[test]
fn given_different_credential_when_compared_then_does_not_match() {
    let user = ana();

    assert_that!(user.password_matches("wrong"), eq(false));
    assert_that!(user.password_matches("P1"), eq(false));
    assert_that!(user.password_matches(""), eq(false));
}

#[test]
fn given_user_when_serialized_then_password_is_omitted() {
    let json = serde_json::to_value(ana()).unwrap();

    assert_that!(json.get("password"), none());
    assert_eq!(json["email"].as_str(), Some("a@x.com"));
}
