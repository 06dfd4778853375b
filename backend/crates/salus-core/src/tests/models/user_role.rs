use crate::{CoreError, UserRole};

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_stored_role_strings_when_parsed_then_round_trip_through_as_str() {
    for role in [UserRole::Cliente, UserRole::Asesor, UserRole::Admin] {
        let parsed = UserRole::from_str(role.as_str()).unwrap();
        assert_that!(parsed, eq(role));
    }
}

#[test]
fn given_long_form_administrador_when_parsed_then_admin() {
    let parsed = UserRole::from_str("administrador").unwrap();

    assert_that!(parsed, eq(UserRole::Admin));
}

#[test]
fn given_unknown_role_when_parsed_then_invalid_user_role_error() {
    let result = UserRole::from_str("superuser");

    assert!(matches!(result, Err(CoreError::InvalidUserRole { ref value, .. }) if value == "superuser"));
}

#[test]
fn given_default_role_then_cliente() {
    assert_that!(UserRole::default(), eq(UserRole::Cliente));
    assert_that!(UserRole::default().to_string(), eq("cliente"));
}
