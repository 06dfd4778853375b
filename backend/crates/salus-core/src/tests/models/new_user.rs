use crate::{NewUser, UserRole};

use googletest::prelude::*;

#[test]
fn given_registration_fields_when_new_then_defaults_to_cliente_without_profile() {
    let user = NewUser::new("Ana".into(), "a@x.com".into(), "p1".into());

    assert_that!(user.role, eq(UserRole::Cliente));
    assert_that!(user.surname, none());
    assert_that!(user.national_id, none());
    assert_that!(user.phone, none());
    assert_that!(user.password, eq("p1"));
}
