use super::*;

fn user(full_name: &str) -> User {
    User {
        id: "u1".to_owned(),
        email: "ana@farm.ee".to_owned(),
        full_name: full_name.to_owned(),
        account_type: AccountType::Farmer,
        phone: String::new(),
        country: String::new(),
        city: String::new(),
        education: None,
        specializations: Vec::new(),
    }
}

#[test]
fn greeting_uses_first_name() {
    assert_eq!(greeting(&user("Ana Tamm")), "Welcome back, Ana");
}

#[test]
fn greeting_falls_back_to_email() {
    assert_eq!(greeting(&user("  ")), "Welcome back, ana@farm.ee");
}

#[test]
fn role_summary_differs_per_role() {
    assert_ne!(role_summary(AccountType::Farmer), role_summary(AccountType::Agronomist));
}
