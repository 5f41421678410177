use super::*;

fn agronomist() -> User {
    User {
        id: "u2".to_owned(),
        email: "mart@agro.ee".to_owned(),
        full_name: "Mart Kask".to_owned(),
        account_type: AccountType::Agronomist,
        phone: "+372 1".to_owned(),
        country: "Estonia".to_owned(),
        city: "Tallinn".to_owned(),
        education: Some("MSc".to_owned()),
        specializations: vec!["soil".to_owned(), "grassland".to_owned()],
    }
}

#[test]
fn form_from_user_round_trips_without_changes() {
    let user = agronomist();
    let form = ProfileForm::from_user(&user);
    assert_eq!(form.specializations, "soil, grassland");
    assert_eq!(build_patch(&user, &form), Err(NOTHING_CHANGED));
}

#[test]
fn patch_carries_only_changed_fields() {
    let user = agronomist();
    let form = ProfileForm { city: " Tartu ".to_owned(), ..ProfileForm::from_user(&user) };
    assert_eq!(
        build_patch(&user, &form),
        Ok(UserPatch { city: Some("Tartu".to_owned()), ..UserPatch::default() })
    );
}

#[test]
fn patch_detects_specialization_change() {
    let user = agronomist();
    let form = ProfileForm { specializations: "soil".to_owned(), ..ProfileForm::from_user(&user) };
    let patch = build_patch(&user, &form).unwrap();
    assert_eq!(patch.specializations, Some(vec!["soil".to_owned()]));
    assert!(patch.full_name.is_none());
}

#[test]
fn farmer_patch_ignores_role_fields() {
    let user = User { account_type: AccountType::Farmer, education: None, specializations: Vec::new(), ..agronomist() };
    let form = ProfileForm { education: "PhD".to_owned(), ..ProfileForm::from_user(&user) };
    assert_eq!(build_patch(&user, &form), Err(NOTHING_CHANGED));
}

#[test]
fn blank_name_is_rejected() {
    let user = agronomist();
    let form = ProfileForm { full_name: "   ".to_owned(), ..ProfileForm::from_user(&user) };
    assert_eq!(build_patch(&user, &form), Err(NAME_REQUIRED));
}
