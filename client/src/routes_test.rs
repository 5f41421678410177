use super::*;

#[test]
fn public_routes_have_no_role_requirement() {
    for route in AppRoute::ALL {
        assert_eq!(route.is_public(), route.required_roles().is_none(), "{route:?}");
    }
}

#[test]
fn farm_management_is_farmer_only() {
    for route in [AppRoute::Farms, AppRoute::Pastures, AppRoute::Drones] {
        assert!(route.admits(AccountType::Farmer));
        assert!(!route.admits(AccountType::Agronomist));
    }
}

#[test]
fn advisory_is_agronomist_only() {
    assert!(AppRoute::Advisory.admits(AccountType::Agronomist));
    assert!(!AppRoute::Advisory.admits(AccountType::Farmer));
}

#[test]
fn public_routes_admit_no_role() {
    assert!(!AppRoute::Login.admits(AccountType::Farmer));
    assert!(!AppRoute::Register.admits(AccountType::Agronomist));
}

#[test]
fn home_is_reachable_by_every_role() {
    for role in AccountType::ALL {
        assert!(AppRoute::HOME_ENTRY.admits(role));
    }
}

#[test]
fn paths_are_unique_and_round_trip() {
    for route in AppRoute::ALL {
        assert_eq!(AppRoute::from_path(route.path()), Some(route));
    }
    assert_eq!(AppRoute::from_path("/farms/"), Some(AppRoute::Farms));
    assert_eq!(AppRoute::from_path(""), Some(AppRoute::Home));
    assert_eq!(AppRoute::from_path("/unknown"), None);
}

#[test]
fn segment_strips_leading_slash() {
    assert_eq!(AppRoute::Home.segment(), "");
    assert_eq!(AppRoute::ResetPassword.segment(), "reset-password");
}

#[test]
fn farmer_nav_lists_farm_pages_in_order() {
    assert_eq!(
        nav_for(AccountType::Farmer),
        vec![
            AppRoute::Home,
            AppRoute::Profile,
            AppRoute::Farms,
            AppRoute::Pastures,
            AppRoute::Drones,
            AppRoute::Biomass,
            AppRoute::Chat,
        ]
    );
}

#[test]
fn agronomist_nav_excludes_farmer_pages() {
    let nav = nav_for(AccountType::Agronomist);
    assert!(nav.contains(&AppRoute::Advisory));
    assert!(!nav.contains(&AppRoute::Farms));
    assert!(nav.iter().all(|route| !route.is_public()));
}
