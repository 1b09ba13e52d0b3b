use super::*;

fn named(first: Option<&str>, last: Option<&str>) -> User {
    User {
        id: "u1".to_owned(),
        first_name: first.map(str::to_owned),
        last_name: last.map(str::to_owned),
        ..User::default()
    }
}

// =============================================================
// Initials
// =============================================================

#[test]
fn initials_default_to_u_without_names() {
    assert_eq!(user_initials(Some(&named(None, None))), "U");
}

#[test]
fn initials_default_to_u_without_user() {
    assert_eq!(user_initials(None), "U");
}

#[test]
fn initials_combine_and_uppercase() {
    assert_eq!(user_initials(Some(&named(Some("ada"), Some("lovelace")))), "AL");
}

#[test]
fn initials_use_single_present_name() {
    assert_eq!(user_initials(Some(&named(Some("grace"), None))), "G");
    assert_eq!(user_initials(Some(&named(None, Some("hopper")))), "H");
}

#[test]
fn empty_names_count_as_absent() {
    assert_eq!(user_initials(Some(&named(Some(""), Some("")))), "U");
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn active_link_is_exact_path_match() {
    assert!(is_active("/contacts", "/contacts"));
    assert!(!is_active("/", "/contacts"));
    assert!(!is_active("/contacts", "/contacts/1"));
}

#[test]
fn exactly_one_nav_item_is_active_per_known_path() {
    for current in NAV_ITEMS.iter().map(|i| i.path) {
        let active = NAV_ITEMS.iter().filter(|i| is_active(i.path, current)).count();
        assert_eq!(active, 1, "{current}");
    }
}

#[test]
fn nav_items_start_with_home() {
    assert_eq!(NAV_ITEMS[0], NavItem { path: "/", label: "Home" });
}
