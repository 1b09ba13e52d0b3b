use super::*;

fn contact(name: &str, relationship: Option<&str>) -> Contact {
    Contact {
        id: 1,
        name: name.to_owned(),
        relationship: relationship.map(str::to_owned),
        email: None,
        phone: None,
        notes: None,
    }
}

#[test]
fn blank_query_keeps_everyone() {
    let list = vec![contact("Ada", None), contact("Grace", Some("Friend"))];
    assert_eq!(filter_contacts(&list, "   ").len(), 2);
}

#[test]
fn query_matches_name_case_insensitively() {
    let list = vec![contact("Ada Lovelace", None), contact("Grace Hopper", None)];
    let found = filter_contacts(&list, "LOVE");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Ada Lovelace");
}

#[test]
fn query_matches_relationship() {
    let list = vec![contact("Ada", Some("Sister")), contact("Grace", Some("Coworker"))];
    let found = filter_contacts(&list, "sis");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Ada");
}

#[test]
fn no_match_yields_empty() {
    let list = vec![contact("Ada", None)];
    assert!(filter_contacts(&list, "zzz").is_empty());
}
