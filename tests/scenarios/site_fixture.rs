//! Site fixture scenarios

use lazyrel_fixtures::{chinatown_setup, set_up, CHINATOWN_CHARACTERS};

#[test]
fn test_chinatown_resolved_lazily_in_cast_order() {
    let mut site = set_up().unwrap();
    chinatown_setup(&mut site).unwrap();

    let ids: Vec<_> = CHINATOWN_CHARACTERS
        .iter()
        .map(|name| site.intids().get_id(name).unwrap())
        .collect();
    let cast = site.resolve_lazy(ids);

    assert_eq!(cast.realized_count(), 0);
    assert_eq!(cast.len(), Ok(CHINATOWN_CHARACTERS.len()));

    let names: Vec<String> = cast.iter().map(|d| d.unwrap().id().to_string()).collect();
    assert_eq!(names, CHINATOWN_CHARACTERS);
}

#[test]
fn test_first_object_only() {
    let site = set_up().unwrap();
    let seq = site.resolve_lazy(site.intids().ids());
    assert_eq!(seq.first().unwrap().unwrap().to_string(), "<Demo ob0>");
    assert_eq!(seq.realized_count(), 1);
}
