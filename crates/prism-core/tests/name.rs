use prism_core::{Name, Quoted};

#[test]
fn empty_parts_are_dropped() {
    let name = Name::new(["", "public", "", "users"]);
    assert_eq!(name.parts().len(), 2);
    assert_eq!(name.to_string(), "public.users");
}

#[test]
fn qualification() {
    let name = Name::new(["db", "public", "users"]);

    assert!(name.qualified());
    assert_eq!(name.unqualified(), Name::from("users"));
    assert_eq!(name.qualifier(), Name::new(["db", "public"]));
    assert_eq!(name.first(), Some("db"));
    assert_eq!(name.last(), Some("users"));
    assert!(!Name::from("users").qualified());
}

#[test]
fn append() {
    let table = Name::from("users");
    assert_eq!(table.append("id"), Name::new(["users", "id"]));
}

#[test]
fn quoting_copies() {
    let name = Name::new(["public", "users"]);

    assert!(name
        .quoted()
        .parts()
        .iter()
        .all(|part| part.quoted == Quoted::Quoted));
    assert!(name
        .unquoted()
        .parts()
        .iter()
        .all(|part| part.quoted == Quoted::Unquoted));

    // Quoting is part of a name's identity.
    assert_ne!(name, name.quoted());
    assert!(name.eq_ignore_case(&name.quoted()));
}

#[test]
fn case_insensitive_comparisons() {
    assert!(Name::new(["a", "ID"]).eq_unqualified(&Name::new(["b", "id"])));
    assert!(!Name::new(["a", "ID"]).eq_ignore_case(&Name::new(["b", "id"])));
}
