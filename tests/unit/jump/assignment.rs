use super::*;

#[test]
fn lookup_in_both_directions() {
    let table = JumpAssignment::new([("url-bar", "u"), ("send-button", "s")]);
    assert_eq!(table.key_for("url-bar"), Some("u"));
    assert_eq!(table.key_for("send-button"), Some("s"));
    assert_eq!(table.id_for("u"), Some("url-bar"));
    assert_eq!(table.key_for("missing"), None);
    assert_eq!(table.id_for("z"), None);
}

#[test]
fn duplicate_key_reverse_is_last_write_wins() {
    let table = JumpAssignment::new([("url-bar", "x"), ("send-button", "x")]);
    assert_eq!(table.key_for("url-bar"), Some("x"));
    assert_eq!(table.key_for("send-button"), Some("x"));
    assert_eq!(table.id_for("x"), Some("send-button"));
}

#[test]
fn assign_overrides_an_existing_id() {
    let mut table = JumpAssignment::new([("url-bar", "u")]);
    table.assign("url-bar", "b");
    assert_eq!(table.key_for("url-bar"), Some("b"));
    assert_eq!(table.id_for("b"), Some("url-bar"));
    assert_eq!(table.len(), 1);
}

#[test]
fn empty_table() {
    let table = JumpAssignment::default();
    assert!(table.is_empty());
    assert_eq!(table.key_for("anything"), None);
}
