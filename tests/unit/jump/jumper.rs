use super::*;
use crate::ui::geom::Rect;
use crate::ui::scene::{Jumpable, SceneTree, Widget};

struct Field {
    id: &'static str,
}

impl Widget for Field {
    fn type_name(&self) -> &'static str {
        "field"
    }

    fn id(&self) -> Option<&str> {
        Some(self.id)
    }
}

struct Pane {
    key: &'static str,
}

impl Widget for Pane {
    fn type_name(&self) -> &'static str {
        "pane"
    }

    fn as_jumpable(&self) -> Option<&dyn Jumpable> {
        Some(self)
    }
}

impl Jumpable for Pane {
    fn jump_key(&self) -> &str {
        self.key
    }
}

struct Plain;

impl Widget for Plain {
    fn type_name(&self) -> &'static str {
        "plain"
    }
}

// Both a table id and a self-declared key; the table must win.
struct TaggedPane {
    id: &'static str,
    key: &'static str,
}

impl Widget for TaggedPane {
    fn type_name(&self) -> &'static str {
        "tagged-pane"
    }

    fn id(&self) -> Option<&str> {
        Some(self.id)
    }

    fn as_jumpable(&self) -> Option<&dyn Jumpable> {
        Some(self)
    }
}

impl Jumpable for TaggedPane {
    fn jump_key(&self) -> &str {
        self.key
    }
}

fn rect(x: u16, y: u16) -> Rect {
    Rect::new(x, y, 10, 3)
}

#[test]
fn table_ids_become_indirect_targets() {
    let mut scene = SceneTree::new();
    let root = scene.mount_root(Box::new(Plain), rect(0, 0));
    scene
        .mount(root, Box::new(Field { id: "url-bar" }), rect(2, 1))
        .unwrap();
    scene
        .mount(root, Box::new(Field { id: "send-button" }), rect(14, 1))
        .unwrap();

    let table = JumpAssignment::new([("url-bar", "u"), ("send-button", "s")]);
    let map = Jumper::new(&table).compute(&scene);

    assert_eq!(map.len(), 2);
    let info = map.get(Pos::new(2, 1)).unwrap();
    assert_eq!(info.key, "u");
    assert_eq!(info.target, JumpTarget::Id("url-bar".into()));
    let info = map.get(Pos::new(14, 1)).unwrap();
    assert_eq!(info.key, "s");
    assert_eq!(info.target, JumpTarget::Id("send-button".into()));
}

#[test]
fn self_declared_key_becomes_direct_target() {
    let mut scene = SceneTree::new();
    let root = scene.mount_root(Box::new(Plain), rect(0, 0));
    let pane = scene
        .mount(root, Box::new(Pane { key: "c" }), rect(0, 5))
        .unwrap();

    let table = JumpAssignment::default();
    let map = Jumper::new(&table).compute(&scene);

    assert_eq!(map.len(), 1);
    let info = map.get(Pos::new(0, 5)).unwrap();
    assert_eq!(info.key, "c");
    assert_eq!(info.target, JumpTarget::Widget(pane));
}

#[test]
fn table_entry_takes_priority_over_capability() {
    let mut scene = SceneTree::new();
    let root = scene.mount_root(Box::new(Plain), rect(0, 0));
    scene
        .mount(
            root,
            Box::new(TaggedPane {
                id: "collection-tree",
                key: "c",
            }),
            rect(0, 5),
        )
        .unwrap();

    let table = JumpAssignment::new([("collection-tree", "t")]);
    let map = Jumper::new(&table).compute(&scene);

    let info = map.get(Pos::new(0, 5)).unwrap();
    assert_eq!(info.key, "t");
    assert_eq!(info.target, JumpTarget::Id("collection-tree".into()));
}

#[test]
fn capability_still_applies_when_id_is_not_in_table() {
    let mut scene = SceneTree::new();
    let root = scene.mount_root(Box::new(Plain), rect(0, 0));
    let pane = scene
        .mount(
            root,
            Box::new(TaggedPane {
                id: "collection-tree",
                key: "c",
            }),
            rect(0, 5),
        )
        .unwrap();

    let table = JumpAssignment::new([("url-bar", "u")]);
    let map = Jumper::new(&table).compute(&scene);

    let info = map.get(Pos::new(0, 5)).unwrap();
    assert_eq!(info.key, "c");
    assert_eq!(info.target, JumpTarget::Widget(pane));
}

#[test]
fn ineligible_widgets_are_skipped() {
    let mut scene = SceneTree::new();
    let root = scene.mount_root(Box::new(Plain), rect(0, 0));
    scene.mount(root, Box::new(Plain), rect(0, 5)).unwrap();
    scene
        .mount(root, Box::new(Field { id: "unlisted" }), rect(0, 9))
        .unwrap();

    let table = JumpAssignment::new([("url-bar", "u")]);
    let map = Jumper::new(&table).compute(&scene);

    assert!(map.is_empty());
}

#[test]
fn empty_tree_yields_empty_map() {
    let scene = SceneTree::new();
    let table = JumpAssignment::new([("url-bar", "u")]);
    assert!(Jumper::new(&table).compute(&scene).is_empty());
}

#[test]
fn fully_overlapping_widgets_are_last_write_wins() {
    let mut scene = SceneTree::new();
    let root = scene.mount_root(Box::new(Plain), rect(0, 0));
    scene
        .mount(root, Box::new(Field { id: "under" }), rect(4, 4))
        .unwrap();
    scene
        .mount(root, Box::new(Field { id: "over" }), rect(4, 4))
        .unwrap();

    let table = JumpAssignment::new([("under", "a"), ("over", "b")]);
    let map = Jumper::new(&table).compute(&scene);

    assert_eq!(map.len(), 1);
    let info = map.get(Pos::new(4, 4)).unwrap();
    assert_eq!(info.key, "b");
    assert_eq!(info.target, JumpTarget::Id("over".into()));
}

#[test]
fn compute_is_idempotent_on_an_unmodified_tree() {
    let mut scene = SceneTree::new();
    let root = scene.mount_root(Box::new(Plain), rect(0, 0));
    scene
        .mount(root, Box::new(Field { id: "url-bar" }), rect(2, 1))
        .unwrap();
    scene
        .mount(root, Box::new(Pane { key: "c" }), rect(0, 5))
        .unwrap();

    let table = JumpAssignment::new([("url-bar", "u")]);
    let jumper = Jumper::new(&table);
    assert_eq!(jumper.compute(&scene), jumper.compute(&scene));
}

#[test]
fn id_target_resolves_by_lookup_at_use_time() {
    let mut scene = SceneTree::new();
    let root = scene.mount_root(Box::new(Plain), rect(0, 0));
    let field = scene
        .mount(root, Box::new(Field { id: "url-bar" }), rect(2, 1))
        .unwrap();

    let target = JumpTarget::Id("url-bar".into());
    assert_eq!(target.resolve(&scene).unwrap(), field);

    scene.unmount(field);
    assert!(matches!(target.resolve(&scene), Err(JumpError::StaleTarget)));

    // Remounting under the same id heals the indirect target.
    let again = scene
        .mount(root, Box::new(Field { id: "url-bar" }), rect(2, 1))
        .unwrap();
    assert_eq!(target.resolve(&scene).unwrap(), again);
}

#[test]
fn direct_target_goes_stale_with_its_widget() {
    let mut scene = SceneTree::new();
    let root = scene.mount_root(Box::new(Plain), rect(0, 0));
    let pane = scene
        .mount(root, Box::new(Pane { key: "c" }), rect(0, 5))
        .unwrap();

    let target = JumpTarget::Widget(pane);
    assert_eq!(target.resolve(&scene).unwrap(), pane);

    scene.unmount(pane);
    assert!(matches!(target.resolve(&scene), Err(JumpError::StaleTarget)));
}
