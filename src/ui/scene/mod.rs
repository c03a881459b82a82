pub mod tree;
pub mod widget;

pub use tree::{SceneError, SceneTree, Screen, WidgetKey};
pub use widget::{Jumpable, Widget};
