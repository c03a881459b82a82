use compact_str::CompactString;
use std::fmt;
use tracing::debug;

use super::assignment::JumpAssignment;
use crate::ui::geom::Pos;
use crate::ui::scene::{Screen, WidgetKey};

#[derive(Debug)]
pub enum JumpError {
    /// The resolved target is no longer mounted. Raised only at use time,
    /// by [`JumpTarget::resolve`]; the session itself never dereferences.
    StaleTarget,
}

impl fmt::Display for JumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JumpError::StaleTarget => write!(f, "jump target is no longer mounted"),
        }
    }
}

impl std::error::Error for JumpError {}

/// What a jump resolves to: a stable id looked up again at use time, or a
/// direct generational handle for widgets without one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JumpTarget {
    Id(CompactString),
    Widget(WidgetKey),
}

impl JumpTarget {
    /// Re-validate against the live tree. Widgets may unmount between
    /// overlay display and key receipt, so callers must resolve here
    /// instead of trusting anything captured at map-build time.
    pub fn resolve(&self, screen: &dyn Screen) -> Result<WidgetKey, JumpError> {
        match self {
            JumpTarget::Id(id) => screen.find_by_id(id).ok_or(JumpError::StaleTarget),
            JumpTarget::Widget(key) => {
                if screen.is_mounted(*key) {
                    Ok(*key)
                } else {
                    Err(JumpError::StaleTarget)
                }
            }
        }
    }
}

/// One overlay entry: the key to press and the target it selects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JumpInfo {
    pub key: CompactString,
    pub target: JumpTarget,
}

/// Position-to-target mapping for one jump interaction.
///
/// Entries keep insertion order; inserting at an occupied position replaces
/// the entry in place, so fully overlapping widgets are last-write-wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JumpMap {
    entries: Vec<(Pos, JumpInfo)>,
}

impl JumpMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pos: Pos, info: JumpInfo) {
        match self.entries.iter_mut().find(|(p, _)| *p == pos) {
            Some(entry) => entry.1 = info,
            None => self.entries.push((pos, info)),
        }
    }

    pub fn get(&self, pos: Pos) -> Option<&JumpInfo> {
        self.entries
            .iter()
            .find(|(p, _)| *p == pos)
            .map(|(_, info)| info)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, &JumpInfo)> + '_ {
        self.entries.iter().map(|(pos, info)| (*pos, info))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Target resolver: walks the screen and builds the jump map.
pub struct Jumper<'a> {
    assignment: &'a JumpAssignment,
}

impl<'a> Jumper<'a> {
    pub fn new(assignment: &'a JumpAssignment) -> Self {
        Self { assignment }
    }

    /// Pure query over the current tree: one entry per eligible widget.
    ///
    /// Eligibility, in priority order: a stable id present in the
    /// assignment table, else the [`crate::ui::scene::Jumpable`] capability.
    /// A tree with no eligible widgets yields an empty map.
    pub fn compute(&self, screen: &dyn Screen) -> JumpMap {
        let mut map = JumpMap::new();
        for key in screen.walk() {
            let Some(widget) = screen.widget(key) else {
                continue;
            };
            let info = match widget
                .id()
                .and_then(|id| self.assignment.key_for(id).map(|k| (id, k)))
            {
                Some((id, jump_key)) => JumpInfo {
                    key: jump_key.into(),
                    target: JumpTarget::Id(id.into()),
                },
                None => match widget.as_jumpable() {
                    Some(jumpable) => JumpInfo {
                        key: jumpable.jump_key().into(),
                        target: JumpTarget::Widget(key),
                    },
                    None => continue,
                },
            };
            let Some(pos) = screen.offset_of(key) else {
                continue;
            };
            debug!(widget = widget.type_name(), key = %info.key, x = pos.x, y = pos.y, "jump target");
            map.insert(pos, info);
        }
        map
    }
}

#[cfg(test)]
#[path = "../../tests/unit/jump/jumper.rs"]
mod tests;
