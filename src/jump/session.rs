use compact_str::CompactString;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::jumper::{JumpMap, JumpTarget};
use crate::ui::geom::Pos;

/// Session lifecycle. `Resolved` and `Cancelled` are terminal; the session
/// is discarded afterward, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingKey,
    Resolved,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JumpOutcome {
    Jump(JumpTarget),
    Cancelled,
}

/// One modal jump interaction: owns the jump map, indexes targets by key,
/// and resolves the captured keypresses.
///
/// While `AwaitingKey` the session must be the sole consumer of keyboard
/// input; the host dispatches to it first and swallows everything.
pub struct JumpSession {
    map: JumpMap,
    by_key: FxHashMap<CompactString, JumpTarget>,
    buffer: CompactString,
    state: SessionState,
}

impl JumpSession {
    /// Index targets by their jump key, in map order: when two visible
    /// targets share a key, the last one processed shadows the rest.
    pub fn new(map: JumpMap) -> Self {
        let mut by_key = FxHashMap::default();
        for (_, info) in map.iter() {
            by_key.insert(info.key.clone(), info.target.clone());
        }
        Self {
            map,
            by_key,
            buffer: CompactString::default(),
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_awaiting_key(&self) -> bool {
        self.state == SessionState::AwaitingKey
    }

    /// The overlay is up; start capturing input.
    pub fn activate(&mut self) {
        if self.state == SessionState::Idle {
            self.state = SessionState::AwaitingKey;
            debug!(targets = self.map.len(), "jump session active");
        }
    }

    /// Label data for the overlay: each target's key at its position.
    pub fn labels(&self) -> impl Iterator<Item = (Pos, &str)> + '_ {
        self.map.iter().map(|(pos, info)| (pos, info.key.as_str()))
    }

    /// Feed one captured character. Returns the terminal outcome, or `None`
    /// while the chord buffer is still a prefix of some key.
    pub fn push_char(&mut self, ch: char) -> Option<JumpOutcome> {
        if self.state != SessionState::AwaitingKey {
            return None;
        }
        self.buffer.push(ch);
        if let Some(target) = self.by_key.get(self.buffer.as_str()) {
            self.state = SessionState::Resolved;
            debug!(key = %self.buffer, "jump resolved");
            return Some(JumpOutcome::Jump(target.clone()));
        }
        let buffer = self.buffer.as_str();
        if self.by_key.keys().any(|key| key.starts_with(buffer)) {
            return None;
        }
        self.state = SessionState::Cancelled;
        debug!(key = %self.buffer, "jump key mismatch");
        Some(JumpOutcome::Cancelled)
    }

    /// Abort key, or loss of modal focus. Returns `None` if the session
    /// already reached a terminal state.
    pub fn cancel(&mut self) -> Option<JumpOutcome> {
        match self.state {
            SessionState::Resolved | SessionState::Cancelled => None,
            _ => {
                self.state = SessionState::Cancelled;
                debug!("jump cancelled");
                Some(JumpOutcome::Cancelled)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/jump/session.rs"]
mod tests;
