//! Terminal side of a jump session: label rendering and key-event feeding.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthStr;

use super::session::{JumpOutcome, JumpSession};

/// Draws each target's jump key at its screen position, over whatever the
/// host already rendered.
pub struct JumpLabels<'a> {
    session: &'a JumpSession,
    style: Style,
}

impl<'a> JumpLabels<'a> {
    pub fn new(session: &'a JumpSession) -> Self {
        Self::styled(
            session,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }

    pub fn styled(session: &'a JumpSession, style: Style) -> Self {
        Self { session, style }
    }
}

impl ratatui::widgets::Widget for JumpLabels<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (pos, key) in self.session.labels() {
            if pos.y < area.y || pos.y >= area.bottom() || pos.x >= area.right() {
                continue;
            }
            // Nudge the label left so multi-char chords stay fully visible
            // at the right edge.
            let width = key.width() as u16;
            let mut x = pos.x.max(area.x);
            if width > 0 && x.saturating_add(width) > area.right() {
                x = area.right().saturating_sub(width).max(area.x);
            }
            buf.set_stringn(x, pos.y, key, (area.right() - x) as usize, self.style);
        }
    }
}

/// Route one terminal key event into the session while it owns input.
///
/// Esc aborts; plain (or shifted) characters extend the chord; any other
/// key is a mismatch and cancels. Release/repeat events are ignored.
pub fn feed_key(session: &mut JumpSession, event: &KeyEvent) -> Option<JumpOutcome> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    match event.code {
        KeyCode::Esc => session.cancel(),
        KeyCode::Char(ch)
            if event.modifiers.is_empty() || event.modifiers == KeyModifiers::SHIFT =>
        {
            session.push_char(ch)
        }
        _ => session.cancel(),
    }
}
