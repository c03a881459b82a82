//zjump/src/main.rs
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use rustc_hash::FxHashMap;
use std::io;
use std::path::Path;
use tracing::warn;

use zjump::config::JumpConfig;
use zjump::core::Key;
use zjump::jump::overlay::{feed_key, JumpLabels};
use zjump::jump::{JumpAssignment, JumpOutcome, JumpSession, Jumper};
use zjump::logging;
use zjump::ui::geom::Rect as CellRect;
use zjump::ui::scene::{Jumpable, SceneError, SceneTree, Widget as SceneWidget, WidgetKey};

struct Root;

impl SceneWidget for Root {
    fn type_name(&self) -> &'static str {
        "root"
    }
}

struct AddressBar;

impl SceneWidget for AddressBar {
    fn type_name(&self) -> &'static str {
        "address"
    }

    fn id(&self) -> Option<&str> {
        Some("address-bar")
    }
}

struct SendButton;

impl SceneWidget for SendButton {
    fn type_name(&self) -> &'static str {
        "send"
    }

    fn id(&self) -> Option<&str> {
        Some("send-button")
    }
}

struct ResponsePane;

impl SceneWidget for ResponsePane {
    fn type_name(&self) -> &'static str {
        "response"
    }

    fn id(&self) -> Option<&str> {
        Some("response-pane")
    }
}

// No stable id on purpose: reaches the jump map through the capability
// trait instead of the static table.
struct CollectionPane;

impl SceneWidget for CollectionPane {
    fn type_name(&self) -> &'static str {
        "collections"
    }

    fn as_jumpable(&self) -> Option<&dyn Jumpable> {
        Some(self)
    }
}

impl Jumpable for CollectionPane {
    fn jump_key(&self) -> &str {
        "c"
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DemoCommand {
    Quit,
    EnterJumpMode,
    FocusNext,
}

fn default_keymap() -> FxHashMap<Key, DemoCommand> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::ctrl(KeyCode::Char('q')), DemoCommand::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('o')), DemoCommand::EnterJumpMode);
    bindings.insert(Key::simple(KeyCode::Tab), DemoCommand::FocusNext);
    bindings
}

fn default_config() -> JumpConfig {
    let mut config = JumpConfig::default();
    config.keys.insert("address-bar".into(), "a".into());
    config.keys.insert("send-button".into(), "s".into());
    config.keys.insert("response-pane".into(), "r".into());
    config
}

struct DemoApp {
    scene: SceneTree,
    panes: Vec<WidgetKey>,
    focused: Option<WidgetKey>,
    assignment: JumpAssignment,
    keymap: FxHashMap<Key, DemoCommand>,
    session: Option<JumpSession>,
}

impl DemoApp {
    fn new(assignment: JumpAssignment) -> Result<Self, SceneError> {
        let mut scene = SceneTree::new();
        let root = scene.mount_root(Box::new(Root), CellRect::default());
        let panes = vec![
            scene.mount(root, Box::new(AddressBar), CellRect::default())?,
            scene.mount(root, Box::new(SendButton), CellRect::default())?,
            scene.mount(root, Box::new(CollectionPane), CellRect::default())?,
            scene.mount(root, Box::new(ResponsePane), CellRect::default())?,
        ];
        Ok(Self {
            focused: panes.first().copied(),
            scene,
            panes,
            assignment,
            keymap: default_keymap(),
            session: None,
        })
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(12)])
            .split(rows[0]);
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(0)])
            .split(rows[1]);

        // Mirror the frame's layout into the scene so the jump resolver
        // sees current positions.
        let rects = [top[0], top[1], body[0], body[1]];
        for (&key, &rect) in self.panes.iter().zip(rects.iter()) {
            self.scene
                .set_rect(key, CellRect::new(rect.x, rect.y, rect.width, rect.height));
        }

        for (&key, &rect) in self.panes.iter().zip(rects.iter()) {
            let title = self.scene.widget(key).map(|w| w.type_name()).unwrap_or("");
            let border_style = if self.focused == Some(key) {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            frame.render_widget(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(border_style),
                rect,
            );
        }

        let awaiting = self.session.as_ref().is_some_and(|s| s.is_awaiting_key());
        let hint = if awaiting {
            "jump: press a target key (esc cancels)"
        } else {
            "ctrl+o jump  tab cycle focus  ctrl+q quit"
        };
        frame.render_widget(Paragraph::new(hint), rows[2]);

        if let Some(session) = self.session.as_ref().filter(|s| s.is_awaiting_key()) {
            frame.render_widget(JumpLabels::new(session), area);
        }
    }

    /// Returns true when the app should quit.
    fn on_key(&mut self, event: &KeyEvent) -> bool {
        // An active session owns the keyboard until it resolves or cancels.
        if let Some(session) = self.session.as_mut() {
            if session.is_awaiting_key() {
                if let Some(outcome) = feed_key(session, event) {
                    self.session = None;
                    if let JumpOutcome::Jump(target) = outcome {
                        match target.resolve(&self.scene) {
                            Ok(key) => self.focused = Some(key),
                            Err(err) => warn!(error = %err, "jump target vanished"),
                        }
                    }
                }
                return false;
            }
            self.session = None;
        }

        if event.kind != KeyEventKind::Press {
            return false;
        }
        match self.keymap.get(&Key::from(*event)) {
            Some(DemoCommand::Quit) => return true,
            Some(DemoCommand::EnterJumpMode) => self.enter_jump_mode(),
            Some(DemoCommand::FocusNext) => self.focus_next(),
            None => {}
        }
        false
    }

    fn enter_jump_mode(&mut self) {
        let map = Jumper::new(&self.assignment).compute(&self.scene);
        let mut session = JumpSession::new(map);
        session.activate();
        // Replaces any prior session wholesale.
        self.session = Some(session);
    }

    fn focus_next(&mut self) {
        if self.panes.is_empty() {
            return;
        }
        let next = match self
            .focused
            .and_then(|cur| self.panes.iter().position(|&k| k == cur))
        {
            Some(i) => (i + 1) % self.panes.len(),
            None => 0,
        };
        self.focused = self.panes.get(next).copied();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logging = logging::init();

    let config = match std::env::var_os("ZJUMP_CONFIG") {
        Some(path) => JumpConfig::load(Path::new(&path))?,
        None => default_config(),
    };
    let mut app = DemoApp::new(config.assignment())?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut should_quit = false;
    while !should_quit {
        terminal.draw(|frame| app.render(frame))?;
        if let Event::Key(key_event) = event::read()? {
            should_quit = app.on_key(&key_event);
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    Ok(())
}
