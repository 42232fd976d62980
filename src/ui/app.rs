//! Main TUI application state and logic

use crate::config::{GameConfig, MAX_DISKS, MIN_DISKS};
use crate::puzzle::{MoveError, PegId};
use crate::session::{Session, SessionEvent};
use crate::ui::panes::{
    render_info_pane, render_status_bar, render_tower_pane, tower_areas, GameMode,
    InfoRenderData, TowerRenderData,
};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// A disk that has been picked up but not yet dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeldDisk {
    pub peg: PegId,
    pub disk: u32,
}

/// The main application state
pub struct App {
    /// The game being played
    pub session: Session,

    /// Disk count applied on the next restart
    pub pending_disks: u32,

    /// Tower under the keyboard cursor
    pub selected: PegId,

    /// Disk picked up by keyboard or mouse
    pub held: Option<HeldDisk>,

    /// Last rejected move, shown until the next successful action
    pub notice: Option<String>,

    /// Status message to display
    pub status_message: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Tower rectangles from the last frame, for mouse hit testing
    tower_areas: [Rect; 3],
}

impl App {
    /// Create a new app and start the first game
    pub fn new(config: &GameConfig) -> Self {
        App {
            session: Session::new(config.disks, config.step_interval, Instant::now()),
            pending_disks: config.disks,
            selected: PegId::Left,
            held: None,
            notice: None,
            status_message: String::from("Ready!"),
            should_quit: false,
            tower_areas: [Rect::default(); 3],
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            for event in self.session.poll(Instant::now()) {
                self.handle_session_event(event);
            }

            // Poll with a timeout so the clock and the solver keep moving
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Towers on top, game info below, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(5),
                Constraint::Length(1),
            ])
            .split(size);

        self.tower_areas = tower_areas(chunks[0]);
        let towers = self.session.towers();
        for id in PegId::ALL {
            render_tower_pane(
                frame,
                self.tower_areas[id.index()],
                TowerRenderData {
                    id,
                    peg: towers.peg(id),
                    disk_count: towers.disk_count(),
                    is_selected: self.selected == id,
                    is_holding: self.held.is_some_and(|h| h.peg == id),
                },
            );
        }

        let completion = self.session.completion_message();
        render_info_pane(
            frame,
            chunks[1],
            InfoRenderData {
                move_count: self.session.move_count(),
                min_moves: self.session.min_moves(),
                elapsed_secs: self.session.elapsed_secs(),
                disk_count: self.session.disk_count(),
                pending_disks: self.pending_disks,
                completion_message: completion.as_deref(),
                notice: self.notice.as_deref(),
            },
        );

        render_status_bar(frame, chunks[2], &self.status_message, self.mode());
    }

    fn mode(&self) -> GameMode {
        if let Some((applied, total)) = self.session.solve_progress() {
            GameMode::Solving { applied, total }
        } else if self.session.is_complete() {
            GameMode::Solved
        } else if self.held.is_some() {
            GameMode::Holding
        } else {
            GameMode::Playing
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                if let Ok(peg) = PegId::try_from(index) {
                    self.selected = peg;
                    self.activate(peg);
                }
            }
            KeyCode::Left => {
                self.selected = self.selected.prev();
            }
            KeyCode::Right => {
                self.selected = self.selected.next();
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.activate(self.selected);
            }
            KeyCode::Esc => {
                if self.held.take().is_some() {
                    self.status_message = "Put the disk back".to_string();
                }
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.solve();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.restart();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.pending_disks = (self.pending_disks + 1).min(MAX_DISKS);
                self.status_message = format!("Next game: {} disks (r to restart)", self.pending_disks);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.pending_disks = self.pending_disks.saturating_sub(1).max(MIN_DISKS);
                self.status_message = format!("Next game: {} disks (r to restart)", self.pending_disks);
            }
            _ => {}
        }
    }

    /// Handle mouse events: press on a tower picks up, release on another drops.
    ///
    /// Releasing outside every tower, or back on the origin tower, ends the drag.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let target = self.tower_at(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(peg) = target {
                    self.selected = peg;
                    if self.held.is_none() {
                        self.pick_up(peg);
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(held) = self.held else {
                    return;
                };
                match target {
                    Some(peg) if peg != held.peg => {
                        self.selected = peg;
                        self.drop_on(peg);
                    }
                    _ => {
                        self.held = None;
                        self.status_message = "Put the disk back".to_string();
                    }
                }
            }
            _ => {}
        }
    }

    fn tower_at(&self, column: u16, row: u16) -> Option<PegId> {
        PegId::ALL.into_iter().find(|id| {
            let r = self.tower_areas[id.index()];
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
    }

    /// Pick up from `peg`, or drop the held disk onto it
    fn activate(&mut self, peg: PegId) {
        match self.held {
            None => self.pick_up(peg),
            Some(held) if held.peg == peg => {
                self.held = None;
                self.status_message = "Put the disk back".to_string();
            }
            Some(_) => self.drop_on(peg),
        }
    }

    fn pick_up(&mut self, peg: PegId) {
        if self.session.is_solving() {
            self.notice = Some(MoveError::SolveInProgress.to_string());
            return;
        }
        if self.session.is_complete() {
            self.notice = Some(MoveError::GameComplete.to_string());
            return;
        }
        match self.session.towers().peg(peg).top() {
            Some(disk) => {
                self.held = Some(HeldDisk { peg, disk });
                self.status_message = format!("Holding disk {} from the {} peg", disk, peg);
            }
            None => {
                self.notice = Some(MoveError::EmptyPeg { peg }.to_string());
            }
        }
    }

    fn drop_on(&mut self, peg: PegId) {
        let Some(held) = self.held.take() else {
            return;
        };
        match self.session.try_drag(held.peg, held.disk, peg) {
            Ok(mv) => {
                self.notice = None;
                self.status_message = format!("Moved disk {}: {}", held.disk, mv);
                if self.session.is_complete() {
                    self.status_message = "Solved!".to_string();
                }
            }
            Err(e) => {
                self.notice = Some(e.to_string());
                self.status_message = "Move rejected".to_string();
            }
        }
    }

    fn solve(&mut self) {
        self.held = None;
        match self.session.solve(Instant::now()) {
            Some(_) => {
                self.notice = None;
                self.status_message = "Solving...".to_string();
            }
            None if self.session.is_complete() => {
                self.status_message = "Already solved".to_string();
            }
            None => {
                self.status_message = "Already solving".to_string();
            }
        }
    }

    fn restart(&mut self) {
        debug!(disks = self.pending_disks, "restart requested");
        self.session.new_game(self.pending_disks, Instant::now());
        self.held = None;
        self.notice = None;
        self.selected = PegId::Left;
        self.status_message = format!("New game with {} disks", self.pending_disks);
    }

    fn handle_session_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Tick(_) => {}
            SessionEvent::Moved(mv) => {
                if let Some((applied, total)) = self.session.solve_progress() {
                    self.status_message = format!("Solver {}/{}: {}", applied, total, mv);
                }
            }
            SessionEvent::Completed { .. } => {
                self.status_message = "Solved!".to_string();
            }
            SessionEvent::SolveFailed(e) => {
                self.notice = Some(e.to_string());
                self.status_message = "Solver stopped".to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app_with(disks: u32) -> App {
        App::new(&GameConfig {
            disks,
            ..GameConfig::default()
        })
    }

    #[test]
    fn test_pick_and_drop_with_number_keys() {
        let mut app = app_with(3);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(
            app.held,
            Some(HeldDisk {
                peg: PegId::Left,
                disk: 1
            })
        );

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.held, None);
        assert_eq!(app.session.move_count(), 1);
        assert_eq!(app.session.towers().peg(PegId::Right).disks(), &[1]);
    }

    #[test]
    fn test_rejected_drop_sets_notice() {
        let mut app = app_with(3);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('3'));

        assert!(app.notice.is_some());
        assert_eq!(app.session.move_count(), 1);
        assert_eq!(app.held, None);
    }

    #[test]
    fn test_empty_peg_cannot_be_picked() {
        let mut app = app_with(3);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.held, None);
        assert!(app.notice.is_some());
    }

    #[test]
    fn test_restart_uses_pending_disks() {
        let mut app = app_with(3);
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('r'));

        assert_eq!(app.session.disk_count(), 5);
        assert_eq!(app.session.min_moves(), 31);
    }

    #[test]
    fn test_pending_disks_clamped() {
        let mut app = app_with(1);
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.pending_disks, MIN_DISKS);
    }

    #[test]
    fn test_solve_blocks_manual_moves() {
        let mut app = app_with(3);
        press(&mut app, KeyCode::Char('s'));
        assert!(app.session.is_solving());

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.held, None);
        assert_eq!(
            app.notice.as_deref(),
            Some("Wait for the solver to finish, or restart.")
        );
    }

    #[test]
    fn test_renders_without_panicking() {
        let mut app = app_with(4);
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("left"));
        assert!(text.contains("Minimum"));
    }

    #[test]
    fn test_mouse_drag_moves_disk() {
        let mut app = app_with(2);
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let left = app.tower_areas[0];
        let middle = app.tower_areas[1];
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: left.x + 2,
            row: left.y + 2,
            modifiers: KeyModifiers::NONE,
        });
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: middle.x + 2,
            row: middle.y + 2,
            modifiers: KeyModifiers::NONE,
        });

        assert_eq!(app.session.towers().peg(PegId::Middle).disks(), &[1]);
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_mouse_release_outside_towers_ends_drag() {
        let mut app = app_with(2);
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let left = app.tower_areas[0];
        app.handle_mouse_event(mouse(
            MouseEventKind::Down(MouseButton::Left),
            left.x + 2,
            left.y + 2,
        ));
        assert!(app.held.is_some());

        // Bottom row is the status bar, below every tower
        app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 5, 23));

        assert_eq!(app.held, None);
        assert_eq!(app.mode(), GameMode::Playing);
        assert_eq!(app.session.move_count(), 0);
        assert_eq!(app.session.towers().peg(PegId::Left).disks(), &[2, 1]);
    }

    #[test]
    fn test_mouse_release_on_origin_puts_disk_back() {
        let mut app = app_with(2);
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let left = app.tower_areas[0];
        app.handle_mouse_event(mouse(
            MouseEventKind::Down(MouseButton::Left),
            left.x + 2,
            left.y + 2,
        ));
        app.handle_mouse_event(mouse(
            MouseEventKind::Up(MouseButton::Left),
            left.x + 3,
            left.y + 4,
        ));

        assert_eq!(app.held, None);
        assert_eq!(app.session.move_count(), 0);
    }
}
