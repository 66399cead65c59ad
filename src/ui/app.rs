use crate::game::{GameSession, MoveError, MoveResult, COLS};
use crate::save::SaveSlot;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    session: GameSession,
    save_slot: SaveSlot,
    selected_column: usize,
    should_quit: bool,
    /// Set once a game has ended; the next key press starts a new one.
    awaiting_ack: bool,
    message: Option<String>,
}

impl App {
    pub fn new(save_slot: SaveSlot) -> Self {
        App {
            session: GameSession::new(),
            save_slot,
            selected_column: COLS / 2,
            should_quit: false,
            awaiting_ack: false,
            message: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }

        if self.awaiting_ack {
            self.awaiting_ack = false;
            self.reset();
            return;
        }

        match key.code {
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = (c as u8 - b'1') as usize;
                self.play(self.selected_column);
            }
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('l') => self.load(),
            KeyCode::Char('r') => self.reset(),
            _ => {}
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Drop a piece for the current player and report what happened
    fn play(&mut self, column: usize) {
        match self.session.play_column(column) {
            Ok(MoveResult::Continued(_)) => {}
            Ok(MoveResult::Win(player)) => {
                self.message = Some(format!(
                    "{} wins! Press any key for a new game.",
                    player.name()
                ));
                self.awaiting_ack = true;
            }
            Ok(MoveResult::Tie) => {
                self.message = Some("Tie, no one wins. Press any key for a new game.".to_string());
                self.awaiting_ack = true;
            }
            Ok(MoveResult::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Ok(MoveResult::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(MoveError::InvalidColumn) | Err(MoveError::ColumnFull) => {
                self.message = Some("Invalid column!".to_string());
            }
        }
    }

    fn save(&mut self) {
        self.message = Some(match self.save_slot.save(&self.session.snapshot()) {
            Ok(()) => format!("Saved to {}", self.save_slot.path().display()),
            Err(e) => {
                tracing::warn!("save failed: {e}");
                format!("Save failed: {e}")
            }
        });
    }

    fn load(&mut self) {
        self.message = Some(match self.save_slot.load_into(&mut self.session) {
            Ok(()) => {
                if self.session.is_terminal() {
                    self.awaiting_ack = true;
                    "Loaded a finished game. Press any key for a new game.".to_string()
                } else {
                    format!("Loaded. {} to move.", self.session.current_player().name())
                }
            }
            Err(e) => format!("Load failed: {e}. Keeping current game."),
        });
    }

    fn reset(&mut self) {
        self.session.reset();
        self.selected_column = COLS / 2;
        self.message = Some("New game started!".to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}
