use crate::ai::Agent;
use crate::error::MoveError;
use crate::game::{GameOutcome, Session, SessionConfig, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    session: Session,
    computer: Box<dyn Agent>,
    difficulty: String,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: SessionConfig, computer: Box<dyn Agent>, difficulty: String) -> Self {
        let mut app = App {
            session: Session::new(config),
            computer,
            difficulty,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
        };
        app.computer_turn();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

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
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
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
                self.human_turn();
            }
            KeyCode::Char('r') => {
                self.session.restart();
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
                self.computer_turn();
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column, then let the computer reply
    fn human_turn(&mut self) {
        if self.session.board().is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.session.play(self.selected_column) {
            Ok(GameOutcome::Ongoing) => self.computer_turn(),
            Ok(outcome) => self.announce(outcome),
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn(_)) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Play the computer's move if it is the computer's turn
    fn computer_turn(&mut self) {
        if self.session.is_human_turn() || self.session.board().is_terminal() {
            return;
        }

        let column = self.computer.select_column(self.session.board());
        match self.session.play(column) {
            Ok(GameOutcome::Ongoing) => {}
            Ok(outcome) => self.announce(outcome),
            Err(e) => {
                self.message = Some(format!("Computer move failed: {e}"));
            }
        }
    }

    fn announce(&mut self, outcome: GameOutcome) {
        self.message = match outcome {
            GameOutcome::Winner(piece) => {
                Some(format!("{} wins!", self.session.display_name(piece)))
            }
            GameOutcome::Draw => Some("It's a draw!".to_string()),
            GameOutcome::Ongoing => None,
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.session,
            self.selected_column,
            &self.message,
            &self.difficulty,
        );
    }
}
