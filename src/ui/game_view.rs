use crate::game::{Board, Cell, GameOutcome, Piece, Session, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    session: &Session,
    selected_column: usize,
    message: &Option<String>,
    difficulty: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, difficulty, chunks[0]);
    render_board(frame, session.board(), selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn piece_color(piece: Piece) -> Color {
    match piece {
        Piece::Blue => Color::Blue,
        Piece::Red => Color::Red,
    }
}

fn render_header(frame: &mut Frame, session: &Session, difficulty: &str, area: Rect) {
    let to_move = session.to_move();

    let status = match session.outcome() {
        GameOutcome::Ongoing => format!(
            "To move: {}  |  {}",
            session.display_name(to_move),
            difficulty
        ),
        _ => format!("Game Over  |  {}", difficulty),
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(piece_color(to_move))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Connect Four: {}", session.player_name())),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &Board, selected_column: usize, area: Rect) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    // Row 0 is the bottom, so draw from the top row down
    for row in (0..ROWS).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Filled(piece) => (" ● ", piece_color(piece)),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(session: &Session) -> String {
        let backend = TestBackend::new(60, 22);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(f, session, 3, &Some("Ada wins!".to_string()), "Minimax depth 2"))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_header_and_message() {
        let session = Session::new(SessionConfig {
            player_name: "Ada".to_string(),
            human_moves_first: true,
        });
        let text = rendered_text(&session);
        assert!(text.contains("To move: Ada"));
        assert!(text.contains("Minimax depth 2"));
        assert!(text.contains("Ada wins!"));
    }

    #[test]
    fn renders_dropped_piece() {
        let mut session = Session::new(SessionConfig::default());
        session.play(0).unwrap();
        let text = rendered_text(&session);
        assert!(text.contains('●'));
    }
}
