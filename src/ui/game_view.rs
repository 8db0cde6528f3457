use crate::config::UiConfig;
use crate::game::{GameState, GameStatus, Player, SIZE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, game: &GameState, cursor: usize, ui: &UiConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Min(9),    // Board and history
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_status(frame, game, ui, chunks[0]);
    render_board(frame, game, cursor, ui, main[0]);
    render_moves(frame, game, main[1]);
    render_controls(frame, chunks[2]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Cyan,
        Player::O => Color::Magenta,
    }
}

fn status_text(game: &GameState, ui: &UiConfig) -> String {
    match game.status() {
        GameStatus::Won(winner) => format!("Winner is {}", ui.glyph(winner.player)),
        GameStatus::Draw => "You played a draw!".to_string(),
        GameStatus::Turn(player) => format!("Next player: {}", ui.glyph(player)),
    }
}

fn render_status(frame: &mut Frame, game: &GameState, ui: &UiConfig, area: ratatui::layout::Rect) {
    let color = match game.status() {
        GameStatus::Won(_) => Color::Green,
        GameStatus::Draw => Color::Yellow,
        GameStatus::Turn(player) => player_color(player),
    };

    let header = Paragraph::new(status_text(game, ui))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Tic-Tac-Toe"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    game: &GameState,
    cursor: usize,
    ui: &UiConfig,
    area: ratatui::layout::Rect,
) {
    let winning_line = match game.status() {
        GameStatus::Won(winner) => Some(winner.line),
        _ => None,
    };
    let board = game.current_board();

    let mut lines = Vec::new();
    for row in 0..SIZE {
        let mut row_spans = Vec::new();
        for col in 0..SIZE {
            if col > 0 {
                row_spans.push(Span::raw("│"));
            }

            let pos = row * SIZE + col;
            let (glyph, color) = match board.get(pos).player() {
                Some(player) => (ui.glyph(player), player_color(player)),
                None => ('.', Color::DarkGray),
            };

            let mut style = Style::default().fg(color);
            if winning_line.is_some_and(|line| line.contains(&pos)) {
                style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
            }
            if pos == cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            row_spans.push(Span::styled(format!(" {glyph} "), style));
        }
        lines.push(Line::from(row_spans));

        if row < SIZE - 1 {
            lines.push(Line::from("───┼───┼───"));
        }
    }

    let board_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Board"));
    frame.render_widget(board_widget, area);
}

fn render_moves(frame: &mut Frame, game: &GameState, area: ratatui::layout::Rect) {
    let mut lines = Vec::new();
    for (i, step) in game.display_steps().into_iter().enumerate() {
        // Numbering follows list position, so a reversed list renumbers
        // from the newest step down.
        let label = format!("{}. {}", i + 1, game.move_label(step));
        if step == game.current_step() {
            lines.push(Line::from(Span::styled(
                label,
                Style::default().add_modifier(Modifier::REVERSED),
            )));
        } else {
            lines.push(Line::from(label));
        }
    }

    let title = if game.ascending_moves() {
        "Moves (oldest first)"
    } else {
        "Moves (newest first)"
    };
    let moves_widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(moves_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line =
        Line::from("←↑↓→: Move  |  Enter: Place  |  0-9: Jump  |  S: Sort  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[usize]) -> GameState {
        let mut game = GameState::new();
        for &pos in moves {
            game.apply_move_mut(pos);
        }
        game
    }

    #[test]
    fn test_status_shows_next_player() {
        let ui = UiConfig::default();
        assert_eq!(status_text(&GameState::new(), &ui), "Next player: X");
        assert_eq!(status_text(&play(&[4]), &ui), "Next player: O");
    }

    #[test]
    fn test_status_announces_winner() {
        let ui = UiConfig::default();
        let game = play(&[0, 3, 1, 4, 2]);
        assert_eq!(status_text(&game, &ui), "Winner is X");
    }

    #[test]
    fn test_status_announces_draw() {
        let ui = UiConfig::default();
        let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(status_text(&game, &ui), "You played a draw!");
    }

    #[test]
    fn test_status_uses_configured_glyphs() {
        let ui = UiConfig {
            x_glyph: '#',
            ..UiConfig::default()
        };
        assert_eq!(status_text(&GameState::new(), &ui), "Next player: #");
    }

    #[test]
    fn test_status_follows_viewed_step() {
        let ui = UiConfig::default();
        let game = play(&[0, 3, 1, 4, 2]).jump_to(1);
        assert_eq!(status_text(&game, &ui), "Next player: O");
    }
}
