//! TUI rendering with ratatui
//!
//! Draws the menu, the puzzle board, and the round-over screens.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Grid;
use crate::game::{MASK, STARTING_LIVES};
use crate::output::formatters::{leaderboard_header, leaderboard_row};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    match app.input_mode {
        InputMode::Menu => render_menu(f, app),
        InputMode::NameEntry => render_name_entry(f, app),
        InputMode::LeaderboardView => render_leaderboard(f, app),
        InputMode::Guessing | InputMode::RoundWon | InputMode::RoundLost => render_game(f, app),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("₊✩‧₊˚ WIZARDS OF WORDERLY PALACE ˚₊✩‧₊")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_menu(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(8), // Menu items
            Constraint::Min(4),    // Messages
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let mut lines = vec![
        Line::from(""),
        Line::from("1. Play Game"),
        Line::from("2. View Leaderboard"),
        Line::from("3. Quit"),
    ];
    if !app.streak.player_name.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            "Player: {} | Streak: {} | Streak points: {}",
            app.streak.player_name, app.streak.current_streak, app.streak.current_points
        )));
    }
    let menu = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, chunks[1]);

    render_messages(f, app, chunks[2]);
    render_help(f, "1/2/3: choose | Enter: play | q: quit", chunks[3]);
}

fn render_name_entry(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Prompt
            Constraint::Length(3), // Input
            Constraint::Min(0),    // Messages
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let prompt = Paragraph::new(vec![
        Line::from(""),
        Line::from("What is your name? (1-20 characters)"),
    ])
    .alignment(Alignment::Center);
    f.render_widget(prompt, chunks[1]);

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Name | Enter: confirm | Esc: back ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, chunks[2]);

    render_messages(f, app, chunks[3]);
}

fn render_leaderboard(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Table
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let entries = app.leaderboard.top_entries(10);
    let lines = if entries.is_empty() {
        vec![
            Line::from(""),
            Line::from("No entries yet. Be the first to set a record!"),
        ]
    } else {
        let mut lines = vec![
            Line::from(Span::styled(
                leaderboard_header(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("─".repeat(52)),
        ];
        for (i, entry) in entries.iter().enumerate() {
            lines.push(Line::from(leaderboard_row(i + 1, entry)));
        }
        lines
    };

    let table = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Leaderboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(table, chunks[1]);

    render_help(f, "any key: back", chunks[2]);
}

fn render_game(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(17),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(62), // Board
            Constraint::Percentage(38), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let Some(session) = app.session.as_ref() else {
        let empty = Paragraph::new("No active round")
            .block(Block::default().title(" Puzzle ").borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    };

    // After a loss the solution is shown; otherwise the masked grid
    let (title, grid) = if app.input_mode == InputMode::RoundLost {
        (" Solution ", session.level().grid())
    } else {
        (" Puzzle ", session.hidden_grid().grid())
    };

    let board = Paragraph::new(grid_lines(grid))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn grid_lines(grid: &Grid) -> Vec<Line<'static>> {
    grid.iter_rows()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, &cell) in row.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(match cell {
                    Grid::EMPTY => Span::styled(".", Style::default().fg(Color::DarkGray)),
                    MASK => Span::styled(MASK.to_string(), Style::default().fg(Color::Red)),
                    c if c.is_uppercase() => Span::styled(
                        c.to_string(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    c => Span::styled(c.to_string(), Style::default().fg(Color::White)),
                });
            }
            Line::from(spans)
        })
        .collect()
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let Some(session) = app.session.as_ref() else {
        render_messages(f, app, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Letter bank
            Constraint::Length(3), // Lives
            Constraint::Length(3), // Words found
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    let letters = Paragraph::new(session.scrambled_letters())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Letters ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(letters, chunks[0]);

    let lives_pct = (session.lives() * 100 / STARTING_LIVES) as u16;
    let lives = Gauge::default()
        .block(
            Block::default()
                .title(" Lives ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Red))
        .percent(lives_pct)
        .label(format!("{}/{STARTING_LIVES} lives", session.lives()));
    f.render_widget(lives, chunks[1]);

    let words_pct = ((session.found_count() * 100) / session.total_words().max(1)) as u16;
    let words = Gauge::default()
        .block(
            Block::default()
                .title(" Words ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(words_pct)
        .label(format!(
            "{}/{} words | {} points",
            session.found_count(),
            session.total_words(),
            session.points()
        ));
    f.render_widget(words, chunks[2]);

    render_messages(f, app, chunks[3]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundWon => (
            " 🎉 ROUND WON! 🎉 | 'y' extends the streak, 'n' stops ",
            "",
            Color::Green,
        ),
        InputMode::RoundLost => (
            " Out of lives | 'y' plays again, 'n' returns to the menu ",
            "",
            Color::Red,
        ),
        _ => (
            " Enter Guess | Esc: stop and save | TAB: leaderboard ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let player_text = if app.streak.player_name.is_empty() {
        "Player: -".to_string()
    } else {
        format!("Player: {}", app.streak.player_name)
    };
    let player = Paragraph::new(player_text).alignment(Alignment::Center);
    f.render_widget(player, chunks[0]);

    let streak_text = format!(
        "Streak: {} | Streak points: {}",
        app.streak.current_streak, app.streak.current_points
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[1]);

    let round_text = app.session.as_ref().map_or_else(
        || "No round".to_string(),
        |session| format!("Lives: {} | Points: {}", session.lives(), session.points()),
    );
    let round = Paragraph::new(round_text).alignment(Alignment::Center);
    f.render_widget(round, chunks[2]);

    render_help(f, "Ctrl+N: new round | Ctrl+C: quit", chunks[3]);
}

fn render_help(f: &mut Frame, text: &str, area: Rect) {
    let help = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
