//! TUI application state and logic

use crate::game::{GameSession, GuessOutcome, StreakTracker};
use crate::generator::{LevelConfig, LevelGenerator};
use crate::leaderboard::Leaderboard;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which screen has the keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Menu,
    NameEntry,
    Guessing,
    RoundWon,
    RoundLost,
    LeaderboardView,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a> {
    pub wordlist: &'a [String],
    pub config: LevelConfig,
    pub session: Option<GameSession>,
    pub streak: StreakTracker,
    pub leaderboard: Leaderboard,
    pub input_mode: InputMode,
    pub return_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: ThreadRng,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(wordlist: &'a [String], board_path: &str) -> Self {
        Self {
            wordlist,
            config: LevelConfig::default(),
            session: None,
            streak: StreakTracker::new(),
            leaderboard: Leaderboard::load(board_path),
            input_mode: InputMode::Menu,
            return_mode: InputMode::Menu,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome to Wizards of Worderly Palace!".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            rng: rand::rng(),
        }
    }

    /// Menu choice 1: ask for a name on the first game, then start a round
    pub fn select_play(&mut self) {
        if self.streak.player_name.is_empty() {
            self.input_buffer.clear();
            self.input_mode = InputMode::NameEntry;
        } else {
            self.start_round();
        }
    }

    pub fn confirm_name(&mut self) {
        let name = self.input_buffer.trim().to_string();
        if name.is_empty() || name.chars().count() > 20 {
            self.add_message(
                "Please enter a valid name (1-20 characters)",
                MessageStyle::Error,
            );
            return;
        }
        self.streak.player_name = name;
        self.input_buffer.clear();
        self.start_round();
    }

    /// Generate a fresh level and enter the guess loop
    pub fn start_round(&mut self) {
        let generator = LevelGenerator::new(&self.config, self.wordlist);
        match generator.generate(&mut self.rng) {
            Ok(level) => {
                let session = GameSession::new(level, &mut self.rng);
                self.session = Some(session);
                self.input_buffer.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message(
                    "New round! Type a word and press Enter.",
                    MessageStyle::Info,
                );
            }
            Err(err) => {
                self.session = None;
                self.input_mode = InputMode::Menu;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.trim().to_string();
        self.input_buffer.clear();
        if guess.is_empty() {
            return;
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };
        let outcome = session.guess(&guess);
        let won = session.is_won();
        let lost = session.is_lost();
        let points = session.points();

        match outcome {
            GuessOutcome::Revealed { word, gained } => {
                self.add_message(
                    &format!("Found {word}! +{gained} points"),
                    MessageStyle::Success,
                );
            }
            GuessOutcome::AlreadyFound => {
                self.add_message(
                    &format!("'{guess}' was already found. One life lost."),
                    MessageStyle::Error,
                );
            }
            GuessOutcome::NotInPuzzle => {
                self.add_message(
                    &format!("'{guess}' is not in the puzzle. One life lost."),
                    MessageStyle::Error,
                );
            }
        }

        if won {
            self.finish_won_round(points);
        } else if lost {
            self.finish_lost_round(points);
        }
    }

    fn finish_won_round(&mut self, points: u32) {
        self.input_mode = InputMode::RoundWon;
        self.streak.add_win(points);
        if self.streak.is_new_record(&self.leaderboard) {
            self.add_message("🎉 NEW PERSONAL RECORD! 🎉", MessageStyle::Success);
        }
        self.add_message(
            "All words revealed! 'y' continues the streak, 'n' stops and saves it.",
            MessageStyle::Success,
        );
    }

    fn finish_lost_round(&mut self, points: u32) {
        self.input_mode = InputMode::RoundLost;
        self.flush_streak();
        if !self.streak.player_name.is_empty() {
            // A lost round still counts as a streak of one
            self.leaderboard.add_entry(&self.streak.player_name, 1, points);
        }
        self.streak.reset_streak();
        self.add_message("Out of lives! The solution is shown.", MessageStyle::Error);
        self.add_message(
            "'y' starts a new round, 'n' returns to the menu.",
            MessageStyle::Info,
        );
    }

    /// Esc during a round, or 'n' after a win: save the streak and stop
    pub fn stop_streak(&mut self) {
        if self.flush_streak() {
            self.add_message("Streak saved to the leaderboard.", MessageStyle::Info);
        }
        self.streak.reset_streak();
        self.session = None;
        self.input_mode = InputMode::Menu;
    }

    /// Ctrl+N during a round: save the streak and deal a new level
    pub fn save_and_restart(&mut self) {
        if self.flush_streak() {
            self.add_message("Streak saved to the leaderboard.", MessageStyle::Info);
        }
        self.streak.reset_streak();
        self.start_round();
    }

    pub fn back_to_menu(&mut self) {
        self.session = None;
        self.input_mode = InputMode::Menu;
    }

    pub fn open_leaderboard(&mut self) {
        self.return_mode = self.input_mode.clone();
        self.input_mode = InputMode::LeaderboardView;
    }

    pub fn close_leaderboard(&mut self) {
        self.input_mode = self.return_mode.clone();
    }

    pub fn quit(&mut self) {
        self.flush_streak();
        self.should_quit = true;
    }

    /// Append a running streak to the leaderboard without resetting it
    fn flush_streak(&mut self) -> bool {
        if !self.streak.player_name.is_empty() && self.streak.current_streak > 0 {
            self.leaderboard.add_entry(
                &self.streak.player_name,
                self.streak.current_streak,
                self.streak.current_points,
            );
            return true;
        }
        false
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

#[allow(clippy::too_many_lines)] // One arm per screen keeps the key routing in one place
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Menu => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Char('1') | KeyCode::Enter => {
                        app.select_play();
                    }
                    KeyCode::Char('2') => {
                        app.open_leaderboard();
                    }
                    KeyCode::Char('3' | 'q') => {
                        app.quit();
                    }
                    _ => {}
                },
                InputMode::NameEntry => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Esc => {
                        app.input_buffer.clear();
                        app.input_mode = InputMode::Menu;
                    }
                    KeyCode::Char(c) => {
                        if app.input_buffer.chars().count() < 20 && !c.is_control() {
                            app.input_buffer.push(c);
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.confirm_name();
                    }
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.save_and_restart();
                    }
                    KeyCode::Esc => {
                        app.stop_streak();
                    }
                    KeyCode::Tab => {
                        app.open_leaderboard();
                    }
                    KeyCode::Char(c) => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    _ => {}
                },
                InputMode::RoundWon => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Char('y') => {
                        app.start_round();
                    }
                    KeyCode::Char('n') | KeyCode::Esc => {
                        app.stop_streak();
                    }
                    _ => {
                        // Ignore other keys until the player chooses
                    }
                },
                InputMode::RoundLost => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Char('y') => {
                        app.start_round();
                    }
                    KeyCode::Char('n') | KeyCode::Esc => {
                        app.back_to_menu();
                    }
                    _ => {}
                },
                InputMode::LeaderboardView => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    _ => {
                        app.close_leaderboard();
                    }
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
