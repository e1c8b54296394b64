//! Simple interactive CLI mode
//!
//! The menu, round, and leaderboard flow on plain stdin/stdout, without
//! the TUI.

use crate::game::{GameSession, StreakTracker};
use crate::generator::{LevelConfig, LevelGenerator};
use crate::leaderboard::Leaderboard;
use crate::output::print_leaderboard;
use anyhow::Result;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// What a finished round asks the menu loop to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundAction {
    Replay,
    Menu,
    Exit,
}

/// Run the menu-driven CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails or if level generation
/// gives up on the word list.
pub fn run_play(wordlist: &[String], board_path: &str) -> Result<()> {
    let mut leaderboard = Leaderboard::load(board_path);
    let mut streak = StreakTracker::new();

    loop {
        clear_screen()?;
        print_menu();

        let choice = prompt("Enter your choice (1-3)")?;
        match choice.as_str() {
            "1" => {
                if streak.player_name.is_empty() {
                    clear_screen()?;
                    println!("{}", "─".repeat(49));
                    println!(" ₊✩‧₊˚Welcome to Wizards of Worderly Palace!");
                    println!("{}", "─".repeat(49));
                    streak.player_name = read_player_name()?;
                    println!("Hello {}!", streak.player_name);
                    pause("Press Enter to start...")?;
                }

                let mut action = RoundAction::Replay;
                while action == RoundAction::Replay {
                    action = play_round(wordlist, &mut streak, &mut leaderboard)?;
                }
                if action == RoundAction::Exit {
                    break;
                }
            }
            "2" => {
                clear_screen()?;
                print_leaderboard(leaderboard.top_entries(10));
                pause("Press Enter to return to menu...")?;
            }
            "3" => {
                println!("Thanks for playing!");
                break;
            }
            _ => {
                println!("Invalid choice. Please enter 1, 2, or 3.");
                pause("Press Enter to continue...")?;
            }
        }
    }

    Ok(())
}

fn print_menu() {
    println!("\n{}", "─".repeat(50));
    println!(
        "{}{}",
        " ".repeat(7),
        "₊✩‧₊˚WIZARDS OF WORDERLY PALACE˚₊✩‧₊".bright_cyan().bold()
    );
    println!("{}", "─".repeat(50));
    println!("1. Play Game");
    println!("2. View Leaderboard");
    println!("3. Quit");
    println!("{}", "─".repeat(50));
}

/// One round: generate a level, then loop on guesses until the round ends
/// with a win, a loss, or a typed command.
fn play_round(
    wordlist: &[String],
    streak: &mut StreakTracker,
    leaderboard: &mut Leaderboard,
) -> Result<RoundAction> {
    println!("Generating level...");
    let config = LevelConfig::default();
    let generator = LevelGenerator::new(&config, wordlist);
    let mut rng = rand::rng();
    let level = generator.generate(&mut rng)?;
    let mut session = GameSession::new(level, &mut rng);

    clear_screen()?;

    loop {
        print_round_state(&session, streak);

        if session.is_won() {
            println!("Congratulations! You've revealed all words!");
            streak.add_win(session.points());
            if streak.is_new_record(leaderboard) {
                println!("{}", "🎉 NEW PERSONAL RECORD! 🎉".bright_green().bold());
                println!("Streak: {} games", streak.current_streak);
                println!("Total Points: {}", streak.current_points);
            }
            let choice = prompt("Continue playing to extend your streak? (y/n)")?.to_lowercase();
            if choice == "y" {
                return Ok(RoundAction::Replay);
            }
            save_streak(streak, leaderboard);
            streak.reset_streak();
            return Ok(RoundAction::Menu);
        }

        let guess = prompt("Enter guess")?;
        match guess.to_uppercase().as_str() {
            "R" => {
                save_streak(streak, leaderboard);
                streak.reset_streak();
                return Ok(RoundAction::Replay);
            }
            "E" => {
                save_streak(streak, leaderboard);
                return Ok(RoundAction::Exit);
            }
            "L" => {
                clear_screen()?;
                print_leaderboard(leaderboard.top_entries(10));
                pause("Press Enter to continue...")?;
                clear_screen()?;
                continue;
            }
            _ => {}
        }

        clear_screen()?;
        session.guess(&guess);

        if session.is_lost() {
            println!("{}", session.hidden_grid());
            println!("Lives left: {}", session.lives());
            println!("Points: {}", session.points());
            println!("Last guess: {}", session.last_guess());
            println!("Game over! You ran out of lives.");
            println!(
                "You found {}/{} words.",
                session.found_count(),
                session.total_words()
            );

            save_streak(streak, leaderboard);
            if !streak.player_name.is_empty() {
                // A lost round still counts as a streak of one
                leaderboard.add_entry(&streak.player_name, 1, session.points());
                println!(
                    "Your game score of {} points has been saved to the leaderboard!",
                    session.points()
                );
            }
            streak.reset_streak();

            let choice = prompt("Play again? (y/n)")?.to_lowercase();
            return Ok(if choice == "y" {
                RoundAction::Replay
            } else {
                RoundAction::Menu
            });
        }
    }
}

fn print_round_state(session: &GameSession, streak: &StreakTracker) {
    if !streak.player_name.is_empty() {
        println!("{}", "─".repeat(49));
        println!("Player: {}", streak.player_name);
        println!(
            "Current Streak: {}{}Streak Points: {}",
            streak.current_streak,
            " ".repeat(15),
            streak.current_points
        );
        println!("{}", "─".repeat(49));
    }

    println!("{}", session.hidden_grid());
    println!("{}", "─".repeat(49));
    println!(
        "Letters: {}    |    Last guess: {}",
        session.scrambled_letters(),
        session.last_guess()
    );
    println!(
        "Lives left: {} | Points: {} | Words found: {}/{}",
        session.lives(),
        session.points(),
        session.found_count(),
        session.total_words()
    );
    println!("{}", "─".repeat(49));
    println!("{}Letter Commands | 'R' to start new game", " ".repeat(10));
    println!("{}| 'L' for leaderboard", " ".repeat(26));
    println!("{}| 'E' to quit", " ".repeat(26));
    println!("{}", "─".repeat(49));
}

/// Flush the running streak to the leaderboard, if there is one
fn save_streak(streak: &StreakTracker, leaderboard: &mut Leaderboard) {
    if !streak.player_name.is_empty() && streak.current_streak > 0 {
        leaderboard.add_entry(
            &streak.player_name,
            streak.current_streak,
            streak.current_points,
        );
        println!(
            "Your streak of {} games has been saved!",
            streak.current_streak
        );
    }
}

fn read_player_name() -> Result<String> {
    loop {
        let name = prompt("What is your name?")?;
        if !name.is_empty() && name.chars().count() <= 20 {
            return Ok(name);
        }
        println!("Please enter a valid name (1-20 characters)");
    }
}

/// Get user input with a prompt
fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

/// Wait for Enter; the message is printed as-is
fn pause(message: &str) -> Result<()> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(())
}

fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}
