//! ActivityBoard console client
//!
//! Main application entry point: loads configuration, initializes logging,
//! then runs a small read-eval loop over stdin that drives the board.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use ActivityBoard::{
    board::{ActivityBoard as Board, StatusKind},
    config::Settings,
    services::ActivitiesApi,
    utils::{helpers::is_valid_email, logging},
    view::board_text,
};

/// Commands accepted on stdin. Activity names may contain spaces, so the
/// email always comes first.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Refresh,
    Signup { activity: String, email: String },
    Remove { activity: String, email: String },
    Quit,
}

const USAGE: &str = "commands:\n  refresh\n  signup <email> <activity name>\n  remove <email> <activity name>\n  quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file writer alive
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", ActivityBoard::info());

    let api = ActivitiesApi::new(&settings)?;
    let mut board = Board::new(api);

    // Initial load
    board.refresh().await;
    print_board(&board);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_prompt()?;
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Some(Command::Refresh) => {
                board.refresh().await;
                print_board(&board);
            }
            Some(Command::Signup { activity, email }) => {
                if !is_valid_email(&email) {
                    println!("'{}' does not look like an email address", email);
                } else {
                    board.submit_signup(&activity, &email).await;
                    print_board(&board);
                }
            }
            Some(Command::Remove { activity, email }) => {
                board.remove_participant(&activity, &email).await;
                print_board(&board);
            }
            Some(Command::Quit) => break,
            None => println!("{}", USAGE),
        }
        print_prompt()?;
    }

    info!("ActivityBoard shut down.");

    Ok(())
}

/// Parse one input line into a command
fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "refresh" | "list" => Some(Command::Refresh),
        "quit" | "exit" => Some(Command::Quit),
        "signup" | "remove" => {
            let (email, activity) = rest.split_once(char::is_whitespace)?;
            let activity = activity.trim().to_string();
            let email = email.to_string();
            if activity.is_empty() {
                return None;
            }
            if head == "signup" {
                Some(Command::Signup { activity, email })
            } else {
                Some(Command::Remove { activity, email })
            }
        }
        _ => None,
    }
}

/// Print the rendered board plus the status banner, if one is visible
fn print_board(board: &Board) {
    print!("{}", board_text(board.view()));
    if let Some(banner) = board.status() {
        match banner.kind {
            StatusKind::Success => println!("[ok] {}", banner.message),
            StatusKind::Error => println!("[error] {}", banner.message),
        }
    }
}

fn print_prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_signup_with_spaced_activity() {
        assert_eq!(
            parse_command("signup ada@example.com Chess Club"),
            Some(Command::Signup {
                activity: "Chess Club".to_string(),
                email: "ada@example.com".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_remove() {
        assert_eq!(
            parse_command("remove ada@example.com Art Club"),
            Some(Command::Remove {
                activity: "Art Club".to_string(),
                email: "ada@example.com".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_refresh_and_quit() {
        assert_eq!(parse_command("refresh"), Some(Command::Refresh));
        assert_eq!(parse_command("list"), Some(Command::Refresh));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_rejects_incomplete_input() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("signup ada@example.com"), None);
        assert_eq!(parse_command("dance"), None);
    }
}
