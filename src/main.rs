mod board;
mod board_logic;
mod build_info;
mod constants;
mod input;
mod roster;
mod session;
mod session_logic;
mod settings;
mod ui;

use chrono::Utc;
use constants::*;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::InputResult;
use ratatui::{backend::CrosstermBackend, Terminal};
use roster::Roster;
use session::GameSession;
use settings::SettingsManager;
use std::io;
use std::time::{Duration, Instant};
use ui::roster_scene::RosterSetupScreen;

enum Screen {
    RosterSetup,
    Game,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "mineslap {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Mine Slap - Pass-and-Play Party Game\n");
                println!("Usage: mineslap\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!();
                println!("Rules live in ~/.mineslap/settings.json");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'mineslap --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Load rules before the terminal goes raw
    let settings = SettingsManager::new()?;
    let rules = settings.load_or_init();

    // Screen state variables
    let mut current_screen = Screen::RosterSetup;
    let mut roster_screen = RosterSetupScreen::new();
    let mut roster = Roster::new();
    let mut game_session: Option<GameSession> = None;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    'outer: loop {
        match current_screen {
            Screen::RosterSetup => {
                // Draw roster setup screen
                terminal.draw(|f| {
                    let area = f.size();
                    roster_screen.draw(f, area, &roster);
                })?;

                // Handle input
                if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char(c) => {
                                roster_screen.handle_char_input(c, &roster);
                            }
                            KeyCode::Backspace => {
                                roster_screen.handle_backspace(&roster);
                            }
                            KeyCode::Up => {
                                roster_screen.selected_index =
                                    roster_screen.selected_index.saturating_sub(1);
                            }
                            KeyCode::Down => {
                                if roster_screen.selected_index + 1 < roster.len() {
                                    roster_screen.selected_index += 1;
                                }
                            }
                            KeyCode::Delete => {
                                roster.remove(roster_screen.selected_index);
                                if roster_screen.selected_index >= roster.len() {
                                    roster_screen.selected_index =
                                        roster.len().saturating_sub(1);
                                }
                            }
                            KeyCode::Enter => {
                                if roster_screen.name_input.trim().is_empty() {
                                    // Empty input: start the game if the party is big enough
                                    if roster.ready_to_start() {
                                        let mut session = GameSession::new(
                                            &roster.names(),
                                            rules,
                                            Utc::now().timestamp(),
                                        );
                                        let mut rng = rand::thread_rng();
                                        let events =
                                            session_logic::start_round(&mut session, &mut rng);
                                        input::record_events(&mut session, &events);
                                        game_session = Some(session);
                                        current_screen = Screen::Game;
                                    } else {
                                        roster_screen.validation_error = Some(format!(
                                            "Need at least {} players to start",
                                            MIN_PLAYERS
                                        ));
                                    }
                                } else {
                                    match roster.add(&roster_screen.get_name()) {
                                        Ok(()) => roster_screen.clear_input(),
                                        Err(e) => roster_screen.validation_error = Some(e),
                                    }
                                }
                            }
                            KeyCode::Esc => {
                                break 'outer;
                            }
                            _ => {}
                        }
                    }
                }
            }

            Screen::Game => {
                // Take the session (it should always be Some when we're in Game screen)
                let mut session = game_session
                    .take()
                    .expect("Game session should be initialized when entering Game screen");

                // Round-end overlay timer for the automatic advance
                let mut round_end_since: Option<Instant> = None;

                loop {
                    let elapsed = Utc::now().timestamp() - session.started_at;

                    // Draw UI
                    terminal.draw(|frame| {
                        ui::game_scene::draw_game(frame, &session, elapsed);
                    })?;

                    // Poll for input (non-blocking)
                    if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
                        if let Event::Key(key_event) = event::read()? {
                            match input::handle_game_input(key_event, &mut session) {
                                InputResult::Continue => {}
                                InputResult::QuitToRoster => {
                                    roster_screen = RosterSetupScreen::new();
                                    current_screen = Screen::RosterSetup;
                                    break;
                                }
                            }
                        }
                    }

                    // Cosmetic delay, then advance automatically
                    if session.round_over() {
                        let since = round_end_since.get_or_insert_with(Instant::now);
                        if since.elapsed() >= Duration::from_millis(ROUND_END_ADVANCE_MS) {
                            let mut rng = rand::thread_rng();
                            let events = session_logic::advance_round(&mut session, &mut rng);
                            input::record_events(&mut session, &events);
                        }
                    } else {
                        round_end_since = None;
                    }
                }
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Goodbye!");

    Ok(())
}
