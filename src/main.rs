mod app;
mod config;
mod error;
mod events;
mod log;
mod modal;
mod picker;
mod scroll;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;

use app::App;
use config::{parse_time, Config, PickerKind};
use error::AppError;
use events::{Action, EventHandler};

/// Frame interval for animations
const FRAME: Duration = Duration::from_millis(16);

/// Command-line overrides
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    picker: Option<PickerKind>,
    reminder_time: Option<String>,
    year: Option<i32>,
}

fn parse_args(args: &[String]) -> error::Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args.get(i + 1).map(String::as_str);
        match (flag, value) {
            ("--picker" | "-p", Some(v)) => {
                cli.picker = Some(PickerKind::parse(v).ok_or_else(|| {
                    AppError::InvalidArgument(format!(
                        "unknown picker '{}', expected time, month or year",
                        v
                    ))
                })?);
                i += 2;
            }
            ("--time" | "-t", Some(v)) => {
                if parse_time(v).is_none() {
                    return Err(AppError::InvalidArgument(format!("'{}' is not an HH:MM time", v)));
                }
                cli.reminder_time = Some(v.to_string());
                i += 2;
            }
            ("--year" | "-y", Some(v)) => {
                let year = v
                    .parse()
                    .map_err(|_| AppError::InvalidArgument(format!("'{}' is not a year", v)))?;
                cli.year = Some(year);
                i += 2;
            }
            ("--picker" | "-p" | "--time" | "-t" | "--year" | "-y", None) => {
                return Err(AppError::InvalidArgument(format!("{} requires a value", flag)));
            }
            _ => {
                eprintln!("Warning: ignoring unknown argument '{}'", flag);
                i += 1;
            }
        }
    }
    Ok(cli)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args)?;

    // Load config with precedence: CLI > env var > file > default
    let config = Config::load().with_overrides(cli.picker, cli.reminder_time, cli.year);
    let mut app = App::new(config).map_err(AppError::from)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    for entry in &app.saved {
        println!("{}: {}", entry.title, entry.description);
    }

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Event stream for keyboard and mouse
    let mut event_stream = EventStream::new();

    let mut frames = tokio::time::interval(FRAME);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_tick = Instant::now();

    loop {
        // Render, then apply corrections deferred until after this frame
        terminal.draw(|frame| tui::ui::render(frame, app))?;
        app.after_render();

        if app.should_quit {
            break;
        }

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        if action != Action::None {
                            log::log_event(&format!("{:?}", action));
                        }
                        app.apply(action, Instant::now());
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
            _ = frames.tick() => {
                let now = Instant::now();
                app.tick(now.duration_since(last_tick), now);
                last_tick = now;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("wheelpick")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args() {
        let argv = args(&["--picker", "year", "-t", "06:15", "--year", "2024"]);
        let cli = parse_args(&argv).unwrap();
        assert_eq!(cli.picker, Some(PickerKind::Year));
        assert_eq!(cli.reminder_time.as_deref(), Some("06:15"));
        assert_eq!(cli.year, Some(2024));
    }

    #[test]
    fn test_parse_args_rejects_bad_values() {
        assert!(matches!(
            parse_args(&args(&["--picker", "weekly"])),
            Err(AppError::InvalidArgument(_))
        ));
        assert!(parse_args(&args(&["--time", "25:00"])).is_err());
        assert!(parse_args(&args(&["--year"])).is_err());
    }
}
