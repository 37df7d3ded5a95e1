use anyhow::{Result, bail};
use clap::Args;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::time::Duration;

use tabnav::catalog::build_controller;
use tabnav::config::{AreaConfig, Config};
use tabnav::tui::{NavApp, Theme, draw};

#[derive(Args)]
pub struct TuiCommands {
    /// Number of display areas, overriding the configured list
    #[arg(long)]
    pub areas: Option<usize>,
}

pub fn tui_command(args: TuiCommands, config: &Config) -> Result<()> {
    let mut config = config.clone();
    if let Some(count) = args.areas {
        if count == 0 || count > 9 {
            bail!("--areas must be between 1 and 9, got {}", count);
        }
        config.areas = (0..count)
            .map(|i| AreaConfig {
                name: format!("Area {}", i + 1),
                category: 0,
                item: i,
            })
            .collect();
    }

    let controller = build_controller(&config)?;
    let app = NavApp::new(controller, Theme::new(config.theme));
    launch_tui(app)
}

fn launch_tui(mut app: NavApp) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("Navigation screen started");
    let result = run_tui(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Navigation screen closed");
    result
}

fn run_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut NavApp) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            app.resize(frame.area());
            draw(frame, app);
        })?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if !app.handle_key(key.code) {
                debug!("Unhandled key: {:?}", key.code);
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
