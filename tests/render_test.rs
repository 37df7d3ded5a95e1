use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use tabnav::catalog::build_controller;
use tabnav::config::Config;
use tabnav::tui::{NavApp, Theme, draw};

fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn render(app: &mut NavApp) -> Result<Vec<String>> {
    let mut terminal = Terminal::new(TestBackend::new(100, 20))?;
    terminal.draw(|frame| {
        app.resize(frame.area());
        draw(frame, app);
    })?;
    Ok(buffer_lines(terminal.backend().buffer()))
}

#[test]
fn test_initial_screen() -> Result<()> {
    let mut app = NavApp::new(build_controller(&Config::default())?, Theme::default());
    let lines = render(&mut app)?;

    assert!(lines[0].contains("Area 1: [ACTIVE]"));
    assert!(lines[1].contains("Electronics") && lines[1].contains("Sports"));
    assert!(lines[2].contains("Smartphones") && lines[2].contains("Cameras"));
    assert!(lines.iter().any(|line| line.contains("iPhone 15 Pro")));
    assert!(lines.iter().any(|line| line.contains("MacBook Pro M3")));
    assert!(lines[19].contains("F2 rename item"));
    Ok(())
}

#[test]
fn test_active_marker_follows_area_switch() -> Result<()> {
    let mut app = NavApp::new(build_controller(&Config::default())?, Theme::default());
    app.handle_key(KeyCode::Char('2'));
    let lines = render(&mut app)?;

    assert!(lines[0].contains("Area 2: [ACTIVE]"));
    assert!(!lines[0].contains("Area 1: [ACTIVE]"));
    Ok(())
}

#[test]
fn test_placeholder_content() -> Result<()> {
    let mut app = NavApp::new(build_controller(&Config::default())?, Theme::default());
    app.handle_key(KeyCode::Left);
    for _ in 0..3 {
        app.handle_key(KeyCode::Tab);
    }
    assert_eq!(app.controller().tree().current(), Some((3, 3)));

    let lines = render(&mut app)?;
    assert!(lines.iter().any(|line| line.contains("Fake Content - Not Initialized")));
    Ok(())
}

#[test]
fn test_rename_prompt_in_footer() -> Result<()> {
    let mut app = NavApp::new(build_controller(&Config::default())?, Theme::default());
    app.handle_key(KeyCode::F(3));
    let lines = render(&mut app)?;

    assert!(lines[19].starts_with("Rename category: Electronics"));
    Ok(())
}
