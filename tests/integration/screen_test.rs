//! Greeter runs against a virtual terminal.

use std::io;

use crossterm::event::KeyCode;
use greeter::{GreeterConfig, GreeterError, ScreenHandle, TerminalGreeter, DEFAULT_MESSAGE};
use ratatui::widgets::Paragraph;

use crate::helpers::{screen_dump, virtual_terminal, CountingMode, ScriptedKeys};

#[test]
fn snapshot_greeting_screen() {
    let mut terminal = virtual_terminal(40, 3);
    let mut keys = ScriptedKeys::new(&[KeyCode::Char('q')]);

    TerminalGreeter::default()
        .run_with(CountingMode::default(), &mut terminal, &mut keys)
        .expect("run should succeed");

    let screen = screen_dump(terminal.backend().buffer());
    insta::assert_snapshot!("greeting_screen", screen);
}

#[test]
fn keypress_q_exits_cleanly() {
    let mode = CountingMode::default();
    let mut terminal = virtual_terminal(40, 3);
    let mut keys = ScriptedKeys::new(&[KeyCode::Char('q')]);

    let result = TerminalGreeter::default().run_with(mode.clone(), &mut terminal, &mut keys);

    assert!(result.is_ok());
    assert!(mode.is_restored());
    assert_eq!(mode.entered.get(), 1);
    assert_eq!(keys.waits(), 1);
}

#[test]
fn only_one_key_is_consumed() {
    let mut terminal = virtual_terminal(40, 3);
    let mut keys = ScriptedKeys::new(&[KeyCode::Enter, KeyCode::Char('z')]);

    TerminalGreeter::default()
        .run_with(CountingMode::default(), &mut terminal, &mut keys)
        .unwrap();

    assert_eq!(keys.remaining(), 1);
}

#[test]
fn missing_key_is_an_error_and_terminal_is_restored() {
    let mode = CountingMode::default();
    let mut terminal = virtual_terminal(40, 3);
    let mut keys = ScriptedKeys::new(&[]);

    let err = TerminalGreeter::default()
        .run_with(mode.clone(), &mut terminal, &mut keys)
        .unwrap_err();

    assert_eq!(err.exit_code(), 1);
    assert!(mode.is_restored());
}

#[test]
fn configured_message_replaces_default() {
    let mut terminal = virtual_terminal(20, 2);
    let mut keys = ScriptedKeys::new(&[KeyCode::Esc]);

    TerminalGreeter::new(GreeterConfig::new("Hello, terminal"))
        .run_with(CountingMode::default(), &mut terminal, &mut keys)
        .unwrap();

    let screen = screen_dump(terminal.backend().buffer());
    assert_eq!(screen, "|Hello, terminal     |\n|                    |");
}

#[test]
fn consecutive_runs_produce_identical_screens() {
    let run = || {
        let mut terminal = virtual_terminal(40, 3);
        let mut keys = ScriptedKeys::new(&[KeyCode::Char('q')]);
        TerminalGreeter::default()
            .run_with(CountingMode::default(), &mut terminal, &mut keys)
            .unwrap();
        screen_dump(terminal.backend().buffer())
    };

    let first = run();
    assert_eq!(first, run());
    assert!(first.starts_with(&format!("|{}", DEFAULT_MESSAGE)));
}

#[test]
fn screen_handle_restores_on_scope_exit() {
    let mode = CountingMode::default();
    {
        let screen = ScreenHandle::acquire(mode.clone()).unwrap();
        assert_eq!(screen.mode().entered.get(), 1);
        assert!(!mode.is_restored());
    }
    assert!(mode.is_restored());
}

#[test]
fn stale_content_is_cleared() {
    let mut terminal = virtual_terminal(20, 2);
    terminal
        .draw(|frame| {
            frame.render_widget(Paragraph::new("old old old old old\nold"), frame.area())
        })
        .unwrap();
    let mut keys = ScriptedKeys::new(&[KeyCode::Char('q')]);

    TerminalGreeter::new(GreeterConfig::new("hi"))
        .run_with(CountingMode::default(), &mut terminal, &mut keys)
        .unwrap();

    let screen = screen_dump(terminal.backend().buffer());
    assert_eq!(screen, "|hi                  |\n|                    |");
}

#[test]
fn failed_enter_skips_drawing_and_still_restores() {
    let mode = CountingMode::failing();
    let mut terminal = virtual_terminal(40, 3);
    let mut keys = ScriptedKeys::new(&[KeyCode::Char('q')]);

    let err = TerminalGreeter::default()
        .run_with(mode.clone(), &mut terminal, &mut keys)
        .unwrap_err();

    assert!(matches!(err, GreeterError::TerminalUnavailable { .. }));
    assert_eq!(mode.left.get(), 1);
    assert_eq!(keys.waits(), 0);
    assert!(screen_dump(terminal.backend().buffer())
        .chars()
        .all(|c| c == ' ' || c == '|' || c == '\n'));
}

#[test]
fn key_source_failure_still_restores() {
    let mode = CountingMode::default();
    let mut terminal = virtual_terminal(40, 3);
    let mut keys = ScriptedKeys::failing(GreeterError::Io(io::Error::other("tty closed")));

    let err = TerminalGreeter::default()
        .run_with(mode.clone(), &mut terminal, &mut keys)
        .unwrap_err();

    assert!(matches!(err, GreeterError::Io(_)));
    assert!(mode.is_restored());
}

#[test]
fn interrupt_restores_and_reports_signal() {
    let mode = CountingMode::default();
    let mut terminal = virtual_terminal(40, 3);
    let mut keys = ScriptedKeys::failing(GreeterError::Interrupted { signal: 2 });

    let err = TerminalGreeter::default()
        .run_with(mode.clone(), &mut terminal, &mut keys)
        .unwrap_err();

    assert_eq!(err.exit_code(), 130);
    assert!(mode.is_restored());
}
