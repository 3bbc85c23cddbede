// Rendering tests for the pipeline inspector

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use scrawl::harness::Harness;
use scrawl::ui::app::{FocusedPane, OutputState};
use scrawl::ui::App;

const WIDTH: u16 = 150;
const HEIGHT: u16 = 40;

fn no_runtime() -> Harness {
    Harness::with_node("scrawl-no-such-runtime")
}

fn screen(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_successful_compilation_shows_every_stage() {
    let mut app = App::new("x = 1 + 2;\nprint(x)\n".to_string(), no_runtime());
    let text = screen(&mut app);

    assert!(text.contains("Source"));
    assert!(text.contains("Tokens (11)"));
    assert!(text.contains("Syntax Tree"));
    assert!(text.contains("JavaScript"));
    assert!(text.contains("Output"));

    assert!(text.contains("assignment"));
    assert!(text.contains("assign x = (+ 1 2)"));
    assert!(text.contains("let x = 1 + 2;"));
    assert!(text.contains("console.log(x);"));
    assert!(text.contains("(press r to run)"));
    assert!(text.contains("COMPILED"));
}

#[test]
fn test_failed_compilation_still_opens() {
    let mut app = App::new("x = 1 +".to_string(), no_runtime());

    assert!(app.tokens.is_some());
    assert!(app.program.is_none());
    assert!(app.code.is_none());
    assert!(matches!(app.output, OutputState::CompileError(_)));

    let text = screen(&mut app);
    assert!(text.contains("x = 1 +"));
    assert!(text.contains("(not parsed)"));
    assert!(text.contains("(not generated)"));
    assert!(text.contains("Compile error: Unexpected end of input"));
    assert!(text.contains("ERROR"));
}

#[test]
fn test_lexer_failure_shows_no_tokens() {
    let mut app = App::new("x = \"open".to_string(), no_runtime());
    assert!(app.tokens.is_none());

    let text = screen(&mut app);
    assert!(text.contains("(lexing failed)"));
    assert!(text.contains("Unterminated string literal"));
}

#[test]
fn test_focus_cycles_through_panes() {
    let mut app = App::new("x = 1;".to_string(), no_runtime());
    assert_eq!(app.focused_pane, FocusedPane::Source);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focused_pane, FocusedPane::Tokens);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focused_pane, FocusedPane::Output);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focused_pane, FocusedPane::Source);

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focused_pane, FocusedPane::Output);
}

#[test]
fn test_scrolling_is_clamped_on_render() {
    let source: String = (0..200).map(|i| format!("v{} = {};\n", i, i)).collect();
    let mut app = App::new(source, no_runtime());

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::End);
    assert_eq!(app.tokens_scroll, usize::MAX);

    let text = screen(&mut app);
    assert!(app.tokens_scroll < usize::MAX);
    assert!(text.contains("EOF"));

    press(&mut app, KeyCode::Home);
    assert_eq!(app.tokens_scroll, 0);
    press(&mut app, KeyCode::PageDown);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.tokens_scroll, 11);
    press(&mut app, KeyCode::PageUp);
    press(&mut app, KeyCode::PageUp);
    assert_eq!(app.tokens_scroll, 0);
}

#[test]
fn test_run_without_runtime_reports_error() {
    let mut app = App::new("print(1)".to_string(), no_runtime());
    press(&mut app, KeyCode::Char('r'));

    assert_eq!(app.focused_pane, FocusedPane::Output);
    assert!(matches!(app.output, OutputState::RunError(_)));

    let text = screen(&mut app);
    assert!(text.contains("scrawl-no-such-runtime"));
}

#[test]
fn test_run_after_compile_error_does_nothing() {
    let mut app = App::new("x = ;".to_string(), no_runtime());
    press(&mut app, KeyCode::Char('r'));

    assert!(matches!(app.output, OutputState::CompileError(_)));
    assert_eq!(app.status_message, "Nothing to run: compilation failed");
}

#[test]
fn test_quit() {
    let mut app = App::new(String::new(), no_runtime());
    assert!(!app.should_quit);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}
