//! Pipeline inspector state and event loop

use crate::codegen::generate_program;
use crate::error::CompileError;
use crate::harness::{Execution, Harness};
use crate::parser::ast::Program;
use crate::parser::lexer::Token;
use crate::parser::{lex, parse};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Syntax,
    JavaScript,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane, in pipeline order
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Syntax,
            FocusedPane::Syntax => FocusedPane::JavaScript,
            FocusedPane::JavaScript => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Source,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Syntax => FocusedPane::Tokens,
            FocusedPane::JavaScript => FocusedPane::Syntax,
            FocusedPane::Output => FocusedPane::JavaScript,
        }
    }
}

/// What the output pane shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputState {
    NotRun,
    CompileError(String),
    /// The harness could not run the program at all
    RunError(String),
    Finished(Execution),
}

/// The main application state
pub struct App {
    pub source: String,

    /// Stage results; a stage after a failed one stays `None`
    pub tokens: Option<Vec<Token>>,
    pub program: Option<Program>,
    pub code: Option<String>,
    pub error: Option<CompileError>,

    pub output: OutputState,
    harness: Harness,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub tokens_scroll: usize,
    pub syntax_scroll: usize,
    pub code_scroll: usize,
    pub output_scroll: usize,

    pub should_quit: bool,
    pub status_message: String,
}

impl App {
    /// Compile `source` and build the inspector state. A compile error does
    /// not prevent the inspector from opening.
    pub fn new(source: String, harness: Harness) -> Self {
        let mut tokens = None;
        let mut program = None;
        let mut code = None;

        let result = lex(&source).and_then(|lexed| {
            tokens = Some(lexed.clone());
            let parsed = parse(lexed)?;
            code = Some(generate_program(&parsed));
            program = Some(parsed);
            Ok(())
        });

        let (error, output, status_message) = match result {
            Ok(()) => {
                let statements = program.as_ref().map_or(0, |p| p.body.len());
                let lines = code.as_deref().map_or(0, |c| c.lines().count());
                (
                    None,
                    OutputState::NotRun,
                    format!(
                        "Compiled {} statement(s) to {} line(s) of JavaScript",
                        statements, lines
                    ),
                )
            }
            Err(e) => {
                let message = format!("Compile error: {}", e);
                (Some(e), OutputState::CompileError(message.clone()), message)
            }
        };

        App {
            source,
            tokens,
            program,
            code,
            error,
            output,
            harness,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            tokens_scroll: 0,
            syntax_scroll: 0,
            code_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Percentage(30),
                Constraint::Percentage(35),
            ])
            .split(pane_area);

        // Left column: Source (top) | Tokens (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        // Right column: JavaScript (top) | Output (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[2]);

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            left_rows[1],
            self.tokens.as_deref(),
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_syntax_pane(
            frame,
            columns[1],
            self.program.as_ref(),
            self.focused_pane == FocusedPane::Syntax,
            &mut self.syntax_scroll,
        );

        super::panes::render_generated_pane(
            frame,
            right_rows[0],
            self.code.as_deref(),
            self.focused_pane == FocusedPane::JavaScript,
            &mut self.code_scroll,
        );

        super::panes::render_output_pane(
            frame,
            right_rows[1],
            &self.output,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.error.is_none(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(PAGE);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(PAGE);
            }
            KeyCode::Home => {
                *self.focused_scroll() = 0;
            }
            KeyCode::End => {
                // Clamped to the last page on the next render
                *self.focused_scroll() = usize::MAX;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.run_program();
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Tokens => &mut self.tokens_scroll,
            FocusedPane::Syntax => &mut self.syntax_scroll,
            FocusedPane::JavaScript => &mut self.code_scroll,
            FocusedPane::Output => &mut self.output_scroll,
        }
    }

    /// Run the generated code with empty stdin and show what it printed
    fn run_program(&mut self) {
        let code = match &self.code {
            Some(code) => code,
            None => {
                self.status_message = "Nothing to run: compilation failed".to_string();
                return;
            }
        };

        match self.harness.run_with_input(code, "") {
            Ok(execution) => {
                self.status_message = if execution.success {
                    "Run finished".to_string()
                } else {
                    "Run failed, see Output".to_string()
                };
                self.output = OutputState::Finished(execution);
            }
            Err(e) => {
                self.status_message = format!("Cannot run: {}", e);
                self.output = OutputState::RunError(e.to_string());
            }
        }

        self.output_scroll = 0;
        self.focused_pane = FocusedPane::Output;
    }
}
