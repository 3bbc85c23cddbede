//! TUI pane rendering modules
//!
//! One module per visible pane, in pipeline order.
//!
//! # Pane Modules
//!
//! - [`source`]: Scrawl source with syntax highlighting and line numbers
//! - [`tokens`]: token stream produced by the lexer
//! - [`syntax`]: AST outline produced by the parser
//! - [`generated`]: JavaScript produced by the code generator
//! - [`output`]: compile error, or stdout/stderr of the last run
//! - [`status`]: status bar with keybindings and compilation state
//! - `utils`: bordered blocks, scroll clamping, line highlighting
//!
//! # Architecture
//!
//! Each pane module exports one `render_*` function taking the frame, its
//! area, the data to show, its focus flag and its scroll offset. Panes clamp
//! the offset themselves, so callers may set it to `usize::MAX` to jump to
//! the bottom.

mod utils;

pub mod generated;
pub mod output;
pub mod source;
pub mod status;
pub mod syntax;
pub mod tokens;

// Re-export render functions for convenience
pub use generated::render_generated_pane;
pub use output::render_output_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use syntax::render_syntax_pane;
pub use tokens::render_tokens_pane;
