//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The pipeline inspector is organized into three layers:
//!
//! - **[`app`]** — compilation state, keyboard event loop, pane focus, run action
//! - **[`panes`]** — render functions for each visible pane (source, tokens,
//!   syntax tree, JavaScript, output, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with the source text
//! and a [`Harness`], then call [`App::run`] to start the event loop.
//!
//! [`Harness`]: crate::harness::Harness
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
