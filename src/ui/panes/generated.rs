//! JavaScript pane: the generated code, or a note when generation never ran

use super::utils::{code_lines, inner_height, pane_block};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Keywords the code generator can emit
fn is_js_keyword(word: &str) -> bool {
    matches!(word, "let" | "function" | "return" | "if" | "else")
}

/// Render the generated JavaScript pane
pub fn render_generated_pane(
    frame: &mut Frame,
    area: Rect,
    code: Option<&str>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" JavaScript ", is_focused);

    match code {
        Some(code) if !code.is_empty() => {
            let visible = inner_height(area.height);
            let lines = code_lines(code, scroll_offset, visible, is_js_keyword);
            frame.render_widget(Paragraph::new(lines).block(block), area);
        }
        other => {
            let note = if other.is_none() {
                "(not generated)"
            } else {
                "(no statements)"
            };
            let paragraph = Paragraph::new(note)
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
        }
    }
}
