//! Source pane: the Scrawl program with line numbers and syntax highlighting

use super::utils::{code_lines, inner_height, pane_block};
use crate::parser::lexer::Keyword;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

fn is_scrawl_keyword(word: &str) -> bool {
    Keyword::from_word(word).is_some()
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Source ", is_focused);

    if source.trim().is_empty() {
        let paragraph = Paragraph::new("(empty file)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible = inner_height(area.height);
    let lines = code_lines(source, scroll_offset, visible, is_scrawl_keyword);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
