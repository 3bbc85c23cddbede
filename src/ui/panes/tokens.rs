//! Token stream pane
//!
//! One row per token: index, kind name and literal text. Fixed-text tokens
//! (punctuation, operators, keywords) show their text dimmed since the kind
//! already says everything.

use super::utils::{clamp_scroll, inner_height, pane_block};
use crate::parser::lexer::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

fn token_row(index: usize, token: &Token) -> ListItem<'static> {
    let text_color = match token.kind {
        TokenKind::String => DEFAULT_THEME.string,
        TokenKind::Number => DEFAULT_THEME.number,
        TokenKind::Boolean => DEFAULT_THEME.boolean,
        TokenKind::Identifier => DEFAULT_THEME.fg,
        TokenKind::Keyword(_) => DEFAULT_THEME.keyword,
        _ => DEFAULT_THEME.comment,
    };

    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:4} ", index),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!("{:<20}", token.kind.name()),
            Style::default().fg(DEFAULT_THEME.token_kind),
        ),
        Span::styled(token.text.clone(), Style::default().fg(text_color)),
    ]))
}

/// Render the token pane. `tokens` is `None` when lexing failed.
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: Option<&[Token]>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let tokens = match tokens {
        Some(tokens) => tokens,
        None => {
            let paragraph = Paragraph::new("(lexing failed)")
                .block(pane_block(" Tokens ", is_focused))
                .style(Style::default().fg(DEFAULT_THEME.error));
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let title = format!(" Tokens ({}) ", tokens.len());
    let block = pane_block(&title, is_focused);

    let visible = inner_height(area.height);
    clamp_scroll(scroll_offset, tokens.len(), visible);

    let items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible)
        .map(|(index, token)| token_row(index, token))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
