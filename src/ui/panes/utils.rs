//! Helpers shared by the panes: bordered blocks, scroll clamping and a
//! line highlighter for both Scrawl and JavaScript text

use crate::parser::chars::{
    is_boolean_literal, is_decimal_point, is_digit, is_letter, is_quote, is_word_char,
};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

/// Bordered block with the focus color applied
pub(super) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Rows available inside a bordered pane, at least one
pub(super) fn inner_height(height: u16) -> usize {
    height.saturating_sub(2).max(1) as usize
}

/// Clamp a scroll offset so the last page stays full. `usize::MAX` means
/// "scroll to the bottom".
pub(super) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}

fn line_number(number: usize) -> Span<'static> {
    Span::styled(
        format!("{:4} ", number),
        Style::default().fg(DEFAULT_THEME.comment),
    )
}

/// Numbered, highlighted lines for the visible window of a code pane
pub(super) fn code_lines(
    text: &str,
    offset: &mut usize,
    visible: usize,
    is_keyword: fn(&str) -> bool,
) -> Vec<Line<'static>> {
    let lines: Vec<&str> = text.lines().collect();
    clamp_scroll(offset, lines.len(), visible);

    lines
        .iter()
        .enumerate()
        .skip(*offset)
        .take(visible)
        .map(|(idx, line)| {
            let mut spans = vec![line_number(idx + 1)];
            spans.extend(highlight_line(line, is_keyword));
            Line::from(spans)
        })
        .collect()
}

/// Highlight one line of code. `is_keyword` decides which words get the
/// keyword style; a word followed by `(` gets the function style.
pub(super) fn highlight_line(line: &str, is_keyword: fn(&str) -> bool) -> Vec<Span<'static>> {
    let chars: Vec<char> = line.chars().collect();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if is_quote(c) {
            let start = i;
            i += 1;
            while i < chars.len() && !is_quote(chars[i]) {
                i += 1;
            }
            // Include the closing quote when the string ends on this line
            i = (i + 1).min(chars.len());
            spans.push(Span::styled(
                chars[start..i].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            continue;
        }

        if is_digit(c) {
            let start = i;
            while i < chars.len() && (is_digit(chars[i]) || is_decimal_point(chars[i])) {
                i += 1;
            }
            spans.push(Span::styled(
                chars[start..i].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.number),
            ));
            continue;
        }

        if is_letter(c) || c == '_' {
            let start = i;
            while i < chars.len() && (is_word_char(chars[i]) || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let is_call = chars.get(i) == Some(&'(');
            spans.push(Span::styled(word.clone(), word_style(&word, is_call, is_keyword)));
            continue;
        }

        let style = match c {
            '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
        i += 1;
    }

    spans
}

fn word_style(word: &str, is_call: bool, is_keyword: fn(&str) -> bool) -> Style {
    if is_boolean_literal(word) {
        Style::default().fg(DEFAULT_THEME.boolean)
    } else if is_keyword(word) {
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD)
    } else if is_call {
        Style::default().fg(DEFAULT_THEME.function)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(spans: &[Span<'_>]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn never(_: &str) -> bool {
        false
    }

    #[test]
    fn test_highlight_keeps_text() {
        let line = r#"  x = f("a b", 3.5) && !done;"#;
        assert_eq!(plain(&highlight_line(line, never)), line);
    }

    #[test]
    fn test_unterminated_string_runs_to_end_of_line() {
        let spans = highlight_line("print(\"abc", never);
        assert_eq!(spans.last().map(|s| s.content.as_ref()), Some("\"abc"));
    }

    #[test]
    fn test_clamp_scroll() {
        let mut offset = usize::MAX;
        clamp_scroll(&mut offset, 10, 4);
        assert_eq!(offset, 6);

        let mut offset = 3;
        clamp_scroll(&mut offset, 2, 4);
        assert_eq!(offset, 0);
    }
}
