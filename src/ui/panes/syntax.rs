//! Syntax tree pane: the AST outline of the parsed program

use super::utils::{clamp_scroll, inner_height, pane_block};
use crate::parser::ast::Program;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Statement heads in the outline
const OUTLINE_KEYWORDS: &[&str] = &["assign", "call", "function", "if", "elseif", "else", "return"];

fn outline_line(line: &str) -> Line<'static> {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];
    let (head, rest) = body.split_once(' ').unwrap_or((body, ""));

    if !OUTLINE_KEYWORDS.contains(&head) {
        return Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        ));
    }

    Line::from(vec![
        Span::raw(indent.to_string()),
        Span::styled(
            head.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            if rest.is_empty() {
                String::new()
            } else {
                format!(" {}", rest)
            },
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ])
}

/// Render the syntax tree pane. `program` is `None` when parsing failed or
/// never ran.
pub fn render_syntax_pane(
    frame: &mut Frame,
    area: Rect,
    program: Option<&Program>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Syntax Tree ", is_focused);

    let outline = match program {
        Some(program) if !program.body.is_empty() => program.to_string(),
        Some(_) => {
            let paragraph = Paragraph::new("(empty program)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
        None => {
            let paragraph = Paragraph::new("(not parsed)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let lines: Vec<&str> = outline.lines().collect();
    let visible = inner_height(area.height);
    clamp_scroll(scroll_offset, lines.len(), visible);

    let visible_lines: Vec<Line> = lines
        .iter()
        .skip(*scroll_offset)
        .take(visible)
        .map(|line| outline_line(line))
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}
