//! Output pane: compile errors, or what the program printed when run

use super::utils::{clamp_scroll, inner_height, pane_block};
use crate::ui::app::OutputState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the output pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    output: &OutputState,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Output ", is_focused);

    let execution = match output {
        OutputState::NotRun => {
            let paragraph = Paragraph::new("(press r to run)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
        OutputState::CompileError(message) | OutputState::RunError(message) => {
            let paragraph = Paragraph::new(message.as_str())
                .block(block)
                .wrap(Wrap { trim: false })
                .style(
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                );
            frame.render_widget(paragraph, area);
            return;
        }
        OutputState::Finished(execution) => execution,
    };

    let fg = Style::default().fg(DEFAULT_THEME.fg);
    let err = Style::default().fg(DEFAULT_THEME.error);

    let mut items: Vec<ListItem> = Vec::new();
    items.extend(execution.stdout.lines().map(|line| ListItem::new(line.to_string()).style(fg)));
    items.extend(execution.stderr.lines().map(|line| ListItem::new(line.to_string()).style(err)));

    let (status, status_color) = match execution.code {
        Some(code) if execution.success => (format!("[exited with {}]", code), DEFAULT_THEME.success),
        Some(code) => (format!("[exited with {}]", code), DEFAULT_THEME.error),
        None => ("[terminated by signal]".to_string(), DEFAULT_THEME.error),
    };
    items.push(ListItem::new(status).style(Style::default().fg(status_color)));

    let visible = inner_height(area.height);
    clamp_scroll(scroll_offset, items.len(), visible);

    let visible_items: Vec<ListItem> = items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible)
        .collect();

    let list = List::new(visible_items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
