//! Status bar component - bottom bar with layout mode, last pick, shortcuts
//!
//! The bar is the harness's platform chrome: its rows are reported as the
//! host's chrome inset and never covered by a popover.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::state::Justify;
use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

/// Rows reserved at the bottom of the screen
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    justify: Justify,
    last_selection: Option<&str>,
    popover_open: bool,
) {
    let bg = Paragraph::new("").style(Style::default().bg(theme.status_bar_bg_color));
    f.render_widget(bg, area);

    let selection = truncate_ellipsis(last_selection.unwrap_or("nothing picked"), 24);
    let left_spans = vec![
        Span::raw(" "),
        Span::styled(justify.label(), Style::default().fg(theme.dim_color)),
        Span::styled(" │ ", Style::default().fg(theme.dim_color)),
        Span::styled(selection.clone(), Style::default().fg(theme.text_color)),
    ];
    let left_width = (1 + justify.label().width() + 3 + selection.width()) as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(left_width), Constraint::Fill(1)])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(left_spans)), chunks[0]);

    let available_width = chunks[1].width as usize;
    let commands = build_commands_for_width(available_width, popover_open, theme);
    f.render_widget(
        Paragraph::new(Line::from(commands)).alignment(Alignment::Right),
        chunks[1],
    );
}

/// Build command spans that fit in `width`, highest priority first
fn build_commands_for_width<'a>(width: usize, popover_open: bool, theme: &'a Theme) -> Vec<Span<'a>> {
    let commands: &[(&str, &str)] = if popover_open {
        &[(" Esc ", "close "), (" ↵ ", "pick "), (" ←→↑↓ ", "move ")]
    } else {
        &[(" q ", "quit "), (" 1/2 ", "open "), (" j ", "justify ")]
    };

    let mut spans = Vec::new();
    let mut used_width = 0;
    for (key, desc) in commands {
        let cmd_width = key.width() + desc.width();
        if used_width + cmd_width > width {
            break;
        }
        spans.push(Span::styled(
            *key,
            Style::default().bg(theme.dim_color).fg(theme.text_color),
        ));
        spans.push(Span::styled(*desc, Style::default().fg(theme.dim_color)));
        used_width += cmd_width;
    }

    spans
}
