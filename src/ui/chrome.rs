use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_input::Input;

use crate::app::Focus;
use crate::controller::StatusState;

pub fn draw_search_bar(frame: &mut Frame<'_>, area: Rect, input: &Input, focused: bool) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let border = if focused { Color::White } else { Color::DarkGray };
    let block = Block::default()
        .title(" Search (/) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    let width = inner.width.max(1) as usize;
    let scroll = input.visual_scroll(width);
    let paragraph = Paragraph::new(input.value())
        .block(block)
        .scroll((0, scroll as u16));
    frame.render_widget(paragraph, area);

    if focused {
        let offset = input.visual_cursor().saturating_sub(scroll) as u16;
        frame.set_cursor_position((inner.x + offset.min(inner.width.saturating_sub(1)), inner.y));
    }
}

pub fn draw_status(frame: &mut Frame<'_>, area: Rect, status: &StatusState, focus: Focus) {
    let action = status
        .last_action_id
        .map(|id| id.as_str())
        .unwrap_or("-");
    let message = if status.message.is_empty() {
        "-"
    } else {
        status.message.as_str()
    };
    let text = format!(
        "{} | {action} | {message} | /:search n/p:page enter:open b:back s:sidebar q:quit",
        focus.as_str()
    );
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Gray)),
        area,
    );
}
