use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::render::{CardModel, DetailModel, MainPanelModel, PaginationModel, SidebarModel};

pub fn draw_main(
    frame: &mut Frame<'_>,
    area: Rect,
    model: &MainPanelModel,
    selected: usize,
    focused: bool,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    match model {
        MainPanelModel::Loading { title, message } => {
            draw_message(frame, area, title, message, Color::Yellow);
        }
        MainPanelModel::NoResults { message } => {
            draw_message(frame, area, "Results", message, Color::Gray);
        }
        MainPanelModel::Error { message } => {
            draw_message(frame, area, "Results", message, Color::Red);
        }
        MainPanelModel::Results {
            title,
            cards,
            pagination,
        } => draw_results(frame, area, title, cards, *pagination, selected, focused),
        MainPanelModel::Detail(detail) => draw_detail(frame, area, detail),
    }
}

pub fn draw_sidebar(
    frame: &mut Frame<'_>,
    area: Rect,
    model: &SidebarModel,
    selected: usize,
    focused: bool,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::default()
        .title(" Top 100 ")
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    let inner_width = block.inner(area).width as usize;

    let items = match model {
        SidebarModel::Loading { message } => vec![ListItem::new(message.as_str())],
        SidebarModel::Error { message } => vec![ListItem::new(
            Span::styled(message.as_str(), Style::default().fg(Color::Red)),
        )],
        SidebarModel::Entries(entries) => entries
            .iter()
            .map(|entry| ListItem::new(fit_width(&entry.label, inner_width)))
            .collect(),
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style(focused));
    let mut state = ListState::default();
    if !model.entries().is_empty() {
        state.select(Some(selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_message(frame: &mut Frame<'_>, area: Rect, title: &str, message: &str, color: Color) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let paragraph = Paragraph::new(message.to_string())
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color));
    frame.render_widget(paragraph, area);
}

fn draw_results(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    cards: &[CardModel],
    pagination: Option<PaginationModel>,
    selected: usize,
    focused: bool,
) {
    let footer_height = if pagination.is_some() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(footer_height)])
        .split(area);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    let inner_width = block.inner(chunks[0]).width as usize;

    let items = cards
        .iter()
        .map(|card| {
            let poster = card.thumbnail.url().unwrap_or("no poster");
            ListItem::new(vec![
                Line::from(Span::styled(
                    fit_width(&card.title, inner_width),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(card.rank_label.clone(), Style::default().fg(Color::Cyan)),
                    Span::raw("  "),
                    Span::styled(
                        fit_width(poster, inner_width.saturating_sub(card.rank_label.width() + 2)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
            ])
        })
        .collect::<Vec<_>>();

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style(focused));
    let mut state = ListState::default();
    if !cards.is_empty() {
        state.select(Some(selected));
    }
    frame.render_stateful_widget(list, chunks[0], &mut state);

    if let Some(pagination) = pagination {
        frame.render_widget(pagination_line(pagination), chunks[1]);
    }
}

fn pagination_line(pagination: PaginationModel) -> Paragraph<'static> {
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);
    let prev_style = if pagination.prev_enabled { enabled } else { disabled };
    let next_style = if pagination.next_enabled { enabled } else { disabled };

    Paragraph::new(Line::from(vec![
        Span::styled("← Previous (p)", prev_style),
        Span::raw(format!("   page {}   ", pagination.page_number)),
        Span::styled("Next (n) →", next_style),
    ]))
    .alignment(Alignment::Center)
}

fn draw_detail(frame: &mut Frame<'_>, area: Rect, detail: &DetailModel) {
    let label = Style::default().add_modifier(Modifier::BOLD);
    let poster = detail.poster.url().unwrap_or("no poster");
    let lines = vec![
        Line::from(Span::styled("← Back (b)", Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(Span::styled(
            detail.title.clone(),
            label.fg(Color::Cyan),
        )),
        Line::from(vec![Span::styled("Poster: ", label), Span::raw(poster.to_string())]),
        Line::from(vec![
            Span::styled("Status: ", label),
            Span::raw(detail.status.clone()),
        ]),
        Line::from(vec![
            Span::styled("Chapters: ", label),
            Span::raw(detail.chapters.clone()),
        ]),
        Line::from(vec![
            Span::styled("Rank: ", label),
            Span::raw(format!("#{}", detail.rank)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Synopsis:", label)),
        Line::from(detail.synopsis.clone()),
    ];

    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn highlight_style(focused: bool) -> Style {
    if focused {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

/// Cuts `text` to at most `width` terminal columns, marking the cut with `…`.
pub(crate) fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        out.push(ch);
    }
    out.push('…');
    out
}
