use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::truncate;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.repos.is_empty() {
        let block = Block::default().borders(Borders::ALL).title(" Projects ");
        let empty = Paragraph::new("No repositories found")
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(empty, area);
        return;
    }

    let w = area.width.saturating_sub(2) as usize;
    let fixed = 52; // name(30) + space(1) + stars(7) + spaces(2) + date(10) + spaces(2)
    let flex = w.saturating_sub(fixed).max(10);

    let items: Vec<ListItem> = app
        .repos
        .iter()
        .enumerate()
        .map(|(i, repo)| {
            let style = if i == app.repo_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let description = repo
                .description
                .as_deref()
                .unwrap_or("No description");

            let line = Line::from(vec![
                Span::styled(format!("{:<30}", truncate(&repo.name, 30)), style),
                Span::raw(" "),
                Span::styled(
                    format!("★ {:>5}", repo.stars),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(
                    repo.updated_at.format("%Y-%m-%d").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{:<flex$}", truncate(description, flex)),
                    Style::default().fg(Color::Gray),
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Projects ({}) ", app.repos.len())),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(app.repo_index));

    frame.render_stateful_widget(list, area, &mut state);
}
