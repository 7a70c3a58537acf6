use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Row, Table, TableState};
use ratatui::Frame;

use crate::app::App;
use crate::content;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec!["Category", "Skills"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = content::SKILLS
        .iter()
        .map(|row| Row::new(vec![row.category, row.skills]))
        .collect();

    let table = Table::new(rows, [Constraint::Length(25), Constraint::Length(50)])
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Skills "))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = TableState::default();
    state.select(Some(app.skill_index));

    frame.render_stateful_widget(table, area, &mut state);
}
