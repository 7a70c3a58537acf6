mod menu;
mod page;
mod projects;
mod skills;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Screen};
use crate::content;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    if let Some(error) = &app.error {
        render_error(frame, error, chunks[1]);
    } else if app.loading {
        render_loading(frame, app, chunks[1]);
    } else {
        match app.screen {
            Screen::Menu => menu::render(frame, app, chunks[1]),
            Screen::Skills => skills::render(frame, app, chunks[1]),
            Screen::Projects => projects::render(frame, app, chunks[1]),
            Screen::About | Screen::Education | Screen::Experience | Screen::Contact => {
                page::render(frame, app, chunks[1])
            }
        }
    }

    render_status_bar(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.screen {
        Screen::Menu => content::PORTFOLIO_TITLE.to_string(),
        _ => format!("vita - {}", app.screen.title()),
    };

    let header = Paragraph::new(Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]))
    .style(Style::default().bg(Color::DarkGray));

    frame.render_widget(header, area);
}

fn render_error(frame: &mut Frame, error: &str, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Error ");
    let message = Paragraph::new(error)
        .block(block)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });
    frame.render_widget(message, area);
}

fn render_loading(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.screen.title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.screen == Screen::Projects {
        let notice = Paragraph::new("Fetching repositories from GitHub...")
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(notice, inner);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new("Loading..."), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .ratio(app.progress.clamp(0.0, 1.0))
        .label(format!("{:.0}%", app.progress * 100.0));
    frame.render_widget(gauge, rows[1]);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(error) = &app.error {
        Line::from(vec![Span::styled(
            format!("Error: {}", error),
            Style::default().fg(Color::Red),
        )])
    } else if app.loading {
        Line::from(vec![Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        )])
    } else {
        let help = match app.screen {
            Screen::Menu => "j/k: move | Enter: select | q: quit",
            Screen::Projects => "j/k: move | Enter: open in browser | y: copy url | b: back | q: quit",
            Screen::Skills => "j/k: move | b: back | q: quit",
            _ => "b: back | q: quit",
        };
        Line::from(vec![Span::styled(help, Style::default().fg(Color::Gray))])
    };

    let status_bar = Paragraph::new(status).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status_bar, area);
}

/// Truncate to `max` characters, with a trailing ellipsis when cut.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::GitHub;
    use crate::types::Repository;
    use chrono::TimeZone;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use tokio::sync::mpsc;

    fn test_app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        let github = GitHub::with_base_url("http://127.0.0.1:1").unwrap();
        App::new(github, "octocat".to_string(), tx)
    }

    fn render_to_buffer(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn rendering_the_same_state_is_identical() {
        let mut app = test_app();
        assert_eq!(render_to_buffer(&app), render_to_buffer(&app));

        app.screen = Screen::Projects;
        app.loaded = true;
        app.repos = vec![Repository {
            name: "vita".to_string(),
            description: None,
            url: "https://github.com/octocat/vita".to_string(),
            stars: 42,
            updated_at: chrono::Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        }];
        assert_eq!(render_to_buffer(&app), render_to_buffer(&app));

        app.error = Some("request failed with status 403".to_string());
        assert_eq!(render_to_buffer(&app), render_to_buffer(&app));
    }

    #[test]
    fn menu_lists_every_section() {
        let app = test_app();
        let text = buffer_text(&render_to_buffer(&app));
        for section in content::SECTIONS {
            assert!(text.contains(section), "missing section {section}");
        }
    }

    #[test]
    fn error_banner_supersedes_page_content() {
        let mut app = test_app();
        app.screen = Screen::Projects;
        app.loaded = true;
        app.error = Some("boom".to_string());
        let text = buffer_text(&render_to_buffer(&app));
        assert!(text.contains("Error: boom"));
        assert!(!text.contains("No repositories found"));
    }

    #[test]
    fn loading_state_shows_progress() {
        let mut app = test_app();
        app.screen = Screen::About;
        app.loading = true;
        app.progress = 0.5;
        let text = buffer_text(&render_to_buffer(&app));
        assert!(text.contains("Loading..."));
        assert!(text.contains("50%"));
    }

    #[test]
    fn projects_page_shows_repositories() {
        let mut app = test_app();
        app.screen = Screen::Projects;
        app.loaded = true;
        app.repos = vec![Repository {
            name: "dotfiles".to_string(),
            description: Some("my setup".to_string()),
            url: "https://github.com/octocat/dotfiles".to_string(),
            stars: 7,
            updated_at: chrono::Utc.with_ymd_and_hms(2024, 3, 9, 0, 0, 0).unwrap(),
        }];
        let text = buffer_text(&render_to_buffer(&app));
        assert!(text.contains("dotfiles"));
        assert!(text.contains("my setup"));
        assert!(text.contains("2024-03-09"));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Téïcée backend détails", 10), "Téïcée ...");
    }
}
