use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Screen};
use crate::content;

/// Static prose pages: About Me, Education, Experience, Contact.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let text = match app.screen {
        Screen::About => content::ABOUT,
        Screen::Education => content::EDUCATION,
        Screen::Experience => content::EXPERIENCE,
        Screen::Contact => content::CONTACT,
        _ => "",
    };

    let page = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.screen.title())),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(page, area);
}
