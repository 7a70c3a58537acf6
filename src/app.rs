use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::action::Action;
use crate::browser;
use crate::content;
use crate::event::Event;
use crate::github::GitHub;
use crate::types::Repository;

/// Progress gained per tick during a simulated page load.
pub const PROGRESS_STEP: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    About,
    Education,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Menu => "Menu",
            Screen::About => "About Me",
            Screen::Education => "Education",
            Screen::Experience => "Experience",
            Screen::Skills => "Skills",
            Screen::Projects => "Projects",
            Screen::Contact => "Contact",
        }
    }

    /// Screen for a menu section index. None for the terminal "Exit" entry.
    fn from_section(index: usize) -> Option<Screen> {
        match index {
            0 => Some(Screen::About),
            1 => Some(Screen::Education),
            2 => Some(Screen::Experience),
            3 => Some(Screen::Skills),
            4 => Some(Screen::Projects),
            5 => Some(Screen::Contact),
            _ => None,
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub menu_index: usize,
    pub repo_index: usize,
    pub skill_index: usize,

    pub loading: bool,
    pub loaded: bool,
    pub progress: f64,
    pub error: Option<String>,

    pub repos: Vec<Repository>,
    pub should_quit: bool,

    // Bumped on every page transition; in-flight fetch results carrying an
    // older value are discarded.
    load_seq: u64,

    username: String,
    github: Arc<GitHub>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl App {
    pub fn new(github: GitHub, username: String, action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            screen: Screen::Menu,
            menu_index: 0,
            repo_index: 0,
            skill_index: 0,
            loading: false,
            loaded: false,
            progress: 0.0,
            error: None,
            repos: Vec::new(),
            should_quit: false,
            load_seq: 0,
            username,
            github: Arc::new(github),
            action_tx,
        }
    }

    pub fn handle_event(&self, event: Event) -> Action {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Tick => {
                if self.loading {
                    Action::Tick
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn handle_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('b') | KeyCode::Esc => {
                if self.screen == Screen::Menu {
                    Action::None
                } else {
                    Action::Back
                }
            }
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
            KeyCode::Enter => Action::Select,
            KeyCode::Char('y') => {
                if self.screen == Screen::Projects {
                    Action::YankUrl
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Back => {
                if self.screen != Screen::Menu {
                    self.screen = Screen::Menu;
                    self.menu_index = 0;
                    self.loading = false;
                    self.loaded = false;
                    self.progress = 0.0;
                    self.error = None;
                    // Supersede any fetch still in flight
                    self.load_seq += 1;
                }
            }
            Action::ScrollUp => match self.screen {
                Screen::Menu => {
                    if self.menu_index > 0 {
                        self.menu_index -= 1;
                    }
                }
                Screen::Projects => {
                    if self.repo_index > 0 {
                        self.repo_index -= 1;
                    }
                }
                Screen::Skills => {
                    if self.skill_index > 0 {
                        self.skill_index -= 1;
                    }
                }
                _ => {}
            },
            Action::ScrollDown => match self.screen {
                Screen::Menu => {
                    if self.menu_index < content::SECTIONS.len() - 1 {
                        self.menu_index += 1;
                    }
                }
                Screen::Projects => {
                    if !self.repos.is_empty() && self.repo_index < self.repos.len() - 1 {
                        self.repo_index += 1;
                    }
                }
                Screen::Skills => {
                    if self.skill_index < content::SKILLS.len() - 1 {
                        self.skill_index += 1;
                    }
                }
                _ => {}
            },
            Action::Select => match self.screen {
                Screen::Menu => {
                    match Screen::from_section(self.menu_index) {
                        Some(screen) => self.enter_page(screen),
                        // The last entry is "Exit"
                        None => self.should_quit = true,
                    }
                }
                Screen::Projects => {
                    if self.loaded && self.error.is_none() {
                        if let Some(repo) = self.repos.get(self.repo_index) {
                            self.action_tx.send(Action::OpenUrl(repo.url.clone())).ok();
                        }
                    }
                }
                _ => {}
            },
            Action::Tick => {
                // Projects completes via its fetch message, not the timer
                if self.loading && self.screen != Screen::Projects {
                    self.progress = (self.progress + PROGRESS_STEP).min(1.0);
                    if self.progress >= 1.0 {
                        self.loading = false;
                        self.loaded = true;
                    }
                }
            }
            Action::ReposLoaded(repos, seq) => {
                if seq == self.load_seq {
                    self.repos = repos;
                    self.repo_index = 0;
                    self.loading = false;
                    self.loaded = true;
                } else {
                    tracing::debug!(seq, current = self.load_seq, "discarding stale fetch result");
                }
            }
            Action::Error(message, seq) => {
                if seq == self.load_seq {
                    self.error = Some(message);
                    self.loading = false;
                    self.loaded = true;
                } else {
                    tracing::debug!(seq, current = self.load_seq, "discarding stale fetch error");
                }
            }
            Action::OpenUrl(url) => {
                tokio::task::spawn_blocking(move || {
                    if let Err(e) = browser::open_url(&url) {
                        tracing::warn!(error = %e, %url, "failed to open browser");
                    }
                });
            }
            Action::YankUrl => {
                if self.screen == Screen::Projects && self.loaded {
                    if let Some(repo) = self.repos.get(self.repo_index) {
                        match arboard::Clipboard::new() {
                            Ok(mut clipboard) => {
                                if let Err(e) = clipboard.set_text(repo.url.clone()) {
                                    tracing::warn!(error = %e, "failed to copy url");
                                }
                            }
                            Err(e) => tracing::warn!(error = %e, "clipboard unavailable"),
                        }
                    }
                }
            }
            Action::None => {}
        }
    }

    fn enter_page(&mut self, screen: Screen) {
        self.screen = screen;
        self.loading = true;
        self.loaded = false;
        self.progress = 0.0;
        self.error = None;
        self.skill_index = 0;
        self.load_seq += 1;

        if screen == Screen::Projects {
            self.repos.clear();
            self.repo_index = 0;
            self.spawn_fetch_repos();
        }
    }

    fn spawn_fetch_repos(&self) {
        let tx = self.action_tx.clone();
        let github = Arc::clone(&self.github);
        let username = self.username.clone();
        let seq = self.load_seq;
        tokio::spawn(async move {
            match github.list_repos(&username).await {
                Ok(repos) => {
                    tx.send(Action::ReposLoaded(repos, seq)).ok();
                }
                Err(e) => {
                    tx.send(Action::Error(e.to_string(), seq)).ok();
                }
            }
        });
    }
}
