use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A public repository shown on the Projects page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub stars: u32,
    pub updated_at: DateTime<Utc>,
}

/// Wire shape of one entry in the GitHub users/repos response
#[derive(Debug, Deserialize)]
pub struct RepoResponse {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u32,
    pub updated_at: DateTime<Utc>,
}

impl From<RepoResponse> for Repository {
    fn from(repo: RepoResponse) -> Self {
        Repository {
            name: repo.name,
            description: repo.description,
            url: repo.html_url,
            stars: repo.stargazers_count,
            updated_at: repo.updated_at,
        }
    }
}

/// One row of the static skills table
#[derive(Debug, Clone, Copy)]
pub struct SkillRow {
    pub category: &'static str,
    pub skills: &'static str,
}
