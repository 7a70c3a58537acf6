use crate::error::{Result, VitaError};
use crate::types::{RepoResponse, Repository};

const GITHUB_API: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("vita/", env!("CARGO_PKG_VERSION"));

pub struct GitHub {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for GitHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHub").finish_non_exhaustive()
    }
}

impl GitHub {
    pub fn new() -> Result<Self> {
        Self::with_base_url(GITHUB_API)
    }

    /// Point the client at a different API root. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(VitaError::Transport)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch a user's public repositories, most recently updated first.
    /// Server order is preserved in the returned list.
    pub async fn list_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page=100",
            self.base_url, username
        );

        tracing::debug!(%url, "fetching repositories");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(VitaError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(VitaError::Status(status));
        }

        let repos: Vec<RepoResponse> = response.json().await.map_err(VitaError::Decode)?;

        Ok(repos.into_iter().map(Repository::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn list_repos_preserves_server_order() {
        let server = MockServer::start().await;

        let body = serde_json::json!([
            {
                "name": "newest",
                "description": "most recently updated",
                "html_url": "https://github.com/octocat/newest",
                "stargazers_count": 3,
                "updated_at": "2024-06-01T12:00:00Z"
            },
            {
                "name": "older",
                "description": null,
                "html_url": "https://github.com/octocat/older",
                "stargazers_count": 0,
                "updated_at": "2023-01-15T08:30:00Z"
            }
        ]);

        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .and(query_param("sort", "updated"))
            .and(query_param("per_page", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let github = GitHub::with_base_url(server.uri()).unwrap();
        let repos = github.list_repos("octocat").await.unwrap();

        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "newest");
        assert_eq!(repos[0].stars, 3);
        assert_eq!(
            repos[0].description.as_deref(),
            Some("most recently updated")
        );
        assert_eq!(repos[1].name, "older");
        assert_eq!(repos[1].description, None);
        assert_eq!(repos[1].url, "https://github.com/octocat/older");
    }

    #[tokio::test]
    async fn list_repos_non_success_status_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/ghost/repos"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let github = GitHub::with_base_url(server.uri()).unwrap();
        let err = github.list_repos("ghost").await.unwrap_err();

        assert!(matches!(err, VitaError::Status(s) if s.as_u16() == 404));
    }

    #[tokio::test]
    async fn list_repos_malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("not json", "application/json"),
            )
            .mount(&server)
            .await;

        let github = GitHub::with_base_url(server.uri()).unwrap();
        let err = github.list_repos("octocat").await.unwrap_err();

        assert!(matches!(err, VitaError::Decode(_)));
    }

    #[tokio::test]
    async fn list_repos_unreachable_host_is_a_transport_error() {
        // Nothing listens on this port
        let github = GitHub::with_base_url("http://127.0.0.1:1").unwrap();
        let err = github.list_repos("octocat").await.unwrap_err();

        assert!(matches!(err, VitaError::Transport(_)));
    }
}
