//! GitLab merge request service

use crate::config::Config;
use crate::error::{Error, Result};
use crate::platform::MergeRequestApi;
use crate::types::MergeRequestDraft;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::debug;

/// Header GitLab reads personal/project access tokens from
const PRIVATE_TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// GitLab service using reqwest
pub struct GitLabService {
    client: Client,
    token: String,
    base_url: String,
    project_id: i64,
}

impl GitLabService {
    /// Create a service for the project named in `config`.
    ///
    /// The HTTP client keeps reqwest's defaults: no request timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self::with_client(
            client,
            &config.gitlab_url,
            &config.private_token,
            config.project_id,
        ))
    }

    /// Create a service around an existing client
    pub fn with_client(client: Client, base_url: &str, token: &str, project_id: i64) -> Self {
        Self {
            client,
            token: token.to_string(),
            base_url: base_url.to_string(),
            project_id,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v4{}", self.base_url, path)
    }

    /// Endpoint new merge requests are posted to
    pub fn merge_requests_url(&self) -> String {
        self.api_url(&format!("/projects/{}/merge_requests", self.project_id))
    }
}

#[async_trait]
impl MergeRequestApi for GitLabService {
    async fn create_merge_request(&self, draft: &MergeRequestDraft) -> Result<()> {
        debug!(
            project_id = self.project_id,
            target_branch = %draft.target_branch,
            "creating MR"
        );
        let body = serde_json::to_vec(draft)?;

        let request = self
            .client
            .post(self.merge_requests_url())
            .header(CONTENT_TYPE, "application/json")
            .header(PRIVATE_TOKEN_HEADER, &self.token)
            .body(body)
            .build()?;

        let status = self.client.execute(request).await?.status();

        if status != StatusCode::CREATED {
            debug!(target_branch = %draft.target_branch, %status, "MR not created");
            return Err(Error::UnexpectedStatus(status));
        }

        debug!(target_branch = %draft.target_branch, "created MR");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn draft(target: &str) -> MergeRequestDraft {
        MergeRequestDraft {
            source_branch: "feature/1".to_string(),
            target_branch: target.to_string(),
            title: "Draft: [J] feature/1 fix bug".to_string(),
            description: "https://tracker.example.com/browse/ВВ-123".to_string(),
            assignee_id: 7,
            reviewer_ids: vec![5, 3],
            squash: true,
        }
    }

    fn service(url: &str) -> GitLabService {
        GitLabService::with_client(Client::new(), url, "secret", 42)
    }

    #[test]
    fn test_merge_requests_url() {
        let svc = service("https://gitlab.example.com");
        assert_eq!(
            svc.merge_requests_url(),
            "https://gitlab.example.com/api/v4/projects/42/merge_requests"
        );
    }

    #[test]
    fn test_new_uses_config_fields() {
        let config = Config {
            gitlab_url: "https://gl.local".to_string(),
            private_token: "t".to_string(),
            assignee_id: 1,
            project_id: 9,
            reviewer_ids: vec![1],
            target_branches: vec!["dev".to_string()],
            link_template: String::new(),
            user_prefix: String::new(),
        };
        let svc = GitLabService::new(&config).unwrap();
        assert_eq!(
            svc.merge_requests_url(),
            "https://gl.local/api/v4/projects/9/merge_requests"
        );
    }

    #[tokio::test]
    async fn test_create_sends_payload_and_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v4/projects/42/merge_requests")
            .match_header("content-type", "application/json")
            .match_header("private-token", "secret")
            .match_body(Matcher::Json(json!({
                "source_branch": "feature/1",
                "target_branch": "staging",
                "title": "Draft: [J] feature/1 fix bug",
                "description": "https://tracker.example.com/browse/ВВ-123",
                "assignee_id": 7,
                "reviewer_ids": [5, 3],
                "squash": true
            })))
            .with_status(201)
            .with_body(r#"{"iid": 1}"#)
            .expect(1)
            .create_async()
            .await;

        let result = service(&server.url()).create_merge_request(&draft("staging")).await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_ok_status_other_than_created_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/v4/projects/42/merge_requests")
            .with_status(200)
            .create_async()
            .await;

        let err = service(&server.url())
            .create_merge_request(&draft("dev"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::UnexpectedStatus(StatusCode::OK)));
    }

    #[tokio::test]
    async fn test_conflict_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/v4/projects/42/merge_requests")
            .with_status(409)
            .with_body(r#"{"message":["Another open merge request already exists"]}"#)
            .create_async()
            .await;

        let err = service(&server.url())
            .create_merge_request(&draft("dev"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::UnexpectedStatus(StatusCode::CONFLICT)));
        assert_eq!(err.to_string(), "unexpected response status 409 Conflict");
    }

    #[tokio::test]
    async fn test_transport_error_is_http_error() {
        // Nothing listens on the discard port
        let err = service("http://127.0.0.1:9")
            .create_merge_request(&draft("dev"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Http(_)));
    }

    #[tokio::test]
    async fn test_malformed_base_url_is_http_error() {
        let err = service("not a url")
            .create_merge_request(&draft("dev"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Http(_)));
    }
}
