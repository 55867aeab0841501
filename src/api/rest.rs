use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::TaskService;
use crate::core::task::{NewTask, Task, TaskId};
use crate::error::{Result, TaskError};

/// Create and update responses wrap the task in `{"data": ...}`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// HTTP client for the REST task service.
#[derive(Clone)]
pub struct RestTaskService {
    base_url: String,
    http: Client,
}

impl RestTaskService {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| TaskError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(base_url, http))
    }

    pub fn with_client(base_url: &str, http: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn item_url(&self, id: TaskId) -> String {
        format!("{}/tasks/{}/", self.base_url, id)
    }

    /// Send a request; anything other than a 2xx status is a rejection.
    async fn send(&self, request: RequestBuilder, what: &str) -> Result<Response> {
        let resp = request
            .send()
            .await
            .map_err(|e| TaskError::Network(format!("{} failed: {}", what, e)))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            log::debug!("{} returned {}: {}", what, status, text);
            return Err(TaskError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(resp)
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    resp.json::<T>()
        .await
        .map_err(|e| TaskError::Malformed(e.to_string()))
}

impl TaskService for RestTaskService {
    async fn list(&self) -> Result<Vec<Task>> {
        let url = self.collection_url();
        log::debug!("GET {}", url);
        let resp = self.send(self.http.get(&url), "GET /tasks").await?;
        decode(resp).await
    }

    async fn create(&self, task: &NewTask) -> Result<Task> {
        let url = format!("{}/", self.collection_url());
        log::debug!("POST {}", url);
        let resp = self
            .send(self.http.post(&url).json(task), "POST /tasks/")
            .await?;
        decode::<Envelope<Task>>(resp).await.map(|e| e.data)
    }

    async fn update_status(&self, id: TaskId, completed: bool) -> Result<Task> {
        let url = self.item_url(id);
        log::debug!("PUT {}", url);
        let resp = self
            .send(
                self.http.put(&url).json(&json!({ "completed": completed })),
                "PUT /tasks/{id}/",
            )
            .await?;
        decode::<Envelope<Task>>(resp).await.map(|e| e.data)
    }

    async fn delete(&self, id: TaskId) -> Result<()> {
        let url = self.item_url(id);
        log::debug!("DELETE {}", url);
        self.send(self.http.delete(&url), "DELETE /tasks/{id}/")
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::NaiveDate;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn list_parses_array() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/tasks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":1,"title":"A","completed":false},{"id":2,"title":"B","completed":true}]"#)
            .create_async()
            .await;

        let service = RestTaskService::new(&server.url()).unwrap();
        let tasks = service.list().await.unwrap();

        mock.assert_async().await;
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "A");
        assert!(tasks[1].completed);
    }

    #[tokio::test]
    async fn trailing_slash_on_base_url_is_trimmed() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/tasks")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let service = RestTaskService::new(&format!("{}/", server.url())).unwrap();
        assert!(service.list().await.unwrap().is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_posts_json_and_unwraps_data() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/tasks/")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({
                "title": "B",
                "description": "d",
                "date": "2024-01-01",
                "completed": false,
            })))
            .with_status(201)
            .with_body(r#"{"data":{"id":2,"title":"B","description":"d","date":"2024-01-01","completed":false}}"#)
            .create_async()
            .await;

        let service = RestTaskService::new(&server.url()).unwrap();
        let candidate = NewTask::new("B", "d", NaiveDate::from_ymd_opt(2024, 1, 1));
        let created = service.create(&candidate).await.unwrap();

        mock.assert_async().await;
        assert_eq!(created.id, 2);
        assert_eq!(created.date, NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[tokio::test]
    async fn update_puts_completed_flag() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/tasks/1/")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({ "completed": true })))
            .with_status(200)
            .with_body(r#"{"data":{"id":1,"title":"A","completed":true}}"#)
            .create_async()
            .await;

        let service = RestTaskService::new(&server.url()).unwrap();
        let updated = service.update_status(1, true).await.unwrap();

        mock.assert_async().await;
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn delete_ignores_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/tasks/7/")
            .with_status(204)
            .create_async()
            .await;

        let service = RestTaskService::new(&server.url()).unwrap();
        service.delete(7).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_rejection() {
        let mut server = Server::new_async().await;
        server
            .mock("DELETE", "/tasks/7/")
            .with_status(404)
            .with_body(r#"{"detail":"Not found."}"#)
            .create_async()
            .await;

        let service = RestTaskService::new(&server.url()).unwrap();
        let err = service.delete(7).await.unwrap_err();
        assert!(matches!(err, TaskError::Rejected { status: 404 }));
        assert_eq!(err.kind(), ErrorKind::ServerRejected);
    }

    #[tokio::test]
    async fn unexpected_body_is_malformed() {
        let mut server = Server::new_async().await;
        server
            .mock("PUT", "/tasks/1/")
            .with_status(200)
            .with_body(r#"{"id":1,"title":"A","completed":true}"#)
            .create_async()
            .await;

        let service = RestTaskService::new(&server.url()).unwrap();
        let err = service.update_status(1, true).await.unwrap_err();
        assert!(matches!(err, TaskError::Malformed(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_failure() {
        // Nothing listens on port 1.
        let service = RestTaskService::new("http://127.0.0.1:1").unwrap();
        let err = service.list().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NetworkFailure);
    }
}
