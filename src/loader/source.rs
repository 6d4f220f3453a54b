//! Plan sources
//!
//! Where dashboard plans come from. The production source is the report
//! service reached over HTTP; tests plug in their own implementations.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::error::{LoadError, LoadResult};
use crate::plan::DashboardPlan;

/// Something that can produce the plan for a report identifier
#[async_trait]
pub trait PlanSource: Send + Sync {
    /// Retrieve the plan for `report_id`. Called at most once per display.
    async fn fetch(&self, report_id: &str) -> LoadResult<DashboardPlan>;

    /// Human-readable description, for logs and health output
    fn describe(&self) -> String;
}

/// Report service client: `GET {base}/api/reports/{report_id}`
pub struct HttpPlanSource {
    client: Client,
    base_url: String,
}

impl HttpPlanSource {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> LoadResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Address of one report's plan; the identifier is a single path segment
    pub fn report_url(&self, report_id: &str) -> String {
        format!(
            "{}/api/reports/{}",
            self.base_url,
            urlencoding::encode(report_id)
        )
    }
}

#[async_trait]
impl PlanSource for HttpPlanSource {
    async fn fetch(&self, report_id: &str) -> LoadResult<DashboardPlan> {
        let url = self.report_url(report_id);
        tracing::debug!(url = %url, "GET dashboard plan");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                LoadError::Timeout
            } else {
                LoadError::Request(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::from_status(status));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                LoadError::Timeout
            } else {
                LoadError::Request(e)
            }
        })?;

        Ok(DashboardPlan::from_json(&body)?)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source(base: &str) -> HttpPlanSource {
        HttpPlanSource::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_report_url() {
        let source = source("http://reports.local:8000/");
        assert_eq!(
            source.report_url("abc"),
            "http://reports.local:8000/api/reports/abc"
        );
        assert_eq!(
            source.report_url("a/b c"),
            "http://reports.local:8000/api/reports/a%2Fb%20c"
        );
        assert_eq!(source.describe(), "http://reports.local:8000");
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/reports/r1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"global_title": "Ventas", "global_subtitle": "Q1", "dashboard_plan": []}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let plan = source(&server.uri()).fetch("r1").await.unwrap();
        assert_eq!(plan.global_title, "Ventas");
        assert!(plan.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_server_error_uses_status_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/reports/r1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = source(&server.uri()).fetch("r1").await.unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 500, .. }));
        assert_eq!(err.to_string(), "Internal Server Error");
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/reports/r1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = source(&server.uri()).fetch("r1").await.unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_keeps_widgets_next_to_a_bad_one() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/reports/r1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"global_title": "Ventas", "dashboard_plan": [
                    {"widget_id": "a", "component_type": "table", "layout": {"span": 300}},
                    {"widget_id": "b", "component_type": "bar", "title": null, "series": null},
                    {"widget_id": "c", "component_type": "donut", "description": [1]}
                ]}"#,
            ))
            .mount(&server)
            .await;

        let plan = source(&server.uri()).fetch("r1").await.unwrap();
        assert_eq!(plan.widget_count(), 3);
        assert_eq!(plan.dashboard_plan[0].layout.effective_span(), 12);
        assert!(plan.dashboard_plan[1].error.is_none());
        assert!(plan.dashboard_plan[2].error.is_some());
    }

    #[tokio::test]
    async fn test_fetch_unreachable() {
        // Nothing listens on the discard port
        let err = source("http://127.0.0.1:9").fetch("r1").await.unwrap_err();
        assert!(matches!(err, LoadError::Request(_) | LoadError::Timeout));
    }
}
