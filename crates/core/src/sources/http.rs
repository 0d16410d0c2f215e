//! HTTP report source.

use super::ReportSource;
use crate::config::CoreConfig;
use crate::error::{ConfigError, ConfigResult, LoadError, LoadResult};
use reports_wire::ReportPayload;
use reqwest::Url;
use std::future::Future;

/// Fetches reports with a single unauthenticated `GET` to the configured endpoint.
#[derive(Clone, Debug)]
pub struct HttpReportSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpReportSource {
    /// Build a source from resolved configuration.
    ///
    /// No timeout is applied unless the configuration sets one.
    pub fn from_config(cfg: &CoreConfig) -> ConfigResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = cfg.fetch_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            url: cfg.reports_url().clone(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl ReportSource for HttpReportSource {
    fn fetch(&self) -> impl Future<Output = LoadResult<ReportPayload>> + Send {
        async move {
            let response = self.client.get(self.url.clone()).send().await?;

            let status = response.status();
            if !status.is_success() {
                tracing::debug!(url = %self.url, status = status.as_u16(), "reports endpoint returned non-success status");
                return Err(LoadError::Status(status.as_u16()));
            }

            let body = response.bytes().await?;
            Ok(ReportPayload::from_slice(&body)?)
        }
    }

    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use swasthya_types::DisplayZone;

    async fn serve(app: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server");
        });
        Url::parse(&format!("http://{addr}/api/symptoms")).expect("url")
    }

    fn source_for(url: Url) -> HttpReportSource {
        let cfg = CoreConfig::new(url, None, DisplayZone::Utc).expect("config");
        HttpReportSource::from_config(&cfg).expect("source")
    }

    #[tokio::test]
    async fn decodes_list_body() {
        let app = Router::new().route(
            "/api/symptoms",
            get(|| async {
                r#"[{"village": "Rampur", "householdId": "H1", "patientCount": 0,
                    "onsetDate": "2024-01-01", "severity": "mild", "reportDate": "2024-01-02"}]"#
            }),
        );
        let source = source_for(serve(app).await);

        let payload = source.fetch().await.expect("fetch");
        assert_eq!(payload.len(), 1);
        assert!(matches!(payload, ReportPayload::Many(_)));
    }

    #[tokio::test]
    async fn non_success_status_maps_to_status_error() {
        let app = Router::new().route(
            "/api/symptoms",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let source = source_for(serve(app).await);

        let err = source.fetch().await.expect_err("should fail");
        assert_eq!(err, LoadError::Status(500));
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn undecodable_body_maps_to_decode_error() {
        let app = Router::new().route("/api/symptoms", get(|| async { "<html>oops</html>" }));
        let source = source_for(serve(app).await);

        let err = source.fetch().await.expect_err("should fail");
        assert!(matches!(err, LoadError::Decode(ref msg) if msg.starts_with("invalid JSON")));
    }

    #[tokio::test]
    async fn unreachable_endpoint_maps_to_transport_error() {
        // Bind then drop to obtain a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let source = source_for(Url::parse(&format!("http://{addr}/api/symptoms")).expect("url"));
        let err = source.fetch().await.expect_err("should fail");
        assert!(matches!(err, LoadError::Transport(_)), "{err:?}");
    }

    #[tokio::test]
    async fn each_fetch_issues_exactly_one_request() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let app = Router::new().route(
            "/api/symptoms",
            get(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    "[]"
                }
            }),
        );
        let source = source_for(serve(app).await);

        source.fetch().await.expect("fetch");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(source.describe(), format!("GET {}", source.url()));
    }
}
