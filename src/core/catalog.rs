//! Video catalog API client and normalization

use crate::error::{NxtWatchError, Result};
use crate::types::VideoDetail;
use crate::utils::age::relative_age;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// Response envelope for `GET /videos/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct VideoDetailsResponse {
    pub video_details: RawVideoDetail,
}

/// Video record as the catalog sends it
#[derive(Debug, Clone, Deserialize)]
pub struct RawVideoDetail {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub published_at: String,
    pub thumbnail_url: String,
    pub video_url: String,
    #[serde(deserialize_with = "count_from_number_or_string")]
    pub view_count: u64,
    pub channel: RawChannel,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawChannel {
    pub name: String,
    pub profile_image_url: String,
    #[serde(deserialize_with = "count_from_number_or_string")]
    pub subscriber_count: u64,
}

/// The catalog is inconsistent about quoting counts
fn count_from_number_or_string<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u64),
        Text(String),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(s) => parse_count(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid count: {}", s))),
    }
}

/// Parse "1234", "1,234", "26K" or "1.2M" into a plain count
fn parse_count(text: &str) -> Option<u64> {
    let text = text.trim().replace(',', "");
    let (digits, multiplier) = match text.chars().last()?.to_ascii_uppercase() {
        'K' => (&text[..text.len() - 1], 1_000.0),
        'M' => (&text[..text.len() - 1], 1_000_000.0),
        'B' => (&text[..text.len() - 1], 1_000_000_000.0),
        _ => return text.parse().ok(),
    };

    let value: f64 = digits.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some((value * multiplier).round() as u64)
}

/// Parse the publish date in any of the shapes the catalog uses
pub fn parse_published_at(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.and_utc());
    }
    for format in ["%b %d, %Y", "%B %d, %Y", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                return Ok(dt.and_utc());
            }
        }
    }

    Err(NxtWatchError::Decode(format!(
        "unrecognized published_at: {}",
        raw
    )))
}

/// Map a raw catalog record to the detail record views consume
pub fn normalize(raw: RawVideoDetail, now: DateTime<Utc>) -> Result<VideoDetail> {
    let published = parse_published_at(&raw.published_at)?;

    Ok(VideoDetail {
        id: raw.id,
        title: raw.title,
        thumbnail_url: raw.thumbnail_url,
        channel_name: raw.channel.name,
        view_count: raw.view_count,
        published_ago: relative_age(published, now),
        description: raw.description,
        video_url: raw.video_url,
        channel_profile_image_url: raw.channel.profile_image_url,
        subscriber_count: raw.channel.subscriber_count,
    })
}

/// Source of raw video records
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Fetch one video's raw record, authenticated with `token`
    async fn fetch_video(&self, id: &str, token: &str) -> Result<RawVideoDetail>;
}

/// HTTP client for the video catalog
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(base_url, builder.build()?))
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the detail URL for a video id
    pub fn video_url(&self, id: &str) -> String {
        format!("{}/videos/{}", self.base_url, urlencoding::encode(id))
    }
}

#[async_trait]
impl VideoSource for CatalogClient {
    async fn fetch_video(&self, id: &str, token: &str) -> Result<RawVideoDetail> {
        let url = self.video_url(id);
        tracing::debug!(%url, "requesting video details");

        let response = self.client.get(&url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(NxtWatchError::Network(format!(
                "HTTP {}: {}",
                response.status(),
                url
            )));
        }

        let body: VideoDetailsResponse = response.json().await?;
        Ok(body.video_details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetcher::{FetchState, VideoDetailFetcher};
    use chrono::TimeZone;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const SAMPLE: &str = r#"{
        "video_details": {
            "id": "ad9822d2-5763-41d9-adaf-baf9da3fd490",
            "title": "iB Hubs Announcement Event",
            "video_url": "https://www.youtube.com/watch?v=pT2ojWWjum8",
            "thumbnail_url": "https://assets.ccbp.in/thumb.png",
            "channel": {
                "name": "iB Hubs",
                "profile_image_url": "https://assets.ccbp.in/profile.png",
                "subscriber_count": "1M"
            },
            "view_count": "26K",
            "published_at": "Nov 29, 2016",
            "description": "iB Hubs grandly celebrated its Announcement Event."
        }
    }"#;

    /// Answer one request with `status` and `body`; yields the raw request head
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;

            String::from_utf8_lossy(&request).into_owned()
        });

        (base_url, handle)
    }

    /// Loopback client that ignores any proxy set in the environment
    fn local_client(base_url: &str) -> CatalogClient {
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        CatalogClient::with_client(base_url, client)
    }

    #[tokio::test]
    async fn test_fetch_sends_bearer_token_and_decodes() {
        let (base_url, server) = serve_once("200 OK", SAMPLE).await;
        let client = local_client(&base_url);

        let raw = client.fetch_video("ad9822d2", "jwt-abc123").await.unwrap();
        let request = server.await.unwrap().to_ascii_lowercase();

        assert!(
            request.starts_with("get /videos/ad9822d2 http/1.1"),
            "request was: {}",
            request
        );
        assert!(
            request.contains("authorization: bearer jwt-abc123"),
            "request was: {}",
            request
        );
        assert_eq!(raw.title, "iB Hubs Announcement Event");
        assert_eq!(raw.view_count, 26_000);
        assert_eq!(raw.channel.subscriber_count, 1_000_000);
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_transport_error() {
        let (base_url, server) = serve_once("500 Internal Server Error", "{}").await;
        let client = local_client(&base_url);

        let err = client.fetch_video("123", "T").await.unwrap_err();
        let _ = server.await;

        assert!(err.is_transport(), "unexpected error: {}", err);
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_unauthorized_response_fails_the_fetch() {
        let (base_url, server) = serve_once("401 Unauthorized", "{}").await;
        let client = local_client(&base_url);
        let fetcher = VideoDetailFetcher::new(Arc::new(client));

        let state = fetcher.load("123", "expired").await;
        let _ = server.await;

        assert_eq!(state, FetchState::Failed);
    }

    #[test]
    fn test_video_url_encodes_id() {
        let client = CatalogClient::new("https://apis.ccbp.in/", None).unwrap();
        assert_eq!(
            client.video_url("a b"),
            "https://apis.ccbp.in/videos/a%20b"
        );
    }

    #[test]
    fn test_decode_sample_response() {
        let parsed: VideoDetailsResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(parsed.video_details.view_count, 26_000);
        assert_eq!(parsed.video_details.channel.subscriber_count, 1_000_000);
        assert_eq!(parsed.video_details.channel.name, "iB Hubs");
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("1234567"), Some(1_234_567));
        assert_eq!(parse_count("1,234"), Some(1_234));
        assert_eq!(parse_count("1.2M"), Some(1_200_000));
        assert_eq!(parse_count("lots"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn test_parse_published_at_formats() {
        let expected = Utc.with_ymd_and_hms(2016, 11, 29, 0, 0, 0).unwrap();
        assert_eq!(parse_published_at("Nov 29, 2016").unwrap(), expected);
        assert_eq!(parse_published_at("2016-11-29").unwrap(), expected);
        assert_eq!(parse_published_at("2016-11-29T00:00:00Z").unwrap(), expected);
        assert!(parse_published_at("yesterday-ish").is_err());
    }

    #[test]
    fn test_normalize() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let published = now - chrono::Duration::days(400);
        let raw = RawVideoDetail {
            id: "123".into(),
            title: "Title".into(),
            description: "About".into(),
            published_at: published.to_rfc3339(),
            thumbnail_url: "thumb".into(),
            video_url: "video".into(),
            view_count: 1_234_567,
            channel: RawChannel {
                name: "Channel".into(),
                profile_image_url: "profile".into(),
                subscriber_count: 42,
            },
        };

        let detail = normalize(raw, now).unwrap();
        assert_eq!(detail.published_ago, "1 year");
        assert_eq!(detail.view_count, 1_234_567);
        assert_eq!(detail.channel_name, "Channel");
        assert_eq!(detail.subscriber_count, 42);
    }
}
