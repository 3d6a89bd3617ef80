use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const CACHE_TTL: Duration = Duration::from_secs(60 * 60);
const PAGE_SIZE: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub title: Option<String>,
    pub video_url: Option<String>,
    pub image_url: Option<String>,
    pub video_length: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    content: Vec<Video>,
}

struct CacheEntry {
    expires: Instant,
    videos: Vec<Video>,
}

/// Client for the external exercise video search API. Responses are
/// memoized per keyword for one hour; failures are logged and reported as
/// an empty result so that video enrichment never fails a request.
pub struct VideoClient {
    http: reqwest::Client,
    base_url: Option<String>,
    cache: Mutex<HashMap<String, CacheEntry>>,
}

impl VideoClient {
    #[must_use]
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            cache: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.base_url.is_some()
    }

    pub async fn search(&self, keyword: &str) -> Vec<Video> {
        let Some(base_url) = &self.base_url else {
            return vec![];
        };

        if let Some(videos) = self.cached(keyword) {
            debug!("video search cache hit for `{keyword}`");
            return videos;
        }

        let size = PAGE_SIZE.to_string();
        let result = self
            .http
            .get(base_url)
            .query(&[("keyword", keyword), ("page", "0"), ("size", size.as_str())])
            .send()
            .await;

        let videos = match result {
            Ok(response) => match response.error_for_status() {
                Ok(response) => match response.json::<SearchPage>().await {
                    Ok(page) => page.content,
                    Err(err) => {
                        warn!("failed to decode video search response: {err}");
                        return vec![];
                    }
                },
                Err(err) => {
                    warn!("video search returned an error status: {err}");
                    return vec![];
                }
            },
            Err(err) => {
                warn!("video search request failed: {err}");
                return vec![];
            }
        };

        self.cache.lock().unwrap_or_else(std::sync::PoisonError::into_inner).insert(
            keyword.to_string(),
            CacheEntry {
                expires: Instant::now() + CACHE_TTL,
                videos: videos.clone(),
            },
        );
        videos
    }

    fn cached(&self, keyword: &str) -> Option<Vec<Video>> {
        let cache = self
            .cache
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        cache
            .get(keyword)
            .filter(|entry| entry.expires > Instant::now())
            .map(|entry| entry.videos.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_search_without_base_url_returns_empty() {
        let client = VideoClient::new(None);
        assert!(!client.enabled());
        assert_eq!(client.search("push up").await, vec![]);
    }

    #[test]
    fn test_video_deserializes_camel_case() {
        let video: Video = serde_json::from_str(
            r#"{"title": "Push Up", "videoUrl": "https://example.com/v/1",
                "imageUrl": "https://example.com/i/1", "videoLength": 95}"#,
        )
        .unwrap();

        assert_eq!(
            video,
            Video {
                title: Some("Push Up".to_string()),
                video_url: Some("https://example.com/v/1".to_string()),
                image_url: Some("https://example.com/i/1".to_string()),
                video_length: Some(95),
            }
        );
    }

    #[test]
    fn test_cached_entries_expire() {
        let client = VideoClient::new(Some("http://localhost".to_string()));
        client.cache.lock().unwrap().insert(
            "push up".to_string(),
            CacheEntry {
                expires: Instant::now() - Duration::from_secs(1),
                videos: vec![],
            },
        );

        assert_eq!(client.cached("push up"), None);
    }
}
