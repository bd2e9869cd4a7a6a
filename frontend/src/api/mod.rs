//! Thin client for the content backend.
//!
//! Every endpoint is a plain `async fn` returning `Result<_, ApiError>` so it
//! can be handed to a fetch cell as-is.

pub mod models;

use std::future::Future;

use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config;
use models::*;

/// Longest slice of an error body carried into an error message.
const BODY_SNIPPET_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Offline, DNS, CORS and other transport failures.
    #[error("network error: {0}")]
    Network(String),

    #[error("API Error: {status} {status_text} - {body}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("API request timed out")]
    Timeout,
}

/// List endpoints answer either with a bare array or with a paginated
/// `{"count": .., "results": [..]}` envelope.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Paginated { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Paginated { results } => results,
            ListEnvelope::Plain(items) => items,
        }
    }
}

pub(crate) fn snippet(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(BODY_SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}…", &body[..cut]),
        None => body.to_string(),
    }
}

/// Resolves to `ApiError::Timeout` when `deadline` finishes first.
pub(crate) async fn race_deadline<T, F, D>(request: F, deadline: D) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
    D: Future<Output = ()>,
{
    match select(Box::pin(request), Box::pin(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ApiError::Status {
        status: response.status(),
        status_text: response.status_text(),
        body: snippet(&body),
    })
}

pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = config::api_url(path);
    let request = async {
        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    };

    let result = race_deadline(request, TimeoutFuture::new(config::REQUEST_TIMEOUT_MS)).await;
    if let Err(e) = &result {
        log::error!("GET {} failed: {}", url, e);
    }
    result
}

pub async fn fetch_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    fetch_json::<ListEnvelope<T>>(path)
        .await
        .map(ListEnvelope::into_vec)
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = config::api_url(path);
    let request = async {
        let request = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await.map(|_| ())
    };

    let result = race_deadline(request, TimeoutFuture::new(config::REQUEST_TIMEOUT_MS)).await;
    if let Err(e) = &result {
        log::error!("POST {} failed: {}", url, e);
    }
    result
}

pub async fn hero_section() -> Result<HeroSection, ApiError> {
    fetch_json("/hero/").await
}

pub async fn navigation_items() -> Result<Vec<NavigationItem>, ApiError> {
    fetch_list("/navigation/").await
}

pub async fn service_cards() -> Result<Vec<ServiceCard>, ApiError> {
    fetch_list("/services/").await
}

pub async fn metric_boxes() -> Result<Vec<MetricBox>, ApiError> {
    fetch_list("/metrics/").await
}

pub async fn faq_section() -> Result<FaqSection, ApiError> {
    fetch_json("/faq/").await
}

pub async fn faq_items() -> Result<Vec<FaqItem>, ApiError> {
    fetch_list("/faq-items/").await
}

pub async fn contact_section() -> Result<ContactSection, ApiError> {
    fetch_json("/contact/").await
}

pub async fn enhanced_footer_section() -> Result<EnhancedFooterSection, ApiError> {
    fetch_json("/enhanced-footer/").await
}

pub async fn social_links() -> Result<Vec<SocialMediaLink>, ApiError> {
    fetch_list("/social-links/").await
}

pub async fn social_media_section() -> Result<SocialMediaSection, ApiError> {
    fetch_json("/social/").await
}

pub async fn benefits_section() -> Result<BenefitsSection, ApiError> {
    fetch_json("/benefits/").await
}

pub async fn why_choose_us_section() -> Result<WhyChooseUsSection, ApiError> {
    fetch_json("/why-choose-us/").await
}

pub async fn country_data() -> Result<Vec<CountryData>, ApiError> {
    fetch_list("/country-data/").await
}

pub async fn privacy_policy() -> Result<PrivacyPolicy, ApiError> {
    fetch_json("/privacy-policy/").await
}

pub async fn blog_posts() -> Result<Vec<BlogPostRecord>, ApiError> {
    fetch_list("/blogs/").await
}

pub async fn blog_post(id: String) -> Result<BlogPostRecord, ApiError> {
    fetch_json(&format!("/blogs/{}/", urlencoding::encode(&id))).await
}

pub async fn submit_contact_form(form: ContactSubmission) -> Result<(), ApiError> {
    post_json("/contact-submissions/", &form).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    #[test]
    fn unwraps_paginated_and_plain_lists() {
        let paginated: ListEnvelope<FaqItem> = serde_json::from_str(
            r#"{"count": 1, "next": null, "results": [{"id": 1, "question": "q", "answer": "a"}]}"#,
        )
        .unwrap();
        assert_eq!(paginated.into_vec().len(), 1);

        let plain: ListEnvelope<FaqItem> =
            serde_json::from_str(r#"[{"id": 1, "question": "q", "answer": "a"}, {"id": 2, "question": "q2", "answer": "a2"}]"#)
                .unwrap();
        assert_eq!(plain.into_vec().len(), 2);
    }

    #[test]
    fn status_error_mentions_code_and_body() {
        let err = ApiError::Status {
            status: 500,
            status_text: "Internal Server Error".into(),
            body: snippet("  database is down \n"),
        };
        assert_eq!(
            err.to_string(),
            "API Error: 500 Internal Server Error - database is down"
        );
    }

    #[test]
    fn snippet_truncates_long_bodies() {
        let long = "x".repeat(1000);
        let cut = snippet(&long);
        assert_eq!(cut.chars().count(), BODY_SNIPPET_CHARS + 1);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn deadline_turns_hang_into_timeout() {
        let hung = pending::<Result<u8, ApiError>>();
        let result = block_on(race_deadline(hung, ready(())));
        assert_eq!(result, Err(ApiError::Timeout));
        assert_eq!(ApiError::Timeout.to_string(), "API request timed out");
    }

    #[test]
    fn fast_response_beats_deadline() {
        let result = block_on(race_deadline(ready(Ok(7u8)), pending::<()>()));
        assert_eq!(result, Ok(7));
    }
}
