//! Blog posts as the pages display them, plus list filtering and the
//! id-or-slug lookup used by the detail page.

use std::future::Future;

use chrono::{DateTime, NaiveDate, Utc};

use crate::api::models::BlogPostRecord;
use crate::api::ApiError;

pub const DEMO_POST_ID: &str = "demo-blog-1";
pub const DEFAULT_AUTHOR: &str = "Floneo Team";
pub const DEFAULT_CATEGORY: &str = "Technology";
pub const ALL_CATEGORIES: &str = "All";
pub const CATEGORIES: [&str; 5] = [ALL_CATEGORIES, "Technology", "Business", "Design", "Development"];

const WORDS_PER_MINUTE: usize = 200;
const EXCERPT_CHARS: usize = 160;

const DEMO_CONTENT: &str = "This is a sample blog post to demonstrate how our blog section works. Floneo is designed to help you build, automate, and scale your business without the IT bottleneck.

In this article, we'll explore the key features that make Floneo the perfect solution for modern businesses. We believe in making technology accessible to everyone, regardless of their technical expertise.

Our platform is built with simplicity and power in mind, allowing you to create sophisticated workflows with just a few clicks. Whether you're a small startup or a large enterprise, Floneo adapts to your needs.

Key Features:
- Visual workflow builder
- No-code automation
- Real-time collaboration
- Enterprise-grade security
- Scalable infrastructure

Get started today and transform the way you work!";

#[derive(Clone, Debug, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub slug: Option<String>,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    /// ISO timestamp as received; formatted at render time.
    pub date: Option<String>,
    pub read_minutes: u32,
    pub category: String,
    pub featured_image: Option<String>,
    pub video_url: Option<String>,
    pub tags: Vec<String>,
    pub view_count: u64,
    pub is_featured: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl BlogPost {
    pub fn from_record(record: BlogPostRecord) -> Self {
        let read_minutes = record
            .reading_time
            .filter(|minutes| *minutes > 0)
            .unwrap_or_else(|| estimate_read_minutes(&record.content));
        let author = non_empty(record.author_name)
            .or_else(|| non_empty(record.author_username))
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());
        let category = non_empty(record.category.map(|c| c.name))
            .or_else(|| non_empty(record.category_name))
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let excerpt = non_empty(record.excerpt_text)
            .unwrap_or_else(|| excerpt(&plain_text(&record.content), EXCERPT_CHARS));

        Self {
            id: record.id.to_string(),
            slug: non_empty(record.slug),
            title: record.title,
            excerpt,
            author,
            date: non_empty(record.published_at).or_else(|| non_empty(record.created_at)),
            read_minutes,
            category,
            featured_image: non_empty(record.featured_image_url),
            video_url: non_empty(record.video_url),
            tags: record.tags.iter().map(|t| t.name().to_string()).collect(),
            view_count: record.view_count,
            is_featured: record.is_featured,
            meta_title: non_empty(record.meta_title),
            meta_description: non_empty(record.meta_description),
            content: record.content,
        }
    }

    /// Path segment used when linking to this post.
    pub fn route_id(&self) -> String {
        self.slug.clone().unwrap_or_else(|| self.id.clone())
    }

    pub fn read_time_label(&self) -> String {
        format!("{} min read", self.read_minutes)
    }

    pub fn display_date(&self) -> Option<String> {
        self.date.as_deref().and_then(format_date)
    }

    pub fn author_initial(&self) -> String {
        self.author
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Body split into display paragraphs, markup stripped.
    pub fn paragraphs(&self) -> Vec<String> {
        plain_text(&self.content)
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn sort_key(&self) -> Option<DateTime<Utc>> {
        self.date.as_deref().and_then(parse_date)
    }
}

/// Built-in post served for the demo id and whenever a lookup fails.
pub fn demo_post() -> BlogPost {
    BlogPost {
        id: DEMO_POST_ID.to_string(),
        slug: None,
        title: "Welcome to Our Blog - Getting Started with Floneo".to_string(),
        content: DEMO_CONTENT.to_string(),
        excerpt: excerpt(DEMO_CONTENT, EXCERPT_CHARS),
        author: DEFAULT_AUTHOR.to_string(),
        date: Some(Utc::now().to_rfc3339()),
        read_minutes: 3,
        category: DEFAULT_CATEGORY.to_string(),
        featured_image: None,
        video_url: None,
        tags: Vec::new(),
        view_count: 0,
        is_featured: false,
        meta_title: None,
        meta_description: None,
    }
}

pub fn estimate_read_minutes(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    let minutes = (words + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE;
    minutes.max(1) as u32
}

/// Newest first; undated posts go last.
pub fn sort_newest_first(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
}

/// Case-insensitive search over title and body combined with a category
/// filter. A filter that matches nothing shows every post instead.
pub fn filter_posts<'a>(posts: &'a [BlogPost], query: &str, category: &str) -> Vec<&'a BlogPost> {
    let query = query.trim().to_lowercase();
    let matches: Vec<&BlogPost> = posts
        .iter()
        .filter(|post| {
            let matches_search = query.is_empty()
                || post.title.to_lowercase().contains(&query)
                || post.content.to_lowercase().contains(&query);
            let matches_category = category == ALL_CATEGORIES || post.category == category;
            matches_search && matches_category
        })
        .collect();

    if matches.is_empty() {
        posts.iter().collect()
    } else {
        matches
    }
}

/// Looks a post up by numeric id or by slug, falling back to the demo post.
///
/// The id endpoint is tried first. When it fails and `id` is not numeric,
/// the list is searched for a matching slug and that post is fetched by id.
pub async fn resolve_post<One, OneFut, List, ListFut>(
    id: &str,
    fetch_one: One,
    fetch_list: List,
) -> BlogPost
where
    One: Fn(String) -> OneFut,
    OneFut: Future<Output = Result<BlogPostRecord, ApiError>>,
    List: FnOnce() -> ListFut,
    ListFut: Future<Output = Result<Vec<BlogPostRecord>, ApiError>>,
{
    if id == DEMO_POST_ID {
        return demo_post();
    }

    let record = match fetch_one(id.to_string()).await {
        Ok(record) => Some(record),
        Err(e) if id.parse::<i64>().is_err() => {
            log::info!("blog {} not found by id ({}), trying slug", id, e);
            match fetch_list().await {
                Ok(posts) => match posts.into_iter().find(|p| p.slug.as_deref() == Some(id)) {
                    Some(found) => fetch_one(found.id.to_string()).await.ok(),
                    None => None,
                },
                Err(_) => None,
            }
        }
        Err(_) => None,
    };

    match record {
        Some(record) => BlogPost::from_record(record),
        None => {
            log::warn!("blog {} unavailable, showing demo post", id);
            demo_post()
        }
    }
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

/// `2025-08-13T10:00:00Z` becomes `August 13, 2025`.
pub fn format_date(raw: &str) -> Option<String> {
    parse_date(raw).map(|date| date.format("%B %-d, %Y").to_string())
}

/// Drops anything between angle brackets so backend rich text renders as
/// plain paragraphs.
pub fn plain_text(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut in_tag = false;
    for c in content.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn record(json: &str) -> BlogPostRecord {
        serde_json::from_str(json).unwrap()
    }

    fn post(id: &str, title: &str, content: &str, category: &str, date: Option<&str>) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
            date: date.map(str::to_string),
            ..demo_post()
        }
    }

    async fn unexpected_fetch(id: String) -> Result<BlogPostRecord, ApiError> {
        panic!("unexpected fetch for {}", id)
    }

    async fn unexpected_list() -> Result<Vec<BlogPostRecord>, ApiError> {
        panic!("unexpected list request")
    }

    #[test]
    fn record_fallbacks() {
        let bare = BlogPost::from_record(record(r#"{"id": 4, "title": "Hello", "content": "one two three"}"#));
        assert_eq!(bare.author, "Floneo Team");
        assert_eq!(bare.category, "Technology");
        assert_eq!(bare.read_minutes, 1);
        assert_eq!(bare.excerpt, "one two three");
        assert_eq!(bare.route_id(), "4");

        let full = BlogPost::from_record(record(
            r#"{"id": 5, "slug": "no-code", "title": "t", "author_username": "ana",
                "category": {"name": "Design"}, "category_name": "Business",
                "reading_time": 7, "published_at": "2025-08-13T10:00:00Z"}"#,
        ));
        assert_eq!(full.author, "ana");
        assert_eq!(full.category, "Design");
        assert_eq!(full.read_time_label(), "7 min read");
        assert_eq!(full.route_id(), "no-code");
        assert_eq!(full.display_date().as_deref(), Some("August 13, 2025"));
    }

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(estimate_read_minutes(""), 1);
        assert_eq!(estimate_read_minutes(&"word ".repeat(200)), 1);
        assert_eq!(estimate_read_minutes(&"word ".repeat(201)), 2);
        assert_eq!(estimate_read_minutes(&"word ".repeat(1000)), 5);
    }

    #[test]
    fn filter_by_search_and_category() {
        let posts = vec![
            post("1", "Automate approvals", "workflow", "Business", None),
            post("2", "Design systems", "tokens and WORKFLOW", "Design", None),
            post("3", "Rust", "wasm", "Development", None),
        ];

        let ids = |found: Vec<&BlogPost>| found.iter().map(|p| p.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(filter_posts(&posts, "workflow", "All")), vec!["1", "2"]);
        assert_eq!(ids(filter_posts(&posts, "workflow", "Design")), vec!["2"]);
        assert_eq!(ids(filter_posts(&posts, "", "Development")), vec!["3"]);
        assert_eq!(ids(filter_posts(&posts, "AUTOMATE", "All")), vec!["1"]);
    }

    #[test]
    fn empty_filter_result_shows_everything() {
        let posts = vec![
            post("1", "a", "b", "Business", None),
            post("2", "c", "d", "Design", None),
        ];
        assert_eq!(filter_posts(&posts, "nothing matches", "All").len(), 2);
        assert_eq!(filter_posts(&posts, "", "Technology").len(), 2);
    }

    #[test]
    fn sorts_newest_first() {
        let mut posts = vec![
            post("old", "a", "", "Design", Some("2024-01-01T00:00:00Z")),
            post("undated", "b", "", "Design", None),
            post("new", "c", "", "Design", Some("2025-03-01")),
        ];
        sort_newest_first(&mut posts);
        let order: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["new", "old", "undated"]);
    }

    #[test]
    fn demo_id_never_hits_network() {
        let resolved = block_on(resolve_post(DEMO_POST_ID, unexpected_fetch, unexpected_list));
        assert_eq!(resolved.id, DEMO_POST_ID);
        assert_eq!(resolved.author, DEFAULT_AUTHOR);
    }

    #[test]
    fn slug_resolves_through_list() {
        let requested = RefCell::new(Vec::new());
        let resolved = block_on(resolve_post(
            "no-code",
            |id: String| {
                requested.borrow_mut().push(id.clone());
                async move {
                    if id == "9" {
                        Ok(record(r#"{"id": 9, "slug": "no-code", "title": "Found"}"#))
                    } else {
                        Err(ApiError::Status { status: 404, status_text: "Not Found".into(), body: String::new() })
                    }
                }
            },
            || async {
                Ok::<_, ApiError>(vec![
                    record(r#"{"id": 8, "slug": "other", "title": "x"}"#),
                    record(r#"{"id": 9, "slug": "no-code", "title": "y"}"#),
                ])
            },
        ));
        assert_eq!(resolved.title, "Found");
        assert_eq!(*requested.borrow(), vec!["no-code".to_string(), "9".to_string()]);
    }

    #[test]
    fn numeric_miss_falls_back_without_list_search() {
        let resolved = block_on(resolve_post(
            "42",
            |_| async { Err::<BlogPostRecord, _>(ApiError::Timeout) },
            unexpected_list,
        ));
        assert_eq!(resolved.id, DEMO_POST_ID);
    }

    #[test]
    fn unknown_slug_falls_back_to_demo() {
        let resolved = block_on(resolve_post(
            "missing",
            |_| async { Err::<BlogPostRecord, _>(ApiError::Network("offline".into())) },
            || async { Ok::<_, ApiError>(Vec::new()) },
        ));
        assert_eq!(resolved.id, DEMO_POST_ID);
    }

    #[test]
    fn strips_markup_and_splits_paragraphs() {
        let p = post("1", "t", "<p>First <b>bold</b></p>\n\n<p>Second</p>\n\n  ", "Design", None);
        assert_eq!(p.paragraphs(), vec!["First bold".to_string(), "Second".to_string()]);
        assert_eq!(excerpt("abcdef", 3), "abc...");
        assert_eq!(excerpt("héllo", 10), "héllo");
    }
}
