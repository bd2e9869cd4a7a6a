use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct HeroSection {
    pub id: i64,
    #[serde(default = "visible")]
    pub is_visible: bool,
    #[serde(default)]
    pub tagline: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cta_primary_text: String,
    #[serde(default)]
    pub cta_primary_url: String,
    #[serde(default)]
    pub cta_secondary_text: String,
    #[serde(default)]
    pub cta_secondary_url: String,
    pub background_image: Option<String>,
    #[serde(default)]
    pub background_color: String,
    #[serde(default)]
    pub text_color: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NavigationItem {
    pub id: i64,
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "visible")]
    pub is_active: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub order: i32,
}

impl ServiceCard {
    /// Uploaded images win over plain image links.
    pub fn picture(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .or(self.image.as_deref())
            .filter(|src| !src.is_empty())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MetricBox {
    pub id: i64,
    pub value: String,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FaqSection {
    pub id: i64,
    #[serde(default = "visible")]
    pub is_visible: bool,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FaqItem {
    pub id: i64,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "visible")]
    pub is_active: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ContactSection {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub form_title: String,
    #[serde(default)]
    pub form_submit_text: String,
    #[serde(default)]
    pub form_success_message: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EnhancedFooterSection {
    pub id: i64,
    pub company_name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub privacy_policy_text: String,
    #[serde(default)]
    pub privacy_policy_url: String,
    #[serde(default)]
    pub terms_conditions_text: String,
    #[serde(default)]
    pub terms_conditions_url: String,
    #[serde(default)]
    pub copyright_text: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SocialMediaLink {
    pub id: i64,
    pub platform: String,
    #[serde(default)]
    pub platform_name: String,
    pub url: String,
    #[serde(default = "visible")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SocialMediaSection {
    pub id: i64,
    #[serde(default = "visible")]
    pub is_visible: bool,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub background_color: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BenefitItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub icon: String,
    /// Slot on the floating layout, e.g. `top-left` or `bottom-center`.
    #[serde(default)]
    pub position: String,
    #[serde(default = "visible")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BenefitsSection {
    pub id: i64,
    #[serde(default = "visible")]
    pub is_visible: bool,
    #[serde(default)]
    pub badge_text: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cta_primary_text: String,
    #[serde(default)]
    pub cta_primary_url: String,
    #[serde(default)]
    pub cta_secondary_text: String,
    #[serde(default)]
    pub cta_secondary_url: String,
    #[serde(default)]
    pub background_color: String,
    #[serde(default)]
    pub benefits: Vec<BenefitItem>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct WhyChooseUsSection {
    pub id: i64,
    #[serde(default = "visible")]
    pub is_visible: bool,
    #[serde(default)]
    pub badge_text: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub stat_1_value: String,
    #[serde(default)]
    pub stat_1_label: String,
    #[serde(default)]
    pub stat_2_value: String,
    #[serde(default)]
    pub stat_2_label: String,
    #[serde(default)]
    pub stat_3_value: String,
    #[serde(default)]
    pub stat_3_label: String,
    #[serde(default)]
    pub global_title: String,
    #[serde(default)]
    pub global_description: String,
}

impl WhyChooseUsSection {
    pub fn stats(&self) -> [(&str, &str); 3] {
        [
            (self.stat_1_value.as_str(), self.stat_1_label.as_str()),
            (self.stat_2_value.as_str(), self.stat_2_label.as_str()),
            (self.stat_3_value.as_str(), self.stat_3_label.as_str()),
        ]
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CountryData {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub flag_emoji: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default = "visible")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PrivacyPolicy {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub content: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub effective_date: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BlogCategory {
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum BlogTag {
    Named { name: String },
    Plain(String),
}

impl BlogTag {
    pub fn name(&self) -> &str {
        match self {
            BlogTag::Named { name } => name,
            BlogTag::Plain(name) => name,
        }
    }
}

/// A blog post as the backend serializes it. Most fields are optional because
/// the list and detail serializers expose different subsets.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BlogPostRecord {
    pub id: i64,
    pub slug: Option<String>,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub excerpt_text: Option<String>,
    pub author_name: Option<String>,
    pub author_username: Option<String>,
    pub published_at: Option<String>,
    pub created_at: Option<String>,
    pub reading_time: Option<u32>,
    pub category: Option<BlogCategory>,
    pub category_name: Option<String>,
    pub featured_image_url: Option<String>,
    pub video_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<BlogTag>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub is_featured: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

fn visible() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_tolerates_missing_optional_copy() {
        let hero: HeroSection =
            serde_json::from_str(r#"{"id": 1, "title": "Build without code"}"#).unwrap();
        assert_eq!(hero.title, "Build without code");
        assert!(hero.is_visible);
        assert!(hero.cta_primary_text.is_empty());
        assert_eq!(hero.background_image, None);
    }

    #[test]
    fn service_card_prefers_uploaded_image() {
        let card: ServiceCard = serde_json::from_str(
            r#"{"id": 2, "title": "t", "description": "d",
                "image": "/media/a.png", "image_url": "https://cdn/a.png"}"#,
        )
        .unwrap();
        assert_eq!(card.picture(), Some("https://cdn/a.png"));

        let bare: ServiceCard =
            serde_json::from_str(r#"{"id": 3, "title": "t", "description": "d", "image_url": ""}"#)
                .unwrap();
        assert_eq!(bare.picture(), None);
    }

    #[test]
    fn benefits_section_reads_nested_items() {
        let section: BenefitsSection = serde_json::from_str(
            r#"{"id": 1, "title": "More than", "benefits": [
                {"id": 4, "title": "Cloud Sync", "icon": "cloud", "position": "top-center"},
                {"id": 5, "title": "Old", "is_active": false}
            ]}"#,
        )
        .unwrap();
        assert_eq!(section.benefits.len(), 2);
        assert_eq!(section.benefits[0].position, "top-center");
        assert!(!section.benefits[1].is_active);
        assert!(section.cta_primary_url.is_empty());
    }

    #[test]
    fn blog_tags_accept_objects_and_strings() {
        let post: BlogPostRecord = serde_json::from_str(
            r#"{"id": 7, "title": "t", "tags": [{"name": "nocode"}, "automation"]}"#,
        )
        .unwrap();
        let names: Vec<&str> = post.tags.iter().map(BlogTag::name).collect();
        assert_eq!(names, vec!["nocode", "automation"]);
    }
}
