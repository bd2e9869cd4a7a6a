//! Built-in copy shown while the backend is unreachable, plus the ordering
//! rules applied to backend lists before rendering.

use crate::api::models::*;

pub const HERO_TAGLINE: &str = "Build. Automate. Scale.";
pub const HERO_TITLE: &str = "floneo";
pub const HERO_DESCRIPTION: &str =
    "floneo's Low-Code/No-Code platform turns manual processes into instant, powerful applications.";
pub const HERO_PRIMARY_CTA: &str = "Get Started";
pub const HERO_SECONDARY_CTA: &str = "Schedule a Demo";

fn nav(id: i64, label: &str, href: &str) -> NavigationItem {
    NavigationItem {
        id,
        label: label.to_string(),
        href: href.to_string(),
        order: id as i32,
        is_active: true,
    }
}

pub fn fallback_navigation() -> Vec<NavigationItem> {
    vec![
        nav(1, "About Us", "/#about-us"),
        nav(2, "Services", "/#services"),
        nav(3, "Blog", "/blogs"),
        nav(4, "Help Center", "/#help"),
        nav(5, "Contact", "/contact"),
    ]
}

fn card(id: i64, title: &str, description: &str, image: &str, color: &str) -> ServiceCard {
    ServiceCard {
        id,
        title: title.to_string(),
        description: description.to_string(),
        image: None,
        image_url: Some(image.to_string()),
        color: color.to_string(),
        order: id as i32,
    }
}

pub fn fallback_service_cards() -> Vec<ServiceCard> {
    vec![
        card(
            1,
            "Seamless Workflow Integration",
            "Effortlessly design, connect, and automate workflows across teams and systems. With our drag-and-drop builder and AI-powered recommendations, your operations run smoother without IT bottlenecks.",
            "https://images.unsplash.com/photo-1518432031352-d6fc5c10da5a?w=800&h=800&fit=crop",
            "#0066ff",
        ),
        card(
            2,
            "Data Analytics",
            "Transform your data into actionable insights with powerful analytics tools. Make data-driven decisions faster with real-time dashboards and intelligent reporting.",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=800&fit=crop",
            "#2ecc71",
        ),
        card(
            3,
            "Workflow Management",
            "Streamline your business processes with intelligent workflow automation. Reduce manual tasks and increase productivity across your organization.",
            "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=800&h=800&fit=crop",
            "#9b59b6",
        ),
        card(
            4,
            "Integration Platform",
            "Connect all your tools and systems with seamless integrations. Build a unified ecosystem that works the way you do, without switching between apps.",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=800&fit=crop",
            "#e74c3c",
        ),
    ]
}

fn metric(id: i64, value: &str, label: &str, description: &str, color: &str) -> MetricBox {
    MetricBox {
        id,
        value: value.to_string(),
        suffix: "%".to_string(),
        label: label.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        order: id as i32,
    }
}

pub fn fallback_metrics() -> Vec<MetricBox> {
    vec![
        metric(
            1,
            "68",
            "Faster Process Developments",
            "Teams build, test, and roll out workflows 68% faster compared to traditional development.",
            "#FFC107",
        ),
        metric(
            2,
            "72",
            "Less Operational Overheads",
            "By automating approvals, handoffs, and reporting, organizations cut repetitive manual work by 72%.",
            "#00D084",
        ),
        metric(
            3,
            "99",
            "Accuracy and Compliance",
            "Each workflow built on FloNeo runs with 99.3% data accuracy across integrated systems.",
            "#FF1493",
        ),
    ]
}

pub fn fallback_faq_section() -> FaqSection {
    FaqSection {
        id: 0,
        is_visible: true,
        title: "Architecting Excellence".to_string(),
        subtitle: "HELP CENTER".to_string(),
        description: "Together, we're creating a seamless experience that puts you in charge of your operations without bottlenecks.".to_string(),
    }
}

fn faq(id: i64, question: &str, answer: &str) -> FaqItem {
    FaqItem {
        id,
        question: question.to_string(),
        answer: answer.to_string(),
        order: id as i32,
        is_active: true,
    }
}

pub fn fallback_faq_items() -> Vec<FaqItem> {
    vec![
        faq(
            1,
            "What is floneo?",
            "floneo is a Low-Code/No-Code platform that lets teams design, automate, and scale business workflows without waiting on IT.",
        ),
        faq(
            2,
            "Do I need to know how to code?",
            "No. Workflows are assembled with a visual builder. Developers can still extend them when a process needs custom logic.",
        ),
        faq(
            3,
            "How do I create an account?",
            "Click 'Get Started', enter your email and basic information, verify your email address, and you're ready to build.",
        ),
        faq(
            4,
            "Is my data safe?",
            "Yes. Data is encrypted in transit and at rest, and every workflow action is logged for audits.",
        ),
        faq(
            5,
            "Can floneo connect to the tools we already use?",
            "Yes. Built-in integrations and a REST connector let workflows read from and write to your existing systems.",
        ),
    ]
}

pub fn fallback_contact_section() -> ContactSection {
    ContactSection {
        id: 0,
        title: "Contact Our Sales Team".to_string(),
        subtitle: "Get in Touch".to_string(),
        description: "Talk with our sales team to see how floneo can fit your needs.".to_string(),
        email: "admin@floneo.co".to_string(),
        phone: String::new(),
        address: String::new(),
        form_title: "Send us a message".to_string(),
        form_submit_text: "Send Message".to_string(),
        form_success_message: "Thank you for your message! We'll get back to you within 24 hours.".to_string(),
    }
}

pub fn fallback_footer() -> EnhancedFooterSection {
    EnhancedFooterSection {
        id: 0,
        company_name: "floneo".to_string(),
        tagline: "Build. Automate. Scale.".to_string(),
        description: "Transform your business with our innovative automation platform".to_string(),
        privacy_policy_text: "Privacy Policy".to_string(),
        privacy_policy_url: "/privacy-policy".to_string(),
        terms_conditions_text: "Terms & Conditions".to_string(),
        terms_conditions_url: "/terms".to_string(),
        copyright_text: "© 2025 floneo. All rights reserved.".to_string(),
    }
}

fn benefit(id: i64, title: &str, icon: &str, position: &str) -> BenefitItem {
    BenefitItem {
        id,
        title: title.to_string(),
        icon: icon.to_string(),
        position: position.to_string(),
        is_active: true,
        order: id as i32,
    }
}

pub fn fallback_benefits_section() -> BenefitsSection {
    BenefitsSection {
        id: 0,
        is_visible: true,
        badge_text: "BENEFITS".to_string(),
        title: "More than".to_string(),
        subtitle: "Automation".to_string(),
        description: "floneo isn't just about managing processes. It builds, automates, and scales the workflows that fuel your business.".to_string(),
        cta_primary_text: "Get Started".to_string(),
        cta_primary_url: String::new(),
        cta_secondary_text: "Learn More".to_string(),
        cta_secondary_url: String::new(),
        background_color: String::new(),
        benefits: vec![
            benefit(1, "Cloud Sync", "cloud", "top-center"),
            benefit(2, "Top Security", "shield", "top-left"),
            benefit(3, "Real-time Insights", "chart", "top-right"),
            benefit(4, "Integrations", "plug", "middle-left"),
            benefit(5, "Role-based Access", "shield", "middle-right"),
            benefit(6, "Audit Trails", "list", "bottom-left"),
            benefit(7, "Offline Ready", "cloud", "bottom-right"),
            benefit(8, "Customizable Dashboards", "dashboard", "bottom-center"),
        ],
    }
}

pub fn fallback_why_choose_us() -> WhyChooseUsSection {
    WhyChooseUsSection {
        id: 0,
        is_visible: true,
        badge_text: "WHY CHOOSE US".to_string(),
        title: "Architecting Excellence".to_string(),
        subtitle: "that puts you in charge of your operations without IT bottlenecks".to_string(),
        stat_1_value: "75".to_string(),
        stat_1_label: "spending habits".to_string(),
        stat_2_value: "60".to_string(),
        stat_2_label: "cost reductions".to_string(),
        stat_3_value: "45".to_string(),
        stat_3_label: "efficiency gains".to_string(),
        global_title: "Global Reach".to_string(),
        global_description: "Our app supports users in over 140 countries, offering global tools to manage and optimize your finances.".to_string(),
    }
}

/// Headline number counted up to in the global reach card.
pub const GLOBAL_REACH_COUNTRIES: f64 = 140.0;

pub fn fallback_countries() -> Vec<CountryData> {
    [
        ("France", "🇫🇷", "fr"),
        ("Ukraine", "🇺🇦", "ua"),
        ("Netherlands", "🇳🇱", "nl"),
        ("USA", "🇺🇸", "us"),
        ("Canada", "🇨🇦", "ca"),
        ("Japan", "🇯🇵", "jp"),
        ("Denmark", "🇩🇰", "dk"),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (name, flag, code))| CountryData {
        id: index as i64 + 1,
        name: name.to_string(),
        flag_emoji: flag.to_string(),
        country_code: code.to_string(),
        is_active: true,
        order: index as i32,
    })
    .collect()
}

pub fn fallback_social_section() -> SocialMediaSection {
    SocialMediaSection {
        id: 0,
        is_visible: true,
        title: "Stay Connected".to_string(),
        subtitle: "Follow floneo for product news and automation tips".to_string(),
        background_color: String::new(),
    }
}

pub fn fallback_social_links() -> Vec<SocialMediaLink> {
    ["LinkedIn", "Threads", "Instagram", "Slack", "X", "Discord"]
        .into_iter()
        .enumerate()
        .map(|(index, name)| SocialMediaLink {
            id: index as i64 + 1,
            platform: name.to_lowercase(),
            platform_name: name.to_string(),
            url: "#".to_string(),
            is_active: true,
            order: index as i32,
        })
        .collect()
}

/// Active navigation entries in display order.
pub fn visible_navigation(items: &[NavigationItem]) -> Vec<NavigationItem> {
    let mut visible: Vec<NavigationItem> = items.iter().filter(|i| i.is_active).cloned().collect();
    visible.sort_by_key(|i| i.order);
    visible
}

pub fn visible_faq_items(items: &[FaqItem]) -> Vec<FaqItem> {
    let mut visible: Vec<FaqItem> = items.iter().filter(|i| i.is_active).cloned().collect();
    visible.sort_by_key(|i| i.order);
    visible
}

pub fn visible_social_links(links: &[SocialMediaLink]) -> Vec<SocialMediaLink> {
    let mut visible: Vec<SocialMediaLink> = links.iter().filter(|l| l.is_active).cloned().collect();
    visible.sort_by_key(|l| l.order);
    visible
}

pub fn visible_benefits(items: &[BenefitItem]) -> Vec<BenefitItem> {
    let mut visible: Vec<BenefitItem> = items.iter().filter(|b| b.is_active).cloned().collect();
    visible.sort_by_key(|b| b.order);
    visible
}

pub fn visible_countries(countries: &[CountryData]) -> Vec<CountryData> {
    let mut visible: Vec<CountryData> = countries.iter().filter(|c| c.is_active).cloned().collect();
    visible.sort_by_key(|c| c.order);
    visible
}

/// Backend text unless it is blank.
pub fn text_or(fetched: &str, fallback: &str) -> String {
    if fetched.trim().is_empty() {
        fallback.to_string()
    } else {
        fetched.to_string()
    }
}

/// Backend list if it has anything to show, built-in list otherwise.
pub fn or_fallback<T: Clone>(fetched: Option<&Vec<T>>, fallback: impl FnOnce() -> Vec<T>) -> Vec<T> {
    match fetched {
        Some(items) if !items.is_empty() => items.clone(),
        _ => fallback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_nav_is_hidden_and_sorted() {
        let mut items = fallback_navigation();
        items[0].is_active = false;
        items[1].order = 99;
        let labels: Vec<String> = visible_navigation(&items).into_iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Blog", "Help Center", "Contact", "Services"]);
    }

    #[test]
    fn empty_backend_list_uses_fallback() {
        let empty: Vec<ServiceCard> = Vec::new();
        assert_eq!(or_fallback(Some(&empty), fallback_service_cards).len(), 4);
        assert_eq!(or_fallback(None, fallback_service_cards).len(), 4);

        let one = vec![fallback_service_cards().remove(2)];
        let chosen = or_fallback(Some(&one), fallback_service_cards);
        assert_eq!(chosen.len(), 1);
        assert_eq!(chosen[0].title, "Workflow Management");
    }

    #[test]
    fn blank_text_uses_fallback() {
        assert_eq!(text_or("  ", "Send Message"), "Send Message");
        assert_eq!(text_or("Submit", "Send Message"), "Submit");
    }

    #[test]
    fn fallback_metrics_match_published_numbers() {
        let values: Vec<String> = fallback_metrics().into_iter().map(|m| m.value).collect();
        assert_eq!(values, vec!["68", "72", "99"]);
    }

    #[test]
    fn benefits_without_items_use_built_in_pills() {
        let mut fetched = fallback_benefits_section();
        fetched.benefits.clear();
        let shown = visible_benefits(&or_fallback(Some(&fetched.benefits), || {
            fallback_benefits_section().benefits
        }));
        assert_eq!(shown.len(), 8);
        assert_eq!(shown[0].position, "top-center");
    }

    #[test]
    fn inactive_countries_are_dropped() {
        let mut countries = fallback_countries();
        countries[0].is_active = false;
        countries[6].order = -1;
        let names: Vec<String> = visible_countries(&countries).into_iter().map(|c| c.name).collect();
        assert_eq!(names.first().map(String::as_str), Some("Denmark"));
        assert!(!names.contains(&"France".to_string()));
    }
}
