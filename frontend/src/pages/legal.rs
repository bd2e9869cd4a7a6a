use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, models::PrivacyPolicy};
use crate::blog::format_date;
use crate::fetch::use_fetch;
use crate::Route;

/// A piece of backend rich text reduced to what the legal pages render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Paragraph(String),
}

/// Splits rich text into headings and paragraphs. Inline tags are dropped
/// and their text kept.
/// Text without markup is split on blank lines.
pub fn text_blocks(content: &str) -> Vec<Block> {
    if !content.contains('<') {
        return content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| Block::Paragraph(p.to_string()))
            .collect();
    }

    let mut blocks = Vec::new();
    let mut buffer = String::new();
    let mut heading = false;
    let mut rest = content;
    while let Some(open) = rest.find('<') {
        buffer.push_str(&rest[..open]);
        let Some(close) = rest[open..].find('>') else {
            rest = "";
            break;
        };
        let tag = rest[open + 1..open + close].trim().to_ascii_lowercase();
        let closing = tag.starts_with('/');
        let name = tag
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or("");
        if is_block_tag(name) {
            push_text(&mut blocks, &buffer, heading);
            buffer.clear();
            heading = !closing && matches!(name, "h1" | "h2" | "h3" | "h4");
        }
        rest = &rest[open + close + 1..];
    }
    buffer.push_str(rest);
    push_text(&mut blocks, &buffer, heading);
    blocks
}

fn is_block_tag(name: &str) -> bool {
    matches!(
        name,
        "h1" | "h2" | "h3" | "h4" | "p" | "div" | "section" | "ul" | "ol" | "li" | "br" | "blockquote"
    )
}

fn push_text(blocks: &mut Vec<Block>, text: &str, heading: bool) {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return;
    }
    blocks.push(if heading {
        Block::Heading(text)
    } else {
        Block::Paragraph(text)
    });
}

fn fallback_privacy_policy() -> PrivacyPolicy {
    PrivacyPolicy {
        id: 0,
        title: "Privacy Policy".to_string(),
        subtitle: "How we protect your information".to_string(),
        content: "<h2>Information We Collect</h2>\
            <p>We collect information you provide directly to us, such as when you create an account, use our services, or contact us.</p>\
            <h2>How We Use Your Information</h2>\
            <p>We use the information we collect to provide, maintain, and improve our services.</p>\
            <h2>Information Sharing</h2>\
            <p>We do not sell, trade, or otherwise transfer your personal information to third parties without your consent.</p>\
            <h2>Data Security</h2>\
            <p>We implement appropriate security measures to protect your personal information.</p>\
            <h2>Contact Us</h2>\
            <p>If you have any questions about this Privacy Policy, please contact us.</p>"
            .to_string(),
        last_updated: String::new(),
        effective_date: String::new(),
    }
}

fn render_blocks(blocks: Vec<Block>) -> Html {
    blocks
        .into_iter()
        .map(|block| match block {
            Block::Heading(text) => html! { <h2>{text}</h2> },
            Block::Paragraph(text) => html! { <p>{text}</p> },
        })
        .collect()
}

fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::PrivacyPolicy}>{"Privacy Policy"}</Link<Route>>
        </div>
    }
}

const LEGAL_STYLE: &str = r#"
.legal-content {
    max-width: 800px;
    margin: 0 auto;
    padding: 120px 24px 80px;
    color: #333;
    line-height: 1.7;
}
.legal-content h1 {
    font-size: 2.5rem;
    margin-bottom: 0.5rem;
}
.legal-content h2 {
    font-size: 1.3rem;
    margin: 2rem 0 0.75rem;
}
.legal-subtitle, .legal-meta {
    color: #777;
}
.legal-links {
    margin-top: 3rem;
    text-align: center;
}
.legal-links a {
    color: #1E90FF;
}
"#;

#[function_component(PrivacyPolicyPage)]
pub fn privacy_policy_page() -> Html {
    let state = use_fetch((), api::privacy_policy);
    let policy = state.data.clone().unwrap_or_else(fallback_privacy_policy);
    let updated = format_date(&policy.last_updated);

    html! {
        <div class="legal-content privacy-policy">
            <h1>{&policy.title}</h1>
            if !policy.subtitle.is_empty() {
                <p class="legal-subtitle">{&policy.subtitle}</p>
            }
            if let Some(updated) = updated {
                <p class="legal-meta">{format!("Last updated: {}", updated)}</p>
            }
            { render_blocks(text_blocks(&policy.content)) }
            { legal_links() }
            <style>{LEGAL_STYLE}</style>
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-content terms-and-conditions">
            <h1>{"Terms and Conditions"}</h1>
            <p>{"Welcome to Floneo. By accessing or using our website, applications, or services, you agree to comply with and be bound by the following terms and conditions. Please read them carefully before using our platform."}</p>

            <section>
                <h2>{"1. Acceptance of Terms"}</h2>
                <p>{"By accessing or using Floneo's services, you confirm that you have read, understood, and agree to be bound by these Terms and Conditions. If you do not agree, you must discontinue use immediately."}</p>
            </section>

            <section>
                <h2>{"2. Use of Our Services"}</h2>
                <p>{"You agree to use our services only for lawful purposes and in accordance with all applicable local, national, and international laws and regulations. You may not use our services:"}</p>
                <ul>
                    <li>{"To engage in fraudulent, harmful, or illegal activity."}</li>
                    <li>{"To attempt unauthorized access to our systems or data."}</li>
                    <li>{"To distribute viruses, malware, or any other harmful code."}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Intellectual Property"}</h2>
                <p>{"All content, trademarks, logos, and intellectual property displayed on the platform are owned by or licensed to Floneo. You may not reproduce, distribute, or use any materials without prior written permission."}</p>
            </section>

            <section>
                <h2>{"4. Limitation of Liability"}</h2>
                <p>{"Floneo will not be held liable for any direct, indirect, incidental, or consequential damages resulting from your use of our platform or services, including but not limited to data loss, service interruption, or unauthorized access."}</p>
            </section>

            <section>
                <h2>{"5. Third-Party Links"}</h2>
                <p>{"Our website may contain links to third-party websites. We are not responsible for the content, policies, or practices of those sites. You access them at your own risk."}</p>
            </section>

            <section>
                <h2>{"6. Termination"}</h2>
                <p>{"We reserve the right to suspend or terminate access to our services at any time, without notice, for conduct that we believe violates these Terms or is harmful to other users or to Floneo."}</p>
            </section>

            <section>
                <h2>{"7. Changes to These Terms"}</h2>
                <p>{"We may update or modify these Terms at any time. Updated terms will be posted on this page, and your continued use of our services constitutes acceptance of the new Terms."}</p>
            </section>

            <section>
                <h2>{"8. Contact Us"}</h2>
                <p>{"If you have any questions about these Terms and Conditions, please contact us at:"}</p>
                <p><strong>{"Floneo Technologies Pvt. Ltd."}</strong></p>
                <p>
                    {"Email: "}
                    <a href="mailto:admin@floneo.com">{"admin@floneo.com"}</a>
                </p>
            </section>
            { legal_links() }
            <style>{LEGAL_STYLE}</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_and_paragraphs_survive_markup() {
        let blocks = text_blocks(
            "<h2>Data  Security</h2>\n<p>We protect <strong>your</strong> data.</p><ul><li>One</li></ul>",
        );
        assert_eq!(
            blocks,
            vec![
                Block::Heading("Data Security".into()),
                Block::Paragraph("We protect your data.".into()),
                Block::Paragraph("One".into()),
            ]
        );
    }

    #[test]
    fn plain_text_splits_on_blank_lines() {
        assert_eq!(
            text_blocks("First part.\n\n\nSecond part."),
            vec![
                Block::Paragraph("First part.".into()),
                Block::Paragraph("Second part.".into()),
            ]
        );
    }

    #[test]
    fn fallback_policy_has_sections() {
        let blocks = text_blocks(&fallback_privacy_policy().content);
        let headings = blocks.iter().filter(|b| matches!(b, Block::Heading(_))).count();
        assert_eq!(headings, 5);
        assert_eq!(blocks.len(), 10);
    }
}
