use yew::prelude::*;

use crate::components::{
    benefits::Benefits, chat_mockup::ChatMockup, contact_section::ContactSection,
    faq_section::FaqSection, footer::Footer, hero::Hero, metrics::Metrics,
    services_scroll::ServicesScroll, social_section::SocialSection,
    why_choose_us::WhyChooseUs,
};

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="home">
            <Hero />
            <Benefits />
            <ServicesScroll />
            <Metrics />
            <WhyChooseUs />
            <ChatMockup />
            <FaqSection />
            <ContactSection />
            <SocialSection />
            <Footer />
        </main>
    }
}
