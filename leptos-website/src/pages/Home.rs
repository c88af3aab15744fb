use crate::components::sections::Faq::FaqAccordion;
use crate::components::sections::Features::FeaturesSection;
use crate::components::sections::HowItWorks::HowItWorksSection;
use crate::components::sections::Newsletter::NewsletterSection;
use crate::components::sections::Pricing::PricingSection;
use crate::components::sections::Testimonials::TestimonialsSection;
use crate::components::HeroHeader::*;
use crate::components::LogoCloud::LogoCloud;
use crate::components::Page::*;
use acme_types::SiteContent;
use leptos::prelude::*;
use leptos_meta::*;

#[component]
pub fn Home(content: SiteContent) -> impl IntoView {
    let SiteContent {
        brand,
        nav,
        hero,
        logo_cloud,
        features,
        how_it_works,
        testimonials,
        pricing,
        faq,
        newsletter,
        footer,
    } = content;

    view! {
        <Title text=brand.name.clone() />
        <Page brand=brand.clone() footer=footer>
            <HeroHeader brand=brand nav=nav hero=hero />
            <main>
                <LogoCloud content=logo_cloud />
                <FeaturesSection content=features />
                <HowItWorksSection content=how_it_works />
                <TestimonialsSection content=testimonials />
                <PricingSection content=pricing />
                <FaqAccordion content=faq />
                <NewsletterSection content=newsletter />
            </main>
        </Page>
    }
}
