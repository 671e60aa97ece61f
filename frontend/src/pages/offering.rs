use yew::prelude::*;

use crate::components::bento::BentoGrid;
use crate::components::counter::MetricStrip;
use crate::components::faq::FaqList;
use crate::components::layout::{CtaBanner, PageHero, SectionHeader};
use crate::components::reveal::Reveal;
use crate::components::testimonials::TestimonialCarousel;
use crate::content::OfferingContent;

#[derive(Properties, PartialEq)]
pub struct OfferingPageProps {
    pub content: &'static OfferingContent,
}

/// Shared layout for every service and solution page.
#[function_component(OfferingPage)]
pub fn offering_page(props: &OfferingPageProps) -> Html {
    let content = props.content;

    html! {
        <div class="offering-page">
            <PageHero
                eyebrow={content.eyebrow}
                title={content.title}
                tagline={content.tagline}
                accent={content.accent}
            />

            if !content.metrics.is_empty() {
                <MetricStrip metrics={content.metrics} />
            }

            <section class="offering-features">
                <SectionHeader title="What we deliver" />
                <BentoGrid features={content.features} />
            </section>

            if !content.process.is_empty() {
                <section class="process">
                    <SectionHeader title="How we work" />
                    <ol class="process-steps">
                        { for content.process.iter().enumerate().map(|(i, step)| html! {
                            <li>
                                <Reveal delay_ms={i as u32 * 120} class="step">
                                    <span class="step-number">{ format!("{:02}", i + 1) }</span>
                                    <h3>{ step.title }</h3>
                                    <p>{ step.description }</p>
                                </Reveal>
                            </li>
                        }) }
                    </ol>
                </section>
            }

            if !content.testimonials.is_empty() {
                <TestimonialCarousel testimonials={content.testimonials} />
            }

            if !content.faqs.is_empty() {
                <FaqList entries={content.faqs} />
            }

            <CtaBanner title={content.cta_title} body={content.cta_body} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::services::{ai_automation, custom_software, digital_marketing, managed_it, talent_solutions};
    use crate::pages::solutions::{cloud, engineering, finance};

    fn all() -> [&'static OfferingContent; 8] {
        [
            &ai_automation::CONTENT,
            &custom_software::CONTENT,
            &digital_marketing::CONTENT,
            &managed_it::CONTENT,
            &talent_solutions::CONTENT,
            &cloud::CONTENT,
            &engineering::CONTENT,
            &finance::CONTENT,
        ]
    }

    #[test]
    fn every_offering_has_core_sections() {
        for content in all() {
            assert!(!content.title.is_empty());
            assert!(!content.features.is_empty(), "{} has no features", content.eyebrow);
            assert!(!content.metrics.is_empty(), "{} has no metrics", content.eyebrow);
            assert!(!content.cta_title.is_empty());
        }
    }

    #[test]
    fn metrics_animate_in_whole_units() {
        for content in all() {
            crate::content::assert_whole_unit_metrics(content.metrics);
        }
    }

    #[test]
    fn feature_titles_are_unique_per_page() {
        for content in all() {
            let mut titles: Vec<_> = content.features.iter().map(|f| f.title).collect();
            titles.sort_unstable();
            titles.dedup();
            assert_eq!(titles.len(), content.features.len(), "{}", content.eyebrow);
        }
    }

    #[test]
    fn eyebrows_are_distinct() {
        let mut eyebrows: Vec<_> = all().iter().map(|c| c.eyebrow).collect();
        eyebrows.sort_unstable();
        eyebrows.dedup();
        assert_eq!(eyebrows.len(), 8);
    }
}
