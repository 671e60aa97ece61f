use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::counter::MetricStrip;
use crate::components::layout::{CtaBanner, PageHero, SectionHeader};
use crate::components::reveal::Reveal;
use crate::components::testimonials::TestimonialCarousel;
use crate::content::{Metric, Testimonial};
use crate::icons::{Icon, IconGlyph};
use crate::theme::Accent;
use crate::Route;

struct OfferingLink {
    route: Route,
    title: &'static str,
    blurb: &'static str,
    icon: Icon,
}

fn services() -> [OfferingLink; 5] {
    [
        OfferingLink {
            route: Route::AiAutomation,
            title: "AI Automation",
            blurb: "Workflows and agents that take the busywork off your team.",
            icon: Icon::Bolt,
        },
        OfferingLink {
            route: Route::CustomSoftware,
            title: "Custom Software",
            blurb: "Products and internal tools built around how you work.",
            icon: Icon::Code,
        },
        OfferingLink {
            route: Route::DigitalMarketing,
            title: "Digital Marketing",
            blurb: "Paid, organic and analytics, measured against revenue.",
            icon: Icon::Target,
        },
        OfferingLink {
            route: Route::ManagedIt,
            title: "Managed IT",
            blurb: "Monitoring, security and a helpdesk that picks up.",
            icon: Icon::Server,
        },
        OfferingLink {
            route: Route::TalentSolutions,
            title: "Talent Solutions",
            blurb: "Technical hiring and staff augmentation.",
            icon: Icon::Users,
        },
    ]
}

fn solutions() -> [OfferingLink; 3] {
    [
        OfferingLink {
            route: Route::CloudSolutions,
            title: "Cloud",
            blurb: "Migrations, platforms and lower bills.",
            icon: Icon::Cloud,
        },
        OfferingLink {
            route: Route::EngineeringSolutions,
            title: "Engineering",
            blurb: "Faster delivery and calmer on-call.",
            icon: Icon::Chip,
        },
        OfferingLink {
            route: Route::FinanceSolutions,
            title: "Finance",
            blurb: "Automated reconciliation and a shorter close.",
            icon: Icon::Wallet,
        },
    ]
}

const HEADLINE_STATS: &[Metric] = &[
    Metric { value: 600, prefix: "", suffix: "+", label: "projects delivered" },
    Metric { value: 180, prefix: "", suffix: "", label: "specialists" },
    Metric { value: 97, prefix: "", suffix: "%", label: "client retention" },
    Metric { value: 14, prefix: "", suffix: "", label: "countries" },
];

const CLIENT_VOICES: &[Testimonial] = &[
    Testimonial {
        quote: "Krovos feels like part of our company, not a vendor.",
        author: "Jonas Eriksen",
        role: "CEO",
        company: "Nordvik Freight",
    },
    Testimonial {
        quote: "They automated our onboarding, moved us to the cloud and hired our platform team. One partner, three problems solved.",
        author: "Grace Adeyemi",
        role: "COO",
        company: "Paystream",
    },
    Testimonial {
        quote: "Straight answers, senior people, and they ship.",
        author: "Lucas Moreau",
        role: "VP Product",
        company: "Atelier Labs",
    },
];

fn link_cards(links: &[OfferingLink]) -> Html {
    html! {
        <div class="link-grid">
            { for links.iter().enumerate().map(|(i, link)| html! {
                <Reveal delay_ms={i as u32 * 90}>
                    <Link<Route> to={link.route.clone()} classes="link-card">
                        <IconGlyph icon={link.icon} />
                        <h3>{ link.title }</h3>
                        <p>{ link.blurb }</p>
                        <span class="forward-link">{"Learn more →"}</span>
                    </Link<Route>>
                </Reveal>
            }) }
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
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
        <div class="landing-page">
            <PageHero
                eyebrow="Krovos"
                title="Technology partners for ambitious teams"
                tagline="Automation, software, marketing, IT and talent under one roof, delivered by senior people."
                accent={Accent::Azure}
            >
                <div class="hero-cta-group">
                    <Link<Route> to={Route::Contact} classes="forward-link">
                        <button class="hero-cta">{"Start a project"}</button>
                    </Link<Route>>
                    <Link<Route> to={Route::Careers} classes="faq-link">{"We're hiring"}</Link<Route>>
                </div>
            </PageHero>

            <MetricStrip metrics={HEADLINE_STATS} />

            <section class="services-overview">
                <SectionHeader title="Services" subtitle={Some(AttrValue::Static("Hands-on teams for the work that moves your business."))} />
                { link_cards(&services()) }
            </section>

            <section class="solutions-overview">
                <SectionHeader title="Solutions" subtitle={Some(AttrValue::Static("Packaged expertise for the problems we see most."))} />
                { link_cards(&solutions()) }
            </section>

            <TestimonialCarousel testimonials={CLIENT_VOICES} />

            <CtaBanner
                title="Ready when you are"
                body="Tell us where you're stuck. We'll come back with a plan, a team and a price."
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_stats_animate_in_whole_units() {
        crate::content::assert_whole_unit_metrics(HEADLINE_STATS);
    }
}
