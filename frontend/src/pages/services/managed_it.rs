use yew::prelude::*;

use crate::content::{FaqEntry, Feature, Metric, OfferingContent, ProcessStep, Testimonial};
use crate::icons::Icon;
use crate::pages::offering::OfferingPage;
use crate::theme::{Accent, TileSpan};

pub static CONTENT: OfferingContent = OfferingContent {
    eyebrow: "Managed IT",
    title: "IT that stays out of your way",
    tagline: "Proactive monitoring, security and support for growing teams, with a real person on the other end of the line.",
    accent: Accent::Emerald,
    metrics: &[
        Metric { value: 15, prefix: "<", suffix: " min", label: "median response time" },
        Metric { value: 4800, prefix: "", suffix: "+", label: "endpoints managed" },
        Metric { value: 98, prefix: "", suffix: "%", label: "tickets resolved on first contact" },
    ],
    features: &[
        Feature {
            title: "24/7 monitoring",
            description: "Servers, networks and endpoints watched around the clock, with issues fixed before they become outages.",
            icon: Icon::Server,
            accent: Accent::Emerald,
            span: TileSpan::Hero,
            tags: &["NOC", "Patching", "Backups"],
        },
        Feature {
            title: "Security operations",
            description: "Endpoint protection, phishing training and incident response.",
            icon: Icon::Shield,
            accent: Accent::Rose,
            span: TileSpan::Regular,
            tags: &[],
        },
        Feature {
            title: "Helpdesk",
            description: "Friendly support by phone, chat and email for every employee.",
            icon: Icon::Users,
            accent: Accent::Azure,
            span: TileSpan::Regular,
            tags: &[],
        },
        Feature {
            title: "Onboarding in a day",
            description: "Laptops, accounts and access ready before a new hire's first morning.",
            icon: Icon::Clock,
            accent: Accent::Amber,
            span: TileSpan::Wide,
            tags: &["Device management", "SSO"],
        },
    ],
    process: &[
        ProcessStep { title: "Assess", description: "Inventory of devices, accounts, risks and licences." },
        ProcessStep { title: "Stabilise", description: "Fix the urgent issues and bring everything under monitoring." },
        ProcessStep { title: "Manage", description: "Day-to-day support with monthly health reports." },
    ],
    testimonials: &[
        Testimonial {
            quote: "We stopped thinking about IT, which is exactly what we wanted.",
            author: "Hannah Wright",
            role: "Operations Manager",
            company: "Cask & Barrel",
        },
        Testimonial {
            quote: "When we had a ransomware scare, they had us isolated and restored before lunch.",
            author: "Luis Ortega",
            role: "COO",
            company: "Meridian Dental Group",
        },
    ],
    faqs: &[
        FaqEntry {
            question: "How is pricing structured?",
            answer: "A flat monthly fee per user that covers support, monitoring and security tooling. Projects are quoted separately.",
        },
        FaqEntry {
            question: "Can you support our existing hardware?",
            answer: "Yes. We take over what you have and recommend replacements only when they save you money or risk.",
        },
    ],
    cta_title: "Stop firefighting",
    cta_body: "Get a no-cost IT health check and a clear plan for the next twelve months.",
};

#[function_component(ManagedIt)]
pub fn managed_it() -> Html {
    html! { <OfferingPage content={&CONTENT} /> }
}
