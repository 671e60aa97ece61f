use yew::prelude::*;

use crate::content::{FaqEntry, Feature, Metric, OfferingContent, ProcessStep, Testimonial};
use crate::icons::Icon;
use crate::pages::offering::OfferingPage;
use crate::theme::{Accent, TileSpan};

pub static CONTENT: OfferingContent = OfferingContent {
    eyebrow: "Custom Software",
    title: "Software built around how you actually work",
    tagline: "Product teams that take you from a whiteboard sketch to a system your customers rely on.",
    accent: Accent::Azure,
    metrics: &[
        Metric { value: 240, prefix: "", suffix: "+", label: "products shipped" },
        Metric { value: 60, prefix: "", suffix: "+", label: "platforms under active support" },
        Metric { value: 14, prefix: "", suffix: "", label: "years building software" },
    ],
    features: &[
        Feature {
            title: "Web and mobile products",
            description: "Customer-facing apps designed with your users and built to scale with them.",
            icon: Icon::Code,
            accent: Accent::Azure,
            span: TileSpan::Hero,
            tags: &["Rust", "TypeScript", "Swift", "Kotlin"],
        },
        Feature {
            title: "Internal tools",
            description: "Replace the spreadsheet that runs your business with something that won't break.",
            icon: Icon::Gear,
            accent: Accent::Emerald,
            span: TileSpan::Regular,
            tags: &[],
        },
        Feature {
            title: "Legacy modernisation",
            description: "Incremental rewrites that keep the lights on while the old system is retired.",
            icon: Icon::Layers,
            accent: Accent::Amber,
            span: TileSpan::Tall,
            tags: &["Strangler pattern", "Data migration"],
        },
        Feature {
            title: "APIs and integrations",
            description: "Clean, documented interfaces between your systems and your partners'.",
            icon: Icon::Server,
            accent: Accent::Violet,
            span: TileSpan::Wide,
            tags: &["REST", "gRPC", "Webhooks"],
        },
    ],
    process: &[
        ProcessStep { title: "Shape", description: "Define the problem, the users and what success looks like." },
        ProcessStep { title: "Build", description: "Two-week iterations with working software at the end of each one." },
        ProcessStep { title: "Launch", description: "Release planning, load testing and a calm go-live." },
        ProcessStep { title: "Evolve", description: "Support, analytics and a roadmap that keeps moving." },
    ],
    testimonials: &[
        Testimonial {
            quote: "They shipped a platform our previous vendor said would take two years, in eight months.",
            author: "Priya Natarajan",
            role: "CTO",
            company: "Helio Health",
        },
        Testimonial {
            quote: "The handover was the best I've seen. Our own team owns the codebase now.",
            author: "Tom Becker",
            role: "VP Engineering",
            company: "Fieldstone",
        },
    ],
    faqs: &[
        FaqEntry {
            question: "Who owns the code?",
            answer: "You do, from the first commit. Repositories live in your organisation.",
        },
        FaqEntry {
            question: "Fixed price or time and materials?",
            answer: "Discovery is fixed price. Delivery is usually a dedicated team on a monthly rate with a clear scope for each quarter.",
        },
        FaqEntry {
            question: "Can you work alongside our developers?",
            answer: "Yes. Many engagements are blended teams, and we plan for knowledge transfer from day one.",
        },
    ],
    cta_title: "Have something you need built?",
    cta_body: "Tell us about it. We'll reply with questions, not a sales deck.",
};

#[function_component(CustomSoftware)]
pub fn custom_software() -> Html {
    html! { <OfferingPage content={&CONTENT} /> }
}
