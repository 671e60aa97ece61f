use yew::prelude::*;

use crate::content::{FaqEntry, Feature, Metric, OfferingContent, ProcessStep, Testimonial};
use crate::icons::Icon;
use crate::pages::offering::OfferingPage;
use crate::theme::{Accent, TileSpan};

pub static CONTENT: OfferingContent = OfferingContent {
    eyebrow: "Engineering Solutions",
    title: "Engineering teams that move faster",
    tagline: "Developer experience, delivery pipelines and architecture reviews for organisations that have outgrown their tooling.",
    accent: Accent::Violet,
    metrics: &[
        Metric { value: 4, prefix: "", suffix: "x", label: "more frequent deploys" },
        Metric { value: 65, prefix: "", suffix: "%", label: "shorter lead time for changes" },
        Metric { value: 80, prefix: "", suffix: "+", label: "engineering orgs supported" },
    ],
    features: &[
        Feature {
            title: "CI/CD pipelines",
            description: "Fast, reliable builds and deploys with the checks your compliance team needs.",
            icon: Icon::Rocket,
            accent: Accent::Violet,
            span: TileSpan::Wide,
            tags: &["GitHub Actions", "GitLab", "Buildkite"],
        },
        Feature {
            title: "Architecture reviews",
            description: "An outside view on the decisions that will matter in two years.",
            icon: Icon::Layers,
            accent: Accent::Azure,
            span: TileSpan::Tall,
            tags: &[],
        },
        Feature {
            title: "Observability",
            description: "Logs, metrics and traces that answer questions during an incident.",
            icon: Icon::Chart,
            accent: Accent::Emerald,
            span: TileSpan::Regular,
            tags: &["OpenTelemetry"],
        },
        Feature {
            title: "Embedded hardware",
            description: "Firmware and edge software for connected devices.",
            icon: Icon::Chip,
            accent: Accent::Amber,
            span: TileSpan::Regular,
            tags: &[],
        },
    ],
    process: &[
        ProcessStep { title: "Measure", description: "Baseline delivery metrics and developer survey." },
        ProcessStep { title: "Prioritise", description: "Pick the bottlenecks that cost the most." },
        ProcessStep { title: "Improve", description: "Pair with your engineers to fix them in place." },
    ],
    testimonials: &[
        Testimonial {
            quote: "Build times went from 40 minutes to 6. Our engineers noticed before the dashboards did.",
            author: "Aisha Rahman",
            role: "Platform Lead",
            company: "Corvid Games",
        },
        Testimonial {
            quote: "The architecture review saved us from a rewrite we didn't need.",
            author: "Marcus Lindqvist",
            role: "CTO",
            company: "Tessellate",
        },
    ],
    faqs: &[FaqEntry {
        question: "Do you replace our engineers?",
        answer: "No. We work inside your teams and leave them with the practices and tooling, not a dependency on us.",
    }],
    cta_title: "Ship with confidence",
    cta_body: "Start with a two-week delivery assessment and a prioritised improvement plan.",
};

#[function_component(EngineeringSolutions)]
pub fn engineering_solutions() -> Html {
    html! { <OfferingPage content={&CONTENT} /> }
}
