use yew::prelude::*;

use crate::content::{FaqEntry, Feature, Metric, OfferingContent, ProcessStep, Testimonial};
use crate::icons::Icon;
use crate::pages::offering::OfferingPage;
use crate::theme::{Accent, TileSpan};

pub static CONTENT: OfferingContent = OfferingContent {
    eyebrow: "Cloud Solutions",
    title: "Cloud platforms that cost less and fail less",
    tagline: "Migration, platform engineering and FinOps for teams running on AWS, Azure and Google Cloud.",
    accent: Accent::Azure,
    metrics: &[
        Metric { value: 38, prefix: "", suffix: "%", label: "average cloud bill reduction" },
        Metric { value: 310, prefix: "", suffix: "+", label: "workloads migrated" },
        Metric { value: 0, prefix: "", suffix: "", label: "data lost in migration, ever" },
    ],
    features: &[
        Feature {
            title: "Migration",
            description: "Lift-and-shift where it makes sense, re-platforming where it pays off, and a rollback plan for every step.",
            icon: Icon::Cloud,
            accent: Accent::Azure,
            span: TileSpan::Hero,
            tags: &["AWS", "Azure", "GCP"],
        },
        Feature {
            title: "Platform engineering",
            description: "Golden paths, infrastructure as code and self-service environments for your developers.",
            icon: Icon::Layers,
            accent: Accent::Violet,
            span: TileSpan::Wide,
            tags: &["Terraform", "Kubernetes"],
        },
        Feature {
            title: "FinOps",
            description: "Cost visibility per team and product, with savings plans that are actually used.",
            icon: Icon::Wallet,
            accent: Accent::Emerald,
            span: TileSpan::Regular,
            tags: &[],
        },
        Feature {
            title: "Resilience",
            description: "Multi-region designs, disaster recovery drills and on-call runbooks.",
            icon: Icon::Shield,
            accent: Accent::Rose,
            span: TileSpan::Regular,
            tags: &[],
        },
    ],
    process: &[
        ProcessStep { title: "Assess", description: "Workload inventory, dependency mapping and a costed business case." },
        ProcessStep { title: "Land", description: "A secure landing zone with identity, networking and guardrails." },
        ProcessStep { title: "Migrate", description: "Waves of workloads moved with testing and sign-off at each step." },
        ProcessStep { title: "Optimise", description: "Rightsizing and automation once everything is running." },
    ],
    testimonials: &[Testimonial {
        quote: "We closed two data centres and our monthly bill still went down.",
        author: "Kenji Watanabe",
        role: "Director of Infrastructure",
        company: "Arcadia Retail",
    }],
    faqs: &[
        FaqEntry {
            question: "Will there be downtime during migration?",
            answer: "Most workloads move with zero downtime. Where a cutover window is needed, we plan it with you and rehearse it first.",
        },
        FaqEntry {
            question: "Are you tied to one cloud provider?",
            answer: "No. We are certified across the major providers and recommend what fits your workloads and contracts.",
        },
    ],
    cta_title: "See where your cloud spend goes",
    cta_body: "Share read-only billing access and we'll send back a savings estimate within a week.",
};

#[function_component(CloudSolutions)]
pub fn cloud_solutions() -> Html {
    html! { <OfferingPage content={&CONTENT} /> }
}
