use yew::prelude::*;

use crate::content::{FaqEntry, Feature, Metric, OfferingContent, ProcessStep, Testimonial};
use crate::icons::Icon;
use crate::pages::offering::OfferingPage;
use crate::theme::{Accent, TileSpan};

pub static CONTENT: OfferingContent = OfferingContent {
    eyebrow: "Digital Marketing",
    title: "Growth you can measure",
    tagline: "Performance marketing, content and analytics run by people who read the numbers before they write the copy.",
    accent: Accent::Rose,
    metrics: &[
        Metric { value: 340, prefix: "", suffix: "%", label: "average return on ad spend" },
        Metric { value: 45, prefix: "$", suffix: "M", label: "media budget managed" },
        Metric { value: 58, prefix: "", suffix: "%", label: "lower cost per lead after 6 months" },
    ],
    features: &[
        Feature {
            title: "Paid acquisition",
            description: "Search, social and programmatic campaigns tuned daily against revenue, not clicks.",
            icon: Icon::Target,
            accent: Accent::Rose,
            span: TileSpan::Wide,
            tags: &["Google Ads", "Meta", "LinkedIn"],
        },
        Feature {
            title: "SEO and content",
            description: "Technical fixes and editorial that earn traffic for the searches your buyers make.",
            icon: Icon::Globe,
            accent: Accent::Emerald,
            span: TileSpan::Tall,
            tags: &["Technical SEO", "Editorial"],
        },
        Feature {
            title: "Analytics and attribution",
            description: "Tracking you can trust and dashboards your whole team understands.",
            icon: Icon::Chart,
            accent: Accent::Azure,
            span: TileSpan::Regular,
            tags: &[],
        },
        Feature {
            title: "Conversion optimisation",
            description: "Experiments on landing pages and funnels, with results reported honestly.",
            icon: Icon::Rocket,
            accent: Accent::Amber,
            span: TileSpan::Regular,
            tags: &[],
        },
    ],
    process: &[
        ProcessStep { title: "Audit", description: "Accounts, tracking and content reviewed against your goals." },
        ProcessStep { title: "Plan", description: "Channel mix and budget allocation with clear targets." },
        ProcessStep { title: "Run", description: "Campaigns launched and optimised weekly." },
        ProcessStep { title: "Report", description: "Monthly reviews that end with decisions, not slides." },
    ],
    testimonials: &[Testimonial {
        quote: "For the first time our marketing and finance teams agree on what a lead is worth.",
        author: "Sofia Marquez",
        role: "CMO",
        company: "Lumen Outdoor",
    }],
    faqs: &[
        FaqEntry {
            question: "Is there a minimum ad budget?",
            answer: "We work best with accounts spending at least $10k a month, but content and SEO engagements have no media minimum.",
        },
        FaqEntry {
            question: "Do you lock us into contracts?",
            answer: "Engagements run month to month after an initial three-month ramp-up.",
        },
    ],
    cta_title: "Get a free account audit",
    cta_body: "We'll review your ad accounts and tracking and send back the three changes we'd make first.",
};

#[function_component(DigitalMarketing)]
pub fn digital_marketing() -> Html {
    html! { <OfferingPage content={&CONTENT} /> }
}
