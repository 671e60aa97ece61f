use yew::prelude::*;

use crate::content::{FaqEntry, Feature, Metric, OfferingContent, ProcessStep, Testimonial};
use crate::icons::Icon;
use crate::pages::offering::OfferingPage;
use crate::theme::{Accent, TileSpan};

pub static CONTENT: OfferingContent = OfferingContent {
    eyebrow: "Talent Solutions",
    title: "The right people, sooner",
    tagline: "Technical recruiting and staff augmentation from people who have done the jobs they are hiring for.",
    accent: Accent::Amber,
    metrics: &[
        Metric { value: 21, prefix: "", suffix: " days", label: "average time to hire" },
        Metric { value: 1500, prefix: "", suffix: "+", label: "placements made" },
        Metric { value: 92, prefix: "", suffix: "%", label: "still in role after a year" },
    ],
    features: &[
        Feature {
            title: "Permanent recruiting",
            description: "Shortlists of pre-screened engineers, designers and data specialists, with technical interviews done by practitioners.",
            icon: Icon::Users,
            accent: Accent::Amber,
            span: TileSpan::Hero,
            tags: &["Engineering", "Data", "Design", "Product"],
        },
        Feature {
            title: "Staff augmentation",
            description: "Experienced contractors who join your team's rituals and tooling from week one.",
            icon: Icon::Rocket,
            accent: Accent::Violet,
            span: TileSpan::Wide,
            tags: &[],
        },
        Feature {
            title: "Team builds",
            description: "A complete squad assembled around a mission, ready to hand over when you are.",
            icon: Icon::Target,
            accent: Accent::Azure,
            span: TileSpan::Regular,
            tags: &[],
        },
        Feature {
            title: "Global reach",
            description: "Nearshore and remote talent pools with compliant contracting handled for you.",
            icon: Icon::Globe,
            accent: Accent::Emerald,
            span: TileSpan::Regular,
            tags: &[],
        },
    ],
    process: &[
        ProcessStep { title: "Brief", description: "A working session on the role, the team and what great looks like." },
        ProcessStep { title: "Source", description: "Targeted search across our network and beyond." },
        ProcessStep { title: "Screen", description: "Technical and culture interviews by people who know the craft." },
        ProcessStep { title: "Place", description: "Offer support, onboarding check-ins and a replacement guarantee." },
    ],
    testimonials: &[Testimonial {
        quote: "Every candidate on the shortlist could have done the job. We ended up hiring two.",
        author: "Elena Petrova",
        role: "Engineering Manager",
        company: "Quanta Robotics",
    }],
    faqs: &[
        FaqEntry {
            question: "What if a hire doesn't work out?",
            answer: "Every permanent placement carries a 90-day replacement guarantee.",
        },
        FaqEntry {
            question: "Which roles do you recruit for?",
            answer: "Software, data, infrastructure, security, design and product roles, from mid-level to leadership.",
        },
    ],
    cta_title: "Hiring this quarter?",
    cta_body: "Send us the role and we'll tell you honestly how quickly we can fill it.",
};

#[function_component(TalentSolutions)]
pub fn talent_solutions() -> Html {
    html! { <OfferingPage content={&CONTENT} /> }
}
