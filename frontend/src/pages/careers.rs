use yew::prelude::*;

use crate::animation::easing::Easing;
use crate::components::bento::BentoGrid;
use crate::components::counter::{AnimatedCounter, MetricStrip};
use crate::components::faq::FaqList;
use crate::components::jobs::JobBoard;
use crate::components::layout::{PageHero, SectionHeader};
use crate::content::{EmploymentKind, FaqEntry, Feature, JobPosting, Metric};
use crate::icons::Icon;
use crate::theme::{Accent, TileSpan};

const STATS: &[Metric] = &[
    Metric { value: 180, prefix: "", suffix: "+", label: "people across 14 countries" },
    Metric { value: 32, prefix: "", suffix: "", label: "nationalities on the team" },
    Metric { value: 94, prefix: "", suffix: "%", label: "of the team would recommend us" },
];

const VALUES: &[Feature] = &[
    Feature {
        title: "Remote-first, not remote-only",
        description: "Work from anywhere in our time zones, and meet up twice a year somewhere worth the trip.",
        icon: Icon::Globe,
        accent: Accent::Azure,
        span: TileSpan::Wide,
        tags: &[],
    },
    Feature {
        title: "Learning budget",
        description: "$2,000 a year for courses, books and conferences, plus Friday afternoons for side projects.",
        icon: Icon::Rocket,
        accent: Accent::Violet,
        span: TileSpan::Regular,
        tags: &[],
    },
    Feature {
        title: "Real ownership",
        description: "Small teams, direct client contact and decisions made by the people doing the work.",
        icon: Icon::Target,
        accent: Accent::Emerald,
        span: TileSpan::Regular,
        tags: &[],
    },
    Feature {
        title: "Sustainable pace",
        description: "No weekend heroics. Four-day weeks in August.",
        icon: Icon::Clock,
        accent: Accent::Amber,
        span: TileSpan::Wide,
        tags: &["Flexible hours", "30 days leave"],
    },
];

pub const POSTINGS: &[JobPosting] = &[
    JobPosting {
        id: "ENG-014",
        title: "Senior Backend Engineer",
        department: "Engineering",
        location: "Remote (EU)",
        kind: EmploymentKind::FullTime,
        summary: "Design and build APIs and data pipelines for client platforms in finance and logistics.",
        responsibilities: &[
            "Own services end to end, from design docs to on-call",
            "Mentor mid-level engineers through code review and pairing",
            "Work directly with client stakeholders to shape scope",
        ],
    },
    JobPosting {
        id: "AI-006",
        title: "Machine Learning Engineer",
        department: "AI Automation",
        location: "Remote (EU / UK)",
        kind: EmploymentKind::FullTime,
        summary: "Ship document-understanding and agent workflows into production for enterprise clients.",
        responsibilities: &[
            "Build evaluation harnesses before building features",
            "Deploy and monitor models with cost and latency budgets",
            "Turn prototypes into maintainable services",
        ],
    },
    JobPosting {
        id: "OPS-021",
        title: "Cloud Platform Engineer",
        department: "Cloud",
        location: "Lisbon or Remote",
        kind: EmploymentKind::FullTime,
        summary: "Lead migrations and build landing zones on AWS and Azure.",
        responsibilities: &[
            "Write and review Terraform for client environments",
            "Run migration waves and cutover rehearsals",
            "Improve our internal platform templates",
        ],
    },
    JobPosting {
        id: "MKT-003",
        title: "Performance Marketing Specialist",
        department: "Digital Marketing",
        location: "London",
        kind: EmploymentKind::Contract,
        summary: "Run paid search and social campaigns for B2B clients.",
        responsibilities: &[
            "Plan and launch campaigns across Google and LinkedIn",
            "Report weekly on pipeline impact",
        ],
    },
    JobPosting {
        id: "TAL-009",
        title: "Technical Recruiter Intern",
        department: "Talent Solutions",
        location: "Berlin",
        kind: EmploymentKind::Internship,
        summary: "Six-month internship sourcing and screening engineering candidates.",
        responsibilities: &[
            "Source candidates for open client roles",
            "Coordinate interviews and candidate feedback",
        ],
    },
];

const HIRING_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What does the interview process look like?",
        answer: "A call with the hiring manager, a practical exercise reviewed together, and a conversation with two future teammates. Usually done within two weeks.",
    },
    FaqEntry {
        question: "Do you sponsor visas?",
        answer: "For roles based in Lisbon, London and Berlin, yes. Remote roles require existing right to work in the listed region.",
    },
    FaqEntry {
        question: "Can I apply if no open role fits?",
        answer: "Yes. Send us a note through the contact page and tell us what you'd like to work on.",
    },
];

/// Role count ticks up evenly; a handful of roles looks odd eased.
const ROLES_COUNT_MS: u32 = 600;

#[function_component(Careers)]
pub fn careers() -> Html {
    html! {
        <div class="careers-page">
            <PageHero
                eyebrow="Careers"
                title="Do the best work of your career"
                tagline="We are engineers, marketers and recruiters who like hard problems and kind colleagues."
                accent={Accent::Violet}
            />
            <MetricStrip metrics={STATS} />
            <section class="values">
                <SectionHeader title="Why Krovos" subtitle={Some(AttrValue::Static("What we offer in return for your best ideas."))} />
                <BentoGrid features={VALUES} />
            </section>
            <section class="open-roles">
                <SectionHeader title="Open roles" />
                <p class="roles-count">
                    <AnimatedCounter
                        target={POSTINGS.len() as u64}
                        duration_ms={ROLES_COUNT_MS}
                        easing={Easing::Linear}
                        suffix=" positions open right now"
                    />
                </p>
                <JobBoard postings={POSTINGS} />
            </section>
            <FaqList entries={HIRING_FAQ} title="Hiring FAQ" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn posting_ids_are_unique() {
        let ids: HashSet<_> = POSTINGS.iter().map(|posting| posting.id).collect();
        assert_eq!(ids.len(), POSTINGS.len());
    }

    #[test]
    fn stats_animate_in_whole_units() {
        crate::content::assert_whole_unit_metrics(STATS);
    }

    #[test]
    fn every_posting_lists_responsibilities() {
        assert!(POSTINGS.iter().all(|posting| !posting.responsibilities.is_empty()));
    }
}
