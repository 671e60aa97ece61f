use yew::prelude::*;

use crate::content::{FaqEntry, Feature, Metric, OfferingContent, ProcessStep, Testimonial};
use crate::icons::Icon;
use crate::pages::offering::OfferingPage;
use crate::theme::{Accent, TileSpan};

pub static CONTENT: OfferingContent = OfferingContent {
    eyebrow: "AI Automation",
    title: "Put the repetitive work on autopilot",
    tagline: "We design, build and operate AI workflows that take hours out of your week without taking control out of your hands.",
    accent: Accent::Violet,
    metrics: &[
        Metric { value: 70, prefix: "", suffix: "%", label: "less time on manual processing" },
        Metric { value: 120, prefix: "", suffix: "+", label: "workflows in production" },
        Metric { value: 6, prefix: "", suffix: " wks", label: "average time to first automation" },
    ],
    features: &[
        Feature {
            title: "Document intelligence",
            description: "Invoices, contracts and forms read, classified and routed the moment they land in your inbox.",
            icon: Icon::Layers,
            accent: Accent::Violet,
            span: TileSpan::Hero,
            tags: &["OCR", "Classification", "Extraction"],
        },
        Feature {
            title: "Conversational agents",
            description: "Support and sales assistants grounded in your own knowledge base, with hand-off to humans when it matters.",
            icon: Icon::Chat,
            accent: Accent::Azure,
            span: TileSpan::Wide,
            tags: &["RAG", "Escalation"],
        },
        Feature {
            title: "Process mining",
            description: "We map where time actually goes before we automate anything.",
            icon: Icon::Chart,
            accent: Accent::Emerald,
            span: TileSpan::Regular,
            tags: &[],
        },
        Feature {
            title: "Guardrails built in",
            description: "Human review queues, audit trails and cost limits are part of every rollout.",
            icon: Icon::Shield,
            accent: Accent::Rose,
            span: TileSpan::Regular,
            tags: &[],
        },
        Feature {
            title: "Integrations",
            description: "CRMs, ERPs, ticketing and chat. If it has an API, we can wire it in.",
            icon: Icon::Bolt,
            accent: Accent::Amber,
            span: TileSpan::Wide,
            tags: &["Salesforce", "SAP", "Slack", "Zendesk"],
        },
    ],
    process: &[
        ProcessStep { title: "Discover", description: "Workshops and data sampling to find the highest-leverage processes." },
        ProcessStep { title: "Prototype", description: "A working pilot on real data within weeks, measured against a baseline." },
        ProcessStep { title: "Deploy", description: "Production rollout with monitoring, review queues and training." },
        ProcessStep { title: "Operate", description: "Ongoing tuning as your data and processes change." },
    ],
    testimonials: &[
        Testimonial {
            quote: "Our AP team went from chasing invoices to reviewing exceptions. The pilot paid for itself in a quarter.",
            author: "Maria Chen",
            role: "Finance Director",
            company: "Northwind Logistics",
        },
        Testimonial {
            quote: "Krovos didn't just build a chatbot, they rebuilt how our support queue works.",
            author: "Daniel Okafor",
            role: "Head of Support",
            company: "Brightlane",
        },
    ],
    faqs: &[
        FaqEntry {
            question: "Do we need clean data before starting?",
            answer: "No. Part of discovery is assessing what you have and deciding what needs cleaning up and what can be handled as-is.",
        },
        FaqEntry {
            question: "Which models do you use?",
            answer: "Whichever fits the job and your compliance needs: hosted frontier models, open-weight models in your cloud, or classic ML where it is cheaper.",
        },
        FaqEntry {
            question: "What happens when the automation is unsure?",
            answer: "Low-confidence cases are routed to a human review queue, and those decisions feed back into the system.",
        },
    ],
    cta_title: "Find your first automation",
    cta_body: "Book a 30-minute call and leave with a shortlist of processes worth automating.",
};

#[function_component(AiAutomation)]
pub fn ai_automation() -> Html {
    html! { <OfferingPage content={&CONTENT} /> }
}
