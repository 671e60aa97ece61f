use yew::prelude::*;

use crate::content::{FaqEntry, Feature, Metric, OfferingContent, ProcessStep, Testimonial};
use crate::icons::Icon;
use crate::pages::offering::OfferingPage;
use crate::theme::{Accent, TileSpan};

pub static CONTENT: OfferingContent = OfferingContent {
    eyebrow: "Finance Solutions",
    title: "Technology for finance teams",
    tagline: "Close faster, report with confidence and automate reconciliation, with controls auditors are happy to sign off.",
    accent: Accent::Emerald,
    metrics: &[
        Metric { value: 5, prefix: "", suffix: " days", label: "faster month-end close" },
        Metric { value: 2, prefix: "$", suffix: "B+", label: "transactions reconciled yearly" },
        Metric { value: 100, prefix: "", suffix: "%", label: "audit trail coverage" },
    ],
    features: &[
        Feature {
            title: "Automated reconciliation",
            description: "Bank, card and ledger matching with exceptions routed to the right person.",
            icon: Icon::Wallet,
            accent: Accent::Emerald,
            span: TileSpan::Hero,
            tags: &["NetSuite", "Xero", "SAP"],
        },
        Feature {
            title: "Reporting",
            description: "Board packs and management accounts generated from one source of truth.",
            icon: Icon::Chart,
            accent: Accent::Azure,
            span: TileSpan::Regular,
            tags: &[],
        },
        Feature {
            title: "Controls and compliance",
            description: "Segregation of duties, approvals and evidence collection built into the workflow.",
            icon: Icon::Shield,
            accent: Accent::Rose,
            span: TileSpan::Regular,
            tags: &["SOX", "IFRS"],
        },
        Feature {
            title: "Forecasting",
            description: "Rolling forecasts that update as actuals land.",
            icon: Icon::Clock,
            accent: Accent::Amber,
            span: TileSpan::Wide,
            tags: &[],
        },
    ],
    process: &[
        ProcessStep { title: "Map", description: "Walk through the close calendar and every manual step in it." },
        ProcessStep { title: "Automate", description: "Replace the manual steps with auditable workflows." },
        ProcessStep { title: "Hand over", description: "Training and documentation so your team owns it." },
    ],
    testimonials: &[Testimonial {
        quote: "Our close went from twelve days to seven in the first quarter.",
        author: "Robert Haines",
        role: "Group Financial Controller",
        company: "Oakmere Holdings",
    }],
    faqs: &[
        FaqEntry {
            question: "Do you work with our existing ERP?",
            answer: "Yes. We integrate with the major ERPs and accounting platforms rather than replacing them.",
        },
        FaqEntry {
            question: "How do you handle sensitive financial data?",
            answer: "Data stays in your environment. Our engineers work under least-privilege access with every action logged.",
        },
    ],
    cta_title: "Shorten your close",
    cta_body: "Walk us through your month-end and we'll show you where the days go.",
};

#[function_component(FinanceSolutions)]
pub fn finance_solutions() -> Html {
    html! { <OfferingPage content={&CONTENT} /> }
}
