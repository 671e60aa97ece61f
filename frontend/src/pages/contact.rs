use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::faq::FaqList;
use crate::components::layout::PageHero;
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::FaqEntry;
use crate::icons::{Icon, IconGlyph};
use crate::theme::Accent;

const OFFICES: &[(&str, &str)] = &[
    ("Lisbon", "Rua da Prata 80, 1100-420 Lisboa"),
    ("London", "12 Hatton Garden, London EC1N 8AN"),
    ("Berlin", "Torstraße 109, 10119 Berlin"),
];

const CONTACT_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How quickly will you reply?",
        answer: "Within one business day, usually sooner.",
    },
    FaqEntry {
        question: "Is the first conversation free?",
        answer: "Always. We'll tell you honestly whether we're the right fit.",
    },
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let submitter = use_memo(|_| config::contact_submitter(), ());

    html! {
        <div class="contact-page">
            <PageHero
                eyebrow="Contact"
                title="Let's talk"
                tagline="Tell us what you are working on. A real person reads every message."
                accent={Accent::Azure}
            />
            <section class="contact-layout">
                <Reveal class="contact-form-wrapper">
                    <ContactForm submitter={(*submitter).clone()} />
                </Reveal>
                <Reveal class="contact-details" delay_ms={150}>
                    <h3><IconGlyph icon={Icon::Chat} />{" Email"}</h3>
                    <a href="mailto:hello@krovos.com">{"hello@krovos.com"}</a>
                    <h3><IconGlyph icon={Icon::Globe} />{" Offices"}</h3>
                    <ul class="offices">
                        { for OFFICES.iter().map(|(city, address)| html! {
                            <li><strong>{ *city }</strong><span>{ *address }</span></li>
                        }) }
                    </ul>
                </Reveal>
            </section>
            <FaqList entries={CONTACT_FAQ} title="Before you write" />
        </div>
    }
}
