use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::FaqEntry;
use crate::state::accordion::{Accordion, AccordionAction};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon">{ if props.is_open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                <p>{ &props.answer }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [FaqEntry],
    #[prop_or(AttrValue::Static("Frequently asked questions"))]
    pub title: AttrValue,
}

/// FAQ list where opening one answer closes the others.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let accordion = use_reducer(Accordion::<usize>::new);

    let collapse = {
        let accordion = accordion.dispatcher();
        Callback::from(move |_: MouseEvent| accordion.dispatch(AccordionAction::CollapseAll))
    };

    html! {
        <section class="faq-section">
            <Reveal>
                <h2>{ &props.title }</h2>
            </Reveal>
            if accordion.expanded().is_some() {
                <button class="faq-collapse" onclick={collapse}>{"Collapse all"}</button>
            }
            { for props.entries.iter().enumerate().map(|(i, entry)| {
                let on_toggle = {
                    let accordion = accordion.dispatcher();
                    Callback::from(move |_: ()| accordion.dispatch(AccordionAction::Toggle(i)))
                };
                html! {
                    <FaqItem
                        question={entry.question}
                        answer={entry.answer}
                        is_open={accordion.is_expanded(&i)}
                        on_toggle={on_toggle}
                    />
                }
            }) }
        </section>
    }
}
