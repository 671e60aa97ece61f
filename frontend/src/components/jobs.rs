use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::JobPosting;
use crate::state::accordion::{Accordion, AccordionAction};

pub fn apply_link(posting: &JobPosting) -> String {
    let subject = format!("Application: {} ({})", posting.title, posting.id);
    format!(
        "mailto:{}?subject={}",
        config::CAREERS_EMAIL,
        urlencoding::encode(&subject)
    )
}

#[derive(Properties, PartialEq)]
pub struct JobBoardProps {
    pub postings: &'static [JobPosting],
}

/// Open roles, one expanded at a time.
#[function_component(JobBoard)]
pub fn job_board(props: &JobBoardProps) -> Html {
    let accordion = use_reducer(Accordion::<&'static str>::default);

    html! {
        <div class="job-board">
            { for props.postings.iter().enumerate().map(|(i, posting)| {
                let open = accordion.is_expanded(&posting.id);
                let onclick = {
                    let accordion = accordion.dispatcher();
                    let id = posting.id;
                    Callback::from(move |_: MouseEvent| accordion.dispatch(AccordionAction::Toggle(id)))
                };
                html! {
                    <Reveal delay_ms={(i % 4) as u32 * 80}>
                        <article class={classes!("job", open.then(|| "open"))}>
                            <button class="job-header" onclick={onclick} aria-expanded={open.to_string()}>
                                <div>
                                    <h3>{ posting.title }</h3>
                                    <p class="job-meta">
                                        { posting.department }{" · "}{ posting.location }{" · "}{ posting.kind.label() }
                                    </p>
                                </div>
                                <span class="toggle-icon">{ if open { "−" } else { "+" } }</span>
                            </button>
                            if open {
                                <div class="job-details">
                                    <p>{ posting.summary }</p>
                                    <ul>
                                        { for posting.responsibilities.iter().map(|item| html! { <li>{ *item }</li> }) }
                                    </ul>
                                    <a class="hero-cta" href={apply_link(posting)}>{"Apply for this role"}</a>
                                </div>
                            }
                        </article>
                    </Reveal>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::EmploymentKind;

    #[test]
    fn apply_link_encodes_subject() {
        let posting = JobPosting {
            id: "ENG-07",
            title: "Senior Rust & Cloud Engineer",
            department: "Engineering",
            location: "Remote",
            kind: EmploymentKind::FullTime,
            summary: "",
            responsibilities: &[],
        };
        assert_eq!(
            apply_link(&posting),
            "mailto:careers@krovos.com?subject=Application%3A%20Senior%20Rust%20%26%20Cloud%20Engineer%20%28ENG-07%29"
        );
    }
}
