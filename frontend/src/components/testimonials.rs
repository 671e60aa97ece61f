use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::Testimonial;
use crate::state::carousel::{Carousel, CarouselAction};

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub testimonials: &'static [Testimonial],
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let count = props.testimonials.len();
    let deck = use_reducer(move || Carousel::new(count));

    {
        let dispatcher = deck.dispatcher();
        use_effect_with_deps(
            move |&count| {
                let rotation = (count > 1).then(|| {
                    Interval::new(config::TESTIMONIAL_ROTATE_MS, move || {
                        dispatcher.dispatch(CarouselAction::Next)
                    })
                });
                move || drop(rotation)
            },
            count,
        );
    }

    let Some(current) = props.testimonials.get(deck.index()) else {
        return html! {};
    };

    let previous = {
        let deck = deck.dispatcher();
        Callback::from(move |_: MouseEvent| deck.dispatch(CarouselAction::Previous))
    };
    let next = {
        let deck = deck.dispatcher();
        Callback::from(move |_: MouseEvent| deck.dispatch(CarouselAction::Next))
    };

    html! {
        <Reveal class="testimonials">
            <figure class="testimonial" key={deck.index()}>
                <blockquote>{ format!("“{}”", current.quote) }</blockquote>
                <figcaption>
                    <strong>{ current.author }</strong>
                    <span>{ format!("{}, {}", current.role, current.company) }</span>
                </figcaption>
            </figure>
            if count > 1 {
                <div class="carousel-controls">
                    <button class="carousel-arrow" onclick={previous} aria-label="Previous testimonial">{"‹"}</button>
                    { for (0..count).map(|i| {
                        let select = {
                            let deck = deck.dispatcher();
                            Callback::from(move |_: MouseEvent| deck.dispatch(CarouselAction::Select(i)))
                        };
                        html! {
                            <button
                                class={classes!("carousel-dot", (i == deck.index()).then(|| "active"))}
                                onclick={select}
                                aria-label={format!("Show testimonial {}", i + 1)}
                            />
                        }
                    }) }
                    <button class="carousel-arrow" onclick={next} aria-label="Next testimonial">{"›"}</button>
                    <span class="carousel-position">{ format!("{} / {}", deck.index() + 1, deck.len()) }</span>
                </div>
            }
        </Reveal>
    }
}
