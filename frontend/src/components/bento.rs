use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::Feature;
use crate::icons::IconGlyph;

#[derive(Properties, PartialEq)]
pub struct BentoCardProps {
    pub feature: Feature,
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(BentoCard)]
pub fn bento_card(props: &BentoCardProps) -> Html {
    let feature = &props.feature;
    let accent = use_memo(|accent| accent.class_name(), feature.accent);

    html! {
        <Reveal delay_ms={props.delay_ms} class={classes!(feature.span.class(), (*accent).clone())}>
            <article class="bento-card accent-border">
                <div class="bento-icon accent-fill">
                    <IconGlyph icon={feature.icon} />
                </div>
                <h3>{ feature.title }</h3>
                <p>{ feature.description }</p>
                if !feature.tags.is_empty() {
                    <ul class="bento-tags">
                        { for feature.tags.iter().map(|tag| html! { <li class="accent-text">{ *tag }</li> }) }
                    </ul>
                }
            </article>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct BentoGridProps {
    pub features: &'static [Feature],
}

#[function_component(BentoGrid)]
pub fn bento_grid(props: &BentoGridProps) -> Html {
    html! {
        <div class="bento-grid">
            { for props.features.iter().enumerate().map(|(i, feature)| html! {
                <BentoCard feature={*feature} delay_ms={(i % 3) as u32 * 100} />
            }) }
        </div>
    }
}
