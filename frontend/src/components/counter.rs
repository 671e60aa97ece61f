use yew::prelude::*;

use crate::animation::counter::{format_counter, DEFAULT_DURATION_MS};
use crate::animation::easing::Easing;
use crate::animation::hooks::{use_counter, use_reveal_on_view};
use crate::components::reveal::Reveal;
use crate::content::Metric;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: u64,
    #[prop_or(DEFAULT_DURATION_MS)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub easing: Easing,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal_on_view(node.clone(), 0.0);
    let value = use_counter(props.target, props.duration_ms, props.easing, visible);

    html! {
        <span ref={node} class="counter" aria-label={format_counter(props.target, &props.prefix, &props.suffix)}>
            { format_counter(value, &props.prefix, &props.suffix) }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct MetricStripProps {
    pub metrics: &'static [Metric],
}

#[function_component(MetricStrip)]
pub fn metric_strip(props: &MetricStripProps) -> Html {
    html! {
        <section class="metric-strip">
            { for props.metrics.iter().enumerate().map(|(i, metric)| html! {
                <Reveal delay_ms={i as u32 * 120} class="metric">
                    <div class="metric-value">
                        <AnimatedCounter
                            target={metric.value}
                            prefix={metric.prefix}
                            suffix={metric.suffix}
                        />
                    </div>
                    <div class="metric-label">{ metric.label }</div>
                </Reveal>
            }) }
        </section>
    }
}
