use yew::prelude::*;

use crate::animation::hooks::use_reveal_on_view;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    /// Stagger for cards revealed as a group.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(config::REVEAL_MARGIN_PX)]
    pub margin_px: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades and lifts its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_on_view(node.clone(), props.margin_px);

    html! {
        <div
            ref={node}
            class={classes!("reveal", revealed.then(|| "revealed"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
