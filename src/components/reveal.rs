use yew::prelude::*;

use crate::hooks::{use_reveal, REVEAL_TRIGGER};
use crate::motion::Ease;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds to wait after entering view.
    #[prop_or_default]
    pub delay: f64,
}

/// Fades its children up the first time they reach the trigger line. The
/// motion itself is the `.reveal` transition in the page styles, on a
/// `Ease::Power3Out` curve.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(&node, REVEAL_TRIGGER);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), visible.then_some("revealed"))}
            style={format!(
                "transition-delay: {:.2}s; transition-timing-function: {};",
                props.delay,
                Ease::Power3Out.css_timing(),
            )}
        >
            { for props.children.iter() }
        </div>
    }
}
