use yew::prelude::*;

use crate::interaction::{use_pointer_behavior, Behavior, TiltConfig};

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let card_ref = use_node_ref();
    use_pointer_behavior(&card_ref, Behavior::Tilt(TiltConfig::card()));

    html! {
        <div ref={card_ref} class={classes!("tilt-card", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
