use yew::prelude::*;

use crate::interaction::{use_pointer_behavior, Behavior, MagneticConfig};

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or(0.5)]
    pub strength: f64,
}

/// A button that leans toward the pointer; its label follows at half the
/// distance.
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let button_ref = use_node_ref();
    let behavior = Behavior::Magnetic(
        MagneticConfig::with_strength(props.strength)
            .durations(0.4, 0.7)
            .follower(".magnetic-label", 0.5),
    );
    use_pointer_behavior(&button_ref, behavior);

    html! {
        <button
            ref={button_ref}
            class={classes!("magnetic-button", props.class.clone())}
            onclick={props.onclick.clone()}
        >
            <span class="magnetic-label">{ for props.children.iter() }</span>
            <style>
                {r#"
                .magnetic-button {
                    position: relative;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    padding: clamp(1rem, 2vw, 1.2rem) clamp(1.5rem, 3vw, 2.5rem);
                    font-size: clamp(0.85rem, 1.5vw, 1rem);
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 2px;
                    background-color: var(--primary);
                    color: var(--white);
                    border: none;
                    border-radius: 4px;
                    cursor: pointer;
                    overflow: hidden;
                }

                .magnetic-label {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    position: relative;
                    z-index: 1;
                }
                "#}
            </style>
        </button>
    }
}
