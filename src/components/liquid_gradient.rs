use yew::prelude::*;

use crate::motion::Ease;

/// Three blurred blobs in the primary color drifting behind the page.
#[function_component(LiquidGradient)]
pub fn liquid_gradient() -> Html {
    let drift = format!("animation-timing-function: {};", Ease::SineInOut.css_timing());

    html! {
        <div class="liquid-gradient" aria-hidden="true">
            <div class="blob blob-one" style={drift.clone()} />
            <div class="blob blob-two" style={drift.clone()} />
            <div class="blob blob-three" style={drift} />
            <style>
                {r#"
                .liquid-gradient {
                    position: fixed;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                    z-index: 0;
                }

                .blob {
                    position: absolute;
                    border-radius: 50%;
                    background: radial-gradient(circle, var(--primary, #E1522F) 0%, transparent 70%);
                    will-change: transform;
                    animation-iteration-count: infinite;
                    animation-direction: alternate;
                }

                .blob-one {
                    top: 10%;
                    right: 15%;
                    width: 40vw;
                    height: 40vw;
                    filter: blur(90px);
                    opacity: 0.1;
                    mix-blend-mode: soft-light;
                    animation-name: driftOne;
                    animation-duration: 25s;
                }

                .blob-two {
                    top: 45%;
                    left: 10%;
                    width: 45vw;
                    height: 45vw;
                    filter: blur(100px);
                    opacity: 0.08;
                    mix-blend-mode: screen;
                    animation-name: driftTwo;
                    animation-duration: 28s;
                    animation-delay: 1s;
                }

                .blob-three {
                    bottom: 15%;
                    left: 50%;
                    width: 38vw;
                    height: 38vw;
                    filter: blur(85px);
                    opacity: 0.09;
                    mix-blend-mode: soft-light;
                    transform: translateX(-50%);
                    animation-name: driftThree;
                    animation-duration: 22s;
                    animation-delay: 2s;
                }

                @keyframes driftOne {
                    to { transform: translate(15vw, 10vh); }
                }

                @keyframes driftTwo {
                    to { transform: translate(-12vw, 15vh); }
                }

                @keyframes driftThree {
                    from { transform: translateX(-50%); }
                    to { transform: translateX(-50%) translate(8vw, -12vh); }
                }
                "#}
            </style>
        </div>
    }
}
