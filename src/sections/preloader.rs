use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::hooks::use_count_up;

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    pub on_complete: Callback<()>,
}

/// Full-screen counter shown while the hero video loads.
#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    let fading = use_state(|| false);
    let percent = use_count_up(100, true, config::PRELOADER_COUNT_MS as f64 / 1000.0);

    {
        let fading = fading.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let hold = config::PRELOADER_COUNT_MS + config::PRELOADER_HOLD_MS;
                    TimeoutFuture::new(hold).await;
                    fading.set(true);
                    TimeoutFuture::new(config::PRELOADER_FADE_MS).await;
                    info!("preloader finished");
                    on_complete.emit(());
                });
                || ()
            },
            (),
        );
    }

    html! {
        <div
            class={classes!("preloader", (*fading).then_some("fading"))}
            style={format!("transition-duration: {}ms;", config::PRELOADER_FADE_MS)}
        >
            <div class="preloader-inner">
                <img src={config::LOGO} alt="Adaptiv" class="preloader-logo" />
                <span class="preloader-count">{format!("{}%", percent)}</span>
                <div class="preloader-bar">
                    <div class="preloader-fill" style={format!("transform: scaleX({:.2});", percent as f64 / 100.0)} />
                </div>
            </div>
            <style>
                {r#"
                .preloader {
                    position: fixed;
                    inset: 0;
                    z-index: 100001;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background-color: #0a0a0a;
                    transition-property: opacity;
                    transition-timing-function: ease;
                }

                .preloader.fading {
                    opacity: 0;
                    pointer-events: none;
                }

                .preloader-inner {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }

                .preloader-logo {
                    height: clamp(40px, 8vw, 70px);
                }

                .preloader-count {
                    font-size: clamp(3rem, 12vw, 8rem);
                    font-weight: 800;
                    letter-spacing: -0.04em;
                    color: var(--primary);
                    font-variant-numeric: tabular-nums;
                }

                .preloader-bar {
                    width: 200px;
                    height: 2px;
                    background-color: rgba(255, 255, 255, 0.1);
                    overflow: hidden;
                }

                .preloader-fill {
                    width: 100%;
                    height: 100%;
                    background-color: var(--primary);
                    transform-origin: left;
                }
                "#}
            </style>
        </div>
    }
}
