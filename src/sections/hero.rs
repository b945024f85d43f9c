use std::rc::Rc;

use log::debug;
use web_sys::{Element, HtmlElement, HtmlMediaElement};
use yew::prelude::*;

use crate::components::magnetic_button::MagneticButton;
use crate::content::Hero as HeroContent;
use crate::hooks::{measure, use_scroll_track};
use crate::motion::{Channel, Ease, ElementStyle, Keyframes, StyleTarget};
use crate::scroll::smooth;
use crate::scroll::{Binding, RegionSpec, Track};

const WORD_DELAY: f64 = 0.5;
const WORD_STAGGER: f64 = 0.08;

/// Splits the headline into words, flagging the accented ones.
pub fn headline_words(headline: &str, accent_from: usize) -> Vec<(String, bool)> {
    headline
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| (word.to_string(), i >= accent_from))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: HeroContent,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let section_ref = use_node_ref();
    let backdrop_ref = use_node_ref();
    let video_ref = use_node_ref();
    let video_loaded = use_state(|| false);

    {
        let section_ref = section_ref.clone();
        let backdrop_ref = backdrop_ref.clone();
        use_scroll_track(move || {
            let section = section_ref.cast::<Element>()?;
            let backdrop: Rc<dyn StyleTarget> = ElementStyle::new(backdrop_ref.cast::<HtmlElement>()?);
            Some(
                Track::new("hero", RegionSpec::leaving(), move || measure(&section, None))
                    .bind(Binding::new(backdrop, Channel::YPercent, Keyframes::linear(0.0, 30.0))),
            )
        });
    }

    {
        // Attribute `muted` does not mute a created element, autoplay needs the property.
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                    video.set_muted(true);
                    if let Err(err) = video.play() {
                        debug!("hero video did not start: {:?}", err);
                    }
                }
                || ()
            },
            (),
        );
    }

    let on_loaded = {
        let video_loaded = video_loaded.clone();
        Callback::from(move |_: Event| video_loaded.set(true))
    };

    let to_contact = Callback::from(|_: MouseEvent| {
        if let Err(err) = smooth::scroll_to_section("contact") {
            debug!("cannot scroll to contact: {}", err);
        }
    });

    let hero = &props.hero;
    let words = headline_words(&hero.headline, hero.accent_from);
    let word_timing = Ease::Power4Out.css_timing();

    html! {
        <section id="home" ref={section_ref} class="hero">
            <div ref={backdrop_ref} class="hero-backdrop">
                <video
                    ref={video_ref}
                    class={classes!("hero-video", (*video_loaded).then_some("loaded"))}
                    autoplay=true
                    muted=true
                    loop=true
                    playsinline=true
                    onloadeddata={on_loaded}
                >
                    <source src={hero.video.clone()} type="video/mp4" />
                </video>
                <div class="hero-overlay" />
            </div>

            <div class="hero-content">
                <h1 class="hero-headline">
                    { for words.into_iter().enumerate().map(|(i, (word, accent))| html! {
                        <span class="word-wrapper">
                            <span
                                class={classes!("word", accent.then_some("accent"))}
                                style={format!(
                                    "animation-delay: {:.2}s; animation-timing-function: {};",
                                    WORD_DELAY + i as f64 * WORD_STAGGER,
                                    word_timing,
                                )}
                            >
                                {word}
                            </span>
                        </span>
                    }) }
                </h1>

                <p class="hero-subtitle">
                    { for hero.subtitle.iter().enumerate().map(|(i, line)| html! {
                        <>
                            if i > 0 { <br /> }
                            {line.clone()}
                        </>
                    }) }
                </p>

                <div class="hero-cta">
                    <MagneticButton onclick={to_contact}>
                        <span>{hero.cta.clone()}</span>
                        <span class="hero-cta-arrow">{"\u{2192}"}</span>
                    </MagneticButton>
                </div>
            </div>

            <div class="scroll-indicator">
                <div class="scroll-line" />
                <span class="scroll-text">{"Scroll"}</span>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    min-height: 600px;
                    width: 100%;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                }

                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                    will-change: transform;
                }

                .hero-video {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }

                .hero-video.loaded {
                    opacity: 1;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0,0,0,0.6) 0%, rgba(0,0,0,0.4) 50%, rgba(0,0,0,0.8) 100%);
                }

                .hero-content {
                    position: relative;
                    z-index: 2;
                    width: 100%;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 clamp(1.5rem, 4vw, 3rem);
                }

                .hero-headline {
                    font-size: clamp(2.5rem, 10vw, 7rem);
                    font-weight: 800;
                    line-height: 1.1;
                    margin-bottom: clamp(1.5rem, 3vw, 2rem);
                    text-transform: uppercase;
                    letter-spacing: -0.02em;
                    perspective: 1000px;
                }

                .word-wrapper {
                    display: inline-block;
                    overflow: hidden;
                    margin-right: 0.3em;
                    vertical-align: top;
                }

                .word {
                    display: inline-block;
                    color: var(--white);
                    transform-origin: center bottom;
                    opacity: 0;
                    /* power4.out */
                    animation: wordRise 1.2s forwards;
                }

                .word.accent {
                    color: var(--primary);
                }

                .hero-subtitle {
                    font-size: clamp(0.95rem, 2vw, 1.3rem);
                    color: rgba(255, 255, 255, 0.8);
                    max-width: 600px;
                    margin-bottom: clamp(2rem, 4vw, 2.5rem);
                    line-height: 1.6;
                    opacity: 0;
                    animation: fadeRise 1s cubic-bezier(0.215, 0.61, 0.355, 1) 1.2s forwards;
                }

                .hero-cta {
                    opacity: 0;
                    animation: fadeRise 0.8s cubic-bezier(0.215, 0.61, 0.355, 1) 1.5s forwards;
                }

                .hero-cta-arrow {
                    transition: transform 0.3s ease;
                }

                .hero-cta:hover .hero-cta-arrow {
                    transform: translateX(4px);
                }

                .scroll-indicator {
                    position: absolute;
                    bottom: clamp(1.5rem, 4vh, 3rem);
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    z-index: 2;
                }

                .scroll-line {
                    width: 1px;
                    height: clamp(40px, 8vh, 60px);
                    background: linear-gradient(to bottom, var(--primary), transparent);
                    animation: scrollPulse 2s ease-in-out infinite;
                }

                .scroll-text {
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    letter-spacing: 2px;
                    color: rgba(255, 255, 255, 0.5);
                }

                @keyframes wordRise {
                    from { opacity: 0; transform: translateY(120px) rotateX(-90deg); }
                    to { opacity: 1; transform: translateY(0) rotateX(0); }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_starts_at_configured_word() {
        let words = headline_words("Unlock Your Full Potential", 2);
        let accents: Vec<bool> = words.iter().map(|(_, accent)| *accent).collect();
        assert_eq!(accents, vec![false, false, true, true]);
        assert_eq!(words[3].0, "Potential");
    }

    #[test]
    fn extra_spaces_do_not_make_words() {
        assert_eq!(headline_words("  Go   far ", 5).len(), 2);
    }
}
