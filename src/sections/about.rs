use std::rc::Rc;

use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::content::{About as AboutContent, Stat};
use crate::hooks::{measure, use_count_up, use_reveal, use_scroll_track, REVEAL_TRIGGER};
use crate::motion::{Channel, Ease, ElementStyle, Keyframes, StyleTarget};
use crate::scroll::{Binding, RegionSpec, Track};

const COUNT_DURATION: f64 = 1.2;

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    stat: Stat,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let number_ref = use_node_ref();
    let visible = use_reveal(&number_ref, REVEAL_TRIGGER);
    let shown = use_count_up(props.stat.value, visible, COUNT_DURATION);

    html! {
        <div class="stat">
            <span ref={number_ref} class="stat-number">{format!("{}{}", shown, props.stat.suffix)}</span>
            <span class="stat-label">{props.stat.label.clone()}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ClipParagraphProps {
    text: String,
    index: usize,
}

#[function_component(ClipParagraph)]
fn clip_paragraph(props: &ClipParagraphProps) -> Html {
    let paragraph_ref = use_node_ref();
    let visible = use_reveal(&paragraph_ref, REVEAL_TRIGGER);

    html! {
        <p
            ref={paragraph_ref}
            class={classes!("about-text", visible.then_some("revealed"))}
            style={format!("transition-delay: {:.2}s;", props.index as f64 * 0.07)}
        >
            {props.text.clone()}
        </p>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub about: AboutContent,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let heading_ref = use_node_ref();
    let image_col_ref = use_node_ref();
    let image_ref = use_node_ref();
    let heading_visible = use_reveal(&heading_ref, 0.8);
    let image_visible = use_reveal(&image_col_ref, 0.7);

    {
        let image_col_ref = image_col_ref.clone();
        let image_ref = image_ref.clone();
        use_scroll_track(move || {
            let column = image_col_ref.cast::<Element>()?;
            let image: Rc<dyn StyleTarget> = ElementStyle::new(image_ref.cast::<HtmlElement>()?);
            Some(
                Track::new("about image", RegionSpec::crossing(), move || measure(&column, None))
                    .bind(Binding::new(image, Channel::YPercent, Keyframes::linear(0.0, -15.0))),
            )
        });
    }

    let about = &props.about;
    let char_timing = Ease::BackOut(1.7).css_timing();
    let image_timing = format!("transition-timing-function: {};", Ease::Power4InOut.css_timing());

    html! {
        <section id="about" class="about">
            <div class="about-row">
                <div class="about-text-column">
                    <h2 ref={heading_ref} class={classes!("about-heading", heading_visible.then_some("revealed"))}>
                        { for about.heading.chars().enumerate().map(|(i, c)| {
                            if c == ' ' {
                                html! { {" "} }
                            } else {
                                html! {
                                    <span
                                        class="char"
                                        style={format!(
                                            "transition-delay: {:.2}s; transition-timing-function: {};",
                                            i as f64 * 0.02,
                                            char_timing,
                                        )}
                                    >
                                        {c.to_string()}
                                    </span>
                                }
                            }
                        }) }
                    </h2>

                    { for about.paragraphs.iter().enumerate().map(|(index, text)| html! {
                        <ClipParagraph text={text.clone()} {index} />
                    }) }

                    <div class="stats">
                        { for about.stats.iter().map(|stat| html! {
                            <StatCounter stat={stat.clone()} />
                        }) }
                    </div>
                </div>

                <div ref={image_col_ref} class="about-image-column">
                    <div
                        class={classes!("about-image-reveal", image_visible.then_some("revealed"))}
                        style={image_timing}
                    >
                        <img ref={image_ref} src={about.image.clone()} alt={about.heading.clone()} />
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .about {
                    min-height: 100vh;
                    padding: clamp(80px, 15vh, 120px) clamp(1rem, 4vw, 2rem) clamp(2rem, 5vh, 4rem);
                    overflow: hidden;
                }

                .about-row {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    gap: clamp(2rem, 5vw, 4rem);
                    align-items: center;
                    flex-wrap: wrap;
                }

                .about-text-column {
                    flex: 1 1 min(100%, 450px);
                }

                .about-image-column {
                    flex: 1 1 min(100%, 350px);
                    overflow: hidden;
                }

                .about-heading {
                    margin-bottom: 2rem;
                    color: var(--primary);
                    font-size: clamp(2.5rem, 6vw, 4rem);
                    font-weight: 800;
                    text-transform: uppercase;
                    letter-spacing: -0.02em;
                    perspective: 1000px;
                }

                .about-heading .char {
                    display: inline-block;
                    opacity: 0;
                    transform: translateY(50px) rotateX(-90deg);
                    transition-property: opacity, transform;
                    transition-duration: 0.5s;
                }

                .about-heading.revealed .char {
                    opacity: 1;
                    transform: translateY(0) rotateX(0);
                }

                .about-text {
                    font-size: 1.1rem;
                    line-height: 1.8;
                    margin-bottom: 1.5rem;
                    color: rgba(255, 255, 255, 0.8);
                    opacity: 0;
                    clip-path: inset(0 0 100% 0);
                    transition: clip-path 0.6s cubic-bezier(0.215, 0.61, 0.355, 1), opacity 0.6s cubic-bezier(0.215, 0.61, 0.355, 1);
                }

                .about-text.revealed {
                    opacity: 1;
                    clip-path: inset(0 0 0% 0);
                }

                .stats {
                    display: flex;
                    gap: 2rem;
                    margin-top: 2rem;
                    flex-wrap: wrap;
                }

                .stat {
                    display: flex;
                    flex-direction: column;
                }

                .stat-number {
                    font-size: clamp(2rem, 5vw, 3rem);
                    font-weight: 800;
                    color: var(--primary);
                    font-variant-numeric: tabular-nums;
                }

                .stat-label {
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    letter-spacing: 1px;
                    color: rgba(255, 255, 255, 0.6);
                }

                .about-image-reveal {
                    overflow: hidden;
                    border-radius: 12px;
                    clip-path: inset(0 100% 0 0);
                    transition: clip-path 0.7s;
                }

                .about-image-reveal.revealed {
                    clip-path: inset(0 0% 0 0);
                }

                .about-image-reveal img {
                    display: block;
                    width: 100%;
                    height: 120%;
                    object-fit: cover;
                }
                "#}
            </style>
        </section>
    }
}
