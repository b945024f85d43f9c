use std::rc::Rc;

use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::config;
use crate::content::GalleryImage;
use crate::hooks::{measure, use_reveal, use_scroll_track};
use crate::motion::{Channel, Ease, ElementStyle, Keyframes, StyleTarget};
use crate::scroll::{Binding, RegionSpec, Scrub, Track, TrackLayout};

/// Background drifts at this share of the track's speed.
const GRADIENT_DEPTH: f64 = 0.3;

/// Alternating parallax depth of the card images.
pub fn parallax_depth(index: usize) -> f64 {
    if index % 2 == 0 {
        0.8
    } else {
        1.2
    }
}

/// Part of the gallery progress during which a card travels from the right
/// edge of the viewport to its center. `None` when nothing moves.
pub fn reveal_window(card_offset: f64, viewport_width: f64, travel: f64) -> Option<(f64, f64)> {
    if travel <= 0.0 {
        return None;
    }
    let start = (card_offset - viewport_width) / travel;
    let end = (card_offset - viewport_width / 2.0) / travel;
    Some((start, end))
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub images: Vec<GalleryImage>,
}

/// Pinned gallery: vertical scrolling moves the cards sideways.
#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let section_ref = use_node_ref();
    let track_ref = use_node_ref();
    let gradient_ref = use_node_ref();
    let fill_ref = use_node_ref();
    let card_refs = use_memo(
        |count| (0..*count).map(|_| (NodeRef::default(), NodeRef::default())).collect::<Vec<_>>(),
        props.images.len(),
    );
    let heading_visible = use_reveal(&section_ref, 0.8);

    {
        let section_ref = section_ref.clone();
        let track_ref = track_ref.clone();
        let gradient_ref = gradient_ref.clone();
        let fill_ref = fill_ref.clone();
        let card_refs = card_refs.clone();
        use_scroll_track(move || {
            let section = section_ref.cast::<HtmlElement>()?;
            let track_el = track_ref.cast::<HtmlElement>()?;
            let spacer: Rc<dyn StyleTarget> = ElementStyle::new(section.clone());
            let track_style: Rc<dyn StyleTarget> = ElementStyle::new(track_el.clone());

            let content: Element = track_el.into();
            let outer: Element = section.into();
            let mut track = Track::new("gallery", RegionSpec::pinned_travel(), move || {
                measure(&outer, Some(&content))
            })
            .pinned(spacer)
            .scrub(Scrub::Lag(config::SCRUB_LAG))
            .bind(
                Binding::new(track_style, Channel::X, Keyframes::linear(0.0, -1.0)).travel_scaled(),
            );

            if let Some(gradient) = gradient_ref.cast::<HtmlElement>() {
                let gradient: Rc<dyn StyleTarget> = ElementStyle::new(gradient);
                let drift = Keyframes::linear(0.0, -GRADIENT_DEPTH);
                track = track.bind(Binding::new(gradient, Channel::X, drift).travel_scaled());
            }
            if let Some(fill) = fill_ref.cast::<HtmlElement>() {
                let fill: Rc<dyn StyleTarget> = ElementStyle::new(fill);
                let fill_up = Keyframes::linear(0.0, 1.0);
                track = track.bind(Binding::new(fill, Channel::ScaleX, fill_up));
            }

            for (index, (card_ref, image_ref)) in card_refs.iter().enumerate() {
                let (Some(card), Some(image)) =
                    (card_ref.cast::<HtmlElement>(), image_ref.cast::<HtmlElement>())
                else {
                    continue;
                };
                let card_style: Rc<dyn StyleTarget> = ElementStyle::new(card.clone());
                let image_style: Rc<dyn StyleTarget> = ElementStyle::new(image);
                let depth = parallax_depth(index);
                let window = move |layout: &TrackLayout| {
                    reveal_window(card.offset_left() as f64, layout.viewport_width, layout.travel())
                };

                track = track
                    .bind(Binding::new(
                        image_style.clone(),
                        Channel::ObjectPositionX,
                        Keyframes::linear(100.0, 100.0 - 100.0 * depth),
                    ))
                    .bind(
                        Binding::new(card_style, Channel::ClipRight, Keyframes::linear(100.0, 0.0))
                            .eased(Ease::Power2Out)
                            .within(window.clone()),
                    )
                    .bind(
                        Binding::new(image_style, Channel::Scale, Keyframes::linear(1.2, 1.0))
                            .eased(Ease::Power2Out)
                            .within(window),
                    );
            }
            Some(track)
        });
    }

    html! {
        <section id="gallery" ref={section_ref} class="gallery-pin">
            <div class="gallery-sticky">
                <div ref={gradient_ref} class="gallery-gradient" />

                <div class={classes!("gallery-heading", "reveal", heading_visible.then_some("revealed"))}>
                    <span class="section-label">{"Gallery"}</span>
                    <h2>{"Moments of "}<span class="heading-accent">{"Excellence"}</span></h2>
                </div>

                <div ref={track_ref} class="gallery-track">
                    { for props.images.iter().zip(card_refs.iter()).enumerate().map(|(index, (image, (card_ref, image_ref)))| html! {
                        <div ref={card_ref.clone()} class="gallery-card">
                            <img
                                ref={image_ref.clone()}
                                src={image.src.clone()}
                                alt={image.alt.clone()}
                                draggable="false"
                            />
                            <div class="gallery-card-overlay" />
                            <span class="gallery-card-number">{format!("{:02}", index + 1)}</span>
                        </div>
                    }) }
                </div>

                <div class="gallery-instruction">
                    <div class="scroll-line" />
                    <span>{"Scroll to explore"}</span>
                </div>

                <div class="gallery-progress">
                    <div ref={fill_ref} class="gallery-progress-fill" />
                </div>
            </div>
            <style>
                {r#"
                .gallery-pin {
                    position: relative;
                    background-color: #0a0a0a;
                }

                .gallery-sticky {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    width: 100%;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                }

                .gallery-gradient {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(ellipse at 20% 50%, var(--primary-dim, rgba(225, 82, 47, 0.1)) 0%, transparent 50%);
                    opacity: 0.4;
                    pointer-events: none;
                }

                .gallery-heading {
                    position: absolute;
                    top: clamp(80px, 15vh, 120px);
                    left: clamp(1rem, 4vw, 3rem);
                    z-index: 10;
                }

                .gallery-heading h2 {
                    font-size: clamp(1.5rem, 5vw, 3.5rem);
                    font-weight: 800;
                    text-transform: uppercase;
                    letter-spacing: -0.02em;
                    line-height: 1;
                    margin: 0;
                }

                .gallery-track {
                    position: relative;
                    display: flex;
                    align-items: center;
                    gap: clamp(1rem, 3vw, 2rem);
                    padding-left: clamp(1rem, 4vw, 3rem);
                    padding-right: 50vw;
                    height: 60vh;
                    min-height: 300px;
                    will-change: transform;
                }

                .gallery-card {
                    position: relative;
                    width: clamp(250px, 40vmin, 450px);
                    height: 100%;
                    flex-shrink: 0;
                    border-radius: 16px;
                    overflow: hidden;
                    clip-path: inset(0 100% 0 0);
                }

                .gallery-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    object-position: 100% center;
                    user-select: none;
                }

                .gallery-card-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0,0,0,0.5) 0%, transparent 50%);
                    pointer-events: none;
                }

                .gallery-card-number {
                    position: absolute;
                    bottom: clamp(1rem, 3vw, 1.5rem);
                    left: clamp(1rem, 3vw, 1.5rem);
                    font-size: clamp(2rem, 6vmin, 5rem);
                    font-weight: 900;
                    color: rgba(255, 255, 255, 0.1);
                    line-height: 1;
                    letter-spacing: -0.05em;
                }

                .gallery-instruction {
                    position: absolute;
                    bottom: clamp(1.5rem, 5vh, 4rem);
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.75rem;
                    z-index: 10;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 2px;
                    color: rgba(255, 255, 255, 0.4);
                }

                .gallery-progress {
                    position: absolute;
                    bottom: clamp(1.5rem, 5vh, 4rem);
                    right: clamp(1rem, 4vw, 3rem);
                    width: 100px;
                    height: 2px;
                    background-color: rgba(255, 255, 255, 0.1);
                    border-radius: 1px;
                    overflow: hidden;
                    z-index: 10;
                }

                .gallery-progress-fill {
                    width: 100%;
                    height: 100%;
                    background-color: var(--primary);
                    transform: scaleX(0);
                    transform-origin: left;
                }
                "#}
            </style>
        </section>
    }
}
