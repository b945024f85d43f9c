use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::Testimonial;

#[derive(Properties, PartialEq)]
struct MarqueeRowProps {
    testimonials: Vec<Testimonial>,
    #[prop_or_default]
    reverse: bool,
    duration_secs: u32,
}

/// One endless row; the cards are rendered twice so the loop has no seam.
#[function_component(MarqueeRow)]
fn marquee_row(props: &MarqueeRowProps) -> Html {
    let card = |review: &Testimonial| {
        html! {
            <div class="testimonial-card">
                <p class="testimonial-text">{format!("\"{}\"", review.text)}</p>
                <div class="testimonial-author">
                    <h4>{review.name.clone()}</h4>
                    <span>{review.role.clone()}</span>
                </div>
            </div>
        }
    };

    html! {
        <div class="marquee">
            <div
                class={classes!("marquee-track", props.reverse.then_some("reverse"))}
                style={format!("animation-duration: {}s;", props.duration_secs)}
            >
                { for props.testimonials.iter().map(card) }
                { for props.testimonials.iter().map(card) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub testimonials: Vec<Testimonial>,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    html! {
        <section id="testimonials" class="testimonials">
            <Reveal class="container">
                <h2 class="testimonials-heading">{"Success Stories"}</h2>
            </Reveal>

            <MarqueeRow testimonials={props.testimonials.clone()} duration_secs={40} />
            <div class="marquee-gap" />
            <MarqueeRow testimonials={props.testimonials.clone()} reverse=true duration_secs={50} />

            <style>
                {r#"
                .testimonials {
                    min-height: 80vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    padding: clamp(4rem, 10vh, 8rem) 0;
                    overflow: hidden;
                }

                .testimonials-heading {
                    text-align: center;
                    margin-bottom: clamp(2rem, 5vh, 4rem);
                    font-size: clamp(2rem, 5vw, 3.5rem);
                    text-transform: uppercase;
                }

                .marquee {
                    overflow: hidden;
                    width: 100%;
                }

                .marquee-track {
                    display: flex;
                    width: max-content;
                    animation-name: marqueeScroll;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }

                .marquee-track.reverse {
                    animation-direction: reverse;
                }

                .marquee:hover .marquee-track {
                    animation-play-state: paused;
                }

                .marquee-gap {
                    height: 4rem;
                }

                .testimonial-card {
                    background-color: var(--dark-lighter);
                    padding: clamp(1.25rem, 3vw, 2rem);
                    border-radius: 15px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    width: clamp(280px, 80vw, 350px);
                    margin: 0 1rem;
                    flex-shrink: 0;
                }

                .testimonial-text {
                    font-size: clamp(0.95rem, 2vw, 1.1rem);
                    font-style: italic;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                    color: rgba(255, 255, 255, 0.85);
                }

                .testimonial-author h4 {
                    margin: 0;
                    color: var(--primary);
                }

                .testimonial-author span {
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.5);
                }
                "#}
            </style>
        </section>
    }
}
