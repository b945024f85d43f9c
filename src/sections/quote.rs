use std::rc::Rc;

use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::content::Quote;
use crate::hooks::{measure, use_reveal, use_scroll_track, REVEAL_TRIGGER};
use crate::motion::{Channel, ElementStyle, Keyframes, StyleTarget};
use crate::scroll::{Binding, RegionSpec, Track};

/// A word is highlighted when its lower-cased form, without `.,!?`, is in
/// `highlight`.
pub fn is_highlighted(word: &str, highlight: &[String]) -> bool {
    let normalized: String = word
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '!' | '?'))
        .collect::<String>()
        .to_lowercase();
    highlight.iter().any(|h| *h == normalized)
}

#[derive(Properties, PartialEq)]
pub struct QuoteInterstitialProps {
    pub quote: Quote,
}

/// Full-width quote that drifts, fades and swells while it crosses the
/// viewport.
#[function_component(QuoteInterstitial)]
pub fn quote_interstitial(props: &QuoteInterstitialProps) -> Html {
    let section_ref = use_node_ref();
    let content_ref = use_node_ref();
    let revealed = use_reveal(&content_ref, REVEAL_TRIGGER);

    {
        let section_ref = section_ref.clone();
        let content_ref = content_ref.clone();
        use_scroll_track(move || {
            let section = section_ref.cast::<Element>()?;
            let content: Rc<dyn StyleTarget> = ElementStyle::new(content_ref.cast::<HtmlElement>()?);
            Some(
                Track::new("quote", RegionSpec::crossing(), move || measure(&section, None))
                    .bind(Binding::new(
                        content.clone(),
                        Channel::Y,
                        Keyframes::linear(100.0, -100.0),
                    ))
                    .bind(Binding::new(
                        content.clone(),
                        Channel::Opacity,
                        Keyframes::new(&[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0]),
                    ))
                    .bind(Binding::new(
                        content,
                        Channel::Scale,
                        Keyframes::new(&[0.0, 0.5, 1.0], &[0.8, 1.05, 0.8]),
                    )),
            )
        });
    }

    let highlight = &props.quote.highlight;

    html! {
        <section ref={section_ref} class="quote-interstitial">
            <div ref={content_ref} class={classes!("quote-content", revealed.then_some("revealed"))}>
                <h2 class="quote-text">
                    { for props.quote.text.split(' ').enumerate().map(|(i, word)| html! {
                        <span
                            class={classes!("quote-word", is_highlighted(word, highlight).then_some("highlight"))}
                            style={format!("transition-delay: {:.2}s;", i as f64 * 0.05)}
                        >
                            {word}{" "}
                        </span>
                    }) }
                </h2>
            </div>
            <style>
                {r#"
                .quote-interstitial {
                    position: relative;
                    min-height: clamp(50vh, 70vh, 80vh);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background-color: #000;
                    overflow: hidden;
                    padding: clamp(2rem, 5vh, 4rem) clamp(1rem, 5vw, 8rem);
                }

                .quote-content {
                    text-align: center;
                    max-width: 1400px;
                    width: 100%;
                    will-change: transform, opacity;
                }

                .quote-text {
                    font-size: clamp(1.75rem, 6vw, 8rem);
                    font-weight: 800;
                    line-height: 1.15;
                    text-transform: uppercase;
                    letter-spacing: -0.02em;
                }

                .quote-word {
                    display: inline-block;
                    margin-right: 0.3em;
                    color: var(--white);
                    -webkit-text-stroke: 1px rgba(255, 255, 255, 0.3);
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.8s cubic-bezier(0.22, 1, 0.36, 1), transform 0.8s cubic-bezier(0.22, 1, 0.36, 1);
                }

                .quote-word.highlight {
                    color: var(--primary);
                    -webkit-text-stroke: 0;
                }

                .quote-content.revealed .quote-word {
                    opacity: 1;
                    transform: translateY(0);
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        let highlight = words(&["redefining", "wins", "legacy"]);
        assert!(is_highlighted("Redefining", &highlight));
        assert!(is_highlighted("wins,", &highlight));
        assert!(is_highlighted("legacy.", &highlight));
        assert!(!is_highlighted("limits,", &highlight));
    }

    #[test]
    fn only_listed_punctuation_is_stripped() {
        let highlight = words(&["faster"]);
        assert!(is_highlighted("FASTER!?", &highlight));
        assert!(!is_highlighted("faster;", &highlight));
    }
}
