use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::content::NavLink;
use crate::dom;
use crate::hooks::use_scroll_track;
use crate::interaction::{use_pointer_behavior, Behavior, MagneticConfig};
use crate::motion::{Channel, ElementStyle, Keyframes, StyleTarget};
use crate::scroll::{smooth, Binding, RegionSpec, Track, TrackLayout};

/// The whole document as one tall element starting at the top.
fn measure_page() -> Option<TrackLayout> {
    let root = dom::root_element().ok()?;
    let (viewport_width, viewport_height) = dom::viewport();
    Some(TrackLayout {
        element_top: 0.0,
        element_height: root.scroll_height() as f64,
        viewport_width,
        viewport_height,
        content_width: viewport_width,
    })
}

fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLLED_THRESHOLD
}

#[derive(Properties, PartialEq)]
struct MagneticLinkProps {
    name: String,
    target: String,
    onclick: Callback<MouseEvent>,
}

#[function_component(MagneticLink)]
fn magnetic_link(props: &MagneticLinkProps) -> Html {
    let link_ref = use_node_ref();
    use_pointer_behavior(
        &link_ref,
        Behavior::Magnetic(MagneticConfig::with_strength(0.3).durations(0.2, 0.3)),
    );

    html! {
        <a ref={link_ref} href={format!("#{}", props.target)} class="nav-link" onclick={props.onclick.clone()}>
            <span class="nav-link-text">{props.name.clone()}</span>
            <span class="link-line" />
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub links: Vec<NavLink>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state_eq(|| false);
    let progress_ref = use_node_ref();

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = match dom::window() {
                    Ok(window) => {
                        scrolled.set(is_scrolled(dom::scroll_y()));
                        Some(EventListener::new(&window, "scroll", move |_| {
                            scrolled.set(is_scrolled(dom::scroll_y()));
                        }))
                    }
                    Err(err) => {
                        debug!("navbar without window: {}", err);
                        None
                    }
                };
                move || drop(listener)
            },
            (),
        );
    }

    {
        let progress_ref = progress_ref.clone();
        use_scroll_track(move || {
            let bar: Rc<dyn StyleTarget> = ElementStyle::new(progress_ref.cast::<HtmlElement>()?);
            Some(
                Track::new("page progress", RegionSpec::scrolling_through(), measure_page).bind(
                    Binding::new(bar, Channel::ScaleX, Keyframes::linear(0.0, 1.0)).resting_at(0.0),
                ),
            )
        });
    }

    let navigate = {
        let menu_open = menu_open.clone();
        move |target: String| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if let Err(err) = smooth::scroll_to_section(&target) {
                    debug!("cannot scroll to {}: {}", target, err);
                }
                menu_open.set(false);
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <nav class={classes!("site-nav", (*scrolled).then_some("scrolled"))}>
            <div class="nav-inner">
                <a href="#home" class="nav-logo" onclick={navigate("home".to_string())}>
                    <img src={config::LOGO} alt="Adaptiv" />
                </a>

                <ul class="desktop-menu">
                    { for props.links.iter().map(|link| html! {
                        <li key={link.target.clone()}>
                            <MagneticLink
                                name={link.name.clone()}
                                target={link.target.clone()}
                                onclick={navigate(link.target.clone())}
                            />
                        </li>
                    }) }
                </ul>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    if *menu_open {
                        <i class="fa-solid fa-xmark"></i>
                    } else {
                        <i class="fa-solid fa-bars"></i>
                    }
                </button>

                if *menu_open {
                    <div class="mobile-menu">
                        { for props.links.iter().enumerate().map(|(i, link)| html! {
                            <a
                                key={link.target.clone()}
                                href={format!("#{}", link.target)}
                                class="mobile-link"
                                style={format!("animation-delay: {:.2}s;", i as f64 * 0.06)}
                                onclick={navigate(link.target.clone())}
                            >
                                <span class="mobile-link-number">{format!("{:02}", i + 1)}</span>
                                {link.name.clone()}
                            </a>
                        }) }
                    </div>
                }
            </div>

            <div ref={progress_ref} class="nav-progress" />

            <style>
                {r#"
                .site-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: var(--nav-height, 80px);
                    z-index: 1000;
                    background-color: transparent;
                    transition: background-color 0.3s ease, backdrop-filter 0.3s ease;
                    animation: navDrop 0.5s cubic-bezier(0.22, 1, 0.36, 1);
                }

                .site-nav.scrolled {
                    background-color: rgba(0, 0, 0, 0.9);
                    backdrop-filter: blur(20px);
                }

                .nav-inner {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    height: 100%;
                    padding: 0 clamp(1rem, 4vw, 2rem);
                    max-width: 1400px;
                    margin: 0 auto;
                }

                .nav-logo {
                    height: clamp(35px, 6vw, 50px);
                    display: block;
                    transition: transform 0.2s ease;
                }

                .nav-logo:hover {
                    transform: scale(1.05);
                }

                .nav-logo img {
                    height: 100%;
                    object-fit: contain;
                }

                .desktop-menu {
                    display: flex;
                    gap: 2.5rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }

                .nav-link {
                    position: relative;
                    display: inline-block;
                    padding: 0.5rem 0;
                    font-weight: 500;
                    font-size: 0.85rem;
                    letter-spacing: 1px;
                    text-transform: uppercase;
                    color: #fff;
                    text-decoration: none;
                }

                .nav-link-text {
                    position: relative;
                    z-index: 1;
                }

                .link-line {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    height: 2px;
                    background-color: var(--primary);
                    transform: scaleX(0);
                    transform-origin: right;
                    transition: transform 0.3s ease;
                }

                .nav-link:hover .link-line {
                    transform: scaleX(1);
                    transform-origin: left;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }

                .mobile-menu {
                    position: fixed;
                    top: var(--nav-height, 60px);
                    left: 0;
                    width: 100%;
                    height: calc(100vh - var(--nav-height, 60px));
                    background-color: rgba(0, 0, 0, 0.98);
                    padding: clamp(1.5rem, 4vw, 3rem) clamp(1rem, 4vw, 2rem);
                    display: flex;
                    flex-direction: column;
                    gap: clamp(1rem, 3vw, 1.5rem);
                    overflow-y: auto;
                    animation: menuReveal 0.3s cubic-bezier(0.22, 1, 0.36, 1);
                }

                .mobile-link {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    min-height: 44px;
                    font-size: clamp(1.5rem, 5vw, 2rem);
                    font-weight: 700;
                    letter-spacing: 2px;
                    text-transform: uppercase;
                    color: #fff;
                    text-decoration: none;
                    opacity: 0;
                    animation: linkIn 0.2s ease forwards;
                }

                .mobile-link-number {
                    font-size: 0.9rem;
                    font-weight: 400;
                    color: var(--primary);
                }

                .nav-progress {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    height: 2px;
                    background: var(--primary);
                    transform-origin: left;
                    transform: scaleX(0);
                }

                @media (max-width: 768px) {
                    .desktop-menu {
                        display: none;
                    }

                    .burger-menu {
                        display: block;
                    }
                }

                @keyframes navDrop {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }

                @keyframes menuReveal {
                    from { opacity: 0; clip-path: inset(0 0 100% 0); }
                    to { opacity: 1; clip-path: inset(0 0 0% 0); }
                }

                @keyframes linkIn {
                    from { opacity: 0; transform: translateX(-20px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_turns_opaque_past_the_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(config::NAV_SCROLLED_THRESHOLD));
        assert!(is_scrolled(config::NAV_SCROLLED_THRESHOLD + 1.0));
    }
}
