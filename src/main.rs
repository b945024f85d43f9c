use gloo_timers::callback::Timeout;
use log::{debug, error, info};
use yew::prelude::*;

mod components;
mod config;
mod content;
mod cursor;
mod dom;
mod error;
mod geometry;
mod hooks;
mod interaction;
mod motion;
mod scroll;
mod sections;
mod theme;

use components::{
    custom_cursor::CustomCursor, film_grain::FilmGrain, liquid_gradient::LiquidGradient,
    theme_switcher::ThemeSwitcher,
};
use content::SiteContent;
use scroll::{orchestrator, smooth};
use sections::{
    about::About, contact::Contact, credentials::Credentials, gallery::Gallery, hero::Hero,
    navbar::Navbar, packages::Packages, preloader::Preloader, quote::QuoteInterstitial,
    services::Services, testimonials::Testimonials,
};
use theme::{ThemeContext, ThemeState};

/// Delay before re-measuring tracks once the sections have mounted and the
/// images have had a chance to size themselves.
const REFRESH_AFTER_LOAD_MS: u32 = 100;

#[derive(Properties, PartialEq)]
struct PageProps {
    content: SiteContent,
}

#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    let content = &props.content;
    let quote = |index: usize| match content.quotes.get(index) {
        Some(quote) => html! { <QuoteInterstitial quote={quote.clone()} /> },
        None => html! {},
    };

    html! {
        <>
            <Navbar links={content.nav.clone()} />
            <main>
                <Hero hero={content.hero.clone()} />
                { quote(0) }
                <Gallery images={content.gallery.clone()} />
                { quote(1) }
                <About about={content.about.clone()} />
                <Services services={content.services.clone()} />
                <Packages plans={content.plans.clone()} />
                <Testimonials testimonials={content.testimonials.clone()} />
                <Credentials credentials={content.credentials.clone()} />
                <Contact contact={content.contact.clone()} />
            </main>
        </>
    }
}

#[function_component]
fn App() -> Html {
    let theme = use_reducer(ThemeState::default);
    let loading = use_state(|| true);
    let content = use_memo(
        |_| match SiteContent::embedded() {
            Ok(content) => Some(content),
            Err(e) => {
                error!("Failed to load site content: {}", e);
                None
            }
        },
        (),
    );

    {
        let palette = *theme.palette();
        use_effect_with_deps(
            move |palette| {
                if let Err(e) = theme::apply(palette) {
                    error!("Failed to apply theme {}: {}", palette.name, e);
                } else {
                    debug!("Theme set to {}", palette.name);
                }
                || ()
            },
            palette,
        );
    }

    use_effect_with_deps(
        move |_| {
            if let Err(e) = dom::preload_video(config::HERO_VIDEO) {
                debug!("Hero video preload skipped: {}", e);
            }
            let smooth = smooth::install();
            let driver = orchestrator::install();
            move || {
                drop(driver);
                drop(smooth);
            }
        },
        (),
    );

    {
        let loading = *loading;
        use_effect_with_deps(
            move |loading| {
                let refresh = (!*loading).then(|| {
                    Timeout::new(REFRESH_AFTER_LOAD_MS, || {
                        debug!("Sections mounted, refreshing scroll tracks");
                        orchestrator::refresh();
                    })
                });
                move || drop(refresh)
            },
            loading,
        );
    }

    let on_loaded = {
        let loading = loading.clone();
        Callback::from(move |_: ()| loading.set(false))
    };

    let body = match (*loading, &*content) {
        (true, _) => html! { <Preloader on_complete={on_loaded} /> },
        (false, Some(content)) => html! { <Page content={content.clone()} /> },
        (false, None) => html! {},
    };

    html! {
        <ContextProvider<ThemeContext> context={theme}>
            <FilmGrain />
            <LiquidGradient />
            <CustomCursor />
            { body }
            <ThemeSwitcher />
            <style>
                {r#"
                :root {
                    --primary: #E1522F;
                    --primary-dim: #E1522F40;
                    --bg-color: #222222;
                    --text-color: #ffffff;
                    --white: #ffffff;
                    --dark-lighter: #111111;
                    --nav-height: 80px;
                }

                *, *::before, *::after {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }

                html {
                    scroll-behavior: auto;
                }

                body {
                    font-family: 'Montserrat', -apple-system, BlinkMacSystemFont, sans-serif;
                    background-color: var(--bg-color);
                    color: var(--text-color);
                    overflow-x: hidden;
                    -webkit-font-smoothing: antialiased;
                    transition: background-color 0.5s ease, color 0.5s ease;
                }

                img, video {
                    display: block;
                    max-width: 100%;
                }

                a {
                    color: inherit;
                }

                .container {
                    width: 100%;
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 0 clamp(1.25rem, 5vw, 4rem);
                }

                .section-header {
                    text-align: center;
                    margin-bottom: clamp(3rem, 8vh, 5rem);
                }

                .section-label {
                    display: inline-block;
                    font-size: 0.8rem;
                    font-weight: 600;
                    letter-spacing: 3px;
                    text-transform: uppercase;
                    color: var(--primary);
                    margin-bottom: 1rem;
                }

                .section-heading {
                    font-size: clamp(2.25rem, 5vw, 4rem);
                    font-weight: 800;
                    line-height: 1.1;
                    letter-spacing: -0.02em;
                }

                .section-subheading {
                    max-width: 600px;
                    margin: 1.25rem auto 0;
                    font-size: 1.1rem;
                    line-height: 1.7;
                    color: rgba(255, 255, 255, 0.6);
                }

                .heading-accent {
                    color: var(--primary);
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(60px);
                    transition: opacity 1s cubic-bezier(0.215, 0.61, 0.355, 1),
                        transform 1s cubic-bezier(0.215, 0.61, 0.355, 1);
                }

                .reveal.clip-reveal {
                    transform: none;
                    clip-path: inset(100% 0 0 0);
                    transition: opacity 0.6s ease,
                        clip-path 1s cubic-bezier(0.77, 0, 0.175, 1);
                }

                .reveal.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                .reveal.clip-reveal.revealed {
                    clip-path: inset(0 0 0 0);
                }

                @keyframes fadeRise {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes scrollPulse {
                    0%, 100% { transform: scaleY(0); transform-origin: top; }
                    50% { transform: scaleY(1); transform-origin: top; }
                    51% { transform-origin: bottom; }
                }

                @keyframes marqueeScroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }

                @media (prefers-reduced-motion: reduce) {
                    .reveal {
                        opacity: 1;
                        transform: none;
                        clip-path: none;
                        transition: none;
                    }
                }
                "#}
            </style>
        </ContextProvider<ThemeContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
