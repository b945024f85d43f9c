use chrono::Datelike;
use log::debug;
use yew::prelude::*;

use crate::components::magnetic_button::MagneticButton;
use crate::components::reveal::Reveal;
use crate::content::Contact as ContactContent;
use crate::dom;
use crate::error::DomError;

/// Card background: the method's color at low alpha. CSS variables cannot
/// take a hex alpha suffix, so they fall back to the dimmed primary.
pub fn icon_background(color: &str) -> String {
    if color.starts_with('#') {
        format!("{}20", color)
    } else {
        "var(--primary-dim)".to_string()
    }
}

/// Opens the booking chat in a new tab. A blocked popup is not an error.
fn open_booking(url: &str) -> Result<(), DomError> {
    if dom::window()?.open_with_url_and_target(url, "_blank")?.is_none() {
        debug!("booking tab was blocked");
    }
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub contact: ContactContent,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let contact = &props.contact;
    let booking_url = contact.booking.whatsapp_url();
    let year = chrono::Local::now().year();

    let book = {
        let booking_url = booking_url.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = open_booking(&booking_url) {
                debug!("cannot open booking link: {}", err);
            }
        })
    };

    html! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="contact-wrapper">
                    <div class="contact-left">
                        <Reveal>
                            <span class="section-label">{"Get in Touch"}</span>
                            <h2 class="section-heading">
                                {"Let's Start Your"}<br />
                                <span class="heading-accent">{"Journey Together"}</span>
                            </h2>
                        </Reveal>

                        <Reveal delay={0.1}>
                            <p class="contact-description">
                                {"Ready to transform your performance? Reach out through any channel and let's discuss how we can help you achieve your goals."}
                            </p>
                            <div class="contact-location">
                                <i class="fa-solid fa-location-dot"></i>
                                <span>{contact.location.clone()}</span>
                            </div>
                        </Reveal>

                        <div class="contact-cards">
                            { for contact.methods.iter().enumerate().map(|(i, method)| html! {
                                <Reveal delay={0.2 + i as f64 * 0.1}>
                                    <a href={method.href.clone()} target="_blank" rel="noopener noreferrer" class="contact-card">
                                        <div class="contact-icon" style={format!("background: {}; color: {};", icon_background(&method.color), method.color)}>
                                            <i class={method.icon.clone()}></i>
                                        </div>
                                        <div class="contact-card-content">
                                            <span class="contact-card-label">{method.label.clone()}</span>
                                            <span class="contact-card-value">{method.value.clone()}</span>
                                        </div>
                                        <i class="fa-solid fa-arrow-right card-arrow"></i>
                                    </a>
                                </Reveal>
                            }) }
                        </div>
                    </div>

                    <div class="contact-right">
                        <Reveal class="cta-box">
                            <span class="cta-label">{"Ready to Start?"}</span>
                            <h3 class="cta-heading">{"Book Your Free Consultation"}</h3>
                            <p class="cta-text">
                                {"Get a personalized assessment and learn how we can help you reach your fitness goals. No commitment required."}
                            </p>
                            <MagneticButton class="cta-button" onclick={book}>
                                <span>{"Schedule Now"}</span>
                                <i class="fa-solid fa-arrow-right"></i>
                            </MagneticButton>
                            <div class="cta-decor cta-decor-one" />
                            <div class="cta-decor cta-decor-two" />
                        </Reveal>
                    </div>
                </div>
            </div>

            <footer class="site-footer">
                <div class="container footer-content">
                    <p class="copyright">{format!("\u{a9} {} {}. All rights reserved.", year, contact.brand)}</p>
                    <p class="footer-tagline">{contact.tagline.clone()}</p>
                </div>
            </footer>

            <style>
                {r#"
                .contact {
                    min-height: 100vh;
                    padding: clamp(5rem, 15vh, 10rem) 0 0;
                    background: #0a0a0a;
                    position: relative;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                }

                .contact-wrapper {
                    display: flex;
                    flex-wrap: wrap;
                    gap: clamp(2rem, 5vw, 5rem);
                    align-items: flex-start;
                    margin-bottom: clamp(4rem, 10vh, 8rem);
                }

                .contact-left {
                    flex: 1 1 min(100%, 450px);
                }

                .contact-right {
                    flex: 1 1 min(100%, 380px);
                }

                .contact-description {
                    font-size: 1.1rem;
                    line-height: 1.7;
                    color: rgba(255, 255, 255, 0.7);
                    margin: 1.5rem 0;
                }

                .contact-location {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: rgba(255, 255, 255, 0.8);
                    margin-bottom: 2.5rem;
                }

                .contact-location i {
                    color: var(--primary);
                }

                .contact-cards {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .contact-card {
                    display: flex;
                    align-items: center;
                    gap: 1.25rem;
                    padding: 1.25rem 1.5rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    color: #fff;
                    text-decoration: none;
                    transition: all 0.3s cubic-bezier(0.16, 1, 0.3, 1);
                }

                .contact-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 12px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.35rem;
                    flex-shrink: 0;
                }

                .contact-card-content {
                    display: flex;
                    flex-direction: column;
                    flex: 1;
                }

                .contact-card-label {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 1px;
                    color: rgba(255, 255, 255, 0.5);
                }

                .contact-card-value {
                    font-weight: 600;
                }

                .card-arrow {
                    opacity: 0;
                    transform: translateX(-10px);
                    transition: all 0.3s ease;
                    color: var(--primary);
                }

                .cta-box {
                    position: relative;
                    overflow: hidden;
                    padding: clamp(2rem, 4vw, 3rem);
                    border-radius: 24px;
                    background: var(--primary);
                }

                .cta-label {
                    display: block;
                    font-size: 0.8rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 2px;
                    opacity: 0.8;
                    margin-bottom: 1rem;
                }

                .cta-heading {
                    font-size: clamp(1.75rem, 3vw, 2.25rem);
                    font-weight: 800;
                    line-height: 1.2;
                    margin-bottom: 1rem;
                }

                .cta-text {
                    line-height: 1.7;
                    opacity: 0.9;
                    margin-bottom: 2rem;
                }

                .cta-button.magnetic-button {
                    background-color: #fff;
                    color: #000;
                    position: relative;
                    z-index: 1;
                }

                .cta-decor {
                    position: absolute;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.1);
                    pointer-events: none;
                }

                .cta-decor-one {
                    width: 200px;
                    height: 200px;
                    top: -60px;
                    right: -60px;
                }

                .cta-decor-two {
                    width: 120px;
                    height: 120px;
                    bottom: -40px;
                    left: 30%;
                }

                .site-footer {
                    margin-top: auto;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    padding: 2rem 0;
                }

                .footer-content {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 1rem;
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.5);
                }

                .footer-tagline {
                    text-transform: uppercase;
                    letter-spacing: 2px;
                    color: var(--primary);
                }

                @media (pointer: fine) {
                    .contact-card:hover {
                        transform: translateX(10px);
                        background: rgba(255, 255, 255, 0.08);
                    }

                    .contact-card:hover .card-arrow {
                        opacity: 1;
                        transform: translateX(0);
                    }
                }

                @media (max-width: 768px) {
                    .contact-card {
                        padding: 1rem;
                    }
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
    fn hex_colors_get_an_alpha_suffix() {
        assert_eq!(icon_background("#25D366"), "#25D36620");
    }

    #[test]
    fn variables_fall_back_to_dimmed_primary() {
        assert_eq!(icon_background("var(--primary)"), "var(--primary-dim)");
    }
}
