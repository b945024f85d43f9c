use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::tilt_card::TiltCard;
use crate::content::Service;

const CARD_STAGGER: f64 = 0.15;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub services: Vec<Service>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <section id="services" class="services">
            <div class="container">
                <Reveal class="section-header">
                    <span class="section-label">{"What We Offer"}</span>
                    <h2 class="section-heading">{"Coaching "}<span class="heading-accent">{"Services"}</span></h2>
                    <p class="section-subheading">
                        {"Transform your performance with personalized coaching tailored to your goals"}
                    </p>
                </Reveal>

                <div class="services-grid">
                    { for props.services.iter().enumerate().map(|(i, service)| html! {
                        <Reveal class="clip-reveal" delay={i as f64 * CARD_STAGGER}>
                            <TiltCard class="service-card">
                                <div class="service-card-header">
                                    <span class="service-number">{service.number.clone()}</span>
                                    <div class="service-icon">
                                        <i class={service.icon.clone()}></i>
                                    </div>
                                </div>
                                <h3 class="service-title">{service.title.clone()}</h3>
                                <p class="service-description">{service.description.clone()}</p>
                                <ul class="service-features">
                                    { for service.features.iter().map(|feature| html! {
                                        <li><span class="feature-dot" />{feature.clone()}</li>
                                    }) }
                                </ul>
                                <div class="service-footer">
                                    <span>{"Learn More"}</span>
                                    <i class="fa-solid fa-arrow-right service-arrow"></i>
                                </div>
                                <div class="hover-border" />
                            </TiltCard>
                        </Reveal>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .services {
                    padding: clamp(5rem, 15vh, 10rem) 0;
                    position: relative;
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(min(100%, 320px), 1fr));
                    gap: clamp(1.5rem, 3vw, 2rem);
                }

                .service-card {
                    position: relative;
                    height: 100%;
                    padding: clamp(1.5rem, 3vw, 2.5rem);
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 20px;
                    overflow: hidden;
                    transform-style: preserve-3d;
                    transition: box-shadow 0.4s cubic-bezier(0.16, 1, 0.3, 1);
                }

                .service-card-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 2rem;
                }

                .service-number {
                    font-size: 3rem;
                    font-weight: 900;
                    color: rgba(255, 255, 255, 0.06);
                    line-height: 1;
                }

                .service-icon {
                    width: 56px;
                    height: 56px;
                    border-radius: 16px;
                    background: var(--primary-dim);
                    color: var(--primary);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                }

                .service-title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .service-description {
                    color: rgba(255, 255, 255, 0.6);
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }

                .service-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .service-features li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.8);
                }

                .feature-dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background-color: var(--primary);
                }

                .service-footer {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.85rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 1px;
                    color: var(--primary);
                }

                .service-arrow {
                    transition: transform 0.3s ease;
                }

                .hover-border {
                    position: absolute;
                    inset: 0;
                    border: 1px solid var(--primary);
                    border-radius: 20px;
                    opacity: 0;
                    transition: opacity 0.4s ease;
                    pointer-events: none;
                }

                @media (pointer: fine) {
                    .service-card:hover {
                        box-shadow: 0 30px 60px -20px var(--primary-dim);
                    }

                    .service-card:hover .hover-border {
                        opacity: 1;
                    }

                    .service-card:hover .service-arrow {
                        transform: translateX(5px);
                    }
                }
                "#}
            </style>
        </section>
    }
}
