use log::debug;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::tilt_card::TiltCard;
use crate::content::Plan;
use crate::scroll::smooth;

const CARD_STAGGER: f64 = 0.1;

#[derive(Properties, PartialEq)]
pub struct PackagesProps {
    pub plans: Vec<Plan>,
}

#[function_component(Packages)]
pub fn packages(props: &PackagesProps) -> Html {
    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Err(err) = smooth::scroll_to_section("contact") {
            debug!("cannot scroll to contact: {}", err);
        }
    });

    html! {
        <section id="packages" class="packages">
            <div class="packages-glow" />
            <div class="container">
                <Reveal class="section-header">
                    <span class="section-label">{"Pricing"}</span>
                    <h2 class="section-heading">{"Choose Your "}<span class="heading-accent">{"Plan"}</span></h2>
                    <p class="section-subheading">
                        {"Invest in yourself. All plans include a 7-day money-back guarantee."}
                    </p>
                </Reveal>

                <div class="packages-grid">
                    { for props.plans.iter().enumerate().map(|(i, plan)| html! {
                        <Reveal class="plan-reveal" delay={i as f64 * CARD_STAGGER}>
                            <TiltCard class={classes!("plan-card", plan.popular.then_some("popular"))}>
                                if plan.popular {
                                    <div class="plan-badge">{"Most Popular"}</div>
                                }
                                <div class="plan-header">
                                    <h3>{plan.name.clone()}</h3>
                                    <p>{plan.description.clone()}</p>
                                </div>
                                <div class="plan-price">
                                    <span class="plan-currency">{"$"}</span>
                                    <span class="plan-amount">{plan.price.clone()}</span>
                                    <span class="plan-period">{format!("/{}", plan.period)}</span>
                                </div>
                                <ul class="plan-features">
                                    { for plan.features.iter().map(|feature| html! {
                                        <li>
                                            <span class="plan-check"><i class="fa-solid fa-check"></i></span>
                                            <span>{feature.clone()}</span>
                                        </li>
                                    }) }
                                </ul>
                                <button class="plan-button" onclick={to_contact.clone()}>
                                    <span>{plan.cta.clone()}</span>
                                    <i class="fa-solid fa-arrow-right"></i>
                                </button>
                            </TiltCard>
                        </Reveal>
                    }) }
                </div>

                <p class="packages-note">
                    {"Need a custom plan? "}
                    <a href="#contact" onclick={to_contact.clone()}>{"Contact us"}</a>
                    {" for enterprise pricing."}
                </p>
            </div>
            <style>
                {r#"
                .packages {
                    position: relative;
                    padding: clamp(5rem, 15vh, 10rem) 0;
                    overflow: hidden;
                }

                .packages-glow {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 60vw;
                    height: 60vw;
                    transform: translate(-50%, -50%);
                    background: radial-gradient(circle, var(--primary-dim) 0%, transparent 60%);
                    opacity: 0.3;
                    pointer-events: none;
                }

                .packages-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(min(100%, 300px), 1fr));
                    gap: clamp(1.5rem, 3vw, 2rem);
                    align-items: stretch;
                }

                .plan-reveal.reveal {
                    transform: translateY(100px) scale(0.95);
                }

                .plan-reveal.reveal.revealed {
                    transform: none;
                }

                .plan-card {
                    position: relative;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    padding: clamp(1.5rem, 3vw, 2.5rem);
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 24px;
                    transition: border-color 0.4s ease;
                }

                .plan-card.popular {
                    background: linear-gradient(180deg, var(--primary-dim) 0%, rgba(255, 255, 255, 0.03) 100%);
                    border-color: var(--primary);
                }

                .plan-badge {
                    position: absolute;
                    top: -14px;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 0.4rem 1rem;
                    border-radius: 999px;
                    background-color: var(--primary);
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 1px;
                    white-space: nowrap;
                }

                .plan-header h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .plan-header p {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.95rem;
                }

                .plan-price {
                    display: flex;
                    align-items: baseline;
                    gap: 0.25rem;
                    margin: 2rem 0;
                }

                .plan-currency {
                    font-size: 1.5rem;
                    color: var(--primary);
                }

                .plan-amount {
                    font-size: clamp(3rem, 6vw, 4rem);
                    font-weight: 800;
                    line-height: 1;
                }

                .plan-period {
                    color: rgba(255, 255, 255, 0.5);
                }

                .plan-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem 0;
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    gap: 0.9rem;
                }

                .plan-features li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 0.95rem;
                    color: rgba(255, 255, 255, 0.8);
                }

                .plan-check {
                    width: 20px;
                    height: 20px;
                    border-radius: 50%;
                    background: var(--primary-dim);
                    color: var(--primary);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.6rem;
                }

                .plan-button {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    padding: 1rem 2rem;
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: transparent;
                    color: #fff;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 1px;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .plan-card.popular .plan-button {
                    background-color: var(--primary);
                    border-color: var(--primary);
                }

                .packages-note {
                    text-align: center;
                    margin-top: 3rem;
                    color: rgba(255, 255, 255, 0.6);
                }

                .packages-note a {
                    color: var(--primary);
                }

                @media (pointer: fine) {
                    .plan-card:hover {
                        border-color: var(--primary);
                    }

                    .plan-button:hover {
                        transform: translateY(-2px);
                    }
                }
                "#}
            </style>
        </section>
    }
}
