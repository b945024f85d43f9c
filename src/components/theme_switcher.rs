use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::theme::{ThemeAction, ThemeContext, PALETTES};

#[function_component(ThemeSwitcher)]
pub fn theme_switcher() -> Html {
    let theme = use_context::<ThemeContext>();
    let open = use_bool_toggle(false);

    let Some(theme) = theme else {
        return html! {};
    };

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.toggle())
    };

    html! {
        <div class="theme-switcher">
            if *open {
                <div class="theme-panel">
                    <h4>{"Theme"}</h4>
                    <div class="theme-swatches">
                        { for PALETTES.iter().enumerate().map(|(index, palette)| {
                            let active = theme.active_index() == index;
                            let theme = theme.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                theme.dispatch(ThemeAction::Select(index));
                            });
                            html! {
                                <button
                                    class={classes!("theme-swatch", active.then_some("active"))}
                                    style={format!("background-color: {};", palette.primary)}
                                    title={palette.name}
                                    aria-label={palette.name}
                                    {onclick}
                                />
                            }
                        }) }
                    </div>
                </div>
            }
            <button class="theme-toggle" onclick={toggle} aria-label="Change theme">
                <i class="fa-solid fa-palette"></i>
            </button>
            <style>
                {r#"
                .theme-switcher {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 9999;
                    display: flex;
                    flex-direction: column;
                    align-items: flex-end;
                    gap: 1rem;
                }

                .theme-toggle {
                    width: 50px;
                    height: 50px;
                    border-radius: 50%;
                    background-color: var(--primary);
                    color: #fff;
                    font-size: 1.2rem;
                    border: none;
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 5px 15px rgba(0, 0, 0, 0.3);
                    transition: transform 0.2s;
                }

                .theme-panel {
                    background-color: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(10px);
                    padding: 1rem;
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    margin-bottom: 0.5rem;
                    animation: panelIn 0.3s ease;
                }

                .theme-panel h4 {
                    margin: 0 0 0.5rem 0;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 1px;
                    color: #ccc;
                }

                .theme-swatches {
                    display: flex;
                    gap: 0.5rem;
                }

                .theme-swatch {
                    width: 30px;
                    height: 30px;
                    border-radius: 50%;
                    border: none;
                    cursor: pointer;
                }

                .theme-swatch.active {
                    border: 2px solid white;
                }

                @keyframes panelIn {
                    from { opacity: 0; transform: translateX(20px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                "#}
            </style>
        </div>
    }
}
