use yew::prelude::*;

/// Degrees get a cap, certificates a badge.
pub fn credential_icon(credential: &str) -> &'static str {
    if credential.contains("BA") {
        "fa-solid fa-graduation-cap"
    } else {
        "fa-solid fa-certificate"
    }
}

#[derive(Properties, PartialEq)]
pub struct CredentialsProps {
    pub credentials: Vec<String>,
}

#[function_component(Credentials)]
pub fn credentials(props: &CredentialsProps) -> Html {
    let item = |credential: &String| {
        html! {
            <div class="credential">
                <span class="credential-icon"><i class={credential_icon(credential)}></i></span>
                <span>{credential.clone()}</span>
            </div>
        }
    };

    html! {
        <section id="credentials" class="credentials">
            <div class="container">
                <h2>{"Credentials & Certifications"}</h2>
            </div>
            <div class="credentials-marquee">
                <div class="credentials-track">
                    { for props.credentials.iter().map(item) }
                    { for props.credentials.iter().map(item) }
                </div>
            </div>
            <style>
                {r#"
                .credentials {
                    background-color: var(--primary);
                    color: var(--white);
                    padding: 4rem 0;
                    overflow: hidden;
                }

                .credentials h2 {
                    text-align: center;
                    margin: 0 0 2rem 0;
                }

                .credentials-marquee {
                    padding: 1rem 0;
                    background-color: rgba(0, 0, 0, 0.1);
                    overflow: hidden;
                }

                .credentials-track {
                    display: flex;
                    width: max-content;
                    animation: marqueeScroll 45s linear infinite;
                }

                .credential {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin: 0 2rem;
                    font-weight: 600;
                    white-space: nowrap;
                }

                .credential-icon {
                    font-size: 1.2rem;
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
    fn degrees_and_certificates_get_different_icons() {
        assert_eq!(
            credential_icon("BA Adapted Physical Activity & Motricity"),
            "fa-solid fa-graduation-cap"
        );
        assert_eq!(
            credential_icon("Certified Running Coach (UESCA Academy)"),
            "fa-solid fa-certificate"
        );
    }
}
