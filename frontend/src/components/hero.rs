use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant, IconPosition};
use crate::components::glitch_logo::GlitchLogo;
use crate::components::navbar::use_section_link;

#[function_component(Hero)]
pub fn hero() -> Html {
    let go_to = use_section_link();
    let to_about = go_to.reform(|_: MouseEvent| "about");
    let to_products = go_to.reform(|_: MouseEvent| "products");

    html! {
        <div class="hero">
            <div class="hero-container">
                <div class="hero-content">
                    <div class="hero-logo-section">
                        <GlitchLogo size={320} />
                    </div>

                    <h1 class="hero-title animated-gradient-text enter-rise" style="animation-delay: 0.8s;">
                        {"ZONDA"}
                    </h1>

                    <p class="hero-subtitle enter-fade" style="animation-delay: 1.2s;">
                        {"Empowering the next generation of digital innovation."}
                        <br />
                        <span class="subtitle-highlight animated-gradient-subtle">
                            {"We build software that shapes tomorrow."}
                        </span>
                    </p>

                    <div class="hero-cta enter-fade" style="animation-delay: 1.6s;">
                        <Button
                            variant={ButtonVariant::Primary}
                            size={ButtonSize::Lg}
                            icon="✦"
                            icon_position={IconPosition::Left}
                            onclick={to_about}
                        >
                            {"Discover Our Vision"}
                        </Button>
                        <Button
                            variant={ButtonVariant::Ghost}
                            size={ButtonSize::Lg}
                            icon="→"
                            icon_position={IconPosition::Right}
                            onclick={to_products}
                        >
                            {"Our Products"}
                        </Button>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 8rem 2rem 4rem;
                    text-align: center;
                }
                .hero-content {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }
                .hero-title {
                    font-size: clamp(3.5rem, 10vw, 7rem);
                    font-weight: 900;
                    letter-spacing: 0.25em;
                    margin: 0;
                }
                .hero-subtitle {
                    max-width: 640px;
                    font-size: 1.25rem;
                    line-height: 1.7;
                    color: var(--text-secondary);
                }
                .subtitle-highlight {
                    font-weight: 600;
                }
                .hero-cta {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 1rem;
                }
                @media (max-width: 640px) {
                    .hero-logo-section .glitch-logo {
                        transform: scale(0.6);
                    }
                }
                "#}
            </style>
        </div>
    }
}
