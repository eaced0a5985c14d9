use gloo_timers::callback::Timeout;
use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_background::AnimatedBackground;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::{use_section_link, Navbar};
use crate::components::product_card::{ProductCard, ProductStatus};
use crate::components::reveal_section::RevealSection;
use crate::components::reviews::Reviews;
use crate::config::PIXELPERFECT_APP_URL;
use crate::contact::ContactForm;
use crate::dom::{open_in_new_tab, scroll_to_section, take_pending_section};
use crate::Route;

const ABOUT_STATS: [(&str, &str); 3] = [("3", "Products"), ("100%", "Remote"), ("24/7", "Innovation")];

const VALUES: [(&str, &str, &str); 3] = [
    ("⚡", "Rapid Innovation", "We ship fast, iterate quickly, and never stop improving"),
    ("🌐", "Global Mindset", "Building for users worldwide with localized experiences"),
    ("🛡", "User-First", "Every decision is made with our users' best interests in mind"),
];

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator();
    let go_to = use_section_link();

    // arriving from another page's section link; wait one tick for layout
    use_effect_with_deps(
        |_| {
            let pending = take_pending_section().map(|section| {
                Timeout::new(0, move || {
                    if !scroll_to_section(section) {
                        warn!("Home has no #{}", section);
                    }
                })
            });
            move || drop(pending)
        },
        (),
    );

    let open_page = |route: Route| {
        let navigator = navigator.clone();
        Some(Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        }))
    };
    let join_beta = Some(go_to.reform(|_: MouseEvent| "contact"));

    html! {
        <div class="home">
            <AnimatedBackground />
            <Navbar />

            <section id="home">
                <Hero />
            </section>

            <RevealSection id="products" class="products-section">
                <div class="section-header">
                    <h2 class="section-title centered animated-gradient-text-fast">{"Our Products"}</h2>
                    <p class="section-subtitle">
                        {"Cutting-edge tools designed for the "}
                        <span class="animated-gradient-subtle">{"digital-first generation"}</span>
                    </p>
                </div>

                <div class="products-grid">
                    <ProductCard
                        title="PixelPerfect"
                        description="AI-powered image editing tool that revolutionizes creative workflows with intelligent automation and professional-grade results."
                        features={vec![
                            "AI-driven auto-enhancement",
                            "Background removal & replacement",
                            "Smart object recognition",
                            "Batch processing capabilities",
                            "Cloud-based collaboration",
                        ]}
                        status={ProductStatus::Live}
                        gradient="linear-gradient(135deg, var(--accent-primary), var(--accent-secondary))"
                        icon="🎨"
                        on_try_now={Some(Callback::from(|_: MouseEvent| open_in_new_tab(PIXELPERFECT_APP_URL)))}
                        on_learn_more={open_page(Route::PixelPerfect)}
                    />
                    <ProductCard
                        title="Comerzia"
                        description="Web app for managing orders and clients, with a dashboard for insights and automatic notifications via email or SMS."
                        features={vec![
                            "Order management",
                            "Client database",
                            "Analytics dashboard",
                            "Email & SMS notifications",
                            "Business intelligence",
                        ]}
                        status={ProductStatus::Beta}
                        gradient="linear-gradient(135deg, var(--accent-cyan), var(--accent-primary))"
                        icon="⚡"
                        on_try_now={join_beta.clone()}
                        on_learn_more={open_page(Route::Comerzia)}
                    />
                    <ProductCard
                        title="ComChat"
                        description="A fully customizable chatbot for businesses. Text or multimodal, tuned to any activity, and able to hand over to a human expert when needed."
                        features={vec![
                            "Text & multimodal support",
                            "Custom business context",
                            "Expert delegation",
                            "Local LLM support",
                            "Multi-channel deployment",
                        ]}
                        status={ProductStatus::Beta}
                        gradient="linear-gradient(135deg, var(--accent-orange), var(--accent-pink))"
                        icon="💬"
                        on_try_now={join_beta}
                        on_learn_more={open_page(Route::ComChat)}
                    />
                    <ProductCard
                        title="SecureVault"
                        description="Enterprise-grade security platform providing comprehensive protection for digital assets and sensitive data."
                        features={vec![
                            "End-to-end encryption",
                            "Multi-factor authentication",
                            "Threat detection",
                            "Compliance reporting",
                            "Zero-trust architecture",
                        ]}
                        status={ProductStatus::ComingSoon}
                        gradient="linear-gradient(135deg, var(--accent-pink), var(--accent-secondary))"
                        icon="🛡"
                        on_learn_more={Some(go_to.reform(|_: MouseEvent| "contact"))}
                    />
                </div>
            </RevealSection>

            <RevealSection id="about" class="about-section">
                <div class="content-grid">
                    <div class="content-left">
                        <h2 class="section-title animated-gradient-text">{"Born Digital, Built for Tomorrow"}</h2>
                        <p class="section-description">
                            {"We're a young, ambitious software startup on a mission to reshape how people interact with technology. \
                              Founded by passionate developers and designers, ZONDA combines cutting-edge AI, intuitive design, \
                              and lightning-fast performance to create tools that actually work."}
                        </p>
                        <div class="about-stats">
                            { for ABOUT_STATS.iter().map(|&(number, label)| html! {
                                <div class="stat-item glass">
                                    <span class="stat-number">{number}</span>
                                    <span class="stat-label">{label}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="content-right">
                        { for VALUES.iter().map(|&(icon, title, text)| html! {
                            <div class="value-card glass glass-hover">
                                <div class="value-icon">{icon}</div>
                                <h3>{title}</h3>
                                <p>{text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </RevealSection>

            <Reviews />

            <RevealSection id="contact" class="contact-section">
                <div class="contact-content">
                    <div class="contact-left">
                        <h2 class="section-title animated-gradient-text-fast">{"Let's Build Something Amazing"}</h2>
                        <p class="section-description">
                            {"Got an idea? Want to collaborate? Or just want to say hi? We're always excited to connect \
                              with fellow innovators, creators, and dreamers. Drop us a line and let's start the conversation."}
                        </p>
                    </div>
                    <div class="contact-right">
                        <ContactForm />
                    </div>
                </div>
            </RevealSection>

            <Footer />
            <style>
                {r#"
                .home {
                    position: relative;
                    min-height: 100vh;
                }
                .products-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .content-grid,
                .contact-content {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .about-stats {
                    display: flex;
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .stat-item {
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 1.5rem 1rem;
                    border-radius: 16px;
                }
                .stat-number {
                    font-size: 2rem;
                    font-weight: 800;
                    color: var(--accent-primary);
                }
                .stat-label {
                    font-size: 0.85rem;
                    color: var(--text-muted);
                }
                .content-right {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .value-card {
                    padding: 1.5rem 2rem;
                    border-radius: 18px;
                }
                .value-card h3 {
                    margin: 0.75rem 0 0.4rem;
                }
                .value-card p {
                    margin: 0;
                    color: var(--text-secondary);
                }
                .value-icon {
                    font-size: 1.5rem;
                }
                @media (max-width: 860px) {
                    .content-grid,
                    .contact-content {
                        grid-template-columns: 1fr;
                        gap: 2.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
