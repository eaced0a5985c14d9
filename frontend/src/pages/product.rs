use log::info;
use yew::prelude::*;

use crate::components::animated_background::AnimatedBackground;
use crate::components::button::{Button, ButtonSize, ButtonVariant, IconPosition};
use crate::components::footer::Footer;
use crate::components::navbar::{use_section_link, Navbar};
use crate::components::parallax_carousel::{CarouselSlide, ParallaxCarousel};
use crate::components::pixel_perfect_logo::PixelPerfectLogo;
use crate::components::product_card::ProductStatus;
use crate::components::reveal_section::RevealSection;
use crate::dom::{open_in_new_tab, scroll_to_section, scroll_to_top, use_follow_glow};

const GLOW_FOLLOW: f64 = 0.02;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeroMark {
    PixelPerfect,
    Glyph(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

/// Icon, heading and a line of text. Used for overview cards, capability
/// cards and the small showcase strips.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArchitectureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Speaker {
    User,
    Assistant,
    System,
}

impl Speaker {
    fn class(self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Assistant => "ai",
            Speaker::System => "system",
        }
    }
}

/// Mock-up shown beside the overview text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Preview {
    Metrics {
        title: &'static str,
        rows: &'static [(&'static str, &'static str)],
    },
    Chat {
        title: &'static str,
        messages: &'static [(Speaker, &'static str)],
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Showcase {
    pub title: &'static str,
    /// Numbered steps joined by arrows instead of a plain grid.
    pub sequential: bool,
    pub items: &'static [Highlight],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Assurance {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub checks: &'static [&'static str],
}

/// Everything a product landing page shows, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProductSheet {
    pub name: &'static str,
    pub mark: HeroMark,
    pub status: ProductStatus,
    pub app_url: Option<&'static str>,
    pub tagline: &'static str,
    pub tagline_highlight: &'static str,
    pub hero_badges: &'static [(&'static str, &'static str)],
    pub stats: &'static [Stat],
    pub capabilities_title: &'static str,
    pub capabilities_subtitle: &'static str,
    pub capabilities: &'static [Highlight],
    pub overview_title: &'static str,
    pub overview_text: &'static str,
    pub highlights: &'static [Highlight],
    pub preview: Option<Preview>,
    pub gallery_title: &'static str,
    pub gallery_subtitle: &'static str,
    pub slides: &'static [CarouselSlide],
    pub architecture_title: &'static str,
    pub architecture_subtitle: &'static str,
    pub architecture: &'static [ArchitectureCard],
    pub showcase: Option<Showcase>,
    pub features_title: &'static str,
    pub features_subtitle: &'static str,
    pub features: &'static [Feature],
    pub assurance: Option<Assurance>,
    pub cta_title: &'static str,
    pub cta_text: &'static str,
    pub cta_secondary: &'static str,
}

/// What the hero and CTA primary buttons do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Launch {
    OpenApp(&'static str),
    JoinBeta,
}

impl Launch {
    fn hero_label(self) -> &'static str {
        match self {
            Launch::OpenApp(_) => "Try It Now",
            Launch::JoinBeta => "Join Beta Program",
        }
    }

    fn cta_label(self) -> &'static str {
        match self {
            Launch::OpenApp(_) => "Start Free",
            Launch::JoinBeta => "Join Beta Program",
        }
    }

    fn variant(self) -> ButtonVariant {
        match self {
            Launch::OpenApp(_) => ButtonVariant::Primary,
            Launch::JoinBeta => ButtonVariant::Neon,
        }
    }
}

impl ProductSheet {
    /// Live products with a public app open it; everything else asks people
    /// to get in touch for beta access.
    pub fn launch(&self) -> Launch {
        match (self.status, self.app_url) {
            (ProductStatus::Live, Some(url)) => Launch::OpenApp(url),
            _ => Launch::JoinBeta,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductLandingProps {
    pub sheet: &'static ProductSheet,
}

fn preview_html(preview: Preview) -> Html {
    match preview {
        Preview::Metrics { title, rows } => html! {
            <div class="feature-showcase glass">
                <div class="showcase-header">
                    <h3>{title}</h3>
                </div>
                <div class="showcase-content">
                    { for rows.iter().map(|&(label, value)| html! {
                        <div class="metric-row">
                            <span>{label}</span>
                            <span class="metric-value">{value}</span>
                        </div>
                    }) }
                </div>
            </div>
        },
        Preview::Chat { title, messages } => html! {
            <div class="chat-preview glass">
                <div class="chat-header">
                    <div class="chat-status">
                        <div class="status-dot online"></div>
                        <span>{title}</span>
                    </div>
                </div>
                <div class="chat-messages">
                    { for messages.iter().map(|&(speaker, text)| html! {
                        <div class={classes!("message", speaker.class())}>
                            <span>{text}</span>
                        </div>
                    }) }
                </div>
            </div>
        },
    }
}

fn showcase_html(showcase: Showcase) -> Html {
    let items = showcase.items.iter().enumerate().map(|(i, item)| {
        let arrow = showcase.sequential && i + 1 < showcase.items.len();
        html! {
            <>
                <div class="showcase-item">
                    if showcase.sequential {
                        <div class="step-circle">{i + 1}</div>
                    } else {
                        <div class="showcase-icon">{item.icon}</div>
                    }
                    <span class="showcase-title">{item.title}</span>
                    if !item.text.is_empty() {
                        <p>{item.text}</p>
                    }
                </div>
                if arrow {
                    <div class="flow-arrow">{"→"}</div>
                }
            </>
        }
    });

    html! {
        <div class="architecture-showcase glass">
            <h3>{showcase.title}</h3>
            <div class={classes!("showcase-items", showcase.sequential.then_some("sequential"))}>
                { for items }
            </div>
        </div>
    }
}

#[function_component(ProductLanding)]
pub fn product_landing(props: &ProductLandingProps) -> Html {
    let sheet = props.sheet;
    let launch = sheet.launch();
    let go_to = use_section_link();
    let hero = use_node_ref();
    let glow = use_follow_glow(hero.clone(), GLOW_FOLLOW);

    use_effect_with_deps(
        move |_| {
            info!("Showing {} landing page", sheet.name);
            scroll_to_top();
            || ()
        },
        sheet.name,
    );

    let on_launch = {
        let go_to = go_to.clone();
        Callback::from(move |_: MouseEvent| match launch {
            Launch::OpenApp(url) => open_in_new_tab(url),
            Launch::JoinBeta => go_to.emit("contact"),
        })
    };
    let explore = Callback::from(|_: MouseEvent| {
        scroll_to_section("features");
    });
    let to_contact = go_to.reform(|_: MouseEvent| "contact");

    html! {
        <div class="product-page">
            <AnimatedBackground />
            <Navbar />

            <section class="product-hero" ref={hero}>
                <div
                    class="product-hero-glow"
                    style={format!("transform: translate({:.1}px, {:.1}px);", glow.x, glow.y)}
                ></div>
                <div class="container">
                    <div class="product-hero-content enter-rise">
                        <div class="product-hero-icon">
                            {
                                match sheet.mark {
                                    HeroMark::PixelPerfect => html! { <PixelPerfectLogo size={64} /> },
                                    HeroMark::Glyph(glyph) => html! { <span>{glyph}</span> },
                                }
                            }
                        </div>
                        <h1 class="product-hero-title animated-gradient-text-fast">{sheet.name}</h1>
                        <p class="product-hero-subtitle">
                            {sheet.tagline}
                            {" "}
                            <span class="animated-gradient-subtle">{sheet.tagline_highlight}</span>
                        </p>
                        <div class="product-hero-status">
                            <span
                                class={classes!("status-badge", sheet.status.badge_class())}
                                style={format!("color: {};", sheet.status.color())}
                            >
                                {sheet.status.label()}
                            </span>
                        </div>
                        if !sheet.hero_badges.is_empty() {
                            <div class="product-hero-badges">
                                { for sheet.hero_badges.iter().map(|&(icon, label)| html! {
                                    <div class="hero-badge glass">
                                        <span>{icon}</span>
                                        <span>{label}</span>
                                    </div>
                                }) }
                            </div>
                        }
                        <div class="product-hero-actions">
                            <Button
                                variant={launch.variant()}
                                size={ButtonSize::Lg}
                                icon="↗"
                                icon_position={IconPosition::Right}
                                onclick={on_launch.clone()}
                            >
                                {launch.hero_label()}
                            </Button>
                            <Button
                                variant={ButtonVariant::Ghost}
                                size={ButtonSize::Lg}
                                icon="→"
                                icon_position={IconPosition::Right}
                                onclick={explore}
                            >
                                {"Explore Features"}
                            </Button>
                        </div>
                    </div>
                </div>
            </section>

            if !sheet.stats.is_empty() {
                <RevealSection id="stats" class="stats-section">
                    <div class="product-stats-grid">
                        { for sheet.stats.iter().map(|stat| html! {
                            <div class="product-stat glass glass-hover">
                                <div class="product-stat-number animated-gradient-text">{stat.number}</div>
                                <div class="product-stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </RevealSection>
            }

            if !sheet.capabilities.is_empty() {
                <RevealSection id="capabilities" class="capabilities-section">
                    <div class="section-header">
                        <h2 class="section-title animated-gradient-text">{sheet.capabilities_title}</h2>
                        <p class="section-subtitle">{sheet.capabilities_subtitle}</p>
                    </div>
                    <div class="card-grid">
                        { for sheet.capabilities.iter().map(|c| html! {
                            <div class="info-card glass glass-hover">
                                <div class="card-icon">{c.icon}</div>
                                <h3>{c.title}</h3>
                                <p>{c.text}</p>
                            </div>
                        }) }
                    </div>
                </RevealSection>
            }

            <RevealSection id="overview" class="overview-section">
                <div class={classes!("overview-content", sheet.preview.is_some().then_some("with-preview"))}>
                    <div class="overview-text">
                        <h2 class="section-title animated-gradient-text">{sheet.overview_title}</h2>
                        <p class="section-description">{sheet.overview_text}</p>
                        <div class="overview-highlights">
                            { for sheet.highlights.iter().map(|h| html! {
                                <div class="highlight-item glass glass-hover">
                                    <div class="card-icon">{h.icon}</div>
                                    <div>
                                        <h4>{h.title}</h4>
                                        <p>{h.text}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                    if let Some(preview) = sheet.preview {
                        <div class="overview-visual">
                            { preview_html(preview) }
                        </div>
                    }
                </div>
            </RevealSection>

            <RevealSection id="gallery" class="gallery-section">
                <ParallaxCarousel
                    slides={sheet.slides.to_vec()}
                    title={AttrValue::Static(sheet.gallery_title)}
                    subtitle={AttrValue::Static(sheet.gallery_subtitle)}
                />
            </RevealSection>

            <RevealSection id="architecture" class="architecture-section">
                <div class="section-header">
                    <h2 class="section-title animated-gradient-text">{sheet.architecture_title}</h2>
                    <p class="section-subtitle">{sheet.architecture_subtitle}</p>
                </div>
                <div class="card-grid">
                    { for sheet.architecture.iter().map(|card| html! {
                        <div class="info-card glass glass-hover">
                            <div class="card-icon">{card.icon}</div>
                            <h3>{card.title}</h3>
                            <p>{card.description}</p>
                            <div class="tech-stack">
                                <span class="tech-badge">{card.tech}</span>
                            </div>
                        </div>
                    }) }
                </div>
                if let Some(showcase) = sheet.showcase {
                    { showcase_html(showcase) }
                }
            </RevealSection>

            <RevealSection id="features" class="features-section">
                <div class="section-header">
                    <h2 class="section-title animated-gradient-text">{sheet.features_title}</h2>
                    <p class="section-subtitle">{sheet.features_subtitle}</p>
                </div>
                <div class="features-grid">
                    { for sheet.features.iter().map(|feature| html! {
                        <div class="feature-card glass glass-hover">
                            <div class="feature-header">
                                <div class="card-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                            </div>
                            <p class="feature-description">{feature.description}</p>
                            <ul class="feature-benefits">
                                { for feature.benefits.iter().map(|benefit| html! { <li>{*benefit}</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </RevealSection>

            if let Some(assurance) = sheet.assurance {
                <RevealSection id="privacy" class="assurance-section">
                    <div class="assurance-content glass">
                        <div class="assurance-header">
                            <span class="assurance-icon">{assurance.icon}</span>
                            <h2 class="animated-gradient-text">{assurance.title}</h2>
                        </div>
                        <p class="assurance-description">{assurance.description}</p>
                        <div class="assurance-checks">
                            { for assurance.checks.iter().map(|check| html! {
                                <div class="assurance-check">
                                    <div class="check-mark">{"✓"}</div>
                                    <span>{*check}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </RevealSection>
            }

            <RevealSection id="cta" class="cta-section">
                <div class="cta-content glass">
                    <h2 class="cta-title animated-gradient-text-fast">{sheet.cta_title}</h2>
                    <p class="cta-description">{sheet.cta_text}</p>
                    <div class="cta-actions">
                        <Button
                            variant={launch.variant()}
                            size={ButtonSize::Lg}
                            icon="↗"
                            icon_position={IconPosition::Right}
                            onclick={on_launch}
                        >
                            {launch.cta_label()}
                        </Button>
                        <Button variant={ButtonVariant::Ghost} size={ButtonSize::Lg} onclick={to_contact}>
                            {sheet.cta_secondary}
                        </Button>
                    </div>
                </div>
            </RevealSection>

            <Footer />
            <style>
                {r#"
                .product-page {
                    position: relative;
                    min-height: 100vh;
                }
                .product-hero {
                    position: relative;
                    padding: 10rem 0 4rem;
                    text-align: center;
                }
                .product-hero-glow {
                    position: absolute;
                    top: 20%;
                    left: 50%;
                    width: 480px;
                    height: 480px;
                    margin-left: -240px;
                    border-radius: 50%;
                    background: radial-gradient(circle, var(--accent-primary), transparent 65%);
                    opacity: 0.18;
                    filter: blur(40px);
                    pointer-events: none;
                    transition: transform 0.3s ease-out;
                }
                .product-hero-content {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }
                .product-hero-icon {
                    width: 96px;
                    height: 96px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 3rem;
                    border-radius: 24px;
                    color: var(--accent-primary);
                    background: var(--glass-bg);
                    border: 1px solid var(--glass-border);
                }
                .product-hero-title {
                    font-size: clamp(3rem, 8vw, 5.5rem);
                    font-weight: 900;
                    margin: 0;
                }
                .product-hero-subtitle {
                    max-width: 720px;
                    font-size: 1.2rem;
                    line-height: 1.7;
                    color: var(--text-secondary);
                }
                .product-hero-badges {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                }
                .hero-badge {
                    display: flex;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    font-size: 0.9rem;
                }
                .product-hero-actions,
                .cta-actions {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }
                .product-stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1.5rem;
                }
                .product-stat {
                    padding: 2rem;
                    border-radius: 18px;
                    text-align: center;
                }
                .product-stat-number {
                    font-size: 2.5rem;
                    font-weight: 800;
                }
                .product-stat-label {
                    color: var(--text-muted);
                    margin-top: 0.5rem;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .info-card,
                .feature-card,
                .highlight-item {
                    padding: 2rem;
                    border-radius: 18px;
                }
                .info-card h3,
                .feature-card h3 {
                    margin: 1rem 0 0.5rem;
                }
                .info-card p,
                .highlight-item p,
                .feature-description {
                    color: var(--text-secondary);
                    line-height: 1.6;
                    margin: 0;
                }
                .card-icon {
                    font-size: 1.75rem;
                    color: var(--accent-primary);
                }
                .tech-stack {
                    margin-top: 1.25rem;
                }
                .tech-badge {
                    font-size: 0.75rem;
                    padding: 0.3rem 0.75rem;
                    border-radius: 999px;
                    border: 1px solid var(--glass-border);
                    color: var(--accent-cyan);
                }
                .overview-content {
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }
                .overview-content.with-preview {
                    grid-template-columns: 3fr 2fr;
                }
                .overview-highlights {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .highlight-item {
                    display: flex;
                    gap: 1rem;
                    padding: 1.25rem;
                }
                .highlight-item h4 {
                    margin: 0 0 0.25rem;
                }
                .feature-showcase,
                .chat-preview {
                    padding: 1.5rem;
                    border-radius: 18px;
                }
                .metric-row {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.75rem 0;
                    border-bottom: 1px solid var(--glass-border);
                }
                .metric-value {
                    font-weight: 700;
                    color: var(--accent-primary);
                }
                .chat-status {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 600;
                }
                .status-dot.online {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #22c55e;
                }
                .chat-messages {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .message {
                    max-width: 85%;
                    padding: 0.6rem 0.9rem;
                    border-radius: 14px;
                    font-size: 0.9rem;
                }
                .message.user {
                    align-self: flex-end;
                    background: var(--accent-primary);
                    color: #fff;
                }
                .message.ai {
                    align-self: flex-start;
                    background: var(--glass-bg);
                    border: 1px solid var(--glass-border);
                }
                .message.system {
                    align-self: center;
                    font-size: 0.8rem;
                    color: var(--text-muted);
                }
                .architecture-showcase {
                    margin-top: 3rem;
                    padding: 2rem;
                    border-radius: 18px;
                    text-align: center;
                }
                .showcase-items {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    align-items: center;
                    gap: 1.5rem;
                }
                .showcase-item {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    max-width: 220px;
                }
                .showcase-item p {
                    color: var(--text-secondary);
                    font-size: 0.85rem;
                    margin: 0;
                }
                .step-circle {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    background: linear-gradient(135deg, var(--accent-primary), var(--accent-secondary));
                    color: #fff;
                }
                .flow-arrow {
                    font-size: 1.5rem;
                    color: var(--text-muted);
                }
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                }
                .feature-header {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .feature-header h3 {
                    margin: 0;
                }
                .feature-description {
                    margin-top: 1rem;
                }
                .feature-benefits {
                    margin: 1rem 0 0;
                    padding-left: 1.2rem;
                    color: var(--text-secondary);
                    font-size: 0.9rem;
                }
                .assurance-content,
                .cta-content {
                    padding: 3rem;
                    border-radius: 24px;
                    text-align: center;
                }
                .assurance-header {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }
                .assurance-icon {
                    font-size: 3rem;
                }
                .assurance-description,
                .cta-description {
                    max-width: 680px;
                    margin: 1rem auto 2rem;
                    line-height: 1.7;
                    color: var(--text-secondary);
                }
                .assurance-checks {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1rem;
                }
                .assurance-check {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .check-mark {
                    color: var(--accent-cyan);
                    font-weight: 700;
                }
                .cta-title {
                    font-size: clamp(2rem, 5vw, 3rem);
                    margin: 0;
                }
                @media (max-width: 860px) {
                    .overview-content.with-preview {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::comchat::COMCHAT;
    use crate::pages::comerzia::COMERZIA;
    use crate::pages::pixel_perfect::PIXELPERFECT;

    #[test]
    fn live_product_opens_its_app() {
        assert_eq!(
            PIXELPERFECT.launch(),
            Launch::OpenApp(crate::config::PIXELPERFECT_APP_URL)
        );
    }

    #[test]
    fn beta_products_ask_for_contact() {
        assert_eq!(COMERZIA.launch(), Launch::JoinBeta);
        assert_eq!(COMCHAT.launch(), Launch::JoinBeta);

        let beta_with_url = ProductSheet {
            status: ProductStatus::Beta,
            app_url: Some("https://example.com"),
            ..COMERZIA
        };
        assert_eq!(beta_with_url.launch(), Launch::JoinBeta);
    }

    #[test]
    fn every_sheet_fills_the_shared_sections() {
        for sheet in [&PIXELPERFECT, &COMERZIA, &COMCHAT] {
            assert!(!sheet.slides.is_empty(), "{} has no slides", sheet.name);
            assert!(!sheet.architecture.is_empty());
            assert!(!sheet.features.is_empty());
            assert!(sheet.features.iter().all(|f| !f.benefits.is_empty()));
        }
    }

    #[test]
    fn only_comchat_has_a_privacy_section() {
        assert!(COMCHAT.assurance.is_some());
        assert!(PIXELPERFECT.assurance.is_none());
        assert!(COMERZIA.assurance.is_none());
    }
}
