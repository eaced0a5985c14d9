use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::navbar::use_section_link;
use crate::dom::open_in_new_tab;
use crate::Route;

const SOCIAL_LINKS: [(&str, &str, &str); 3] = [
    ("LinkedIn", "in", "https://www.linkedin.com/company/zonda"),
    ("Twitter", "𝕏", "https://twitter.com/zonda"),
    ("GitHub", "⌥", "https://github.com/zonda"),
];

const PRODUCT_LINKS: [(&str, Route); 3] = [
    ("PixelPerfect", Route::PixelPerfect),
    ("Comerzia", Route::Comerzia),
    ("ComChat", Route::ComChat),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let go_to = use_section_link();
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-brand">
                        <h3 class="footer-logo animated-gradient-text">{"ZONDA"}</h3>
                        <p class="footer-description">
                            {"Crafting digital experiences that push boundaries. We build software that empowers creators and businesses to achieve the extraordinary."}
                        </p>
                        <div class="footer-stats">
                            <div class="footer-stat">
                                <span class="footer-stat-number">{"∞"}</span>
                                <span class="footer-stat-label">{"Possibilities"}</span>
                            </div>
                            <div class="footer-stat">
                                <span class="footer-stat-number">{"2025"}</span>
                                <span class="footer-stat-label">{"Founded"}</span>
                            </div>
                        </div>
                    </div>

                    <div class="footer-links">
                        <div class="footer-column">
                            <h4>{"Products"}</h4>
                            <ul>
                                { for PRODUCT_LINKS.iter().map(|(label, route)| html! {
                                    <li key={*label}>
                                        <Link<Route> to={route.clone()} classes="footer-link">{*label}</Link<Route>>
                                    </li>
                                }) }
                            </ul>
                        </div>
                        <div class="footer-column">
                            <h4>{"Company"}</h4>
                            <ul>
                                <li>
                                    <button class="footer-link" onclick={go_to.reform(|_: MouseEvent| "about")}>{"About"}</button>
                                </li>
                                <li>
                                    <button class="footer-link" onclick={go_to.reform(|_: MouseEvent| "contact")}>{"Contact"}</button>
                                </li>
                                <li>
                                    <span class="footer-link footer-link-muted">{"Careers"}</span>
                                </li>
                            </ul>
                        </div>
                    </div>

                    <div class="footer-social">
                        <h4>{"Follow Us"}</h4>
                        <div class="social-buttons">
                            { for SOCIAL_LINKS.iter().map(|&(label, glyph, url)| html! {
                                <Button
                                    key={label}
                                    variant={ButtonVariant::Ghost}
                                    size={ButtonSize::Sm}
                                    icon={glyph}
                                    onclick={Callback::from(move |_: MouseEvent| open_in_new_tab(url))}
                                >
                                    {label}
                                </Button>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} ZONDA. All rights reserved.", year)}</p>
                    <p class="footer-tagline animated-gradient-subtle">{"Built with passion for the future."}</p>
                </div>
            </div>
            <style>
                {r#"
                .footer {
                    position: relative;
                    padding: 5rem 0 2rem;
                    border-top: 1px solid var(--glass-border);
                }
                .footer-content {
                    display: grid;
                    grid-template-columns: 2fr 2fr 1fr;
                    gap: 3rem;
                }
                .footer-logo {
                    font-size: 2rem;
                    letter-spacing: 0.2em;
                    margin: 0 0 1rem;
                }
                .footer-description {
                    color: var(--text-secondary);
                    line-height: 1.7;
                    max-width: 380px;
                }
                .footer-stats {
                    display: flex;
                    gap: 2.5rem;
                    margin-top: 1.5rem;
                }
                .footer-stat {
                    display: flex;
                    flex-direction: column;
                }
                .footer-stat-number {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--accent-primary);
                }
                .footer-stat-label {
                    font-size: 0.8rem;
                    color: var(--text-muted);
                }
                .footer-links {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }
                .footer-column h4,
                .footer-social h4 {
                    margin: 0 0 1rem;
                    color: var(--text-primary);
                }
                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                }
                .footer-link {
                    background: none;
                    border: none;
                    padding: 0;
                    font: inherit;
                    color: var(--text-secondary);
                    text-decoration: none;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .footer-link:hover {
                    color: var(--accent-primary);
                }
                .footer-link-muted {
                    cursor: default;
                    color: var(--text-muted);
                }
                .social-buttons {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    gap: 0.5rem;
                }
                .footer-bottom {
                    margin-top: 4rem;
                    padding-top: 2rem;
                    border-top: 1px solid var(--glass-border);
                    display: flex;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1rem;
                    color: var(--text-muted);
                    font-size: 0.85rem;
                }
                @media (max-width: 860px) {
                    .footer-content {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
