use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant, IconPosition};
use crate::dom::{remember_section, scroll_to_section, use_scrolled_past};
use crate::theme::ThemeToggle;
use crate::Route;

const NAV_SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("products", "Products"),
    ("about", "About"),
    ("contact", "Contact"),
];

/// Scrolls to `section` on the current page. When this page does not have
/// it, goes back home and leaves the section for [`Home`] to scroll to.
///
/// [`Home`]: crate::pages::home::Home
#[hook]
pub fn use_section_link() -> Callback<&'static str> {
    let navigator = use_navigator();
    Callback::from(move |section: &'static str| {
        if scroll_to_section(section) {
            return;
        }
        info!("No #{} on this page, returning home", section);
        if let Some(navigator) = &navigator {
            remember_section(section);
            navigator.push(&Route::Home);
        }
    })
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let is_scrolled = use_scrolled_past(50.0);
    let menu_open = use_state(|| false);
    let go_to = use_section_link();

    let link = |section: &'static str| {
        let go_to = go_to.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            go_to.emit(section);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    html! {
        <nav class={classes!("navbar", is_scrolled.then_some("navbar-scrolled"))}>
            <div class="navbar-container">
                <div class="navbar-logo" onclick={link("home")}>
                    <span class="logo-text">{"ZONDA"}</span>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={classes!("navbar-menu", (*menu_open).then_some("mobile-menu-open"))}>
                    { for NAV_SECTIONS.iter().map(|&(id, label)| html! {
                        <button key={id} class="navbar-link" onclick={link(id)}>{label}</button>
                    }) }
                    <Link<Route> to={Route::PixelPerfect} classes="navbar-link">{"PixelPerfect"}</Link<Route>>
                </div>

                <div class="navbar-cta">
                    <ThemeToggle />
                    <Button
                        variant={ButtonVariant::Primary}
                        size={ButtonSize::Sm}
                        icon="↗"
                        icon_position={IconPosition::Right}
                        onclick={link("contact")}
                    >
                        {"Get Started"}
                    </Button>
                </div>
            </div>
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1.25rem 0;
                    transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                    animation: navEnter 0.8s cubic-bezier(0.34, 1.56, 0.64, 1) 0.5s both;
                }
                .navbar-scrolled {
                    padding: 0.75rem 0;
                    background: var(--nav-bg);
                    backdrop-filter: blur(16px);
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.25);
                }
                .navbar-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                }
                .navbar-logo {
                    cursor: pointer;
                }
                .logo-text {
                    font-size: 1.5rem;
                    font-weight: 800;
                    letter-spacing: 0.2em;
                    background: linear-gradient(135deg, var(--text-primary), var(--accent-primary));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .navbar-menu {
                    display: flex;
                    gap: 2rem;
                }
                .navbar-link {
                    background: none;
                    border: none;
                    color: var(--text-secondary);
                    font-size: 0.95rem;
                    cursor: pointer;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .navbar-link:hover {
                    color: var(--text-primary);
                }
                .navbar-cta {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: var(--text-primary);
                }
                @keyframes navEnter {
                    from { transform: translateY(-100px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                @media (max-width: 860px) {
                    .burger-menu {
                        display: flex;
                    }
                    .navbar-menu {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem 2rem;
                        background: var(--nav-bg);
                        backdrop-filter: blur(16px);
                    }
                    .navbar-menu.mobile-menu-open {
                        display: flex;
                    }
                    .navbar-cta .modern-button {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
