use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod contact;
mod dom;
mod theme;
mod motion {
    pub mod offset;
    pub mod brick;
    pub mod scroll;
}
mod components {
    pub mod button;
    pub mod glitch_logo;
    pub mod pixel_perfect_logo;
    pub mod animated_background;
    pub mod navbar;
    pub mod hero;
    pub mod product_card;
    pub mod reveal_section;
    pub mod parallax_carousel;
    pub mod reviews;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod product;
    pub mod pixel_perfect;
    pub mod comerzia;
    pub mod comchat;
    pub mod not_found;
}

use pages::{
    home::Home,
    pixel_perfect::PixelPerfect,
    comerzia::Comerzia,
    comchat::ComChat,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/products/pixelperfect")]
    PixelPerfect,
    #[at("/products/comerzia")]
    Comerzia,
    #[at("/products/comchat")]
    ComChat,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::PixelPerfect => {
            info!("Rendering PixelPerfect page");
            html! { <PixelPerfect /> }
        },
        Route::Comerzia => {
            info!("Rendering Comerzia page");
            html! { <Comerzia /> }
        },
        Route::ComChat => {
            info!("Rendering ComChat page");
            html! { <ComChat /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    // Paint the stored theme before the first render so there is no flash
    let stored = theme::load_theme();
    theme::apply_theme(stored);

    info!("Starting ZONDA, theme {}", stored.storage_value());
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_pages_live_under_products() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::PixelPerfect.to_path(), "/products/pixelperfect");
        assert_eq!(Route::Comerzia.to_path(), "/products/comerzia");
        assert_eq!(Route::ComChat.to_path(), "/products/comchat");
    }

    #[test]
    fn not_found_is_the_fallback_route() {
        assert!(Route::not_found_route() == Some(Route::NotFound));
    }
}
