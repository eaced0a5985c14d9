use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_background::AnimatedBackground;
use crate::components::button::{Button, ButtonVariant, IconPosition};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator();
    let go_home = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <div class="not-found">
            <AnimatedBackground />
            <div class="not-found-content glass">
                <h1 class="not-found-code animated-gradient-text-fast">{"404"}</h1>
                <p>{"This page drifted off somewhere we can't follow."}</p>
                <Button variant={ButtonVariant::Secondary} icon="←" icon_position={IconPosition::Left} onclick={go_home}>
                    {"Back to ZONDA"}
                </Button>
            </div>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                }
                .not-found-content {
                    position: relative;
                    padding: 3rem 4rem;
                    border-radius: 24px;
                    text-align: center;
                    color: var(--text-secondary);
                }
                .not-found-code {
                    font-size: 6rem;
                    margin: 0;
                }
                "#}
            </style>
        </div>
    }
}
