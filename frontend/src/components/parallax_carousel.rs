use yew::prelude::*;
use yew_hooks::use_interval;

use crate::dom::use_scroll_progress;
use crate::motion::scroll::{parallax_style, traverse_progress, Carousel, CarouselAction};

const AUTO_ADVANCE_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselSlide {
    pub src: &'static str,
    pub alt: &'static str,
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
}

#[derive(Properties, PartialEq)]
pub struct ParallaxCarouselProps {
    pub slides: Vec<CarouselSlide>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(ParallaxCarousel)]
pub fn parallax_carousel(props: &ParallaxCarouselProps) -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone(), traverse_progress);
    let carousel = use_reducer(|| Carousel::new(props.slides.len()));

    {
        let dispatcher = carousel.dispatcher();
        use_interval(move || dispatcher.dispatch(CarouselAction::Next), AUTO_ADVANCE_MS);
    }

    let prev = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Prev))
    };
    let next = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Next))
    };

    html! {
        <div ref={node} class="parallax-carousel" style={parallax_style(progress)}>
            <div class="carousel-content">
                if let Some(title) = props.title.clone() {
                    <div class="carousel-header">
                        <h3 class="carousel-title animated-gradient-text">{title}</h3>
                        if let Some(subtitle) = props.subtitle.clone() {
                            <p class="carousel-subtitle">{subtitle}</p>
                        }
                    </div>
                }

                <div class="carousel-container">
                    <div class="carousel-track">
                        { for props.slides.iter().enumerate().map(|(i, slide)| {
                            let active = i == carousel.index;
                            html! {
                                <div
                                    key={i}
                                    class={classes!("carousel-slide", active.then_some("active"))}
                                    style={format!(
                                        "transform: translateX({:.0}%) scale({}); opacity: {};",
                                        carousel.slide_offset(i),
                                        if active { "1" } else { "0.8" },
                                        if active { "1" } else { "0" },
                                    )}
                                >
                                    <div class="image-container glass">
                                        <img src={slide.src} alt={slide.alt} class="carousel-image" loading="lazy" />
                                        <div class="image-overlay">
                                            if let Some(title) = slide.title {
                                                <h4 class="image-title">{title}</h4>
                                            }
                                            if let Some(description) = slide.description {
                                                <p class="image-description">{description}</p>
                                            }
                                        </div>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>

                    <button class="carousel-nav carousel-nav-prev glass glass-hover" onclick={prev} aria-label="Previous image">
                        {"‹"}
                    </button>
                    <button class="carousel-nav carousel-nav-next glass glass-hover" onclick={next} aria-label="Next image">
                        {"›"}
                    </button>

                    <div class="carousel-indicators">
                        { for (0..props.slides.len()).map(|i| {
                            let dispatcher = carousel.dispatcher();
                            html! {
                                <button
                                    key={i}
                                    class={classes!("indicator", (i == carousel.index).then_some("active"))}
                                    onclick={Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::GoTo(i)))}
                                    aria-label={format!("Go to slide {}", i + 1)}
                                />
                            }
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .parallax-carousel {
                    will-change: transform, opacity;
                }
                .carousel-header {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }
                .carousel-title {
                    font-size: 2rem;
                    margin: 0 0 0.75rem;
                }
                .carousel-subtitle {
                    color: var(--text-secondary);
                    max-width: 640px;
                    margin: 0 auto;
                }
                .carousel-container {
                    position: relative;
                    overflow: hidden;
                    border-radius: 20px;
                    aspect-ratio: 16 / 9;
                }
                .carousel-track {
                    position: relative;
                    width: 100%;
                    height: 100%;
                }
                .carousel-slide {
                    position: absolute;
                    inset: 0;
                    transition: transform 0.6s ease-in-out, opacity 0.6s ease-in-out;
                }
                .image-container {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    overflow: hidden;
                    border-radius: 20px;
                }
                .carousel-image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .image-overlay {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 2rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.75), transparent);
                    color: #fff;
                }
                .image-title {
                    margin: 0 0 0.25rem;
                    font-size: 1.25rem;
                }
                .image-description {
                    margin: 0;
                    opacity: 0.85;
                }
                .carousel-nav {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 44px;
                    height: 44px;
                    border-radius: 50%;
                    font-size: 1.5rem;
                    color: var(--text-primary);
                    cursor: pointer;
                    z-index: 2;
                }
                .carousel-nav-prev { left: 1rem; }
                .carousel-nav-next { right: 1rem; }
                .carousel-indicators {
                    position: absolute;
                    bottom: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    gap: 0.5rem;
                    z-index: 2;
                }
                .indicator {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.4);
                    cursor: pointer;
                    transition: width 0.3s ease, background 0.3s ease;
                }
                .indicator.active {
                    width: 28px;
                    border-radius: 5px;
                    background: var(--accent-primary);
                }
                "#}
            </style>
        </div>
    }
}
