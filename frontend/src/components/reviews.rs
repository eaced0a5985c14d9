use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::motion::brick::BrickLayout;

const COPIES: usize = 3;
/// Longest step one frame may advance the wall, so a backgrounded tab does
/// not jump on return.
const MAX_FRAME_MS: f64 = 50.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Review {
    pub name: &'static str,
    pub company: Option<&'static str>,
    pub is_company: bool,
    pub service_type: &'static str,
    pub rating: u8,
    pub review: &'static str,
    pub link: Option<&'static str>,
    pub avatar: Option<&'static str>,
}

pub const REVIEWS: [Review; 9] = [
    Review {
        name: "Sarah Chen",
        company: Some("TechFlow Solutions"),
        is_company: true,
        service_type: "Custom Web App",
        rating: 5,
        review: "ZONDA delivered exactly what we needed - a sleek, fast web application that perfectly matches our brand. Their attention to detail is incredible.",
        link: Some("https://techflow.com"),
        avatar: Some("/assets/avatars/sarah.png"),
    },
    Review {
        name: "Marcus Rodriguez",
        company: None,
        is_company: false,
        service_type: "E-commerce Platform",
        rating: 5,
        review: "From concept to launch, ZONDA made my online store vision come to life. The dashboard is intuitive and the performance is outstanding.",
        link: None,
        avatar: Some("/assets/avatars/marcus.png"),
    },
    Review {
        name: "Elena Vasquez",
        company: Some("Creative Studio Pro"),
        is_company: true,
        service_type: "Portfolio Website",
        rating: 5,
        review: "Working with ZONDA was a game-changer. They understand design and translate it into flawless code. Highly recommended for creative professionals.",
        link: Some("https://creativestudiopro.com"),
        avatar: None,
    },
    Review {
        name: "David Kim",
        company: None,
        is_company: false,
        service_type: "Business Dashboard",
        rating: 4,
        review: "The analytics dashboard ZONDA built helps me track everything in real-time. Clean interface, powerful features, and great support.",
        link: None,
        avatar: Some("/assets/avatars/david.png"),
    },
    Review {
        name: "Luna Martinez",
        company: Some("Startup Accelerator"),
        is_company: true,
        service_type: "Multi-platform App",
        rating: 5,
        review: "ZONDA took our complex requirements and built something beautiful and functional. Their tech stack knowledge is impressive.",
        link: Some("https://startupaccelerator.io"),
        avatar: None,
    },
    Review {
        name: "Alex Thompson",
        company: None,
        is_company: false,
        service_type: "API Integration",
        rating: 5,
        review: "Seamless integration of multiple APIs into one cohesive system. ZONDA made the complex simple and delivered on time.",
        link: None,
        avatar: Some("/assets/avatars/alex.png"),
    },
    Review {
        name: "Sofia Gonzalez",
        company: Some("Digital Nomad Co"),
        is_company: true,
        service_type: "SaaS Platform",
        rating: 5,
        review: "ZONDA transformed our concept into a fully functional SaaS platform. Their expertise in scalable architecture is unmatched.",
        link: Some("https://digitalnomadco.com"),
        avatar: None,
    },
    Review {
        name: "Ryan Mitchell",
        company: None,
        is_company: false,
        service_type: "Mobile App Backend",
        rating: 4,
        review: "Solid backend infrastructure for our mobile app. Fast APIs, reliable data handling, and excellent documentation throughout.",
        link: None,
        avatar: Some("/assets/avatars/ryan.png"),
    },
    Review {
        name: "Emma Rodriguez",
        company: Some("InnovateTech Labs"),
        is_company: true,
        service_type: "AI Integration",
        rating: 5,
        review: "Brilliant work integrating AI features into our existing platform. ZONDA understood our vision and delivered beyond expectations.",
        link: Some("https://innovatetechlabs.io"),
        avatar: Some("/assets/avatars/emma.png"),
    },
];

/// Five stars, the first `rating` of them filled.
pub fn star_states(rating: u8) -> [bool; 5] {
    let mut stars = [false; 5];
    for (i, star) in stars.iter_mut().enumerate() {
        *star = i < rating as usize;
    }
    stars
}

/// Seconds to advance for a frame painted at `now`, given the previous
/// frame's timestamp in milliseconds.
pub fn frame_seconds(previous: Option<f64>, now: f64) -> f64 {
    match previous {
        Some(previous) => (now - previous).clamp(0.0, MAX_FRAME_MS) / 1000.0,
        None => 0.0,
    }
}

/// Inline style of card `index` after the wall has run for `seconds`.
pub fn card_style(layout: &BrickLayout, index: usize, width: f64, seconds: f64, content_height: f64) -> String {
    let slot = layout.place(index, width);
    let travelled = seconds * layout.column_speed(slot.column);
    let y = layout.scrolled_y(slot, travelled, content_height);
    format!(
        "width: {}px; height: {}px; transform: translate({:.1}px, {:.1}px);",
        layout.card_width, layout.card_height, slot.x, y
    )
}

/// Animation-frame loop moving the cards by writing their transforms
/// directly, so the wall does not go through a render on every frame.
struct WallClock {
    layout: BrickLayout,
    content_height: f64,
    container: NodeRef,
    width: UseStateHandle<f64>,
    measured: Cell<f64>,
    seconds: Cell<f64>,
    last_frame: Cell<Option<f64>>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl WallClock {
    fn schedule(self: &Rc<Self>) {
        let clock = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| clock.tick(timestamp));
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        let previous = self.last_frame.replace(Some(timestamp));
        let seconds = self.seconds.get() + frame_seconds(previous, timestamp);
        self.seconds.set(seconds);

        if let Some(container) = self.container.cast::<Element>() {
            let measured = container.client_width() as f64;
            if (measured - self.measured.get()).abs() > 0.5 {
                self.measured.set(measured);
                self.width.set(measured);
            }
            let cards = container.children();
            for index in 0..cards.length() {
                let Some(card) = cards.item(index) else { continue };
                let style = card_style(&self.layout, index as usize, measured, seconds, self.content_height);
                if let Err(e) = card.set_attribute("style", &style) {
                    warn!("could not move review card {}: {:?}", index, e);
                }
            }
        }
        self.schedule();
    }

    fn stop(&self) {
        self.frame.borrow_mut().take();
    }
}

fn placeholder(review: &Review) -> Html {
    html! {
        <div class="review-avatar-default">
            { if review.is_company { "🏢" } else { "👤" } }
        </div>
    }
}

#[function_component(Reviews)]
pub fn reviews() -> Html {
    let layout = BrickLayout::default();
    let container = use_node_ref();
    let width = use_state(|| 0.0_f64);
    let broken_avatars = use_state(HashSet::<usize>::new);

    let count = REVIEWS.len() * COPIES;
    let content_height = layout.content_height(count);

    {
        let container = container.clone();
        let width = width.clone();
        use_effect_with_deps(
            move |_| {
                let clock = Rc::new(WallClock {
                    layout,
                    content_height,
                    container,
                    width,
                    measured: Cell::new(0.0),
                    seconds: Cell::new(0.0),
                    last_frame: Cell::new(None),
                    frame: RefCell::new(None),
                });
                clock.schedule();
                move || clock.stop()
            },
            (),
        );
    }

    html! {
        <section class="reviews-section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title centered animated-gradient-text-fast">{"Trusted by Innovators"}</h2>
                    <p class="section-subtitle">
                        {"Real feedback from real clients who trusted us to bring their "}
                        <span class="animated-gradient-subtle">{"digital vision"}</span>
                        {" to life"}
                    </p>
                </div>

                <div class="reviews-container" ref={container}>
                    { for REVIEWS.iter().cycle().take(count).enumerate().map(|(index, review)| {
                        let source = index % REVIEWS.len();
                        let avatar_failed = broken_avatars.contains(&source);

                        let onerror = {
                            let broken_avatars = broken_avatars.clone();
                            Callback::from(move |_: Event| {
                                let mut next = (*broken_avatars).clone();
                                if next.insert(source) {
                                    broken_avatars.set(next);
                                }
                            })
                        };

                        html! {
                            <div
                                key={index}
                                class="review-card glass glass-hover"
                                style={card_style(&layout, index, *width, 0.0, content_height)}
                            >
                                <div class="review-header">
                                    <div class="review-avatar-container">
                                        {
                                            match review.avatar {
                                                Some(src) if !avatar_failed => html! {
                                                    <img src={src} alt={review.name} class="review-avatar" {onerror} />
                                                },
                                                _ => placeholder(review),
                                            }
                                        }
                                    </div>
                                    <div class="review-info">
                                        <div class="review-name-container">
                                            <h4 class="review-name">{review.name}</h4>
                                            if let Some(link) = review.link {
                                                <a href={link} target="_blank" rel="noopener noreferrer" class="review-link">{"↗"}</a>
                                            }
                                        </div>
                                        if let Some(company) = review.company {
                                            <p class="review-company">{company}</p>
                                        }
                                        <div class="review-rating">
                                            { for star_states(review.rating).iter().map(|&filled| html! {
                                                <span class={classes!("star", if filled { "filled" } else { "empty" })}>{"★"}</span>
                                            }) }
                                        </div>
                                    </div>
                                </div>
                                <div class="review-content">
                                    <p class="review-service">{review.service_type}</p>
                                    <p class="review-text">{review.review}</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .reviews-section {
                    padding: 6rem 0;
                }
                .reviews-container {
                    position: relative;
                    height: 720px;
                    overflow: hidden;
                    mask-image: linear-gradient(to bottom, transparent, black 12%, black 88%, transparent);
                }
                .review-card {
                    position: absolute;
                    top: 0;
                    left: 0;
                    padding: 1.5rem;
                    border-radius: 18px;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    will-change: transform;
                }
                .review-header {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                }
                .review-avatar,
                .review-avatar-default {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .review-avatar-default {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.4rem;
                    background: var(--glass-bg);
                    border: 1px solid var(--glass-border);
                }
                .review-name-container {
                    display: flex;
                    align-items: center;
                    gap: 0.4rem;
                }
                .review-name {
                    margin: 0;
                    font-size: 1rem;
                }
                .review-link {
                    color: var(--accent-primary);
                    text-decoration: none;
                    font-size: 0.85rem;
                }
                .review-company {
                    margin: 0.1rem 0 0;
                    font-size: 0.8rem;
                    color: var(--text-muted);
                }
                .star {
                    font-size: 0.9rem;
                }
                .star.filled {
                    color: #fbbf24;
                }
                .star.empty {
                    color: var(--text-muted);
                    opacity: 0.4;
                }
                .review-service {
                    margin: 0;
                    font-size: 0.75rem;
                    font-weight: 600;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                    color: var(--accent-primary);
                }
                .review-text {
                    margin: 0.5rem 0 0;
                    line-height: 1.6;
                    color: var(--text-secondary);
                    font-size: 0.9rem;
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
    fn stars_follow_rating() {
        assert_eq!(star_states(4), [true, true, true, true, false]);
        assert_eq!(star_states(0), [false; 5]);
        assert_eq!(star_states(9), [true; 5]);
    }

    #[test]
    fn frame_steps_are_clamped() {
        assert_eq!(frame_seconds(None, 1000.0), 0.0);
        assert_eq!(frame_seconds(Some(1000.0), 1016.0), 0.016);
        assert_eq!(frame_seconds(Some(1000.0), 9000.0), 0.05);
        assert_eq!(frame_seconds(Some(1000.0), 900.0), 0.0);
    }

    #[test]
    fn cards_start_at_their_resting_place() {
        let layout = BrickLayout::default();
        let total = layout.content_height(27);
        let slot = layout.place(25, 1000.0);
        assert_eq!(
            card_style(&layout, 25, 1000.0, 0.0, total),
            format!("width: 300px; height: 280px; transform: translate({:.1}px, {:.1}px);", slot.x, slot.y)
        );
    }

    #[test]
    fn cards_rise_with_time() {
        let layout = BrickLayout::default();
        let total = layout.content_height(27);
        let moved = card_style(&layout, 3, 1000.0, 2.0, total);
        assert!(moved.ends_with("translate(30.0px, 252.0px);"), "{}", moved);
    }

    #[test]
    fn ratings_are_in_range() {
        assert!(REVIEWS.iter().all(|r| (1..=5).contains(&r.rating)));
        assert!(REVIEWS.iter().all(|r| r.company.is_some() == r.is_company));
    }
}
