use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant, IconPosition};

/// Release stage of a product, which decides its badge and main action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductStatus {
    Live,
    Beta,
    ComingSoon,
}

impl ProductStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProductStatus::Live => "Live",
            ProductStatus::Beta => "Beta",
            ProductStatus::ComingSoon => "Coming Soon",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ProductStatus::Live => "var(--accent-cyan)",
            ProductStatus::Beta => "var(--accent-orange)",
            ProductStatus::ComingSoon => "var(--text-muted)",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ProductStatus::Live => "live",
            ProductStatus::Beta => "beta",
            ProductStatus::ComingSoon => "coming-soon",
        }
    }

    /// Button shown for trying the product, if it can be tried at all.
    pub fn primary_action(self) -> Option<(ButtonVariant, &'static str)> {
        match self {
            ProductStatus::Live => Some((ButtonVariant::Primary, "Try Now")),
            ProductStatus::Beta => Some((ButtonVariant::Neon, "Join Beta")),
            ProductStatus::ComingSoon => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub features: Vec<&'static str>,
    pub status: ProductStatus,
    /// CSS background for the top accent strip.
    pub gradient: AttrValue,
    pub icon: AttrValue,
    #[prop_or_default]
    pub on_try_now: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub on_learn_more: Option<Callback<MouseEvent>>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let primary = match (props.status.primary_action(), props.on_try_now.clone()) {
        (Some((variant, label)), Some(onclick)) => html! {
            <Button {variant} size={ButtonSize::Md} icon="↗" icon_position={IconPosition::Right} {onclick}>
                {label}
            </Button>
        },
        _ => html! {},
    };

    html! {
        <div class="product-card reveal-card">
            <div class="product-card-gradient" style={format!("background: {};", props.gradient)}></div>
            <div class="product-card-content">
                <div class="product-header">
                    <div class="product-icon">{props.icon.clone()}</div>
                    <div class="product-status">
                        <span class="status-badge" style={format!("color: {};", props.status.color())}>
                            {props.status.label()}
                        </span>
                    </div>
                </div>

                <div class="product-info">
                    <h3 class="product-title">{props.title.clone()}</h3>
                    <p class="product-description">{props.description.clone()}</p>
                    <ul class="product-features">
                        { for props.features.iter().map(|feature| html! {
                            <li class="feature-item">
                                <span class="feature-dot"></span>
                                {*feature}
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="product-actions">
                    { primary }
                    if let Some(onclick) = props.on_learn_more.clone() {
                        <Button variant={ButtonVariant::Ghost} size={ButtonSize::Md} icon="→" icon_position={IconPosition::Right} {onclick}>
                            {"Learn More"}
                        </Button>
                    }
                </div>
            </div>
            <style>
                {r#"
                .product-card {
                    position: relative;
                    border-radius: 20px;
                    overflow: hidden;
                    background: var(--glass-bg);
                    border: 1px solid var(--glass-border);
                    backdrop-filter: blur(14px);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .product-card:hover {
                    transform: translateY(-8px);
                    box-shadow: 0 20px 48px rgba(0, 0, 0, 0.35);
                }
                .product-card-gradient {
                    height: 4px;
                    width: 100%;
                }
                .product-card-content {
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    height: 100%;
                }
                .product-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .product-icon {
                    width: 48px;
                    height: 48px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    border-radius: 12px;
                    background: var(--glass-bg);
                    border: 1px solid var(--glass-border);
                }
                .status-badge {
                    font-size: 0.75rem;
                    font-weight: 600;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                }
                .product-title {
                    font-size: 1.5rem;
                    margin: 0 0 0.5rem;
                }
                .product-description {
                    color: var(--text-secondary);
                    line-height: 1.6;
                }
                .product-features {
                    list-style: none;
                    padding: 0;
                    margin: 1rem 0 0;
                    display: grid;
                    gap: 0.5rem;
                }
                .feature-item {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    color: var(--text-secondary);
                    font-size: 0.9rem;
                }
                .feature-dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: var(--accent-primary);
                }
                .product-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-top: auto;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_status_has_its_own_action() {
        assert_eq!(
            ProductStatus::Live.primary_action(),
            Some((ButtonVariant::Primary, "Try Now"))
        );
        assert_eq!(
            ProductStatus::Beta.primary_action(),
            Some((ButtonVariant::Neon, "Join Beta"))
        );
        assert_eq!(ProductStatus::ComingSoon.primary_action(), None);
    }

    #[test]
    fn coming_soon_is_muted() {
        assert_eq!(ProductStatus::ComingSoon.label(), "Coming Soon");
        assert_eq!(ProductStatus::ComingSoon.color(), "var(--text-muted)");
    }
}
