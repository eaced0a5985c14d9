use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Neon,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "modern-button--primary",
            ButtonVariant::Secondary => "modern-button--secondary",
            ButtonVariant::Ghost => "modern-button--ghost",
            ButtonVariant::Neon => "modern-button--neon",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "modern-button--sm",
            ButtonSize::Md => "modern-button--md",
            ButtonSize::Lg => "modern-button--lg",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IconPosition {
    #[default]
    Left,
    Right,
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    /// Short glyph drawn beside the label.
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub icon_position: IconPosition,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let onclick = props.onclick.clone().unwrap_or_default();
    let icon = |position: IconPosition| match &props.icon {
        Some(glyph) if props.icon_position == position => {
            let side = match position {
                IconPosition::Left => "button-icon--left",
                IconPosition::Right => "button-icon--right",
            };
            html! { <span class={classes!("button-icon", side)} aria-hidden="true">{glyph.clone()}</span> }
        }
        _ => html! {},
    };

    html! {
        <button
            type={props.button_type.clone()}
            class={classes!("modern-button", props.variant.class(), props.size.class(), props.class.clone())}
            {onclick}
            disabled={props.disabled}
        >
            if props.variant == ButtonVariant::Neon {
                <div class="button-glow"></div>
            }
            <div class="button-content">
                { icon(IconPosition::Left) }
                <span class="button-text">{ for props.children.iter() }</span>
                { icon(IconPosition::Right) }
            </div>
            <div class="button-border"></div>
        </button>
    }
}
