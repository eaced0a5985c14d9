use yew::prelude::*;

use crate::dom::use_scroll_progress;
use crate::motion::scroll::{reveal_progress, reveal_style};

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A page section that settles into place as it scrolls through the viewport.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone(), reveal_progress);

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("section", props.class.clone())}
            style={reveal_style(progress)}
        >
            <div class="container">
                { for props.children.iter() }
            </div>
        </section>
    }
}
