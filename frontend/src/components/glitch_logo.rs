use yew::prelude::*;

use crate::dom::use_pointer_offset;
use crate::motion::offset::{LayerResponse, OffsetParams};

const LOGO_PATHS: [&str; 4] = [
    "M 88.478 186.141 L 147.278 101.441 L 257.616 101.606 L 316.242 186.175 L 88.478 186.141 Z",
    "M 151.162 214.519 L 254.816 214.785 L 123.855 401.854 L 88.385 304.265 L 151.162 214.519 Z",
    "M 375.69 100 L 412.058 198.385 L 348.108 288.629 L 243.925 288.629 L 375.69 100 Z",
    "M 183.137 316.443 L 410.625 316.222 L 353.087 400.362 L 241.446 400.15 L 183.137 316.443 Z",
];

// the two colour channels drift apart as the pointer pulls on the mark
const MAIN_LAYER: LayerResponse = LayerResponse::translate(6.0).with_rotation(2.5).with_scale(0.03);
const RED_LAYER: LayerResponse = LayerResponse::translate(14.0).with_opacity(0.0, 0.55);
const CYAN_LAYER: LayerResponse = LayerResponse::translate(-14.0).with_opacity(0.0, 0.55);

#[derive(Properties, PartialEq)]
pub struct GlitchLogoProps {
    #[prop_or(120)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

fn logo_svg(size: u32, fill: &'static str, glow: bool) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 500 500"
            width={size.to_string()}
            height={size.to_string()}
            class="zonda-logo"
        >
            if glow {
                <defs>
                    <linearGradient id="logoGradient" x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" stop-color="#ffffff" />
                        <stop offset="50%" stop-color="#6366f1" />
                        <stop offset="100%" stop-color="#8b5cf6" />
                    </linearGradient>
                    <filter id="glow">
                        <feGaussianBlur stdDeviation="4" result="coloredBlur" />
                        <feMerge>
                            <feMergeNode in="coloredBlur" />
                            <feMergeNode in="SourceGraphic" />
                        </feMerge>
                    </filter>
                </defs>
            }
            <g filter={glow.then_some("url(#glow)")}>
                { for LOGO_PATHS.iter().map(|d| html! {
                    <path d={*d} fill={fill} class="logo-path" />
                }) }
            </g>
        </svg>
    }
}

#[function_component(GlitchLogo)]
pub fn glitch_logo(props: &GlitchLogoProps) -> Html {
    let node = use_node_ref();
    let offset = use_pointer_offset(node.clone(), OffsetParams::default());

    html! {
        <div
            ref={node}
            class={classes!("glitch-logo", props.class.clone())}
            style={format!("width: {0}px; height: {0}px;", props.size)}
        >
            <div class="logo-main" style={MAIN_LAYER.style(offset)}>
                { logo_svg(props.size, "url(#logoGradient)", true) }
            </div>
            <div class="logo-glitch logo-glitch-1" style={RED_LAYER.style(offset)}>
                { logo_svg(props.size, "var(--rgb-red)", false) }
            </div>
            <div class="logo-glitch logo-glitch-2" style={CYAN_LAYER.style(offset)}>
                { logo_svg(props.size, "var(--rgb-cyan)", false) }
            </div>
            <style>
                {r#"
                .glitch-logo {
                    position: relative;
                    margin: 0 auto;
                    animation: logoEnter 1.2s cubic-bezier(0.34, 1.56, 0.64, 1) both;
                    perspective: 800px;
                }
                .glitch-logo > div {
                    position: absolute;
                    inset: 0;
                    transition: transform 0.3s ease-out, opacity 0.3s ease-out;
                    will-change: transform, opacity;
                }
                .logo-main {
                    z-index: 2;
                }
                .logo-glitch {
                    mix-blend-mode: screen;
                    pointer-events: none;
                }
                .logo-glitch-1 {
                    z-index: 1;
                    animation: glitchSkew 3.5s infinite steps(1);
                }
                .logo-glitch-2 {
                    z-index: 1;
                    animation: glitchSkew 3.5s infinite steps(1) reverse;
                }
                @keyframes logoEnter {
                    from { opacity: 0; transform: scale(0.8) rotateY(-90deg); }
                    to { opacity: 1; transform: scale(1) rotateY(0); }
                }
                @keyframes glitchSkew {
                    0%, 90%, 100% { filter: none; }
                    93% { filter: blur(0.5px); }
                    96% { filter: hue-rotate(20deg); }
                }
                "#}
            </style>
        </div>
    }
}
