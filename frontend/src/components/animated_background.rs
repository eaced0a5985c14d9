use yew::prelude::*;

use crate::dom::use_pointer_offset;
use crate::motion::offset::{LayerResponse, OffsetParams};

const PARTICLE_COUNT: usize = 20;

const ORB_LAYERS: [LayerResponse; 3] = [
    LayerResponse::translate(60.0).with_scale(0.08).with_opacity(0.55, 0.2),
    LayerResponse::translate(-40.0).with_scale(0.05).with_opacity(0.45, 0.2),
    LayerResponse::translate(25.0).with_rotation(8.0).with_opacity(0.35, 0.25),
];

/// Where a floating particle starts and how it moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub rise_s: f64,
    pub sway_px: f64,
}

fn fract(v: f64) -> f64 {
    v - v.floor()
}

/// Spreads particles over the page with a low-discrepancy sequence so the
/// field looks scattered but renders identically on every visit.
pub fn particle(index: usize) -> Particle {
    let i = index as f64 + 1.0;
    Particle {
        left_pct: fract(i * 0.754_877_666) * 100.0,
        top_pct: fract(i * 0.569_840_291) * 100.0,
        delay_s: fract(i * 0.618_033_989) * 10.0,
        rise_s: 15.0 + fract(i * 0.414_213_562) * 10.0,
        sway_px: (fract(i * 0.302_775_638) - 0.5) * 100.0,
    }
}

#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    let node = use_node_ref();
    let offset = use_pointer_offset(node.clone(), OffsetParams::default());

    html! {
        <div class="animated-background" ref={node}>
            { for ORB_LAYERS.iter().enumerate().map(|(i, layer)| html! {
                <div class={classes!("gradient-orb", format!("orb-{}", i + 1))} style={layer.style(offset)}></div>
            }) }
            <div class="grid-overlay"></div>
            { for (0..PARTICLE_COUNT).map(particle).map(|p| html! {
                <div
                    class="particle"
                    style={format!(
                        "left: {:.2}%; top: {:.2}%; --sway: {:.1}px; animation-delay: {:.2}s, {:.2}s; animation-duration: {:.2}s, {:.2}s;",
                        p.left_pct, p.top_pct, p.sway_px, p.delay_s, p.delay_s * 0.6, p.rise_s, p.rise_s / 2.0,
                    )}
                ></div>
            }) }
            <style>
                {r#"
                .animated-background {
                    position: fixed;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                    z-index: -1;
                    background: var(--bg-primary);
                }
                .gradient-orb {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(80px);
                    transition: transform 0.6s ease-out, opacity 0.6s ease-out;
                    will-change: transform;
                }
                .orb-1 {
                    width: 520px;
                    height: 520px;
                    top: -120px;
                    left: -80px;
                    background: radial-gradient(circle, var(--accent-primary), transparent 70%);
                }
                .orb-2 {
                    width: 460px;
                    height: 460px;
                    bottom: -140px;
                    right: -100px;
                    background: radial-gradient(circle, var(--accent-secondary), transparent 70%);
                }
                .orb-3 {
                    width: 360px;
                    height: 360px;
                    top: 40%;
                    left: 45%;
                    background: radial-gradient(circle, var(--accent-cyan), transparent 70%);
                }
                .grid-overlay {
                    position: absolute;
                    inset: 0;
                    background-image:
                        linear-gradient(var(--grid-line) 1px, transparent 1px),
                        linear-gradient(90deg, var(--grid-line) 1px, transparent 1px);
                    background-size: 60px 60px;
                    mask-image: radial-gradient(ellipse at center, black 30%, transparent 80%);
                }
                .particle {
                    position: absolute;
                    width: 3px;
                    height: 3px;
                    border-radius: 50%;
                    background: var(--accent-primary);
                    opacity: 0.6;
                    animation-name: particleRise, particleSway;
                    animation-timing-function: linear, ease-in-out;
                    animation-iteration-count: infinite;
                    animation-direction: normal, alternate;
                }
                @keyframes particleRise {
                    from { transform: translateY(0); }
                    to { transform: translateY(-100px); }
                }
                @keyframes particleSway {
                    from { margin-left: 0; }
                    to { margin-left: var(--sway); }
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
    fn particles_stay_on_the_page() {
        for index in 0..PARTICLE_COUNT {
            let p = particle(index);
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((0.0..10.0).contains(&p.delay_s));
            assert!((15.0..25.0).contains(&p.rise_s));
            assert!(p.sway_px.abs() <= 50.0);
        }
    }

    #[test]
    fn particles_are_spread_out() {
        let lefts: Vec<f64> = (0..PARTICLE_COUNT).map(|i| particle(i).left_pct).collect();
        for (a, left) in lefts.iter().enumerate() {
            for other in &lefts[a + 1..] {
                assert!((left - other).abs() > 0.5);
            }
        }
        assert_eq!(particle(3), particle(3));
    }
}
