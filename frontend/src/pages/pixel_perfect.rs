use yew::prelude::*;

use crate::components::parallax_carousel::CarouselSlide;
use crate::components::product_card::ProductStatus;
use crate::config::PIXELPERFECT_APP_URL;
use crate::pages::product::{
    ArchitectureCard, Feature, HeroMark, Highlight, ProductLanding, ProductSheet, Showcase,
};

pub static PIXELPERFECT: ProductSheet = ProductSheet {
    name: "PixelPerfect",
    mark: HeroMark::PixelPerfect,
    status: ProductStatus::Live,
    app_url: Some(PIXELPERFECT_APP_URL),
    tagline: "AI-powered image editing tool that revolutionizes creative workflows with intelligent automation and",
    tagline_highlight: "professional-grade results",
    hero_badges: &[],
    stats: &[],
    capabilities_title: "",
    capabilities_subtitle: "",
    capabilities: &[],
    overview_title: "Redefining Image Editing",
    overview_text: "PixelPerfect combines the power of artificial intelligence with intuitive design to deliver professional-grade image editing capabilities that adapt to your creative vision.",
    highlights: &[
        Highlight {
            icon: "🖼",
            title: "Smart Enhancement",
            text: "AI algorithms analyze and enhance your images automatically, understanding context and content for optimal results.",
        },
        Highlight {
            icon: "👥",
            title: "Team Collaboration",
            text: "Built-in collaboration tools enable seamless teamwork with real-time editing, comments, and version control.",
        },
        Highlight {
            icon: "⚡",
            title: "Lightning Fast",
            text: "Optimized processing pipeline ensures rapid editing and rendering, even for high-resolution images and batch operations.",
        },
    ],
    preview: None,
    gallery_title: "See PixelPerfect in Action",
    gallery_subtitle: "Explore the interface and discover how AI-powered editing transforms your creative workflow",
    slides: &[
        CarouselSlide {
            src: "/pixelperfect/homepage.png",
            alt: "PixelPerfect Homepage Interface",
            title: Some("AI-Powered Interface"),
            description: Some("Clean and intuitive interface for professional image editing"),
        },
        CarouselSlide {
            src: "/pixelperfect/background-removal.png",
            alt: "Background Removal Tool",
            title: Some("Smart Background Removal"),
            description: Some("Precise object detection for seamless background replacement"),
        },
        CarouselSlide {
            src: "/pixelperfect/image-generation.png",
            alt: "AI Image Generation",
            title: Some("AI Image Generation"),
            description: Some("Create stunning images from text descriptions using AI"),
        },
    ],
    architecture_title: "Technical Architecture",
    architecture_subtitle: "Built on modern, scalable infrastructure designed for performance, reliability, and security",
    architecture: &[
        ArchitectureCard {
            icon: "🧠",
            title: "AI Processing Engine",
            description: "Advanced neural networks for image analysis and enhancement",
            tech: "TensorFlow, PyTorch",
        },
        ArchitectureCard {
            icon: "🗄",
            title: "Cloud Storage",
            description: "Secure, scalable storage with global CDN distribution",
            tech: "AWS S3, CloudFront",
        },
        ArchitectureCard {
            icon: "🛡",
            title: "Security Layer",
            description: "End-to-end encryption and privacy protection",
            tech: "AES-256, OAuth 2.0",
        },
        ArchitectureCard {
            icon: "⚙",
            title: "Processing Pipeline",
            description: "Optimized workflow for real-time image processing",
            tech: "Node.js, Redis",
        },
    ],
    showcase: Some(Showcase {
        title: "System Flow",
        sequential: true,
        items: &[
            Highlight { icon: "", title: "Image Upload", text: "" },
            Highlight { icon: "", title: "AI Analysis", text: "" },
            Highlight { icon: "", title: "Processing", text: "" },
            Highlight { icon: "", title: "Enhanced Output", text: "" },
        ],
    }),
    features_title: "Powerful Features",
    features_subtitle: "Every tool designed to enhance your creative workflow and deliver professional results",
    features: &[
        Feature {
            icon: "✨",
            title: "AI-Driven Auto-Enhancement",
            description: "Automatically improve brightness, contrast, and saturation with machine learning algorithms that understand your content.",
            benefits: &["50% faster editing", "Professional results", "One-click enhancement"],
        },
        Feature {
            icon: "◧",
            title: "Background Removal & Replacement",
            description: "Precise object detection and segmentation for seamless background manipulation and creative compositing.",
            benefits: &["Pixel-perfect edges", "Smart object detection", "Creative freedom"],
        },
        Feature {
            icon: "⚡",
            title: "Batch Processing",
            description: "Process hundreds of images simultaneously with consistent quality and automated workflows.",
            benefits: &["Bulk operations", "Time efficiency", "Consistent results"],
        },
        Feature {
            icon: "☁",
            title: "Cloud-Based Collaboration",
            description: "Real-time collaboration tools with version control and shared workspaces for creative teams.",
            benefits: &["Team workflows", "Version history", "Global access"],
        },
    ],
    assurance: None,
    cta_title: "Ready to Transform Your Images?",
    cta_text: "Experience the future of AI-powered image editing. Get access to cutting-edge features and help shape the product.",
    cta_secondary: "Contact Sales",
};

#[function_component(PixelPerfect)]
pub fn pixel_perfect() -> Html {
    html! { <ProductLanding sheet={&PIXELPERFECT} /> }
}
