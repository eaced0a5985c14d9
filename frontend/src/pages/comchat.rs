use yew::prelude::*;

use crate::components::parallax_carousel::CarouselSlide;
use crate::components::product_card::ProductStatus;
use crate::pages::product::{
    ArchitectureCard, Assurance, Feature, HeroMark, Highlight, Preview, ProductLanding,
    ProductSheet, Showcase, Speaker,
};

pub static COMCHAT: ProductSheet = ProductSheet {
    name: "ComChat",
    mark: HeroMark::Glyph("🛡"),
    status: ProductStatus::Beta,
    app_url: None,
    tagline: "A fully customizable chatbot for commerces and companies. Can be text or multimodal, have specific context for any type of activity and delegate to",
    tagline_highlight: "professional technical help when necessary",
    hero_badges: &[
        ("👁", "Multimodal AI"),
        ("🔒", "Privacy First"),
        ("👥", "Expert Delegation"),
    ],
    stats: &[],
    capabilities_title: "Advanced AI Capabilities",
    capabilities_subtitle: "Powered by cutting-edge AI technology to understand and respond to complex business needs",
    capabilities: &[
        Highlight {
            icon: "📄",
            title: "Document Analysis",
            text: "Process and understand PDFs, contracts, and technical documents",
        },
        Highlight {
            icon: "🎙",
            title: "Voice Interaction",
            text: "Natural speech recognition and voice response capabilities",
        },
        Highlight {
            icon: "📷",
            title: "Visual Recognition",
            text: "Analyze images, diagrams, and visual content for context",
        },
        Highlight {
            icon: "🤖",
            title: "Automated Workflows",
            text: "Execute complex business processes through conversation",
        },
    ],
    overview_title: "Intelligent Conversations, Maximum Privacy",
    overview_text: "ComChat revolutionizes customer interactions with AI-powered conversations that understand context, process multiple media types, and maintain the highest privacy standards. Whether deployed in the cloud or on-premises, ComChat adapts to your security requirements.",
    highlights: &[
        Highlight {
            icon: "🛡",
            title: "Data Sovereignty",
            text: "Keep sensitive data within your infrastructure",
        },
        Highlight {
            icon: "🔒",
            title: "End-to-End Encryption",
            text: "Military-grade security for all communications",
        },
        Highlight {
            icon: "🖥",
            title: "Local LLM Deployment",
            text: "Run AI models entirely on your hardware",
        },
    ],
    preview: Some(Preview::Chat {
        title: "ComChat AI Assistant",
        messages: &[
            (Speaker::User, "Can you analyze this contract document?"),
            (
                Speaker::Assistant,
                "I've analyzed the contract. I found 3 key terms that need review. Would you like me to connect you with our legal expert?",
            ),
            (Speaker::User, "Yes, please connect me"),
            (Speaker::System, "🔄 Connecting you with Legal Expert Sarah..."),
        ],
    }),
    gallery_title: "ComChat in Action",
    gallery_subtitle: "Experience intelligent conversations that understand context, process multiple formats, and seamlessly delegate to experts",
    slides: &[
        CarouselSlide {
            src: "/comchat/dashboard.jpeg",
            alt: "ComChat Dashboard Overview",
            title: Some("Intelligent Dashboard"),
            description: Some("Comprehensive analytics and conversation management interface"),
        },
        CarouselSlide {
            src: "/comchat/demo.jpeg",
            alt: "ComChat Demo Interface",
            title: Some("Live Demo"),
            description: Some("Experience the power of multimodal AI conversations"),
        },
        CarouselSlide {
            src: "/comchat/different-activities.jpeg",
            alt: "ComChat Activity Types",
            title: Some("Versatile Applications"),
            description: Some("Adaptable to various business activities and use cases"),
        },
    ],
    architecture_title: "Privacy-First Architecture",
    architecture_subtitle: "Designed with security and privacy at its core, supporting both cloud and on-premises deployment",
    architecture: &[
        ArchitectureCard {
            icon: "🧠",
            title: "AI Engine",
            description: "Advanced language models with multimodal capabilities and context awareness",
            tech: "GPT-4, Local LLMs",
        },
        ArchitectureCard {
            icon: "🖥",
            title: "Local Deployment",
            description: "On-premises hosting for maximum privacy and data control",
            tech: "Docker, Kubernetes",
        },
        ArchitectureCard {
            icon: "🛡",
            title: "Security Layer",
            description: "Enterprise-grade security with end-to-end encryption",
            tech: "AES-256, Zero Trust",
        },
        ArchitectureCard {
            icon: "⚡",
            title: "Integration Hub",
            description: "Seamless integration with existing business systems and workflows",
            tech: "REST API, Webhooks",
        },
    ],
    showcase: Some(Showcase {
        title: "Deployment Options",
        sequential: false,
        items: &[
            Highlight {
                icon: "🌐",
                title: "Cloud Deployment",
                text: "Fully managed service with global CDN and automatic scaling",
            },
            Highlight {
                icon: "🖥",
                title: "On-Premises",
                text: "Complete control with local hardware deployment and air-gapped security",
            },
            Highlight {
                icon: "🛡",
                title: "Hybrid Solution",
                text: "Best of both worlds with flexible data routing and compliance",
            },
        ],
    }),
    features_title: "Comprehensive AI Solutions",
    features_subtitle: "Everything you need for intelligent customer interactions with enterprise-grade security",
    features: &[
        Feature {
            icon: "💬",
            title: "Text & Multimodal Support",
            description: "Handle text conversations, voice messages, images, and documents with intelligent processing and contextual understanding.",
            benefits: &["Voice recognition", "Image analysis", "Document processing"],
        },
        Feature {
            icon: "⚙",
            title: "Fully Customizable",
            description: "Adapt the chatbot to any business type with custom training data, conversation flows, and brand-specific responses.",
            benefits: &["Custom training", "Brand alignment", "Industry-specific"],
        },
        Feature {
            icon: "🎧",
            title: "Technical Delegation",
            description: "Intelligent escalation system that seamlessly transfers complex queries to human technical professionals.",
            benefits: &["Smart escalation", "Context preservation", "Expert routing"],
        },
        Feature {
            icon: "🔒",
            title: "Local LLM Support",
            description: "Deploy language models on-premises for maximum privacy and data control without compromising functionality.",
            benefits: &["Data sovereignty", "Privacy compliance", "Custom models"],
        },
        Feature {
            icon: "🧠",
            title: "Context Intelligence",
            description: "Maintains conversation context across sessions and integrates with business data for personalized interactions.",
            benefits: &["Session memory", "Business integration", "Personalization"],
        },
        Feature {
            icon: "🌐",
            title: "Multi-Channel Deployment",
            description: "Deploy across websites, mobile apps, messaging platforms, and social media with unified management.",
            benefits: &["Omnichannel support", "Unified analytics", "Consistent experience"],
        },
    ],
    assurance: Some(Assurance {
        icon: "🔒",
        title: "Maximum Privacy Guaranteed",
        description: "Your data stays yours. With local LLM deployment, your conversations and business data never leave your infrastructure. Meet the strictest compliance requirements while maintaining full AI capabilities.",
        checks: &[
            "GDPR & CCPA Compliant",
            "SOC 2 Type II Certified",
            "Zero Data Retention",
            "Air-Gapped Deployment",
        ],
    }),
    cta_title: "Ready for Intelligent Conversations?",
    cta_text: "Join the beta program and experience the future of AI-powered customer interactions. Get early access to multimodal capabilities and help define the next generation of conversational AI.",
    cta_secondary: "Request Demo",
};

#[function_component(ComChat)]
pub fn comchat() -> Html {
    html! { <ProductLanding sheet={&COMCHAT} /> }
}
