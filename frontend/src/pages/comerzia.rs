use yew::prelude::*;

use crate::components::parallax_carousel::CarouselSlide;
use crate::components::product_card::ProductStatus;
use crate::pages::product::{
    ArchitectureCard, Feature, HeroMark, Highlight, Preview, ProductLanding, ProductSheet,
    Showcase, Stat,
};

pub static COMERZIA: ProductSheet = ProductSheet {
    name: "Comerzia",
    mark: HeroMark::Glyph("⚡"),
    status: ProductStatus::Beta,
    app_url: None,
    tagline: "Web app for managing orders and clients with dashboard for insights and",
    tagline_highlight: "automatic notification via email or SMS",
    hero_badges: &[],
    stats: &[
        Stat { number: "99.9%", label: "Uptime" },
        Stat { number: "50%", label: "Time Saved" },
        Stat { number: "24/7", label: "Support" },
        Stat { number: "< 2s", label: "Response Time" },
    ],
    capabilities_title: "",
    capabilities_subtitle: "",
    capabilities: &[],
    overview_title: "Complete Business Management Solution",
    overview_text: "Comerzia streamlines your entire business operation with intelligent order management, comprehensive client database, and actionable insights. From order creation to customer communication, everything you need is unified in one powerful platform.",
    highlights: &[
        Highlight {
            icon: "📦",
            title: "Orders",
            text: "Streamlined order processing",
        },
        Highlight {
            icon: "👥",
            title: "Customers",
            text: "Centralized customer management",
        },
        Highlight {
            icon: "📅",
            title: "Notifications",
            text: "Automated notifications",
        },
    ],
    preview: Some(Preview::Metrics {
        title: "Dashboard Preview",
        rows: &[
            ("Orders Today", "127"),
            ("New Customers", "23"),
            ("Revenue", "$12,450"),
        ],
    }),
    gallery_title: "Experience Comerzia in Action",
    gallery_subtitle: "Discover how intelligent automation and insightful analytics transform your business operations",
    slides: &[
        CarouselSlide {
            src: "/comerzia/homepage.png",
            alt: "Comerzia Homepage",
            title: Some("Welcome Dashboard"),
            description: Some("Clean and modern interface for business management"),
        },
        CarouselSlide {
            src: "/comerzia/dashboard.png",
            alt: "Comerzia Dashboard Overview",
            title: Some("Comprehensive Dashboard"),
            description: Some("Get real-time insights into your business performance"),
        },
        CarouselSlide {
            src: "/comerzia/orders-table.png",
            alt: "Order Management Interface",
            title: Some("Order Management"),
            description: Some("Streamlined workflow for processing and tracking orders"),
        },
        CarouselSlide {
            src: "/comerzia/clients.png",
            alt: "Client Database",
            title: Some("Client Management"),
            description: Some("Organize and manage your customer relationships"),
        },
    ],
    architecture_title: "Built for Scale & Performance",
    architecture_subtitle: "Enterprise-grade architecture designed to grow with your business while maintaining peak performance",
    architecture: &[
        ArchitectureCard {
            icon: "🗄",
            title: "Customer Database",
            description: "Centralized customer data management with advanced search and segmentation",
            tech: "PostgreSQL, Redis",
        },
        ArchitectureCard {
            icon: "⚙",
            title: "Order Processing Engine",
            description: "Automated workflow system for order lifecycle management",
            tech: "Node.js, Bull Queue",
        },
        ArchitectureCard {
            icon: "🔔",
            title: "Notification Service",
            description: "Multi-channel communication system with smart triggers",
            tech: "Twilio, SendGrid",
        },
        ArchitectureCard {
            icon: "🛡",
            title: "Security & Analytics",
            description: "Real-time analytics with enterprise-grade security",
            tech: "Elasticsearch, JWT",
        },
    ],
    showcase: Some(Showcase {
        title: "Integration Ecosystem",
        sequential: false,
        items: &[
            Highlight { icon: "✉", title: "Email Services", text: "" },
            Highlight { icon: "📱", title: "SMS Gateway", text: "" },
            Highlight { icon: "🛒", title: "E-commerce", text: "" },
            Highlight { icon: "📊", title: "Analytics", text: "" },
        ],
    }),
    features_title: "Comprehensive Feature Set",
    features_subtitle: "Everything you need to manage orders, customers, and communications in one integrated platform",
    features: &[
        Feature {
            icon: "🛒",
            title: "Order Management System",
            description: "Complete order lifecycle management from creation to fulfillment with real-time status tracking and automated workflows.",
            benefits: &["Order tracking", "Status automation", "Fulfillment management"],
        },
        Feature {
            icon: "👥",
            title: "Client Database",
            description: "Comprehensive customer relationship management with detailed profiles, purchase history, and segmentation tools.",
            benefits: &["Customer profiles", "Purchase history", "Smart segmentation"],
        },
        Feature {
            icon: "📊",
            title: "Analytics Dashboard",
            description: "Real-time business insights with customizable reports, sales analytics, and performance metrics.",
            benefits: &["Real-time insights", "Custom reports", "Performance tracking"],
        },
        Feature {
            icon: "✉",
            title: "Email Notifications",
            description: "Automated email communication system with customizable templates and trigger-based messaging.",
            benefits: &["Automated emails", "Custom templates", "Smart triggers"],
        },
        Feature {
            icon: "💬",
            title: "SMS Notifications",
            description: "Direct SMS communication for urgent updates, order confirmations, and customer engagement.",
            benefits: &["Instant delivery", "Order updates", "Customer engagement"],
        },
        Feature {
            icon: "📈",
            title: "Business Intelligence",
            description: "Advanced analytics and forecasting tools to help you make data-driven business decisions.",
            benefits: &["Sales forecasting", "Trend analysis", "ROI tracking"],
        },
    ],
    assurance: None,
    cta_title: "Ready to Streamline Your Business?",
    cta_text: "Join the beta program and be among the first to experience the future of business management. Get exclusive access to cutting-edge features and help shape the product roadmap.",
    cta_secondary: "Schedule Demo",
};

#[function_component(Comerzia)]
pub fn comerzia() -> Html {
    html! { <ProductLanding sheet={&COMERZIA} /> }
}
