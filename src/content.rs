pub const AGENCY_NAME: &str = "TechFlow";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "services", label: "Services" },
    Section { id: "technology", label: "Technology" },
    Section { id: "reviews", label: "Reviews" },
    Section { id: "contact", label: "Contact" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metric {
    pub target: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const METRICS: &[Metric] = &[
    Metric { target: 250, suffix: "+", label: "Projects delivered" },
    Metric { target: 98, suffix: "%", label: "Client retention" },
    Metric { target: 1_200_000, suffix: "", label: "Lines of code shipped" },
    Metric { target: 40, suffix: "", label: "Engineers" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub slug: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        slug: "web-development",
        icon: "◆",
        title: "Web Development",
        summary: "Fast, accessible sites and web apps built to last.",
        details: &[
            "Single-page and server-rendered apps",
            "Performance and accessibility audits",
            "Design systems and component libraries",
        ],
    },
    Service {
        slug: "mobile-apps",
        icon: "▲",
        title: "Mobile Apps",
        summary: "Native-feeling apps for iOS and Android.",
        details: &[
            "Cross-platform delivery from one codebase",
            "Offline-first data sync",
            "App store launch support",
        ],
    },
    Service {
        slug: "cloud-infrastructure",
        icon: "●",
        title: "Cloud Infrastructure",
        summary: "Reliable platforms that scale with your traffic.",
        details: &[
            "Infrastructure as code",
            "Observability and on-call tooling",
            "Cost reviews and right-sizing",
        ],
    },
    Service {
        slug: "ai-solutions",
        icon: "■",
        title: "AI Solutions",
        summary: "Practical machine learning wired into real products.",
        details: &[
            "Model selection and evaluation",
            "Retrieval pipelines over your data",
            "Guardrails and monitoring",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TechItem {
    pub name: &'static str,
    pub tooltip: Option<&'static str>,
}

pub const TECH_STACK: &[TechItem] = &[
    TechItem { name: "Rust", tooltip: Some("Systems code and WebAssembly front ends") },
    TechItem { name: "TypeScript", tooltip: Some("Typed JavaScript for large web apps") },
    TechItem { name: "Kubernetes", tooltip: Some("Container orchestration in production") },
    TechItem { name: "PostgreSQL", tooltip: Some("Our default relational database") },
    TechItem { name: "Terraform", tooltip: Some("Infrastructure as code") },
    TechItem { name: "HTML & CSS", tooltip: None },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Review {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const REVIEWS: &[Review] = &[
    Review {
        quote: "They rebuilt our storefront in six weeks and conversions went up by a third.",
        author: "Maya Lindqvist",
        role: "Head of E-commerce, Northwind",
    },
    Review {
        quote: "Clear communication, honest estimates and code our own team enjoys maintaining.",
        author: "Daniel Osei",
        role: "CTO, Ledgerline",
    },
    Review {
        quote: "Our infrastructure bill dropped 40% without a single minute of downtime.",
        author: "Priya Raman",
        role: "VP Engineering, Skyforge",
    },
];

/// Options of the contact form's service select. The empty value is the placeholder.
pub const SERVICE_OPTIONS: &[(&str, &str)] = &[
    ("", "Select a service"),
    ("web-development", "Web Development"),
    ("mobile-apps", "Mobile Apps"),
    ("cloud-infrastructure", "Cloud Infrastructure"),
    ("ai-solutions", "AI Solutions"),
    ("other", "Something else"),
];

pub fn metric_targets() -> impl Iterator<Item = u64> {
    METRICS.iter().map(|metric| metric.target)
}
