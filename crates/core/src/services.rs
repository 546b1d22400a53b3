//! Static catalog of services shown on the public page.
//!
//! Services are not editable through the admin panel, so they live in code.

use serde::Serialize;

/// One service card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// Services in display order.
pub const SERVICES: &[Service] = &[
    Service {
        icon: "Building2",
        title: "Architectural Design",
        description: "Complete architectural solutions from concept to construction, including residential, commercial, and institutional buildings.",
        features: &["Conceptual Design", "Technical Drawings", "Building Permits", "3D Visualization"],
    },
    Service {
        icon: "Home",
        title: "Interior Design",
        description: "Creating beautiful and functional interior spaces that reflect your style and meet your practical needs.",
        features: &["Space Planning", "Material Selection", "Furniture Design", "Lighting Design"],
    },
    Service {
        icon: "Factory",
        title: "Production Design",
        description: "Specialized design services for manufacturing and industrial facilities, optimizing workflow and efficiency.",
        features: &["Facility Planning", "Workflow Optimization", "Safety Compliance", "Equipment Layout"],
    },
    Service {
        icon: "Ruler",
        title: "Project Management",
        description: "Comprehensive project management services ensuring timely delivery and quality control throughout the construction process.",
        features: &["Timeline Management", "Quality Control", "Budget Oversight", "Contractor Coordination"],
    },
    Service {
        icon: "PaintBucket",
        title: "Renovation & Remodeling",
        description: "Transform existing spaces with innovative renovation and remodeling solutions that maximize potential.",
        features: &["Space Optimization", "Modern Updates", "Structural Changes", "Historic Preservation"],
    },
    Service {
        icon: "Lightbulb",
        title: "Design Consultation",
        description: "Expert design consultation services to help you make informed decisions about your project.",
        features: &["Design Review", "Code Compliance", "Cost Estimation", "Feasibility Studies"],
    },
];
