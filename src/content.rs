//! Hand-authored site content.

use chrono::{DateTime, Datelike, Utc};

pub const SITE_NAME: &str = "Dev";
pub const CONTACT_EMAIL: &str = "devinpro.404@gmail.com";
pub const PROJECTS_PER_PAGE: usize = 6;

/// Year for the footer notice, fixed at build time so server and client render
/// the same text.
pub fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub static NAV_LINKS: &[NavLink] = &[
    NavLink {
        href: "#about",
        label: "About",
    },
    NavLink {
        href: "#projects",
        label: "Projects",
    },
    NavLink {
        href: "#services",
        label: "Services",
    },
    NavLink {
        href: "#request",
        label: "Get Website",
    },
    NavLink {
        href: "#contact",
        label: "Contact",
    },
];

pub struct SocialLink {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[SocialLink {
    href: "https://www.instagram.com/dev_in_pro?igsh=MXgyOWJocWpwNWpkYQ==",
    label: "Instagram",
    icon: "📷",
}];

pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
}

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "React",
        category: "Frontend",
    },
    Skill {
        name: "TypeScript",
        category: "Language",
    },
    Skill {
        name: "Next.js",
        category: "Framework",
    },
    Skill {
        name: "Tailwind CSS",
        category: "Styling",
    },
    Skill {
        name: "Node.js",
        category: "Backend",
    },
    Skill {
        name: "PostgreSQL",
        category: "Database",
    },
    Skill {
        name: "GraphQL",
        category: "API",
    },
    Skill {
        name: "Docker",
        category: "DevOps",
    },
    Skill {
        name: "AWS",
        category: "Cloud",
    },
    Skill {
        name: "Git",
        category: "Version Control",
    },
    Skill {
        name: "Figma",
        category: "Design",
    },
    Skill {
        name: "REST APIs",
        category: "API",
    },
];

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "🧩",
        title: "Clean Code",
        description: "Writing maintainable, scalable code following best practices",
    },
    Highlight {
        icon: "🎨",
        title: "Modern Design",
        description: "Creating beautiful, intuitive user interfaces",
    },
    Highlight {
        icon: "🗄️",
        title: "Full Stack",
        description: "Building end-to-end solutions from database to deployment",
    },
    Highlight {
        icon: "⚡",
        title: "Performance",
        description: "Optimizing for speed and seamless user experiences",
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: &'static str,
    pub source_url: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "A full-featured online store with cart, checkout, and payment integration. Built for scalability and performance.",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=600&h=400&fit=crop",
        tags: &["React", "Node.js", "PostgreSQL", "Stripe"],
        live_url: "#",
        source_url: "#",
    },
    Project {
        title: "Task Management App",
        description: "Collaborative project management tool with real-time updates, drag-and-drop, and team features.",
        image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=600&h=400&fit=crop",
        tags: &["Next.js", "TypeScript", "Prisma", "WebSocket"],
        live_url: "#",
        source_url: "#",
    },
    Project {
        title: "AI Content Generator",
        description: "SaaS platform leveraging AI to generate marketing copy, blog posts, and social media content.",
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=600&h=400&fit=crop",
        tags: &["React", "OpenAI", "Tailwind", "Supabase"],
        live_url: "#",
        source_url: "#",
    },
    Project {
        title: "Real Estate Dashboard",
        description: "Analytics dashboard for property management with interactive charts and data visualization.",
        image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=600&h=400&fit=crop",
        tags: &["React", "D3.js", "GraphQL", "MongoDB"],
        live_url: "#",
        source_url: "#",
    },
    Project {
        title: "Fitness Tracking App",
        description: "Mobile-first fitness application with workout tracking, progress analytics, and social features.",
        image: "https://images.unsplash.com/photo-1476480862126-209bfaa8edc8?w=600&h=400&fit=crop",
        tags: &["React Native", "TypeScript", "Firebase"],
        live_url: "#",
        source_url: "#",
    },
    Project {
        title: "Social Media Platform",
        description: "Community platform with real-time messaging, content sharing, and engagement features.",
        image: "https://images.unsplash.com/photo-1611162617474-5b21e879e113?w=600&h=400&fit=crop",
        tags: &["Next.js", "Redis", "PostgreSQL", "AWS"],
        live_url: "#",
        source_url: "#",
    },
    Project {
        title: "Restaurant Booking System",
        description: "Table reservations with live availability, SMS reminders, and a dashboard for front-of-house staff.",
        image: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=600&h=400&fit=crop",
        tags: &["Next.js", "PostgreSQL", "Twilio"],
        live_url: "#",
        source_url: "#",
    },
    Project {
        title: "Learning Management System",
        description: "Course builder with video lessons, quizzes, and progress tracking for small training teams.",
        image: "https://images.unsplash.com/photo-1501504905252-473c47e087f8?w=600&h=400&fit=crop",
        tags: &["React", "Node.js", "MongoDB", "AWS"],
        live_url: "#",
        source_url: "#",
    },
    Project {
        title: "Travel Blog",
        description: "Content-first travel journal with a headless CMS, image galleries, and interactive trip maps.",
        image: "https://images.unsplash.com/photo-1488646953014-85cb44e25828?w=600&h=400&fit=crop",
        tags: &["Next.js", "Sanity", "Mapbox"],
        live_url: "#",
        source_url: "#",
    },
    Project {
        title: "Agency Portfolio",
        description: "Animated portfolio site for a design studio with case studies and a lead-capture funnel.",
        image: "https://images.unsplash.com/photo-1559028012-481c04fa702d?w=600&h=400&fit=crop",
        tags: &["React", "Framer Motion", "Tailwind"],
        live_url: "#",
        source_url: "#",
    },
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub static SERVICES: &[Service] = &[
    Service {
        icon: "🌐",
        title: "Website Development",
        description: "Custom websites that are fast, responsive, and optimized for search engines. From landing pages to complex web applications.",
        features: &["Responsive Design", "SEO Optimized", "Fast Loading"],
    },
    Service {
        icon: "💻",
        title: "Web App Development",
        description: "Scalable web applications built with modern technologies. From MVPs to enterprise-grade solutions.",
        features: &["Custom Functionality", "API Integration", "Database Design"],
    },
    Service {
        icon: "✏️",
        title: "UI/UX Design",
        description: "User-centered design that looks great and works even better. Creating intuitive interfaces that users love.",
        features: &["User Research", "Wireframing", "Prototyping"],
    },
    Service {
        icon: "🔧",
        title: "Maintenance & Support",
        description: "Ongoing support to keep your applications running smoothly. Updates, security patches, and performance optimization.",
        features: &["24/7 Monitoring", "Security Updates", "Performance Tuning"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::Pager;

    #[test]
    fn test_projects_span_two_pages() {
        let mut pager = Pager::new(PROJECTS.len(), PROJECTS_PER_PAGE);
        assert_eq!(pager.page_count(), 2);
        pager.next();
        assert_eq!(pager.slice(PROJECTS).len(), PROJECTS.len() - PROJECTS_PER_PAGE);
    }

    #[test]
    fn test_copyright_year_from_build_time() {
        assert!(copyright_year() >= 2024);
    }

    #[test]
    fn test_nav_links_are_anchors() {
        assert!(NAV_LINKS.iter().all(|l| l.href.starts_with('#')));
        assert!(NAV_LINKS.iter().any(|l| l.href == "#request"));
    }
}
