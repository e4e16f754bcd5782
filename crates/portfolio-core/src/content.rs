//! Hard-coded page content.
//!
//! Everything the page shows lives here as typed `'static` data so the UI
//! components only bind it to markup. Highlighted phrases inside running text
//! are [`Segment::Strong`] runs, not embedded HTML.

/// Colour family used for highlights, tiles and gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Blue,
    Cyan,
    Indigo,
    Rose,
    Orange,
    Emerald,
    Teal,
    Violet,
    Purple,
    Yellow,
    Slate,
}

impl Accent {
    /// Lowercase name used to build CSS class names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Cyan => "cyan",
            Accent::Indigo => "indigo",
            Accent::Rose => "rose",
            Accent::Orange => "orange",
            Accent::Emerald => "emerald",
            Accent::Teal => "teal",
            Accent::Violet => "violet",
            Accent::Purple => "purple",
            Accent::Yellow => "yellow",
            Accent::Slate => "slate",
        }
    }
}

/// Two-stop gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: Accent,
    pub to: Accent,
}

/// Icons drawn by the UI (Lucide set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Activity,
    ArrowRight,
    ArrowUpRight,
    Award,
    Bot,
    Brain,
    BrainCircuit,
    Calendar,
    CheckCircle,
    Cpu,
    Database,
    Download,
    ExternalLink,
    Github,
    Globe,
    Lightbulb,
    Linkedin,
    Lock,
    Mail,
    Menu,
    Mic,
    Moon,
    Send,
    ShieldAlert,
    ShieldCheck,
    Star,
    Sun,
    Terminal,
    TrendingDown,
    Trophy,
    X,
    Zap,
}

/// A run of running text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Plain(&'static str),
    /// Bold, coloured phrase
    Strong(&'static str, Accent),
}

impl Segment {
    pub fn text(&self) -> &'static str {
        match self {
            Segment::Plain(text) | Segment::Strong(text, _) => text,
        }
    }
}

/// Concatenated text of a rich-text run, without markup.
#[cfg(test)]
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(Segment::text).collect()
}

/// Section heading: leading words plus a gradient-highlighted tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    pub lead: &'static str,
    pub highlight: &'static str,
    pub subtitle: Option<&'static str>,
}

// === Section anchors ===

pub const SECTION_EXPERIENCE: &str = "experience";
pub const SECTION_PROJECTS: &str = "projects";
pub const SECTION_CONTACT: &str = "contact";

/// Ids the page renders, in page order.
#[cfg(test)]
pub const SECTION_IDS: &[&str] = &[SECTION_EXPERIENCE, SECTION_PROJECTS, SECTION_CONTACT];

// === Navigation ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    /// Target section id, or `None` for the top of the page.
    pub fn section(&self) -> Option<&'static str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "#" },
    NavLink { label: "Experience", href: "#experience" },
    NavLink { label: "Work", href: "#projects" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const LOGO_TEXT: &str = "Kg.";

// === Profile & assets ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub owner: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub resume: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    owner: "Kinisha Gupta",
    email: "kinisha94@gmail.com",
    linkedin: "https://linkedin.com/in/kinishagupta",
    github: "https://github.com/kinishagupta",
    resume: "/resume.pdf",
};

// === Hero ===

/// Progress bar on the hero metrics card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarMetric {
    pub label: &'static str,
    pub display: &'static str,
    /// Bar fill, 0-100
    pub fill_percent: f32,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hero {
    pub badge: &'static str,
    pub headline: &'static str,
    pub headline_highlight: &'static str,
    pub subtext: &'static str,
    pub card_file: &'static str,
    pub bars: &'static [BarMetric],
    pub code_lines: &'static [&'static str],
    pub status_title: &'static str,
    pub status_caption: &'static str,
}

pub const HERO: Hero = Hero {
    badge: "Open to Work",
    headline: "Data Intelligence.",
    headline_highlight: "Engineered to Scale.",
    subtext: "Bridging the gap between raw data and actionable insights. Building resource-efficient AI pipelines that drive decision-making.",
    card_file: "model.py",
    bars: &[
        BarMetric {
            label: "Model Accuracy",
            display: "98.4%",
            fill_percent: 98.4,
            accent: Accent::Blue,
        },
        BarMetric {
            label: "Processing Latency",
            display: "0.38s",
            fill_percent: 35.0,
            accent: Accent::Rose,
        },
    ],
    code_lines: &[
        "# Pipeline Config",
        "def process_stream(data):",
        "    features = extract(data)",
        "    return model.predict(features)",
    ],
    status_title: "System Active",
    status_caption: "Ready for Deployment",
};

// === Experience highlight ===

/// Square stat tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub badge: &'static str,
    pub heading: Heading,
    pub organisation: &'static str,
    pub role: &'static str,
    pub logo: &'static str,
    pub logo_alt: &'static str,
    pub paragraphs: &'static [&'static [Segment]],
    pub tags: &'static [&'static str],
    pub metrics: &'static [Metric],
}

pub const EXPERIENCE: Experience = Experience {
    badge: "Flagship Experience",
    heading: Heading {
        lead: "Technical",
        highlight: "Excellence",
        subtitle: None,
    },
    organisation: "Defence Research & Development Org.",
    role: "Machine Learning Intern",
    logo: "/DRDO-logo.png",
    logo_alt: "DRDO Logo",
    paragraphs: &[
        &[
            Segment::Plain("Architected a "),
            Segment::Strong("CPU-optimized Satellite Captioning Model", Accent::Slate),
            Segment::Plain(" (ResNet-18 + LSTM) for real-time defense applications."),
        ],
        &[
            Segment::Plain("Implemented advanced quantization techniques to compress the model by "),
            Segment::Strong("68%", Accent::Emerald),
            Segment::Plain(" while maintaining critical accuracy for edge deployment scenarios."),
        ],
    ],
    tags: &["PyTorch", "ONNX", "Edge AI", "Computer Vision", "ResNet-18", "LSTM"],
    metrics: &[
        Metric {
            value: "0.38s",
            label: "Inference Latency",
            icon: Icon::Zap,
            accent: Accent::Yellow,
        },
        Metric {
            value: "68%",
            label: "Compression",
            icon: Icon::TrendingDown,
            accent: Accent::Emerald,
        },
        Metric {
            value: "INT8",
            label: "Quantization",
            icon: Icon::Brain,
            accent: Accent::Blue,
        },
        Metric {
            value: "3 Mos",
            label: "Duration",
            icon: Icon::Calendar,
            accent: Accent::Rose,
        },
    ],
};

// === Projects ===

/// Grid width of a flagship card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Narrow,
    Wide,
}

impl Span {
    pub fn columns(&self) -> u8 {
        match self {
            Span::Narrow => 1,
            Span::Wide => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static [Segment],
    pub tags: &'static [&'static str],
    pub icon: Icon,
    pub span: Span,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundationalProject {
    pub title: &'static str,
    pub description: &'static [Segment],
    pub icon: Icon,
    pub tech: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

pub const PROJECTS_HEADING: Heading = Heading {
    lead: "Engineering",
    highlight: "Impact.",
    subtitle: Some("Scalable systems, research implementations, and secure infrastructure tools."),
};

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Real-Time Anomaly Detection",
        description: &[
            Segment::Plain("Distributed anomaly detection pipeline processing high-volume financial transactions. Implemented "),
            Segment::Strong("SHAP values", Accent::Blue),
            Segment::Plain(" to explain XGBoost decisions."),
        ],
        tags: &["Spark", "XGBoost", "SHAP", "Python"],
        icon: Icon::Database,
        span: Span::Wide,
        gradient: Gradient {
            from: Accent::Blue,
            to: Accent::Indigo,
        },
    },
    Project {
        title: "Falcon-7B Chatbot",
        description: &[
            Segment::Plain("Fine-tuned Falcon-7B LLM using "),
            Segment::Strong("QLoRA", Accent::Rose),
            Segment::Plain(" quantization for efficient inference on consumer hardware."),
        ],
        tags: &["LLM", "Quantization", "HuggingFace"],
        icon: Icon::Bot,
        span: Span::Narrow,
        gradient: Gradient {
            from: Accent::Rose,
            to: Accent::Orange,
        },
    },
    Project {
        title: "Texture Classification",
        description: &[
            Segment::Plain("Automated material analysis utilizing "),
            Segment::Strong("GLCM", Accent::Emerald),
            Segment::Plain(" features for precise texture extraction."),
        ],
        tags: &["OpenCV", "Scikit-image", "GLCM"],
        icon: Icon::Brain,
        span: Span::Narrow,
        gradient: Gradient {
            from: Accent::Emerald,
            to: Accent::Teal,
        },
    },
    Project {
        title: "University Portal",
        description: &[Segment::Plain(
            "Full-stack RBAC system for real-time student tracking and automated reporting.",
        )],
        tags: &["PHP", "MySQL", "REST API"],
        icon: Icon::Globe,
        span: Span::Wide,
        gradient: Gradient {
            from: Accent::Violet,
            to: Accent::Purple,
        },
    },
];

pub const FOUNDATIONAL: &[FoundationalProject] = &[
    FoundationalProject {
        title: "NLP Spam Classifier",
        description: &[
            Segment::Plain("TF-IDF + Ensemble (NB, SVM, RF) pipeline achieving "),
            Segment::Strong("98.7% accuracy", Accent::Slate),
            Segment::Plain("."),
        ],
        icon: Icon::ShieldAlert,
        tech: "NLP / Python",
    },
    FoundationalProject {
        title: "AES-256 Vault",
        description: &[
            Segment::Plain("Secure GUI-based vault with "),
            Segment::Strong("AES-256 encryption", Accent::Slate),
            Segment::Plain(" and full CRUD operations."),
        ],
        icon: Icon::Lock,
        tech: "Security / Java",
    },
    FoundationalProject {
        title: "Mastermind CLI",
        description: &[Segment::Plain(
            "Algorithmic logic game with automated code generation and scoring feedback.",
        )],
        icon: Icon::Terminal,
        tech: "C++ / Algorithms",
    },
];

pub const ACHIEVEMENTS_HEADING: Heading = Heading {
    lead: "Achievements",
    highlight: "& Honors.",
    subtitle: None,
};

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Top 3% @ IIT Kanpur",
        description: "Ranked Top 20 of 600+ participants in 'Return Journey X' Hackathon.",
        icon: Icon::Trophy,
        accent: Accent::Yellow,
    },
    Achievement {
        title: "SIH 2025 Contributor",
        description: "Key Contributor: AI-powered internship matching logic.",
        icon: Icon::Lightbulb,
        accent: Accent::Blue,
    },
    Achievement {
        title: "Best Delegate (MUN)",
        description: "Multiple awards recognizing leadership & public speaking skills.",
        icon: Icon::Mic,
        accent: Accent::Rose,
    },
];

// === Skills ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: Icon,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILLS_HEADING: Heading = Heading {
    lead: "Technical",
    highlight: "Competencies.",
    subtitle: Some("A comprehensive overview of my technical stack and engineering capabilities."),
};

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        id: "data",
        name: "Data Engineering",
        icon: Icon::Database,
        description: "Pipelines, Warehousing & Visualization logic.",
        skills: &["Python", "SQL", "Pandas", "Apache Spark", "Power BI", "Tableau", "Excel VBA"],
    },
    SkillCategory {
        id: "ai",
        name: "AI & Machine Learning",
        icon: Icon::BrainCircuit,
        description: "Predictive modeling, Deep Learning & LLM tuning.",
        skills: &["PyTorch", "TensorFlow", "Scikit-learn", "XGBoost", "OpenCV", "HuggingFace", "QLoRA"],
    },
    SkillCategory {
        id: "dev",
        name: "Full-Stack & DevOps",
        icon: Icon::Terminal,
        description: "Scalable application development & Infrastructure.",
        skills: &["React", "TypeScript", "Docker", "Git/GitHub", "Linux", "FastAPI", "PostgreSQL"],
    },
];

// === Certifications ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    /// Path of the credential document, served as a static asset
    pub file: &'static str,
    pub gradient: Gradient,
}

pub const CERTIFICATIONS_HEADING: Heading = Heading {
    lead: "Professional",
    highlight: "Certifications.",
    subtitle: Some("Verified credentials and industry-recognized qualifications validating my technical expertise."),
};

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Data Analyst 101",
        issuer: "Microsoft | Simplilearn",
        date: "Jan 2026",
        file: "/c1.pdf",
        gradient: Gradient {
            from: Accent::Blue,
            to: Accent::Cyan,
        },
    },
    Certification {
        title: "Generative AI with Databricks",
        issuer: "Databricks",
        date: "Jan 2026",
        file: "/c2.pdf",
        gradient: Gradient {
            from: Accent::Orange,
            to: Accent::Rose,
        },
    },
    Certification {
        title: "SQL Analytics & BI on Databricks",
        issuer: "Databricks",
        date: "Jan 2026",
        file: "/c3.pdf",
        gradient: Gradient {
            from: Accent::Emerald,
            to: Accent::Teal,
        },
    },
    Certification {
        title: "Prompt Engineering with Copilot",
        issuer: "Microsoft | Simplilearn",
        date: "Jan 2026",
        file: "/c4.pdf",
        gradient: Gradient {
            from: Accent::Violet,
            to: Accent::Purple,
        },
    },
];

// === Contact footer ===

pub const CONTACT_HEADING: Heading = Heading {
    lead: "Let's",
    highlight: "Connect.",
    subtitle: Some("Have a project in mind or want to discuss Data Science opportunities? Drop a message below."),
};

pub const BUILT_WITH: &str = "Built with Rust & Dioxus.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_point_at_rendered_sections() {
        for link in NAV_LINKS {
            if let Some(id) = link.section() {
                assert!(SECTION_IDS.contains(&id), "{} -> #{} has no section", link.label, id);
            }
        }
        assert_eq!(NAV_LINKS[0].section(), None);
    }

    #[test]
    fn test_plain_text_joins_segments() {
        let text = plain_text(PROJECTS[1].description);
        assert_eq!(
            text,
            "Fine-tuned Falcon-7B LLM using QLoRA quantization for efficient inference on consumer hardware."
        );
    }

    #[test]
    fn test_flagship_rows_fill_three_columns() {
        let total: u8 = PROJECTS.iter().map(|p| p.span.columns()).sum();
        assert_eq!(total % 3, 0);
    }

    #[test]
    fn test_asset_paths_are_absolute() {
        let mut paths: Vec<&str> = CERTIFICATIONS.iter().map(|c| c.file).collect();
        paths.push(PROFILE.resume);
        paths.push(EXPERIENCE.logo);
        for path in paths {
            assert!(path.starts_with('/'), "{path}");
        }
    }

    #[test]
    fn test_hero_bars_within_range() {
        for bar in HERO.bars {
            assert!((0.0..=100.0).contains(&bar.fill_percent));
        }
    }

    #[test]
    fn test_skill_category_ids_unique() {
        let mut ids: Vec<_> = SKILL_CATEGORIES.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SKILL_CATEGORIES.len());
    }

    #[test]
    fn test_mailto() {
        assert_eq!(PROFILE.mailto(), "mailto:kinisha94@gmail.com");
    }
}
