//! Hand-authored page content.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const OWNER: &str = "Divyansh Rana";
pub const TAGLINE: &str = "AI/ML Engineer • Agentic Workflows • RAG • LLMOps";
pub const INTRO: &str = "Turning messy, real‑world problems into elegant, production‑ready AI systems. Currently building with LangGraph, LangChain, CrewAI, and modern MLOps.";
pub const ABOUT: &str = "I’m a Noida‑based AI/ML developer focused on shipping useful things: high‑quality agentic systems, robust RAG, and clean MLOps pipelines. I’m comfortable across the stack—FastAPI backends, Streamlit/React frontends, CI/CD, and cloud.";

pub const GITHUB_URL: &str = "https://github.com/Divyanshrana01";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/divyanshrana991/";
pub const RESUME_PATH: &str = "/Divyansh_Rana_Resume.pdf";

pub struct ContactDetails {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

pub static CONTACT: ContactDetails = ContactDetails {
    email: "divyanshr141@gmail.com",
    phone: "+91 7453049660",
    location: "Greater Noida, India",
};

/// Navbar anchors, in page order.
pub static NAV_ITEMS: [&str; 4] = ["About", "Skills", "Projects", "Contact"];

/// Icons are Lucide names, rendered through the `icon-*` font classes.
pub struct Tile {
    pub icon: &'static str,
    pub label: &'static str,
    pub gradient: &'static str,
}

pub static EXPERTISE: [Tile; 6] = [
    Tile {
        icon: "brain-circuit",
        label: "LLMs",
        gradient: "from-purple-500 to-pink-500",
    },
    Tile {
        icon: "layers",
        label: "RAG",
        gradient: "from-blue-500 to-cyan-500",
    },
    Tile {
        icon: "rocket",
        label: "Agents",
        gradient: "from-green-500 to-emerald-500",
    },
    Tile {
        icon: "database",
        label: "Vector",
        gradient: "from-orange-500 to-red-500",
    },
    Tile {
        icon: "gauge",
        label: "MLOps",
        gradient: "from-indigo-500 to-purple-500",
    },
    Tile {
        icon: "code",
        label: "Apps",
        gradient: "from-teal-500 to-blue-500",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 3] = [
    Stat {
        value: "+10",
        label: "Projects",
    },
    Stat {
        value: "+3",
        label: "Years",
    },
    Stat {
        value: "+15",
        label: "Techs",
    },
];

pub struct QuickLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
    pub external: bool,
}

pub static QUICK_LINKS: [QuickLink; 3] = [
    QuickLink {
        label: "LinkedIn",
        icon: "linkedin",
        href: LINKEDIN_URL,
        external: true,
    },
    QuickLink {
        label: "GitHub",
        icon: "github",
        href: GITHUB_URL,
        external: true,
    },
    QuickLink {
        label: "Contact",
        icon: "mail",
        href: "#contact",
        external: false,
    },
];

pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub gradient: &'static str,
    pub items: &'static [&'static str],
}

pub static SKILLS: [SkillCategory; 3] = [
    SkillCategory {
        title: "Generative AI",
        icon: "brain-circuit",
        gradient: "from-purple-500 to-pink-500",
        items: &[
            "LangGraph",
            "LangChain",
            "CrewAI",
            "RAG",
            "Fine‑tuning",
            "LLMOps",
            "Agentic Workflows",
            "MCP servers",
            "Prompt Eng",
            "Vector DBs",
        ],
    },
    SkillCategory {
        title: "ML/DL",
        icon: "rocket",
        gradient: "from-blue-500 to-cyan-500",
        items: &[
            "Supervised",
            "Unsupervised",
            "Transformers",
            "TensorFlow",
            "Keras",
            "Optuna",
            "Model Eval",
        ],
    },
    SkillCategory {
        title: "Data/Infra",
        icon: "database",
        gradient: "from-green-500 to-emerald-500",
        items: &[
            "Python",
            "SQL",
            "Docker",
            "MLflow",
            "DVC",
            "Airflow",
            "Kubernetes",
            "AWS",
            "FastAPI",
            "Streamlit",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub blurb: &'static str,
    pub tags: &'static [&'static str],
    pub demo: &'static str,
    pub code: &'static str,
}

pub static PROJECTS: [Project; 5] = [
    Project {
        title: "MAX – Agentic Chatbot",
        blurb: "Streaming chatbot with persona tuning, auto tool routing (web search), multi‑chat threads, clean live‑response UI.",
        tags: &["LangGraph", "LangChain", "Agents", "Streaming"],
        demo: "#",
        code: GITHUB_URL,
    },
    Project {
        title: "DocTalk – Chat with PDFs & Websites",
        blurb: "FAISS + HF embeddings, Groq LLaMA 4, chat history, LangSmith tracing.",
        tags: &["RAG", "FAISS", "LangChain", "Groq"],
        demo: "#",
        code: GITHUB_URL,
    },
    Project {
        title: "Indian Constitution Legal Assistant",
        blurb: "RAG over bare acts, fast retrieval, grounded answers, Streamlit UI.",
        tags: &["RAG", "Streamlit", "LLMs"],
        demo: "#",
        code: GITHUB_URL,
    },
    Project {
        title: "AI Nutrition Coach",
        blurb: "Conversational meal planning with LangChain tools and macro targets.",
        tags: &["Agents", "Tools", "LLMs"],
        demo: "#",
        code: GITHUB_URL,
    },
    Project {
        title: "GenAI News Assistant (India)",
        blurb: "Personalized feeds, pop‑up blocks, category routing, recommendations.",
        tags: &["RAG", "Recs", "LLMOps"],
        demo: "#",
        code: GITHUB_URL,
    },
];

/// Tabs above the project grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Rag,
    Agents,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown project filter: {0}")]
pub struct UnknownFilter(pub String);

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 3] = [Self::All, Self::Rag, Self::Agents];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Rag => "RAG",
            Self::Agents => "Agents",
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Rag => project.tags.contains(&"RAG"),
            Self::Agents => project.tags.contains(&"Agents"),
        }
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "rag" => Ok(Self::Rag),
            "agents" => Ok(Self::Agents),
            _ => Err(UnknownFilter(s.to_string())),
        }
    }
}

pub struct Testimonial {
    pub reviewer: &'static str,
    pub role: &'static str,
    pub avatar_url: &'static str,
    pub quote: &'static str,
}

impl Testimonial {
    /// Shown when the avatar image fails to load.
    pub fn initials(&self) -> String {
        self.reviewer
            .split_whitespace()
            .filter_map(|w| w.chars().find(|c| c.is_alphabetic()))
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

const QUOTE: &str = "Divyansh ships fast and cares about quality. His RAG + agentic systems are reliable and thoughtfully engineered.";

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        reviewer: "Reviewer 1",
        role: "Ex‑colleague",
        avatar_url: "https://i.pravatar.cc/100?img=1",
        quote: QUOTE,
    },
    Testimonial {
        reviewer: "Reviewer 2",
        role: "Ex‑colleague",
        avatar_url: "https://i.pravatar.cc/100?img=2",
        quote: QUOTE,
    },
    Testimonial {
        reviewer: "Reviewer 3",
        role: "Ex‑colleague",
        avatar_url: "https://i.pravatar.cc/100?img=3",
        quote: QUOTE,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_tag() {
        let rag = ProjectFilter::Rag.apply(&PROJECTS);
        assert_eq!(rag.len(), 3);
        assert!(rag.iter().all(|p| p.tags.contains(&"RAG")));

        let agents = ProjectFilter::Agents.apply(&PROJECTS);
        let titles = agents.iter().map(|p| p.title).collect::<Vec<_>>();
        assert_eq!(titles, vec!["MAX – Agentic Chatbot", "AI Nutrition Coach"]);

        assert_eq!(ProjectFilter::All.apply(&PROJECTS).len(), PROJECTS.len());
    }

    #[test]
    fn test_filter_labels_parse() {
        for filter in ProjectFilter::ALL {
            assert_eq!(filter.label().parse::<ProjectFilter>(), Ok(filter));
        }
        assert_eq!(
            "vision".parse::<ProjectFilter>(),
            Err(UnknownFilter("vision".to_string()))
        );
    }

    #[test]
    fn test_initials() {
        assert_eq!(TESTIMONIALS[0].initials(), "R");
        let t = Testimonial {
            reviewer: "divyansh rana",
            role: "",
            avatar_url: "",
            quote: "",
        };
        assert_eq!(t.initials(), "DR");
    }

    #[test]
    fn test_skill_categories_are_populated() {
        assert!(SKILLS.iter().all(|c| !c.items.is_empty()));
        let total = SKILLS.iter().map(|c| c.items.len()).sum::<usize>();
        assert_eq!(total, 27);
    }
}
