// 頁面上固定不變的內容：導覽、技能、經歷、備用專案清單

use crate::domain::model::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV: [NavItem; 5] = [
    NavItem { id: "about", label: "About" },
    NavItem { id: "skills", label: "Skills" },
    NavItem { id: "experience", label: "Experience" },
    NavItem { id: "projects", label: "Projects" },
    NavItem { id: "contact", label: "Contact" },
];

/// 區塊標題：小標、標題、副標
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTitle {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
}

pub const ABOUT_TITLE: SectionTitle = SectionTitle {
    eyebrow: "About",
    title: "A bit about me",
    subtitle: Some("Passionate about clean code, performance, and delightful UX."),
};

pub const SKILLS_TITLE: SectionTitle = SectionTitle {
    eyebrow: "Skills",
    title: "Tools I work with",
    subtitle: None,
};

pub const EXPERIENCE_TITLE: SectionTitle = SectionTitle {
    eyebrow: "Experience",
    title: "Where I’ve worked",
    subtitle: Some("A timeline of roles with dates."),
};

pub const PROJECTS_TITLE: SectionTitle = SectionTitle {
    eyebrow: "Projects",
    title: "Things I’ve built",
    subtitle: None,
};

pub const CONTACT_TITLE: SectionTitle = SectionTitle {
    eyebrow: "Contact",
    title: "Let’s build something together",
    subtitle: Some("Send a quick message and I’ll reply soon."),
};

pub const DEFAULT_OWNER: &str = "Your Name";

pub const HERO_TAGLINE: &str = "I build modern, scalable web applications with delightful user experiences. I enjoy solving complex problems and shipping high-quality products.";

pub const HERO_BADGES: [&str; 5] = ["React", "TypeScript", "FastAPI", "MongoDB", "AWS"];

pub const ABOUT_TEXT: &str = "I’m a software engineer with experience across the stack. I focus on building reliable, accessible, and maintainable applications. I love working with modern toolchains and collaborating with cross‑functional teams to turn ideas into products.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

macro_rules! skill {
    ($name:literal, $path:literal) => {
        Skill {
            name: $name,
            icon: concat!("https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/", $path),
        }
    };
}

pub const SKILLS: [Skill; 16] = [
    skill!("JavaScript", "javascript/javascript-original.svg"),
    skill!("TypeScript", "typescript/typescript-original.svg"),
    skill!("React", "react/react-original.svg"),
    skill!("Next.js", "nextjs/nextjs-original.svg"),
    skill!("Node.js", "nodejs/nodejs-original.svg"),
    skill!("Python", "python/python-original.svg"),
    skill!("FastAPI", "fastapi/fastapi-original.svg"),
    skill!("Django", "django/django-plain.svg"),
    skill!("MongoDB", "mongodb/mongodb-original.svg"),
    skill!("PostgreSQL", "postgresql/postgresql-original.svg"),
    skill!("Docker", "docker/docker-original.svg"),
    skill!("AWS", "amazonwebservices/amazonwebservices-original.svg"),
    skill!("CI/CD", "githubactions/githubactions-original.svg"),
    skill!("Testing", "jest/jest-plain.svg"),
    skill!("Tailwind CSS", "tailwindcss/tailwindcss-original.svg"),
    skill!("Framer Motion", "framer/framer-original.svg"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub points: &'static [&'static str],
}

impl Experience {
    pub fn period(&self) -> String {
        format!("{} — {}", self.start, self.end)
    }
}

/// 由新到舊
pub const EXPERIENCE: [Experience; 3] = [
    Experience {
        role: "Senior Software Engineer",
        company: "Tech Corp",
        start: "2023",
        end: "Present",
        points: &[
            "Led development of a multi-tenant SaaS platform",
            "Improved page performance by 40% with strategic caching",
            "Mentored a team of 4 engineers",
        ],
    },
    Experience {
        role: "Full‑Stack Engineer",
        company: "Startup Labs",
        start: "2021",
        end: "2023",
        points: &[
            "Built and maintained GraphQL APIs",
            "Implemented CI pipelines and automated tests",
            "Collaborated with design to ship polished UI",
        ],
    },
    Experience {
        role: "Software Engineer",
        company: "Freelance",
        start: "2019",
        end: "2021",
        points: &[
            "Delivered end‑to‑end web apps for clients",
            "Optimized apps for accessibility and SEO",
        ],
    },
];

/// 後端不可用或沒有資料時顯示的專案
pub fn fallback_projects() -> Vec<Project> {
    let entry = |title: &str, description: &str, tech: &[&str]| Project {
        id: None,
        title: title.to_string(),
        description: description.to_string(),
        tech: tech.iter().map(|t| t.to_string()).collect(),
        url: None,
        repo: None,
    };

    vec![
        entry(
            "Realtime Chat App",
            "WebSocket powered chat with rooms, typing indicators, and message persistence.",
            &["React", "FastAPI", "MongoDB", "WebSocket"],
        ),
        entry(
            "AI Code Assistant",
            "Inline code suggestions and refactoring hints using transformer models.",
            &["TypeScript", "Vite", "Python", "LLM"],
        ),
        entry(
            "Portfolio Generator",
            "Generate personal websites from a simple YAML profile with themes.",
            &["React", "Tailwind", "FastAPI"],
        ),
    ]
}
