use crate::core::projects::displayed_projects;
use crate::domain::content::{
    SectionTitle, ABOUT_TEXT, ABOUT_TITLE, CONTACT_TITLE, EXPERIENCE, EXPERIENCE_TITLE,
    HERO_BADGES, HERO_TAGLINE, NAV, PROJECTS_TITLE, SKILLS, SKILLS_TITLE,
};
use crate::domain::model::{Project, SubmissionResult};
use chrono::Datelike;
use std::fmt;

/// 每張專案卡最多顯示的技術標籤數
pub const MAX_TECH_TAGS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsState {
    Loading,
    Ready(Vec<Project>),
}

/// 整個單頁網站的狀態，以純文字輸出
#[derive(Debug, Clone)]
pub struct Page {
    owner: String,
    year: i32,
    projects: ProjectsState,
    contact: Option<SubmissionResult>,
}

impl Page {
    pub fn new(owner: &str) -> Self {
        Self::with_year(owner, chrono::Local::now().year())
    }

    pub fn with_year(owner: &str, year: i32) -> Self {
        Self {
            owner: owner.to_string(),
            year,
            projects: ProjectsState::Loading,
            contact: None,
        }
    }

    pub fn projects_state(&self) -> &ProjectsState {
        &self.projects
    }

    /// 載入結果整批取代目前的清單
    pub fn set_projects(&mut self, loaded: Vec<Project>) {
        self.projects = ProjectsState::Ready(loaded);
    }

    pub fn set_contact_result(&mut self, result: Option<SubmissionResult>) {
        self.contact = result;
    }

    /// 載入中回傳 None
    pub fn displayed_projects(&self) -> Option<Vec<Project>> {
        match &self.projects {
            ProjectsState::Loading => None,
            ProjectsState::Ready(loaded) => Some(displayed_projects(loaded)),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.contact {
            Some(SubmissionResult::Pending) => "Sending…",
            _ => "Send Message",
        }
    }

    pub fn render_text(&self) -> String {
        self.to_string()
    }

    fn write_hero(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.owner)?;
        writeln!(f, "{}", "=".repeat(self.owner.chars().count()))?;
        let nav: Vec<_> = NAV.iter().map(|item| item.label).collect();
        writeln!(f, "{}", nav.join(" · "))?;
        writeln!(f)?;
        writeln!(f, "{}", HERO_TAGLINE)?;
        let badges: Vec<_> = HERO_BADGES.iter().map(|b| format!("[{}]", b)).collect();
        writeln!(f, "{}", badges.join(" "))
    }

    fn write_projects(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section_title(f, &PROJECTS_TITLE)?;
        let Some(projects) = self.displayed_projects() else {
            return writeln!(f, "Loading projects…");
        };

        for project in &projects {
            writeln!(f, "### {}", project.title)?;
            writeln!(f, "{}", project.description)?;
            if !project.tech.is_empty() {
                let tags: Vec<_> = project.tech.iter().take(MAX_TECH_TAGS).cloned().collect();
                writeln!(f, "Tech: {}", tags.join(", "))?;
            }
            if let Some(url) = &project.url {
                writeln!(f, "Live: {}", url)?;
            }
            if let Some(repo) = &project.repo {
                writeln!(f, "Code: {}", repo)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_contact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section_title(f, &CONTACT_TITLE)?;
        writeln!(f, "Fields: name*, email*, subject, message*")?;
        writeln!(f, "[ {} ]", self.submit_label())?;
        match &self.contact {
            Some(SubmissionResult::Succeeded(msg)) => writeln!(f, "✓ {}", msg),
            Some(SubmissionResult::Failed(msg)) => writeln!(f, "✗ {}", msg),
            _ => Ok(()),
        }
    }
}

fn write_section_title(f: &mut fmt::Formatter<'_>, title: &SectionTitle) -> fmt::Result {
    writeln!(f, "## {} — {}", title.eyebrow, title.title)?;
    if let Some(subtitle) = title.subtitle {
        writeln!(f, "{}", subtitle)?;
    }
    writeln!(f)
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hero(f)?;
        writeln!(f)?;

        write_section_title(f, &ABOUT_TITLE)?;
        writeln!(f, "{}", ABOUT_TEXT)?;
        writeln!(f)?;

        write_section_title(f, &SKILLS_TITLE)?;
        for skill in SKILLS.iter() {
            writeln!(f, "- {}", skill.name)?;
        }
        writeln!(f)?;

        write_section_title(f, &EXPERIENCE_TITLE)?;
        for job in EXPERIENCE.iter() {
            writeln!(f, "{} @ {} ({})", job.role, job.company, job.period())?;
            for point in job.points {
                writeln!(f, "  • {}", point)?;
            }
        }
        writeln!(f)?;

        self.write_projects(f)?;
        self.write_contact(f)?;
        writeln!(f)?;

        write!(f, "© {} {}. All rights reserved.", self.year, self.owner)
    }
}
