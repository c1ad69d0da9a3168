use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ui::loading::LoadingTimings;
use crate::ui::typewriter::TypewriterTimings;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub loading: LoadingConfig,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub profile: Profile,
}

/// Pacing of the loading intro, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadingConfig {
    /// Progress tick interval (default: 50).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Percentage points per tick (default: 2).
    #[serde(default = "default_step")]
    pub step: u8,
    /// Pause after reaching 100% (default: 500).
    #[serde(default = "default_welcome_delay_ms")]
    pub welcome_delay_ms: u64,
    /// Time the welcome message stays on screen (default: 2500).
    #[serde(default = "default_welcome_dwell_ms")]
    pub welcome_dwell_ms: u64,
    /// Fade-out before the portfolio appears (default: 1000).
    #[serde(default = "default_complete_delay_ms")]
    pub complete_delay_ms: u64,
}

/// Hero tagline animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypewriterConfig {
    /// Delay per typed character (default: 150).
    #[serde(default = "default_type_ms")]
    pub type_ms: u64,
    /// Delay per deleted character (default: 100).
    #[serde(default = "default_delete_ms")]
    pub delete_ms: u64,
    /// Pause on a completed phrase (default: 2000).
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
    #[serde(default = "default_phrases")]
    pub phrases: Vec<String>,
}

fn default_tick_ms() -> u64 {
    50
}

fn default_step() -> u8 {
    2
}

fn default_welcome_delay_ms() -> u64 {
    500
}

fn default_welcome_dwell_ms() -> u64 {
    2500
}

fn default_complete_delay_ms() -> u64 {
    1000
}

fn default_type_ms() -> u64 {
    150
}

fn default_delete_ms() -> u64 {
    100
}

fn default_hold_ms() -> u64 {
    2000
}

fn default_phrases() -> Vec<String> {
    [
        "Web Developer",
        "Frontend Developer",
        "React Developer",
        "Full Stack Developer",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            step: default_step(),
            welcome_delay_ms: default_welcome_delay_ms(),
            welcome_dwell_ms: default_welcome_dwell_ms(),
            complete_delay_ms: default_complete_delay_ms(),
        }
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_ms: default_type_ms(),
            delete_ms: default_delete_ms(),
            hold_ms: default_hold_ms(),
            phrases: default_phrases(),
        }
    }
}

impl From<&LoadingConfig> for LoadingTimings {
    fn from(config: &LoadingConfig) -> Self {
        Self {
            tick: Duration::from_millis(config.tick_ms),
            step: config.step,
            welcome_delay: Duration::from_millis(config.welcome_delay_ms),
            welcome_dwell: Duration::from_millis(config.welcome_dwell_ms),
            complete_delay: Duration::from_millis(config.complete_delay_ms),
        }
    }
}

impl From<&TypewriterConfig> for TypewriterTimings {
    fn from(config: &TypewriterConfig) -> Self {
        Self {
            type_delay: Duration::from_millis(config.type_ms),
            delete_delay: Duration::from_millis(config.delete_ms),
            hold: Duration::from_millis(config.hold_ms),
        }
    }
}

/// Everything shown on the portfolio page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    /// Text before the typewriter, e.g. "I'm a".
    pub tagline_prefix: String,
    pub description: String,
    pub about_title: String,
    pub about: Vec<String>,
    pub stats: Vec<Stat>,
    pub highlights: Vec<Highlight>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent, `0..=100`.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Initials used as the project's badge ("Weather Dashboard" -> "WD").
    pub fn initials(&self) -> String {
        self.title
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

fn skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level,
    }
}

fn project(title: &str, description: &str, technologies: &[&str], featured: bool) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        github: None,
        live: None,
        featured,
    }
}

impl Default for Profile {
    fn default() -> Self {
        let mut weather = project(
            "Weather Dashboard",
            "A beautiful weather application with location-based forecasts, interactive maps, and detailed weather analytics.",
            &["React", "OpenWeather API", "Chart.js", "CSS3"],
            false,
        );
        weather.live = Some("https://weather-royflex.netlify.app/".to_string());

        Self {
            name: "Sudhanshu Sharma".to_string(),
            greeting: "Hello,".to_string(),
            tagline_prefix: "I'm a".to_string(),
            description: "I create beautiful, responsive, and user-friendly web applications with modern technologies and best practices.".to_string(),
            about_title: "Passionate Web Developer".to_string(),
            about: vec![
                "Hello! I'm Sudhanshu Sharma, a dedicated web developer with a passion for creating exceptional digital experiences. I specialize in modern web technologies and love turning complex problems into simple, beautiful, and intuitive solutions.".to_string(),
                "With expertise in React, TypeScript, and modern web development practices, I build responsive and user-friendly applications that not only look great but also perform exceptionally well.".to_string(),
            ],
            stats: vec![
                Stat {
                    value: "2+".to_string(),
                    label: "Years Experience".to_string(),
                },
                Stat {
                    value: "50+".to_string(),
                    label: "Projects Done".to_string(),
                },
            ],
            highlights: vec![
                Highlight {
                    title: "Clean Code".to_string(),
                    description: "I write maintainable, scalable, and well-documented code following best practices.".to_string(),
                },
                Highlight {
                    title: "Creative Solutions".to_string(),
                    description: "I think outside the box to solve complex problems with innovative approaches.".to_string(),
                },
                Highlight {
                    title: "Fast Performance".to_string(),
                    description: "I optimize applications for speed and performance to ensure the best user experience.".to_string(),
                },
                Highlight {
                    title: "Team Player".to_string(),
                    description: "I collaborate effectively with teams and communicate clearly with stakeholders.".to_string(),
                },
            ],
            skills: vec![
                SkillCategory {
                    title: "Frontend".to_string(),
                    skills: vec![
                        skill("React", 90),
                        skill("TypeScript", 85),
                        skill("JavaScript", 95),
                        skill("HTML5", 95),
                        skill("CSS3", 90),
                        skill("Tailwind CSS", 88),
                    ],
                },
                SkillCategory {
                    title: "Backend".to_string(),
                    skills: vec![
                        skill("Node.js", 80),
                        skill("Express.js", 78),
                        skill("MongoDB", 75),
                        skill("PostgreSQL", 70),
                        skill("REST APIs", 85),
                        skill("GraphQL", 65),
                    ],
                },
                SkillCategory {
                    title: "Tools & Others".to_string(),
                    skills: vec![
                        skill("Git", 90),
                        skill("Docker", 70),
                        skill("AWS", 65),
                        skill("Figma", 80),
                        skill("VS Code", 95),
                        skill("Webpack", 75),
                    ],
                },
            ],
            projects: vec![
                project(
                    "E-Commerce Platform",
                    "A modern e-commerce platform built with React, Node.js, and MongoDB. Features include user authentication, payment integration, and admin dashboard.",
                    &["React", "Node.js", "MongoDB", "Stripe", "Tailwind CSS"],
                    true,
                ),
                project(
                    "Task Management App",
                    "A collaborative task management application with real-time updates, drag-and-drop functionality, and team collaboration features.",
                    &["React", "TypeScript", "Socket.io", "PostgreSQL", "Express"],
                    true,
                ),
                weather,
                project(
                    "Social Media Dashboard",
                    "A comprehensive social media management dashboard with analytics, post scheduling, and multi-platform integration.",
                    &["Next.js", "TypeScript", "Prisma", "NextAuth", "Tailwind"],
                    false,
                ),
                project(
                    "Portfolio Website",
                    "A responsive portfolio website with smooth animations, dark mode toggle, and optimized performance.",
                    &["React", "Framer Motion", "TypeScript", "Vite"],
                    false,
                ),
                project(
                    "Learning Management System",
                    "An educational platform with course management, progress tracking, and interactive learning modules.",
                    &["React", "Node.js", "MySQL", "AWS S3", "Socket.io"],
                    false,
                ),
            ],
            socials: vec![
                SocialLink {
                    label: "Email".to_string(),
                    url: "mailto:sudhan98216@gmail.com".to_string(),
                },
            ],
        }
    }
}
