mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, Highlight, LoadingConfig, Profile, Project, Skill, SkillCategory, SocialLink, Stat,
    TypewriterConfig,
};
