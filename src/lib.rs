pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::HttpPortfolioApi;
pub use config::SiteSettings;
pub use crate::core::contact::{submit_contact, ContactForm, ContactSubmitter};
pub use crate::core::page::Page;
pub use crate::core::projects::{displayed_projects, load_projects, ProjectLoader};
pub use crate::core::site::Site;
pub use utils::error::{PortfolioError, Result};
