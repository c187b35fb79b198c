use crate::config::toml_config::TomlConfig;
use crate::config::SiteSettings;
use crate::core::contact::ContactForm;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio")]
#[command(about = "Personal portfolio page with a backend-fed project list and contact form")]
pub struct CliConfig {
    /// Backend base URL (defaults to the build-time PORTFOLIO_BACKEND_URL)
    #[arg(long, env = "PORTFOLIO_BACKEND_URL")]
    pub base_url: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Name shown in the hero and footer
    #[arg(long)]
    pub owner: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Load projects once and print the whole page
    Show,

    /// Print the projects that would be displayed
    Projects {
        #[arg(long)]
        json: bool,
    },

    /// Send one message through the contact form
    Contact {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long, default_value = "")]
        message: String,
    },
}

impl CliConfig {
    /// 讀取設定檔 (若有指定) 並和命令列參數合併
    pub fn settings(&self) -> Result<SiteSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        Ok(SiteSettings::resolve(
            self.base_url.clone(),
            self.owner.clone(),
            file.as_ref(),
        ))
    }
}

impl Command {
    pub fn contact_form(&self) -> Option<ContactForm> {
        match self {
            Command::Contact {
                name,
                email,
                subject,
                message,
            } => Some(ContactForm {
                name: name.clone(),
                email: email.clone(),
                subject: subject.clone(),
                message: message.clone(),
            }),
            _ => None,
        }
    }
}
