pub mod contact;
pub mod page;
pub mod projects;
pub mod site;

pub use crate::domain::model::{ContactSubmission, Project, SubmissionResult};
pub use crate::domain::ports::{ConfigProvider, PortfolioApi};
pub use crate::utils::error::Result;
