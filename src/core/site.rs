use crate::core::contact::{ContactForm, ContactSubmitter};
use crate::core::page::Page;
use crate::core::projects::{displayed_projects, ProjectLoader};
use crate::domain::model::{Project, SubmissionResult};
use crate::domain::ports::{ConfigProvider, PortfolioApi};
use crate::utils::error::Result;

/// 把專案載入與聯絡表單兩條流程接到同一頁上。兩者互不共用狀態。
pub struct Site<A: PortfolioApi + Clone, C: ConfigProvider> {
    config: C,
    loader: ProjectLoader<A>,
    submitter: ContactSubmitter<A>,
}

impl<A: PortfolioApi + Clone, C: ConfigProvider> Site<A, C> {
    pub fn new(api: A, config: C) -> Self {
        tracing::debug!("Using backend: {}", config.base_url());
        Self {
            config,
            loader: ProjectLoader::new(api.clone()),
            submitter: ContactSubmitter::new(api),
        }
    }

    /// 首次顯示：讀一次專案後輸出整頁
    pub async fn render(&self) -> Page {
        tracing::info!("🚀 Rendering portfolio for {}", self.config.owner());
        let mut page = Page::new(self.config.owner());
        page.set_projects(self.loader.load_projects().await);
        page.set_contact_result(self.submitter.result());
        page
    }

    pub async fn projects(&self) -> Vec<Project> {
        displayed_projects(&self.loader.load_projects().await)
    }

    pub async fn contact(&self, form: &mut ContactForm) -> Result<SubmissionResult> {
        self.submitter.submit(form).await
    }
}
