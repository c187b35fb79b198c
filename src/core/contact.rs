use crate::adapters::http::HttpPortfolioApi;
use crate::domain::model::{ContactSubmission, SubmissionResult};
use crate::domain::ports::PortfolioApi;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{validate_email, validate_required_field};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

pub const SUCCESS_MESSAGE: &str = "Thanks! I will get back to you shortly.";
pub const REJECTED_MESSAGE: &str = "Something went wrong. Please try again.";
pub const UNAVAILABLE_MESSAGE: &str = "Unable to send right now. Please try later.";

/// 聯絡表單目前的輸入值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// 檢查必填欄位 (name, email, message) 與 email 格式，轉成送出的內容
    pub fn to_submission(&self) -> Result<ContactSubmission> {
        validate_required_field("name", &self.name)?;
        validate_email("email", &self.email)?;
        validate_required_field("message", &self.message)?;

        Ok(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// 單次送出並把回應對應成結果，不重試
pub async fn resolve_submission<A: PortfolioApi + ?Sized>(
    api: &A,
    submission: &ContactSubmission,
) -> SubmissionResult {
    match api.send_contact(submission).await {
        Ok(reply) if reply.is_ok() => {
            tracing::info!("✅ Contact message accepted");
            SubmissionResult::Succeeded(SUCCESS_MESSAGE.to_string())
        }
        Ok(reply) => {
            tracing::warn!("Contact message rejected, status: {:?}", reply.status);
            SubmissionResult::Failed(REJECTED_MESSAGE.to_string())
        }
        Err(e) => {
            tracing::warn!("❌ Contact request failed: {}", e);
            SubmissionResult::Failed(UNAVAILABLE_MESSAGE.to_string())
        }
    }
}

/// 單次送出到 `{base_url}/api/contact`
pub async fn submit_contact(base_url: &str, submission: &ContactSubmission) -> SubmissionResult {
    resolve_submission(&HttpPortfolioApi::new(base_url), submission).await
}

type LastResult = Mutex<Option<SubmissionResult>>;

fn lock_result(last_result: &LastResult) -> MutexGuard<'_, Option<SubmissionResult>> {
    last_result
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// 送出期間持有，drop 時解除。
/// 若送出途中被丟棄，結果仍是 Pending，就清掉。
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
    last_result: &'a LastResult,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool, last_result: &'a LastResult) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag, last_result })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut last = lock_result(self.last_result);
        if matches!(*last, Some(SubmissionResult::Pending)) {
            *last = None;
        }
        drop(last);
        self.flag.store(false, Ordering::Release);
    }
}

pub struct ContactSubmitter<A: PortfolioApi> {
    api: A,
    in_flight: AtomicBool,
    last_result: LastResult,
}

impl<A: PortfolioApi> ContactSubmitter<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            in_flight: AtomicBool::new(false),
            last_result: Mutex::new(None),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// 最近一次送出的結果；還沒送過是 None
    pub fn result(&self) -> Option<SubmissionResult> {
        lock_result(&self.last_result).clone()
    }

    /// 送出表單。成功時清空表單，失敗時保留輸入。
    /// 已經有一筆在送出中時回傳 `SubmissionInFlight`，不會發出請求。
    pub async fn submit(&self, form: &mut ContactForm) -> Result<SubmissionResult> {
        let submission = form.to_submission()?;
        let _guard = InFlightGuard::acquire(&self.in_flight, &self.last_result)
            .ok_or(PortfolioError::SubmissionInFlight)?;

        self.set_result(SubmissionResult::Pending);
        let outcome = resolve_submission(&self.api, &submission).await;

        if matches!(outcome, SubmissionResult::Succeeded(_)) {
            form.clear();
        }
        self.set_result(outcome.clone());

        Ok(outcome)
    }

    fn set_result(&self, result: SubmissionResult) {
        *lock_result(&self.last_result) = Some(result);
    }
}
