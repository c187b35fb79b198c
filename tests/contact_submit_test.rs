use httpmock::prelude::*;
use portfolio_site::core::contact::{REJECTED_MESSAGE, SUCCESS_MESSAGE, UNAVAILABLE_MESSAGE};
use portfolio_site::domain::model::{ContactSubmission, SubmissionResult};
use portfolio_site::{submit_contact, ContactForm, ContactSubmitter, HttpPortfolioApi, PortfolioError};
use std::time::Duration;

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Collaboration".to_string(),
        message: "Let's build something.".to_string(),
    }
}

#[tokio::test]
async fn test_ok_status_succeeds_and_clears_form() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact").json_body(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Collaboration",
            "message": "Let's build something."
        }));
        then.status(200)
            .json_body(serde_json::json!({ "status": "ok" }));
    });

    let submitter = ContactSubmitter::new(HttpPortfolioApi::new(&server.base_url()));
    let mut form = filled_form();
    let result = submitter.submit(&mut form).await.unwrap();

    api_mock.assert();
    assert_eq!(result, SubmissionResult::Succeeded(SUCCESS_MESSAGE.to_string()));
    assert_eq!(submitter.result(), Some(result));
    assert!(form.is_empty());
    assert!(!submitter.is_pending());
}

#[tokio::test]
async fn test_other_status_fails_and_keeps_form() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200)
            .json_body(serde_json::json!({ "status": "error", "detail": "spam" }));
    });

    let submitter = ContactSubmitter::new(HttpPortfolioApi::new(&server.base_url()));
    let mut form = filled_form();
    let result = submitter.submit(&mut form).await.unwrap();

    assert_eq!(result, SubmissionResult::Failed(REJECTED_MESSAGE.to_string()));
    assert_eq!(form, filled_form());
}

#[tokio::test]
async fn test_server_error_without_json_is_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(500).body("Internal Server Error");
    });

    let submitter = ContactSubmitter::new(HttpPortfolioApi::new(&server.base_url()));
    let mut form = filled_form();
    let result = submitter.submit(&mut form).await.unwrap();

    assert_eq!(result, SubmissionResult::Failed(UNAVAILABLE_MESSAGE.to_string()));
    assert_eq!(form, filled_form());
}

#[tokio::test]
async fn test_unreachable_backend_fails() {
    let submission = ContactSubmission {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        subject: String::new(),
        message: "Anyone there?".to_string(),
    };

    let result = submit_contact("http://127.0.0.1:1", &submission).await;
    assert_eq!(result, SubmissionResult::Failed(UNAVAILABLE_MESSAGE.to_string()));
}

#[tokio::test]
async fn test_missing_required_field_sends_nothing() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200)
            .json_body(serde_json::json!({ "status": "ok" }));
    });

    let submitter = ContactSubmitter::new(HttpPortfolioApi::new(&server.base_url()));
    let mut form = filled_form();
    form.email.clear();

    let err = submitter.submit(&mut form).await.unwrap_err();

    assert!(matches!(err, PortfolioError::ValidationError { .. }));
    api_mock.assert_hits(0);
    assert!(submitter.result().is_none());
    assert_eq!(form.name, "Ada");
}

#[tokio::test]
async fn test_malformed_email_sends_nothing() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200)
            .json_body(serde_json::json!({ "status": "ok" }));
    });

    let submitter = ContactSubmitter::new(HttpPortfolioApi::new(&server.base_url()));
    let mut form = filled_form();
    form.email = "not-an-email".to_string();

    let err = submitter.submit(&mut form).await.unwrap_err();

    assert!(matches!(err, PortfolioError::ValidationError { ref field, .. } if field == "email"));
    api_mock.assert_hits(0);
    assert_eq!(form.email, "not-an-email");
}

#[tokio::test]
async fn test_blank_subject_is_posted_as_empty_string() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact").json_body(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "",
            "message": "Let's build something."
        }));
        then.status(200)
            .json_body(serde_json::json!({ "status": "ok" }));
    });

    let submitter = ContactSubmitter::new(HttpPortfolioApi::new(&server.base_url()));
    let mut form = filled_form();
    form.subject.clear();

    let result = submitter.submit(&mut form).await.unwrap();

    api_mock.assert();
    assert!(matches!(result, SubmissionResult::Succeeded(_)));
}

#[tokio::test]
async fn test_dropped_submission_does_not_stay_pending() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200)
            .delay(Duration::from_millis(500))
            .json_body(serde_json::json!({ "status": "ok" }));
    });

    let submitter = ContactSubmitter::new(HttpPortfolioApi::new(&server.base_url()));
    let mut form = filled_form();

    let outcome =
        tokio::time::timeout(Duration::from_millis(100), submitter.submit(&mut form)).await;

    assert!(outcome.is_err());
    assert!(!submitter.is_pending());
    assert_eq!(submitter.result(), None);
    assert_eq!(form, filled_form());
}

#[tokio::test]
async fn test_resubmit_while_pending_has_no_effect() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200)
            .delay(Duration::from_millis(300))
            .json_body(serde_json::json!({ "status": "ok" }));
    });

    let submitter = ContactSubmitter::new(HttpPortfolioApi::new(&server.base_url()));
    let mut first = filled_form();
    let mut second = filled_form();

    let (first_result, second_result, observed) = tokio::join!(
        submitter.submit(&mut first),
        submitter.submit(&mut second),
        async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            (submitter.is_pending(), submitter.result())
        }
    );

    // 只有一筆會真的送出，另一筆被擋下
    let (sent, blocked, sent_form, blocked_form) = match (first_result, second_result) {
        (Ok(sent), Err(blocked)) => (sent, blocked, &first, &mut second),
        (Err(blocked), Ok(sent)) => (sent, blocked, &second, &mut first),
        other => panic!("expected exactly one submission to go through, got {:?}", other),
    };

    assert!(matches!(sent, SubmissionResult::Succeeded(_)));
    assert!(matches!(blocked, PortfolioError::SubmissionInFlight));
    assert_eq!(observed, (true, Some(SubmissionResult::Pending)));
    api_mock.assert_hits(1);

    assert!(sent_form.is_empty());
    assert_eq!(*blocked_form, filled_form());

    // 完成後可以再送
    let again = submitter.submit(blocked_form).await.unwrap();
    assert!(matches!(again, SubmissionResult::Succeeded(_)));
    api_mock.assert_hits(2);
}
