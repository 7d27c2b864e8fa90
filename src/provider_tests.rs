//! Tests for the completion service boundary

use super::*;
use crate::config::Config;
use crate::context::{Document, Position, extract_context};
use crate::request::build_completion_request;

/// Service that always answers with a fixed string
struct FixedService(&'static str);

#[async_trait]
impl CompletionService for FixedService {
    async fn submit(&self, _request: &CompletionRequest) -> Result<String, AiError> {
        Ok(self.0.to_string())
    }
}

#[tokio::test]
async fn test_trait_is_object_safe() {
    let service: Box<dyn CompletionService> = Box::new(FixedService("x + 1"));

    let document = Document::new("let y = ");
    let window = extract_context(&document, Position::new(0, 8), 2);
    let request = build_completion_request(&window, &Config::default());

    let raw = service.submit(&request).await.expect("submit should succeed");
    assert_eq!(raw, "x + 1");
}

#[tokio::test]
async fn test_errors_flow_through_the_boundary() {
    struct FailingService;

    #[async_trait]
    impl CompletionService for FailingService {
        async fn submit(&self, _request: &CompletionRequest) -> Result<String, AiError> {
            Err(AiError::Api {
                code: 503,
                message: "overloaded".to_string(),
            })
        }
    }

    let document = Document::new("x");
    let window = extract_context(&document, Position::new(0, 1), 2);
    let request = build_completion_request(&window, &Config::default());

    let error = FailingService
        .submit(&request)
        .await
        .expect_err("submit should fail");
    assert_eq!(error.fault(), Some(crate::error::Fault::ServerFault));
}
