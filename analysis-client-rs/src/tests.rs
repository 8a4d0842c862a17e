// analysis-client-rs/src/tests.rs
// Tests for the form controller state machine and the typed endpoint client

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::{AnalysisClient, AnalysisRequest, ClientError};
    use crate::controller::{AnalysisForm, ViewState, SUBMIT_FAILED};

    const NOTES: &str =
        "Integration by parts keeps tripping me up, especially choosing u and dv correctly.";

    fn form_for(server: &MockServer) -> AnalysisForm {
        let mut form = AnalysisForm::new(AnalysisClient::new(server.uri()));
        form.set_text(NOTES);
        form.set_goal("crack JEE math");
        form
    }

    fn result_template(result: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({ "result": result }))
    }

    fn error_template() -> ResponseTemplate {
        ResponseTemplate::new(500)
            .set_body_json(json!({ "error": "AI analysis failed. Please try again." }))
    }

    #[tokio::test]
    async fn submit_success_stores_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(result_template("Gap 1 (Math / Calculus): ..."))
            .expect(1)
            .mount(&server)
            .await;

        let mut form = form_for(&server);
        assert_eq!(form.state(), &ViewState::Idle);
        assert!(form.submit_enabled());

        form.submit().await;

        assert_eq!(
            form.state(),
            &ViewState::Result("Gap 1 (Math / Calculus): ...".to_string())
        );
        assert!(form.submit_enabled());
    }

    #[tokio::test]
    async fn submit_sends_current_field_values() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .and(body_json(json!({
                "text": NOTES,
                "goal": "NEET biology",
                "language": "Telugu"
            })))
            .respond_with(result_template("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let mut form = form_for(&server);
        // Latest value per field wins
        form.set_goal("crack JEE math");
        form.set_goal("NEET biology");
        form.set_language("Telugu");

        form.submit().await;

        assert_eq!(form.state(), &ViewState::Result("ok".to_string()));
    }

    #[tokio::test]
    async fn submit_failure_shows_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(error_template())
            .mount(&server)
            .await;

        let mut form = form_for(&server);
        form.submit().await;

        // The endpoint's message is logged, never surfaced
        assert_eq!(form.state(), &ViewState::Error(SUBMIT_FAILED.to_string()));
        assert!(form.submit_enabled());
    }

    #[tokio::test]
    async fn submit_network_failure_shows_generic_message() {
        // Nothing listens here; the connection itself fails
        let mut form = AnalysisForm::new(AnalysisClient::new("http://127.0.0.1:1"));
        form.set_text(NOTES);
        form.set_goal("crack JEE math");

        form.submit().await;

        assert_eq!(form.state(), &ViewState::Error(SUBMIT_FAILED.to_string()));
    }

    #[tokio::test]
    async fn submit_malformed_body_shows_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let mut form = form_for(&server);
        form.submit().await;

        assert_eq!(form.state(), &ViewState::Error(SUBMIT_FAILED.to_string()));
    }

    #[tokio::test]
    async fn submit_is_ignored_while_loading() {
        let server = MockServer::start().await;
        // No request may be issued while a submission is outstanding
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(result_template("unexpected"))
            .expect(0)
            .mount(&server)
            .await;

        let mut form = form_for(&server);
        form.state = ViewState::Loading;
        assert!(!form.submit_enabled());

        form.submit().await;

        assert_eq!(form.state(), &ViewState::Loading);
    }

    #[tokio::test]
    async fn resolved_submissions_replace_prior_panel() {
        let server = MockServer::start().await;

        // First submission fails
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(error_template())
            .mount(&server)
            .await;

        let mut form = form_for(&server);
        form.submit().await;
        assert_eq!(form.state(), &ViewState::Error(SUBMIT_FAILED.to_string()));

        // Second submission succeeds and the error panel gives way to the result
        server.reset().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(result_template("all clear"))
            .mount(&server)
            .await;

        form.submit().await;
        assert_eq!(form.state(), &ViewState::Result("all clear".to_string()));
    }

    #[tokio::test]
    async fn client_maps_status_and_decode_failures() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(error_template())
            .mount(&server)
            .await;

        let client = AnalysisClient::new(server.uri());
        let request = AnalysisRequest {
            text: NOTES.to_string(),
            goal: "crack JEE math".to_string(),
            language: "English".to_string(),
        };

        match client.analyze(&request).await {
            Err(ClientError::Api { status, message }) => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(message, "AI analysis failed. Please try again.");
            }
            other => panic!("expected Api error, got: {:?}", other.map(|_| ())),
        }

        server.reset().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        match client.analyze(&request).await {
            Err(ClientError::Malformed(_)) => {}
            other => panic!("expected Malformed error, got: {:?}", other.map(|_| ())),
        }
    }
}
