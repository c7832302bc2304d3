use super::*;
use crate::llm::gemini::{MockModelTransport, TransportError, TransportReply};
use mockall::Sequence;
use std::sync::Arc;

const OK_BODY: &str = r#"{"candidates":[{"content":{"parts":[{"text":"CNNs learn local filters."}]}}]}"#;

fn chain() -> ModelChain {
    ModelChain::new(["m1", "m2", "m3"]).unwrap()
}

fn expect_reply(
    mock: &mut MockModelTransport,
    seq: &mut Sequence,
    model: &'static str,
    status: u16,
    body: &'static str,
) {
    mock.expect_send()
        .withf(move |m, _, _| m == model)
        .times(1)
        .in_sequence(seq)
        .returning(move |_, _, _| Ok(TransportReply::new(status, body)));
}

fn expect_network_error(mock: &mut MockModelTransport, seq: &mut Sequence, model: &'static str) {
    mock.expect_send()
        .withf(move |m, _, _| m == model)
        .times(1)
        .in_sequence(seq)
        .returning(|_, _, _| Err(TransportError::new("connection refused")));
}

fn client(mock: MockModelTransport) -> ModelFallbackClient {
    ModelFallbackClient::new(chain(), Arc::new(mock))
}

#[tokio::test]
async fn test_first_model_success_stops_sweep() {
    let mut mock = MockModelTransport::new();
    let mut seq = Sequence::new();
    expect_reply(&mut mock, &mut seq, "m1", 200, OK_BODY);

    let report = client(mock).sweep("prompt", "key").await;
    assert_eq!(
        report.result,
        SweepResult::Success {
            model: "m1".into(),
            text: "CNNs learn local filters.".into()
        }
    );
    assert_eq!(report.models_tried(), vec!["m1"]);
}

#[tokio::test]
async fn test_rate_limit_then_unavailable_then_success() {
    let mut mock = MockModelTransport::new();
    let mut seq = Sequence::new();
    expect_reply(&mut mock, &mut seq, "m1", 429, "{}");
    expect_reply(&mut mock, &mut seq, "m2", 404, "{}");
    expect_reply(&mut mock, &mut seq, "m3", 200, OK_BODY);

    let report = client(mock).sweep("prompt", "key").await;
    assert!(matches!(report.result, SweepResult::Success { ref model, .. } if model == "m3"));
    assert_eq!(report.models_tried(), vec!["m1", "m2", "m3"]);
    assert_eq!(
        report.attempts[0].outcome,
        ModelOutcome::Transient(TransientReason::RateLimited)
    );
}

#[tokio::test]
async fn test_forbidden_stops_without_trying_others() {
    let mut mock = MockModelTransport::new();
    let mut seq = Sequence::new();
    expect_reply(&mut mock, &mut seq, "m1", 403, r#"{"error":{"status":"PERMISSION_DENIED"}}"#);

    let report = client(mock).sweep("prompt", "key").await;
    assert_eq!(
        report.result,
        SweepResult::Terminal {
            model: "m1".into(),
            reason: TerminalReason::Forbidden,
            status: 403
        }
    );
    assert_eq!(report.attempts.len(), 1);
}

#[tokio::test]
async fn test_bad_request_after_rate_limit_is_terminal() {
    let mut mock = MockModelTransport::new();
    let mut seq = Sequence::new();
    expect_reply(&mut mock, &mut seq, "m1", 429, "{}");
    expect_reply(&mut mock, &mut seq, "m2", 400, "{}");

    let report = client(mock).sweep("prompt", "key").await;
    assert!(matches!(
        report.result,
        SweepResult::Terminal {
            reason: TerminalReason::BadRequest,
            status: 400,
            ..
        }
    ));
    assert_eq!(report.models_tried(), vec!["m1", "m2"]);
}

#[tokio::test]
async fn test_all_rate_limited() {
    let mut mock = MockModelTransport::new();
    let mut seq = Sequence::new();
    for model in ["m1", "m2", "m3"] {
        expect_reply(&mut mock, &mut seq, model, 429, "{}");
    }

    let report = client(mock).sweep("prompt", "key").await;
    assert_eq!(report.result, SweepResult::AllRateLimited);
    assert_eq!(report.attempts.len(), 3);
}

#[tokio::test]
async fn test_any_rate_limit_marks_sweep_rate_limited() {
    let mut mock = MockModelTransport::new();
    let mut seq = Sequence::new();
    expect_reply(&mut mock, &mut seq, "m1", 404, "{}");
    expect_reply(&mut mock, &mut seq, "m2", 429, "{}");
    expect_network_error(&mut mock, &mut seq, "m3");

    let report = client(mock).sweep("prompt", "key").await;
    assert_eq!(report.result, SweepResult::AllRateLimited);
}

#[tokio::test]
async fn test_all_unreachable() {
    let mut mock = MockModelTransport::new();
    let mut seq = Sequence::new();
    expect_reply(&mut mock, &mut seq, "m1", 404, "{}");
    expect_network_error(&mut mock, &mut seq, "m2");
    expect_network_error(&mut mock, &mut seq, "m3");

    let report = client(mock).sweep("prompt", "key").await;
    assert_eq!(
        report.result,
        SweepResult::AllUnavailable {
            last: TransientReason::NetworkError
        }
    );
}

#[tokio::test]
async fn test_credential_and_prompt_reach_transport() {
    let mut mock = MockModelTransport::new();
    mock.expect_send()
        .withf(|model, credential, request| {
            model == "m1"
                && credential == "secret-key"
                && request.prompt() == Some("what is attention")
        })
        .times(1)
        .returning(|_, _, _| Ok(TransportReply::new(200, OK_BODY)));

    let report = client(mock).sweep("what is attention", "secret-key").await;
    assert!(report.result.is_success());
}

#[test]
fn test_classify_status_mapping() {
    let outcome = |status| classify_reply(&TransportReply::new(status, "{}"));
    assert_eq!(
        outcome(429),
        ModelOutcome::Transient(TransientReason::RateLimited)
    );
    assert_eq!(
        outcome(404),
        ModelOutcome::Transient(TransientReason::Unavailable)
    );
    assert_eq!(
        outcome(400),
        ModelOutcome::Terminal {
            reason: TerminalReason::BadRequest,
            status: 400
        }
    );
    assert_eq!(
        outcome(500),
        ModelOutcome::Terminal {
            reason: TerminalReason::Other,
            status: 500
        }
    );
    assert_eq!(
        outcome(503),
        ModelOutcome::Terminal {
            reason: TerminalReason::Other,
            status: 503
        }
    );
}

#[test]
fn test_classify_success_without_text() {
    assert_eq!(
        classify_reply(&TransportReply::new(200, r#"{"candidates":[]}"#)),
        ModelOutcome::Terminal {
            reason: TerminalReason::EmptyResponse,
            status: 200
        }
    );
    assert_eq!(
        classify_reply(&TransportReply::new(200, "not json")),
        ModelOutcome::Terminal {
            reason: TerminalReason::Other,
            status: 200
        }
    );
}
