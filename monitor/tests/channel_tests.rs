use dagri_monitor::{
    build_email_payload, build_notify_payload, build_slack_payload, Alert, AlertChannel,
    EmailChannel, EmailConfig, NotifyChannel, NotifyConfig, Severity, SlackChannel, SlackConfig,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn alert(severity: Severity) -> Alert {
    Alert::new(severity, "System Alert", "High error rate detected")
}

// ── Payload shapes ───────────────────────────────────────────────

#[test]
fn slack_payload_color_tracks_severity() {
    for (severity, color) in [
        (Severity::Info, "#36a64f"),
        (Severity::Warning, "#ff9500"),
        (Severity::Error, "#ff0000"),
        (Severity::Critical, "#8B0000"),
    ] {
        let payload = build_slack_payload(&alert(severity));
        assert_eq!(payload["attachments"][0]["color"], color);
    }
}

#[test]
fn slack_payload_fields() {
    let payload = build_slack_payload(&alert(Severity::Error));
    let fields = payload["attachments"][0]["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0]["title"], "D'Agri Talk Alert - ERROR");
    assert_eq!(fields[0]["value"], "High error rate detected");
    assert_eq!(fields[1]["title"], "Timestamp");
}

#[test]
fn email_payload_subject_and_body() {
    let config = EmailConfig {
        api_url: "https://mail.example.com/send".to_string(),
        api_key: "key".to_string(),
        from_email: "alerts@dagritalk.com".to_string(),
        recipients: vec!["admin@dagritalk.com".to_string(), "devops@dagritalk.com".to_string()],
    };
    let payload = build_email_payload(&config, &alert(Severity::Error));

    assert_eq!(payload["subject"], "[D'Agri Talk Alert] System Alert");
    assert_eq!(payload["from"], "alerts@dagritalk.com");
    assert_eq!(payload["to"].as_array().unwrap().len(), 2);
    let text = payload["text"].as_str().unwrap();
    assert!(text.contains("High error rate detected"));
    assert!(text.contains("Please investigate immediately."));
}

#[test]
fn notify_payload_topic_and_subject() {
    let config = NotifyConfig {
        publish_url: "https://bridge.example.com/publish".to_string(),
        topic: "dagri-talk-alerts".to_string(),
    };
    let payload = build_notify_payload(&config, &alert(Severity::Error));
    assert_eq!(payload["topic"], "dagri-talk-alerts");
    assert_eq!(payload["subject"], "[D'Agri Talk] System Alert");
    assert_eq!(payload["message"], "High error rate detected");
}

// ── Availability ─────────────────────────────────────────────────

#[test]
fn channels_without_endpoints_are_unavailable() {
    assert!(!SlackChannel::new(&SlackConfig::default()).is_available());
    assert!(!EmailChannel::new(&EmailConfig::default()).is_available());
    assert!(!NotifyChannel::new(&NotifyConfig::default()).is_available());
}

#[test]
fn configured_channels_are_available() {
    let slack = SlackChannel::new(&SlackConfig {
        webhook_url: "https://hooks.slack.com/services/T/B/X".to_string(),
    });
    assert!(slack.is_available());
    assert_eq!(slack.name(), "slack");

    let email = EmailChannel::new(&EmailConfig {
        api_url: "https://mail.example.com/send".to_string(),
        recipients: vec!["a@example.com".to_string()],
        ..Default::default()
    });
    assert!(email.is_available());
}

#[test]
fn email_without_recipients_is_unavailable() {
    let email = EmailChannel::new(&EmailConfig {
        api_url: "https://mail.example.com/send".to_string(),
        ..Default::default()
    });
    assert!(!email.is_available());
}

// ── Send behavior ────────────────────────────────────────────────

#[tokio::test]
async fn slack_send_posts_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/T/B/X"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let channel = SlackChannel::new(&SlackConfig {
        webhook_url: format!("{}/services/T/B/X", server.uri()),
    });
    channel.send(&alert(Severity::Warning)).await.unwrap();
}

#[tokio::test]
async fn email_send_uses_bearer_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send"))
        .and(header("authorization", "Bearer mail-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let channel = EmailChannel::new(&EmailConfig {
        api_url: format!("{}/send", server.uri()),
        api_key: "mail-key".to_string(),
        from_email: "alerts@dagritalk.com".to_string(),
        recipients: vec!["admin@dagritalk.com".to_string()],
    });
    channel.send(&alert(Severity::Critical)).await.unwrap();
}

#[tokio::test]
async fn rejected_webhook_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let channel = NotifyChannel::new(&NotifyConfig {
        publish_url: server.uri(),
        topic: "alerts".to_string(),
    });
    assert!(channel.send(&alert(Severity::Error)).await.is_err());
}
