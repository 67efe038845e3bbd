//! Alert Pipeline Integration Tests
//!
//! Feeds Lambda SNS events through parse → classify → dispatch and checks
//! the rendered Slack text for each supported origin.

use serde_json::{json, Value};

use cloudwatch_slack_relay::services::alert::{parse_trigger_event, trigger_message};
use cloudwatch_slack_relay::FormatterId;

// ============================================================================
// Helpers
// ============================================================================

fn lambda_event(subject: Value, message: &str) -> Value {
    json!({
        "Records": [{
            "EventSource": "aws:sns",
            "EventVersion": "1.0",
            "EventSubscriptionArn": "arn:aws:sns:us-east-1:123456789012:my-topic:2bcfbf39-05c3-41de-beaa-fcfcc21c8f55",
            "Sns": {
                "Type": "Notification",
                "MessageId": "95df01b4-ee98-5cb9-9903-4c221d41eb5e",
                "TopicArn": "arn:aws:sns:us-east-1:123456789012:my-topic",
                "Subject": subject,
                "Message": message,
                "Timestamp": "2024-03-01T04:05:06.789Z",
                "SignatureVersion": "1",
                "Signature": "EXAMPLE",
                "SigningCertUrl": "EXAMPLE",
                "UnsubscribeUrl": "EXAMPLE",
                "MessageAttributes": {}
            }
        }]
    })
}

fn render(subject: Value, message: Value) -> Option<String> {
    let event = lambda_event(subject, &message.to_string());
    let trigger = parse_trigger_event(&event).expect("event should parse");
    trigger_message(&trigger)
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_cloudwatch_alarm_end_to_end() {
    let text = render(
        json!("ALARM: \"cpu-high\" in US East (N. Virginia)"),
        json!({
            "AlarmName": "cpu-high",
            "NewStateValue": "ALARM",
            "NewStateReason": "Threshold Crossed: 1 datapoint was greater than 80.0",
            "source": "aws.guardduty"
        }),
    )
    .unwrap();

    assert_eq!(
        text,
        "[2024-03-01 12:05:06+08:00] *ALARM: \"cpu-high\" in US East (N. Virginia)*: ```Threshold Crossed: 1 datapoint was greater than 80.0```"
    );
}

#[test]
fn test_two_alarms_last_reason_wins() {
    let text = render(
        json!("ALARM"),
        json!([
            {"AlarmName": "first", "NewStateReason": "first breach"},
            {"AlarmName": "second", "NewStateReason": "second breach"}
        ]),
    )
    .unwrap();

    assert!(text.contains("```second breach```"));
    assert!(!text.contains("first breach"));
}

#[test]
fn test_rds_notification_end_to_end() {
    let text = render(
        json!("RDS Notification Message"),
        json!({
            "Event Source": "db-instance",
            "Event Time": "2024-03-01 04:05:06.789",
            "Identifier Link": "https://console.aws.amazon.com/rds/home",
            "Source ID": "orders-db",
            "Event ID": "http://docs.amazonwebservices.com/AmazonRDS/latest/UserGuide/USER_Events.html#RDS-EVENT-0006",
            "Event Message": "DB instance restarted"
        }),
    )
    .unwrap();

    assert!(text.ends_with("*RDS Notification Message*: (orders-db) DB instance restarted"));
}

#[test]
fn test_guardduty_severity_threshold() {
    let finding = |severity: Value| {
        json!({
            "source": "aws.guardduty",
            "detail-type": "GuardDuty Finding",
            "detail": {
                "type": "UnauthorizedAccess:EC2/SSHBruteForce",
                "description": "SSH brute force attacks against i-99999999",
                "severity": severity
            }
        })
    };

    let quiet = render(Value::Null, finding(json!(2))).unwrap();
    assert_eq!(quiet, "[2024-03-01 12:05:06+08:00] *AWS GuardDuty Notification*: ");

    let loud = render(Value::Null, finding(json!(3))).unwrap();
    assert!(loud.contains("(Severity 3)"));
    assert!(loud.contains("UnauthorizedAccess:EC2/SSHBruteForce - SSH brute force attacks"));
}

#[test]
fn test_rds_eventbridge_end_to_end() {
    let text = render(
        json!("None"),
        json!({
            "version": "0",
            "source": "aws.rds",
            "detail-type": "RDS DB Instance Event",
            "detail": {
                "EventCategories": ["failover"],
                "SourceType": "DB_INSTANCE",
                "SourceIdentifier": "orders-db",
                "Message": "Multi-AZ instance failover completed"
            }
        }),
    )
    .unwrap();

    assert_eq!(
        text,
        "[2024-03-01 12:05:06+08:00] *RDS DB Instance Event*: Source Type is DB_INSTANCE, (orders-db) ```Multi-AZ instance failover completed```"
    );
}

#[test]
fn test_autoscaling_with_none_subject() {
    let text = render(
        json!("None"),
        json!({"source": "aws.autoscaling", "StatusCode": "Failed", "Cause": "Insufficient capacity"}),
    )
    .unwrap();

    assert_eq!(
        text,
        "[2024-03-01 12:05:06+08:00]  Status: Failed , Cause: Insufficient capacity"
    );
}

#[test]
fn test_unregistered_source_falls_back_to_unknown() {
    let event = lambda_event(json!("Custom"), &json!({"source": "aws.unknown-service"}).to_string());
    let trigger = parse_trigger_event(&event).unwrap();
    let envelope = trigger.sns.as_ref().unwrap();
    assert_eq!(
        envelope.records[0].origin().unwrap().formatter_id,
        FormatterId::Unknown
    );

    let text = trigger_message(&trigger).unwrap();
    assert_eq!(
        text,
        "[2024-03-01 12:05:06+08:00] *Custom*: SNS Topic: my-topic, Message ID: 95df01b4-ee98-5cb9-9903-4c221d41eb5e"
    );
}

#[test]
fn test_cloudtrail_events_are_muted() {
    let text = render(json!("CloudTrail"), json!({"source": "aws.cloudtrail", "detail": {}}));
    assert!(text.is_none());
}

#[test]
fn test_formatting_failure_yields_no_message() {
    let text = render(json!("ALARM"), json!({"AlarmName": "cpu-high"}));
    assert!(text.is_none());
}

#[test]
fn test_empty_message_array_yields_no_message() {
    assert!(render(json!("ALARM"), json!([])).is_none());
}

#[test]
fn test_trigger_without_sns_yields_no_message() {
    let event = json!({
        "Records": [{
            "EventSource": "aws:sqs",
            "EventVersion": "1.0",
            "EventSubscriptionArn": "arn:aws:sqs:us-east-1:123456789012:queue"
        }]
    });
    let trigger = parse_trigger_event(&event).unwrap();
    assert!(trigger.sns.is_none());
    assert!(trigger_message(&trigger).is_none());
}
