use std::error::Error;
use std::time::Duration;

use s3_replication_model::config::RequestOverrideConfig;
use s3_replication_model::error::{
    ErrorMetadata, GetBucketReplicationError, GetBucketReplicationErrorKind,
    ReplicationConfigurationNotFound,
};
use s3_replication_model::fields::{FieldAccess, FieldValue};
use s3_replication_model::input::{
    DeleteBucketReplicationInput, GetBucketReplicationInput, PutBucketReplicationInput,
};
use s3_replication_model::model::{
    DeleteMarkerReplication, DeleteMarkerReplicationStatus, Destination, ReplicationConfiguration,
    ReplicationRule, ReplicationRuleFilter, ReplicationRuleStatus, ReplicationStorageClass,
};
use s3_replication_model::operation::GetBucketReplication;
use s3_replication_model::output::GetBucketReplicationOutput;

fn sample_configuration() -> ReplicationConfiguration {
    ReplicationConfiguration::builder()
        .role("arn:aws:iam::111122223333:role/replication")
        .rules(
            ReplicationRule::builder()
                .id("logs-to-archive")
                .priority(1)
                .filter(ReplicationRuleFilter::Prefix("logs/".to_owned()))
                .status(ReplicationRuleStatus::Enabled)
                .destination(
                    Destination::builder()
                        .bucket("arn:aws:s3:::archive")
                        .account("111122223333")
                        .storage_class(ReplicationStorageClass::Glacier)
                        .build(),
                )
                .delete_marker_replication(
                    DeleteMarkerReplication::builder()
                        .status(DeleteMarkerReplicationStatus::Disabled)
                        .build(),
                )
                .build(),
        )
        .build()
}

#[test]
fn get_input_builder_chains_and_reads_back() {
    let input = GetBucketReplicationInput::builder()
        .bucket("reports")
        .expected_bucket_owner("111122223333")
        .build()
        .unwrap();
    assert_eq!(input.bucket(), Some("reports"));
    assert_eq!(input.expected_bucket_owner(), Some("111122223333"));
    assert!(input.override_config().is_none());
}

#[test]
fn build_without_bucket_is_rejected() {
    let err = GetBucketReplicationInput::builder()
        .expected_bucket_owner("111122223333")
        .build()
        .unwrap_err();
    assert!(err.is_missing_field());
    assert!(err.to_string().contains("bucket"));

    let err = DeleteBucketReplicationInput::builder().build().unwrap_err();
    assert!(err.is_missing_field());
}

#[test]
fn to_builder_round_trips() {
    let input = GetBucketReplicationInput::builder()
        .bucket("reports")
        .expected_bucket_owner("111122223333")
        .override_config(
            RequestOverrideConfig::builder()
                .api_call_timeout(Duration::from_secs(5))
                .build(),
        )
        .build()
        .unwrap();
    let rebuilt = input.to_builder().build().unwrap();
    assert_eq!(input, rebuilt);

    let changed = input.to_builder().bucket("metrics").build().unwrap();
    assert_ne!(input, changed);
    assert_eq!(changed.expected_bucket_owner(), Some("111122223333"));
}

#[test]
fn put_input_carries_the_configuration() {
    let conf = sample_configuration();
    let input = PutBucketReplicationInput::builder()
        .bucket("reports")
        .replication_configuration(conf.clone())
        .build()
        .unwrap();
    assert_eq!(input.replication_configuration(), Some(&conf));

    let rules = input.replication_configuration().unwrap().rules().unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].id(), Some("logs-to-archive"));
    assert_eq!(rules[0].priority(), 1);
    assert!(rules[0].filter().unwrap().is_prefix());
    assert_eq!(
        rules[0].destination().unwrap().storage_class(),
        Some(&ReplicationStorageClass::Glacier)
    );
}

#[test]
fn field_lookup_uses_api_member_names() {
    let input = PutBucketReplicationInput::builder()
        .bucket("reports")
        .replication_configuration(sample_configuration())
        .build()
        .unwrap();
    assert_eq!(
        input.field_names(),
        &[
            "Bucket",
            "ReplicationConfiguration",
            "ExpectedBucketOwner",
            "OverrideConfig"
        ]
    );
    assert_eq!(input.field("Bucket"), Some(FieldValue::Str("reports")));
    let conf = input.field("ReplicationConfiguration").unwrap();
    assert_eq!(
        conf.as_replication_configuration().unwrap().role(),
        Some("arn:aws:iam::111122223333:role/replication")
    );
    assert!(conf.as_str().is_none());
    // unset member
    assert_eq!(input.field("ExpectedBucketOwner"), None);
}

#[test]
fn override_config_accumulates_headers() {
    let config = RequestOverrideConfig::builder()
        .header(
            http::header::HeaderName::from_static("x-amz-expected-bucket-owner"),
            http::HeaderValue::from_static("111122223333"),
        )
        .header(
            http::header::HeaderName::from_static("x-trace"),
            http::HeaderValue::from_static("a"),
        )
        .header(
            http::header::HeaderName::from_static("x-trace"),
            http::HeaderValue::from_static("b"),
        )
        .api_call_timeout(Duration::from_millis(750))
        .build();
    let headers = config.headers().unwrap();
    assert_eq!(headers.len(), 3);
    assert_eq!(headers.get_all("x-trace").iter().count(), 2);
    assert_eq!(config.api_call_timeout(), Some(Duration::from_millis(750)));

    let input = GetBucketReplicationInput::builder()
        .bucket("reports")
        .override_config(config.clone())
        .build()
        .unwrap();
    assert_eq!(input.override_config(), Some(&config));
}

#[test]
fn operation_markers_open_the_input_builder() {
    let input = GetBucketReplication::builder()
        .bucket("reports")
        .build()
        .unwrap();
    assert_eq!(input.bucket(), Some("reports"));
    let _ = GetBucketReplication::new();
}

#[test]
fn output_exposes_the_configuration() {
    let output = GetBucketReplicationOutput::builder()
        .replication_configuration(sample_configuration())
        .build();
    let role = output.replication_configuration().unwrap().role();
    assert_eq!(role, Some("arn:aws:iam::111122223333:role/replication"));

    let empty = GetBucketReplicationOutput::builder().build();
    assert!(empty.replication_configuration().is_none());
    assert_ne!(output, empty);
}

#[test]
fn operation_error_carries_kind_and_metadata() {
    let meta = ErrorMetadata::builder()
        .code("ReplicationConfigurationNotFoundError")
        .message("The replication configuration was not found")
        .request_id("8A2E21C8F0A8E1C7")
        .build();
    let err = GetBucketReplicationError::new(
        GetBucketReplicationErrorKind::ReplicationConfigurationNotFound(
            ReplicationConfigurationNotFound::builder()
                .message("The replication configuration was not found")
                .build(),
        ),
        meta,
    );
    assert!(err.is_replication_configuration_not_found());
    assert!(!err.is_no_such_bucket());
    assert_eq!(err.code(), Some("ReplicationConfigurationNotFoundError"));
    assert_eq!(err.request_id(), Some("8A2E21C8F0A8E1C7"));
    assert!(err
        .to_string()
        .contains("The replication configuration was not found"));
    assert!(err.source().is_some());

    let unhandled = GetBucketReplicationError::unhandled("connection reset");
    assert!(matches!(
        unhandled.kind,
        GetBucketReplicationErrorKind::Unhandled(_)
    ));
    assert_eq!(unhandled.code(), None);
}

#[test]
fn debug_output_lists_members_by_name() {
    let input = GetBucketReplicationInput::builder()
        .bucket("reports")
        .build()
        .unwrap();
    let debug = format!("{:?}", input);
    assert!(debug.starts_with("GetBucketReplicationInput"));
    assert!(debug.contains("bucket: Some(\"reports\")"));
    assert!(debug.contains("expected_bucket_owner: None"));
}
