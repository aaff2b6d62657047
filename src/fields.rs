//! Lookup of request members by their API member name.
//!
//! Static-analysis and diff tooling wants to walk a request without knowing
//! its concrete type. `FieldAccess` exposes the member-name list and a
//! by-name lookup over set members; names use the S3 API spelling
//! (`"Bucket"`, `"ExpectedBucketOwner"`, ...).

use crate::config::RequestOverrideConfig;
use crate::model::ReplicationConfiguration;

/// A borrowed view of one request member.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug)]
pub enum FieldValue<'a> {
    Str(&'a str),
    ReplicationConfiguration(&'a ReplicationConfiguration),
    OverrideConfig(&'a RequestOverrideConfig),
}
impl<'a> FieldValue<'a> {
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            FieldValue::Str(val) => Some(val),
            _ => None,
        }
    }
    pub fn as_replication_configuration(&self) -> Option<&'a ReplicationConfiguration> {
        match self {
            FieldValue::ReplicationConfiguration(val) => Some(val),
            _ => None,
        }
    }
    pub fn as_override_config(&self) -> Option<&'a RequestOverrideConfig> {
        match self {
            FieldValue::OverrideConfig(val) => Some(val),
            _ => None,
        }
    }
}

pub trait FieldAccess {
    /// Every member name this type carries, set or not.
    fn field_names(&self) -> &'static [&'static str];
    /// The value of the named member, `None` when unset or unknown.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

impl FieldAccess for crate::input::GetBucketReplicationInput {
    fn field_names(&self) -> &'static [&'static str] {
        &["Bucket", "ExpectedBucketOwner", "OverrideConfig"]
    }
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "Bucket" => self.bucket.as_deref().map(FieldValue::Str),
            "ExpectedBucketOwner" => self.expected_bucket_owner.as_deref().map(FieldValue::Str),
            "OverrideConfig" => self.override_config.as_ref().map(FieldValue::OverrideConfig),
            _ => None,
        }
    }
}

impl FieldAccess for crate::input::PutBucketReplicationInput {
    fn field_names(&self) -> &'static [&'static str] {
        &[
            "Bucket",
            "ReplicationConfiguration",
            "ExpectedBucketOwner",
            "OverrideConfig",
        ]
    }
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "Bucket" => self.bucket.as_deref().map(FieldValue::Str),
            "ReplicationConfiguration" => self
                .replication_configuration
                .as_ref()
                .map(FieldValue::ReplicationConfiguration),
            "ExpectedBucketOwner" => self.expected_bucket_owner.as_deref().map(FieldValue::Str),
            "OverrideConfig" => self.override_config.as_ref().map(FieldValue::OverrideConfig),
            _ => None,
        }
    }
}

impl FieldAccess for crate::input::DeleteBucketReplicationInput {
    fn field_names(&self) -> &'static [&'static str] {
        &["Bucket", "ExpectedBucketOwner", "OverrideConfig"]
    }
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "Bucket" => self.bucket.as_deref().map(FieldValue::Str),
            "ExpectedBucketOwner" => self.expected_bucket_owner.as_deref().map(FieldValue::Str),
            "OverrideConfig" => self.override_config.as_ref().map(FieldValue::OverrideConfig),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::GetBucketReplicationInput;

    #[test]
    fn unknown_and_unset_members_are_none() {
        let input = GetBucketReplicationInput::builder()
            .bucket("reports")
            .build()
            .unwrap();
        assert_eq!(input.field("Bucket"), Some(FieldValue::Str("reports")));
        assert_eq!(input.field("ExpectedBucketOwner"), None);
        assert_eq!(input.field("Key"), None);
    }
}
