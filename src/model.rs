use std::{
    convert::Infallible,
    fmt::{Debug, Formatter, Result as FmtResult},
    str::FromStr,
};

#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct ReplicationConfiguration {
    pub role: Option<String>,
    pub rules: Option<Vec<crate::model::ReplicationRule>>,
}
impl ReplicationConfiguration {
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }
    pub fn rules(&self) -> Option<&[crate::model::ReplicationRule]> {
        self.rules.as_deref()
    }
}
impl Debug for ReplicationConfiguration {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut formatter = f.debug_struct("ReplicationConfiguration");
        formatter.field("role", &self.role);
        formatter.field("rules", &self.rules);
        formatter.finish()
    }
}
pub mod replication_configuration {

    #[derive(Default, Clone, PartialEq, Debug, Eq)]
    pub struct Builder {
        pub(crate) role: Option<String>,
        pub(crate) rules: Option<Vec<crate::model::ReplicationRule>>,
    }
    impl Builder {
        pub fn role(mut self, input: impl Into<String>) -> Self {
            self.role = Some(input.into());
            self
        }
        pub fn set_role(mut self, input: Option<String>) -> Self {
            self.role = input;
            self
        }
        pub fn rules(mut self, input: crate::model::ReplicationRule) -> Self {
            let mut v = self.rules.unwrap_or_default();
            v.push(input);
            self.rules = Some(v);
            self
        }
        pub fn set_rules(mut self, input: Option<Vec<crate::model::ReplicationRule>>) -> Self {
            self.rules = input;
            self
        }
        pub fn build(self) -> crate::model::ReplicationConfiguration {
            crate::model::ReplicationConfiguration {
                role: self.role,
                rules: self.rules,
            }
        }
    }
}
impl ReplicationConfiguration {
    pub fn builder() -> crate::model::replication_configuration::Builder {
        crate::model::replication_configuration::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct ReplicationRule {
    pub id: Option<String>,
    pub priority: i32,
    pub prefix: Option<String>,
    pub filter: Option<crate::model::ReplicationRuleFilter>,
    pub status: Option<crate::model::ReplicationRuleStatus>,
    pub destination: Option<crate::model::Destination>,
    pub delete_marker_replication: Option<crate::model::DeleteMarkerReplication>,
}
impl ReplicationRule {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    pub fn priority(&self) -> i32 {
        self.priority
    }
    /// Deprecated in the S3 API in favor of `filter`; kept for configurations
    /// written before filters existed.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
    pub fn filter(&self) -> Option<&crate::model::ReplicationRuleFilter> {
        self.filter.as_ref()
    }
    pub fn status(&self) -> Option<&crate::model::ReplicationRuleStatus> {
        self.status.as_ref()
    }
    pub fn destination(&self) -> Option<&crate::model::Destination> {
        self.destination.as_ref()
    }
    pub fn delete_marker_replication(&self) -> Option<&crate::model::DeleteMarkerReplication> {
        self.delete_marker_replication.as_ref()
    }
}
impl Debug for ReplicationRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut formatter = f.debug_struct("ReplicationRule");
        formatter.field("id", &self.id);
        formatter.field("priority", &self.priority);
        formatter.field("prefix", &self.prefix);
        formatter.field("filter", &self.filter);
        formatter.field("status", &self.status);
        formatter.field("destination", &self.destination);
        formatter.field("delete_marker_replication", &self.delete_marker_replication);
        formatter.finish()
    }
}
pub mod replication_rule {

    #[derive(Default, Clone, PartialEq, Debug, Eq)]
    pub struct Builder {
        pub(crate) id: Option<String>,
        pub(crate) priority: Option<i32>,
        pub(crate) prefix: Option<String>,
        pub(crate) filter: Option<crate::model::ReplicationRuleFilter>,
        pub(crate) status: Option<crate::model::ReplicationRuleStatus>,
        pub(crate) destination: Option<crate::model::Destination>,
        pub(crate) delete_marker_replication: Option<crate::model::DeleteMarkerReplication>,
    }
    impl Builder {
        pub fn id(mut self, input: impl Into<String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: Option<String>) -> Self {
            self.id = input;
            self
        }
        pub fn priority(mut self, input: i32) -> Self {
            self.priority = Some(input);
            self
        }
        pub fn set_priority(mut self, input: Option<i32>) -> Self {
            self.priority = input;
            self
        }
        pub fn prefix(mut self, input: impl Into<String>) -> Self {
            self.prefix = Some(input.into());
            self
        }
        pub fn set_prefix(mut self, input: Option<String>) -> Self {
            self.prefix = input;
            self
        }
        pub fn filter(mut self, input: crate::model::ReplicationRuleFilter) -> Self {
            self.filter = Some(input);
            self
        }
        pub fn set_filter(mut self, input: Option<crate::model::ReplicationRuleFilter>) -> Self {
            self.filter = input;
            self
        }
        pub fn status(mut self, input: crate::model::ReplicationRuleStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: Option<crate::model::ReplicationRuleStatus>) -> Self {
            self.status = input;
            self
        }
        pub fn destination(mut self, input: crate::model::Destination) -> Self {
            self.destination = Some(input);
            self
        }
        pub fn set_destination(mut self, input: Option<crate::model::Destination>) -> Self {
            self.destination = input;
            self
        }
        pub fn delete_marker_replication(
            mut self,
            input: crate::model::DeleteMarkerReplication,
        ) -> Self {
            self.delete_marker_replication = Some(input);
            self
        }
        pub fn set_delete_marker_replication(
            mut self,
            input: Option<crate::model::DeleteMarkerReplication>,
        ) -> Self {
            self.delete_marker_replication = input;
            self
        }
        pub fn build(self) -> crate::model::ReplicationRule {
            crate::model::ReplicationRule {
                id: self.id,
                priority: self.priority.unwrap_or_default(),
                prefix: self.prefix,
                filter: self.filter,
                status: self.status,
                destination: self.destination,
                delete_marker_replication: self.delete_marker_replication,
            }
        }
    }
}
impl ReplicationRule {
    pub fn builder() -> crate::model::replication_rule::Builder {
        crate::model::replication_rule::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct Destination {
    pub bucket: Option<String>,
    pub account: Option<String>,
    pub storage_class: Option<crate::model::ReplicationStorageClass>,
}
impl Destination {
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }
    pub fn storage_class(&self) -> Option<&crate::model::ReplicationStorageClass> {
        self.storage_class.as_ref()
    }
}
impl Debug for Destination {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut formatter = f.debug_struct("Destination");
        formatter.field("bucket", &self.bucket);
        formatter.field("account", &self.account);
        formatter.field("storage_class", &self.storage_class);
        formatter.finish()
    }
}
pub mod destination {

    #[derive(Default, Clone, PartialEq, Debug, Eq)]
    pub struct Builder {
        pub(crate) bucket: Option<String>,
        pub(crate) account: Option<String>,
        pub(crate) storage_class: Option<crate::model::ReplicationStorageClass>,
    }
    impl Builder {
        pub fn bucket(mut self, input: impl Into<String>) -> Self {
            self.bucket = Some(input.into());
            self
        }
        pub fn set_bucket(mut self, input: Option<String>) -> Self {
            self.bucket = input;
            self
        }
        pub fn account(mut self, input: impl Into<String>) -> Self {
            self.account = Some(input.into());
            self
        }
        pub fn set_account(mut self, input: Option<String>) -> Self {
            self.account = input;
            self
        }
        pub fn storage_class(mut self, input: crate::model::ReplicationStorageClass) -> Self {
            self.storage_class = Some(input);
            self
        }
        pub fn set_storage_class(
            mut self,
            input: Option<crate::model::ReplicationStorageClass>,
        ) -> Self {
            self.storage_class = input;
            self
        }
        pub fn build(self) -> crate::model::Destination {
            crate::model::Destination {
                bucket: self.bucket,
                account: self.account,
                storage_class: self.storage_class,
            }
        }
    }
}
impl Destination {
    pub fn builder() -> crate::model::destination::Builder {
        crate::model::destination::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct DeleteMarkerReplication {
    pub status: Option<crate::model::DeleteMarkerReplicationStatus>,
}
impl DeleteMarkerReplication {
    pub fn status(&self) -> Option<&crate::model::DeleteMarkerReplicationStatus> {
        self.status.as_ref()
    }
}
impl Debug for DeleteMarkerReplication {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut formatter = f.debug_struct("DeleteMarkerReplication");
        formatter.field("status", &self.status);
        formatter.finish()
    }
}
pub mod delete_marker_replication {

    #[derive(Default, Clone, PartialEq, Debug, Eq)]
    pub struct Builder {
        pub(crate) status: Option<crate::model::DeleteMarkerReplicationStatus>,
    }
    impl Builder {
        pub fn status(mut self, input: crate::model::DeleteMarkerReplicationStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(
            mut self,
            input: Option<crate::model::DeleteMarkerReplicationStatus>,
        ) -> Self {
            self.status = input;
            self
        }
        pub fn build(self) -> crate::model::DeleteMarkerReplication {
            crate::model::DeleteMarkerReplication {
                status: self.status,
            }
        }
    }
}
impl DeleteMarkerReplication {
    pub fn builder() -> crate::model::delete_marker_replication::Builder {
        crate::model::delete_marker_replication::Builder::default()
    }
}

/// Scopes a replication rule to a subset of the bucket. Exactly one variant
/// is set on a rule.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ReplicationRuleFilter {
    And(crate::model::ReplicationRuleAndOperator),
    Prefix(String),
    Tag(crate::model::Tag),
    #[non_exhaustive]
    Unknown,
}
impl ReplicationRuleFilter {
    pub fn as_and(&self) -> Result<&crate::model::ReplicationRuleAndOperator, &Self> {
        if let ReplicationRuleFilter::And(val) = &self {
            Ok(val)
        } else {
            Err(self)
        }
    }
    pub fn is_and(&self) -> bool {
        self.as_and().is_ok()
    }
    pub fn as_prefix(&self) -> Result<&String, &Self> {
        if let ReplicationRuleFilter::Prefix(val) = &self {
            Ok(val)
        } else {
            Err(self)
        }
    }
    pub fn is_prefix(&self) -> bool {
        self.as_prefix().is_ok()
    }
    pub fn as_tag(&self) -> Result<&crate::model::Tag, &Self> {
        if let ReplicationRuleFilter::Tag(val) = &self {
            Ok(val)
        } else {
            Err(self)
        }
    }
    pub fn is_tag(&self) -> bool {
        self.as_tag().is_ok()
    }
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct ReplicationRuleAndOperator {
    pub prefix: Option<String>,
    pub tags: Option<Vec<crate::model::Tag>>,
}
impl ReplicationRuleAndOperator {
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
    pub fn tags(&self) -> Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
impl Debug for ReplicationRuleAndOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut formatter = f.debug_struct("ReplicationRuleAndOperator");
        formatter.field("prefix", &self.prefix);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
pub mod replication_rule_and_operator {

    #[derive(Default, Clone, PartialEq, Eq, Debug)]
    pub struct Builder {
        pub(crate) prefix: Option<String>,
        pub(crate) tags: Option<Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn prefix(mut self, input: impl Into<String>) -> Self {
            self.prefix = Some(input.into());
            self
        }
        pub fn set_prefix(mut self, input: Option<String>) -> Self {
            self.prefix = input;
            self
        }
        pub fn tags(mut self, input: crate::model::Tag) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input);
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        pub fn build(self) -> crate::model::ReplicationRuleAndOperator {
            crate::model::ReplicationRuleAndOperator {
                prefix: self.prefix,
                tags: self.tags,
            }
        }
    }
}
impl ReplicationRuleAndOperator {
    pub fn builder() -> crate::model::replication_rule_and_operator::Builder {
        crate::model::replication_rule_and_operator::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}
impl Tag {
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut formatter = f.debug_struct("Tag");
        formatter.field("key", &self.key);
        formatter.field("value", &self.value);
        formatter.finish()
    }
}
pub mod tag {

    #[derive(Default, Clone, PartialEq, Eq, Debug)]
    pub struct Builder {
        pub(crate) key: Option<String>,
        pub(crate) value: Option<String>,
    }
    impl Builder {
        pub fn key(mut self, input: impl Into<String>) -> Self {
            self.key = Some(input.into());
            self
        }
        pub fn set_key(mut self, input: Option<String>) -> Self {
            self.key = input;
            self
        }
        pub fn value(mut self, input: impl Into<String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: Option<String>) -> Self {
            self.value = input;
            self
        }
        pub fn build(self) -> crate::model::Tag {
            crate::model::Tag {
                key: self.key,
                value: self.value,
            }
        }
    }
}
impl Tag {
    pub fn builder() -> crate::model::tag::Builder {
        crate::model::tag::Builder::default()
    }
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Clone, Eq, Ord, PartialEq, PartialOrd, Debug, Hash)]
pub enum ReplicationRuleStatus {
    #[allow(missing_docs)]
    Disabled,
    #[allow(missing_docs)]
    Enabled,
    Unknown(String),
}
impl From<&str> for ReplicationRuleStatus {
    fn from(s: &str) -> Self {
        match s {
            "Disabled" => ReplicationRuleStatus::Disabled,
            "Enabled" => ReplicationRuleStatus::Enabled,
            other => ReplicationRuleStatus::Unknown(other.to_owned()),
        }
    }
}
impl FromStr for ReplicationRuleStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ReplicationRuleStatus::from(s))
    }
}
impl ReplicationRuleStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ReplicationRuleStatus::Disabled => "Disabled",
            ReplicationRuleStatus::Enabled => "Enabled",
            ReplicationRuleStatus::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["Disabled", "Enabled"]
    }
}
impl AsRef<str> for ReplicationRuleStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Clone, Eq, Ord, PartialEq, PartialOrd, Debug, Hash)]
pub enum DeleteMarkerReplicationStatus {
    #[allow(missing_docs)]
    Disabled,
    #[allow(missing_docs)]
    Enabled,
    Unknown(String),
}
impl From<&str> for DeleteMarkerReplicationStatus {
    fn from(s: &str) -> Self {
        match s {
            "Disabled" => DeleteMarkerReplicationStatus::Disabled,
            "Enabled" => DeleteMarkerReplicationStatus::Enabled,
            other => DeleteMarkerReplicationStatus::Unknown(other.to_owned()),
        }
    }
}
impl FromStr for DeleteMarkerReplicationStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DeleteMarkerReplicationStatus::from(s))
    }
}
impl DeleteMarkerReplicationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DeleteMarkerReplicationStatus::Disabled => "Disabled",
            DeleteMarkerReplicationStatus::Enabled => "Enabled",
            DeleteMarkerReplicationStatus::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["Disabled", "Enabled"]
    }
}
impl AsRef<str> for DeleteMarkerReplicationStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Clone, Eq, Ord, PartialEq, PartialOrd, Debug, Hash)]
pub enum ReplicationStorageClass {
    #[allow(missing_docs)]
    DeepArchive,
    #[allow(missing_docs)]
    Glacier,
    #[allow(missing_docs)]
    GlacierIr,
    #[allow(missing_docs)]
    IntelligentTiering,
    #[allow(missing_docs)]
    OnezoneIa,
    #[allow(missing_docs)]
    ReducedRedundancy,
    #[allow(missing_docs)]
    Standard,
    #[allow(missing_docs)]
    StandardIa,
    Unknown(String),
}
impl From<&str> for ReplicationStorageClass {
    fn from(s: &str) -> Self {
        match s {
            "DEEP_ARCHIVE" => ReplicationStorageClass::DeepArchive,
            "GLACIER" => ReplicationStorageClass::Glacier,
            "GLACIER_IR" => ReplicationStorageClass::GlacierIr,
            "INTELLIGENT_TIERING" => ReplicationStorageClass::IntelligentTiering,
            "ONEZONE_IA" => ReplicationStorageClass::OnezoneIa,
            "REDUCED_REDUNDANCY" => ReplicationStorageClass::ReducedRedundancy,
            "STANDARD" => ReplicationStorageClass::Standard,
            "STANDARD_IA" => ReplicationStorageClass::StandardIa,
            other => ReplicationStorageClass::Unknown(other.to_owned()),
        }
    }
}
impl FromStr for ReplicationStorageClass {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ReplicationStorageClass::from(s))
    }
}
impl ReplicationStorageClass {
    pub fn as_str(&self) -> &str {
        match self {
            ReplicationStorageClass::DeepArchive => "DEEP_ARCHIVE",
            ReplicationStorageClass::Glacier => "GLACIER",
            ReplicationStorageClass::GlacierIr => "GLACIER_IR",
            ReplicationStorageClass::IntelligentTiering => "INTELLIGENT_TIERING",
            ReplicationStorageClass::OnezoneIa => "ONEZONE_IA",
            ReplicationStorageClass::ReducedRedundancy => "REDUCED_REDUNDANCY",
            ReplicationStorageClass::Standard => "STANDARD",
            ReplicationStorageClass::StandardIa => "STANDARD_IA",
            ReplicationStorageClass::Unknown(s) => s.as_ref(),
        }
    }

    pub fn values() -> &'static [&'static str] {
        &[
            "DEEP_ARCHIVE",
            "GLACIER",
            "GLACIER_IR",
            "INTELLIGENT_TIERING",
            "ONEZONE_IA",
            "REDUCED_REDUNDANCY",
            "STANDARD",
            "STANDARD_IA",
        ]
    }
}
impl AsRef<str> for ReplicationStorageClass {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_class_parses_known_and_unknown_names() {
        for name in ReplicationStorageClass::values() {
            let class = ReplicationStorageClass::from(*name);
            assert_eq!(class.as_str(), *name);
            assert!(!matches!(class, ReplicationStorageClass::Unknown(_)));
        }
        let class: ReplicationStorageClass = "EXPRESS_ONEZONE".parse().unwrap();
        assert_eq!(class, ReplicationStorageClass::Unknown("EXPRESS_ONEZONE".into()));
        assert_eq!(class.as_str(), "EXPRESS_ONEZONE");
    }

    #[test]
    fn filter_accessors_follow_the_variant() {
        let filter = ReplicationRuleFilter::Prefix("logs/".to_owned());
        assert!(filter.is_prefix());
        assert_eq!(filter.as_prefix().unwrap(), "logs/");
        assert!(filter.as_tag().is_err());
        assert!(!filter.is_unknown());

        let and = ReplicationRuleFilter::And(
            ReplicationRuleAndOperator::builder()
                .prefix("logs/")
                .tags(Tag::builder().key("team").value("storage").build())
                .build(),
        );
        assert!(and.is_and());
        assert_eq!(and.as_and().unwrap().prefix(), Some("logs/"));
    }
}
