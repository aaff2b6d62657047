use std::fmt::{Debug, Formatter, Result as FmtResult};

pub mod get_bucket_replication_input {
    use crate::error::BuildError;

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) bucket: Option<String>,
        pub(crate) expected_bucket_owner: Option<String>,
        pub(crate) override_config: Option<crate::config::RequestOverrideConfig>,
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
        pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
            self.expected_bucket_owner = Some(input.into());
            self
        }
        pub fn set_expected_bucket_owner(mut self, input: Option<String>) -> Self {
            self.expected_bucket_owner = input;
            self
        }
        pub fn override_config(mut self, input: crate::config::RequestOverrideConfig) -> Self {
            self.override_config = Some(input);
            self
        }
        pub fn set_override_config(
            mut self,
            input: Option<crate::config::RequestOverrideConfig>,
        ) -> Self {
            self.override_config = input;
            self
        }
        pub fn build(self) -> Result<crate::input::GetBucketReplicationInput, BuildError> {
            let Some(bucket) = self.bucket else {
                return Err(BuildError::missing_field(
                    "bucket",
                    "every replication operation addresses one bucket",
                ));
            };
            Ok(crate::input::GetBucketReplicationInput {
                bucket: Some(bucket),
                expected_bucket_owner: self.expected_bucket_owner,
                override_config: self.override_config,
            })
        }
    }
}
impl GetBucketReplicationInput {
    pub fn builder() -> crate::input::get_bucket_replication_input::Builder {
        crate::input::get_bucket_replication_input::Builder::default()
    }
}

pub mod put_bucket_replication_input {
    use crate::error::BuildError;

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) bucket: Option<String>,
        pub(crate) replication_configuration: Option<crate::model::ReplicationConfiguration>,
        pub(crate) expected_bucket_owner: Option<String>,
        pub(crate) override_config: Option<crate::config::RequestOverrideConfig>,
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
        pub fn replication_configuration(
            mut self,
            input: crate::model::ReplicationConfiguration,
        ) -> Self {
            self.replication_configuration = Some(input);
            self
        }
        pub fn set_replication_configuration(
            mut self,
            input: Option<crate::model::ReplicationConfiguration>,
        ) -> Self {
            self.replication_configuration = input;
            self
        }
        pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
            self.expected_bucket_owner = Some(input.into());
            self
        }
        pub fn set_expected_bucket_owner(mut self, input: Option<String>) -> Self {
            self.expected_bucket_owner = input;
            self
        }
        pub fn override_config(mut self, input: crate::config::RequestOverrideConfig) -> Self {
            self.override_config = Some(input);
            self
        }
        pub fn set_override_config(
            mut self,
            input: Option<crate::config::RequestOverrideConfig>,
        ) -> Self {
            self.override_config = input;
            self
        }
        pub fn build(self) -> Result<crate::input::PutBucketReplicationInput, BuildError> {
            let Some(bucket) = self.bucket else {
                return Err(BuildError::missing_field(
                    "bucket",
                    "every replication operation addresses one bucket",
                ));
            };
            Ok(crate::input::PutBucketReplicationInput {
                bucket: Some(bucket),
                replication_configuration: self.replication_configuration,
                expected_bucket_owner: self.expected_bucket_owner,
                override_config: self.override_config,
            })
        }
    }
}
impl PutBucketReplicationInput {
    pub fn builder() -> crate::input::put_bucket_replication_input::Builder {
        crate::input::put_bucket_replication_input::Builder::default()
    }
}

pub mod delete_bucket_replication_input {
    use crate::error::BuildError;

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) bucket: Option<String>,
        pub(crate) expected_bucket_owner: Option<String>,
        pub(crate) override_config: Option<crate::config::RequestOverrideConfig>,
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
        pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
            self.expected_bucket_owner = Some(input.into());
            self
        }
        pub fn set_expected_bucket_owner(mut self, input: Option<String>) -> Self {
            self.expected_bucket_owner = input;
            self
        }
        pub fn override_config(mut self, input: crate::config::RequestOverrideConfig) -> Self {
            self.override_config = Some(input);
            self
        }
        pub fn set_override_config(
            mut self,
            input: Option<crate::config::RequestOverrideConfig>,
        ) -> Self {
            self.override_config = input;
            self
        }
        pub fn build(self) -> Result<crate::input::DeleteBucketReplicationInput, BuildError> {
            let Some(bucket) = self.bucket else {
                return Err(BuildError::missing_field(
                    "bucket",
                    "every replication operation addresses one bucket",
                ));
            };
            Ok(crate::input::DeleteBucketReplicationInput {
                bucket: Some(bucket),
                expected_bucket_owner: self.expected_bucket_owner,
                override_config: self.override_config,
            })
        }
    }
}
impl DeleteBucketReplicationInput {
    pub fn builder() -> crate::input::delete_bucket_replication_input::Builder {
        crate::input::delete_bucket_replication_input::Builder::default()
    }
}

/// Request for the `GetBucketReplication` operation: fetches the replication
/// configuration of a bucket.
#[non_exhaustive]
#[derive(Clone, PartialEq)]
pub struct GetBucketReplicationInput {
    pub bucket: Option<String>,
    pub expected_bucket_owner: Option<String>,
    pub override_config: Option<crate::config::RequestOverrideConfig>,
}
impl GetBucketReplicationInput {
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }
    /// Account id the bucket is expected to belong to; the service rejects
    /// the request when it does not match.
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }
    pub fn override_config(&self) -> Option<&crate::config::RequestOverrideConfig> {
        self.override_config.as_ref()
    }
    pub fn to_builder(&self) -> crate::input::get_bucket_replication_input::Builder {
        crate::input::get_bucket_replication_input::Builder {
            bucket: self.bucket.clone(),
            expected_bucket_owner: self.expected_bucket_owner.clone(),
            override_config: self.override_config.clone(),
        }
    }
}
impl Debug for GetBucketReplicationInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut formatter = f.debug_struct("GetBucketReplicationInput");
        formatter.field("bucket", &self.bucket);
        formatter.field("expected_bucket_owner", &self.expected_bucket_owner);
        formatter.field("override_config", &self.override_config);
        formatter.finish()
    }
}

/// Request for the `PutBucketReplication` operation: replaces the replication
/// configuration of a bucket.
#[non_exhaustive]
#[derive(Clone, PartialEq)]
pub struct PutBucketReplicationInput {
    pub bucket: Option<String>,
    pub replication_configuration: Option<crate::model::ReplicationConfiguration>,
    pub expected_bucket_owner: Option<String>,
    pub override_config: Option<crate::config::RequestOverrideConfig>,
}
impl PutBucketReplicationInput {
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }
    pub fn replication_configuration(&self) -> Option<&crate::model::ReplicationConfiguration> {
        self.replication_configuration.as_ref()
    }
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }
    pub fn override_config(&self) -> Option<&crate::config::RequestOverrideConfig> {
        self.override_config.as_ref()
    }
    pub fn to_builder(&self) -> crate::input::put_bucket_replication_input::Builder {
        crate::input::put_bucket_replication_input::Builder {
            bucket: self.bucket.clone(),
            replication_configuration: self.replication_configuration.clone(),
            expected_bucket_owner: self.expected_bucket_owner.clone(),
            override_config: self.override_config.clone(),
        }
    }
}
impl Debug for PutBucketReplicationInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut formatter = f.debug_struct("PutBucketReplicationInput");
        formatter.field("bucket", &self.bucket);
        formatter.field("replication_configuration", &self.replication_configuration);
        formatter.field("expected_bucket_owner", &self.expected_bucket_owner);
        formatter.field("override_config", &self.override_config);
        formatter.finish()
    }
}

/// Request for the `DeleteBucketReplication` operation: removes the
/// replication configuration from a bucket.
#[non_exhaustive]
#[derive(Clone, PartialEq)]
pub struct DeleteBucketReplicationInput {
    pub bucket: Option<String>,
    pub expected_bucket_owner: Option<String>,
    pub override_config: Option<crate::config::RequestOverrideConfig>,
}
impl DeleteBucketReplicationInput {
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }
    pub fn override_config(&self) -> Option<&crate::config::RequestOverrideConfig> {
        self.override_config.as_ref()
    }
    pub fn to_builder(&self) -> crate::input::delete_bucket_replication_input::Builder {
        crate::input::delete_bucket_replication_input::Builder {
            bucket: self.bucket.clone(),
            expected_bucket_owner: self.expected_bucket_owner.clone(),
            override_config: self.override_config.clone(),
        }
    }
}
impl Debug for DeleteBucketReplicationInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut formatter = f.debug_struct("DeleteBucketReplicationInput");
        formatter.field("bucket", &self.bucket);
        formatter.field("expected_bucket_owner", &self.expected_bucket_owner);
        formatter.field("override_config", &self.override_config);
        formatter.finish()
    }
}
