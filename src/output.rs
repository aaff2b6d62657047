use std::fmt::{Debug, Formatter, Result as FmtResult};

#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct GetBucketReplicationOutput {
    pub replication_configuration: Option<crate::model::ReplicationConfiguration>,
}
impl GetBucketReplicationOutput {
    pub fn replication_configuration(&self) -> Option<&crate::model::ReplicationConfiguration> {
        self.replication_configuration.as_ref()
    }
}
impl Debug for GetBucketReplicationOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut formatter = f.debug_struct("GetBucketReplicationOutput");
        formatter.field("replication_configuration", &self.replication_configuration);
        formatter.finish()
    }
}
pub mod get_bucket_replication_output {

    #[derive(Default, Clone, PartialEq, Debug, Eq)]
    pub struct Builder {
        pub(crate) replication_configuration: Option<crate::model::ReplicationConfiguration>,
    }
    impl Builder {
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
        pub fn build(self) -> crate::output::GetBucketReplicationOutput {
            crate::output::GetBucketReplicationOutput {
                replication_configuration: self.replication_configuration,
            }
        }
    }
}
impl GetBucketReplicationOutput {
    pub fn builder() -> crate::output::get_bucket_replication_output::Builder {
        crate::output::get_bucket_replication_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct PutBucketReplicationOutput {}
impl Debug for PutBucketReplicationOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut formatter = f.debug_struct("PutBucketReplicationOutput");
        formatter.finish()
    }
}
pub mod put_bucket_replication_output {

    #[derive(Default, Clone, PartialEq, Debug, Eq)]
    pub struct Builder {}
    impl Builder {
        pub fn build(self) -> crate::output::PutBucketReplicationOutput {
            crate::output::PutBucketReplicationOutput {}
        }
    }
}
impl PutBucketReplicationOutput {
    pub fn builder() -> crate::output::put_bucket_replication_output::Builder {
        crate::output::put_bucket_replication_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct DeleteBucketReplicationOutput {}
impl Debug for DeleteBucketReplicationOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut formatter = f.debug_struct("DeleteBucketReplicationOutput");
        formatter.finish()
    }
}
pub mod delete_bucket_replication_output {

    #[derive(Default, Clone, PartialEq, Debug, Eq)]
    pub struct Builder {}
    impl Builder {
        pub fn build(self) -> crate::output::DeleteBucketReplicationOutput {
            crate::output::DeleteBucketReplicationOutput {}
        }
    }
}
impl DeleteBucketReplicationOutput {
    pub fn builder() -> crate::output::delete_bucket_replication_output::Builder {
        crate::output::delete_bucket_replication_output::Builder::default()
    }
}
