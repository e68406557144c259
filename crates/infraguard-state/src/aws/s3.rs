use crate::{BoolValue, Metadata, Service, State, StringValue, find_or_default};
use infraguard_types::{Provider, ids};
use std::borrow::Cow;

#[derive(Clone, Debug, Default)]
pub struct S3 {
    pub buckets: Vec<Bucket>,
}

impl S3 {
    /// Bucket by name; a zero-value bucket when the configuration has none by that name.
    pub fn bucket(&self, name: &str) -> Cow<'_, Bucket> {
        find_or_default(&self.buckets, |b| b.name.equal_to(name))
    }
}

impl Service for S3 {
    const PROVIDER: Provider = Provider::Aws;
    const NAME: &'static str = ids::SERVICE_S3;

    fn select(state: &State) -> &Self {
        &state.aws.s3
    }
}

#[derive(Clone, Debug, Default)]
pub struct Bucket {
    pub metadata: Metadata,
    pub name: StringValue,
    pub acl: StringValue,
    pub encryption: Encryption,
    pub versioning: Versioning,
    /// `None` when no public access block is attached to the bucket.
    pub public_access_block: Option<PublicAccessBlock>,
}

impl Bucket {
    /// A bucket declared at `metadata` with every field defaulted to that location.
    pub fn new(metadata: Metadata) -> Self {
        Self {
            name: StringValue::default_from(String::new(), &metadata),
            acl: StringValue::default_from("private".to_string(), &metadata),
            encryption: Encryption::new(metadata.defaulted()),
            versioning: Versioning::new(metadata.defaulted()),
            public_access_block: None,
            metadata,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Encryption {
    pub metadata: Metadata,
    pub enabled: BoolValue,
    pub algorithm: StringValue,
    pub kms_key_id: StringValue,
}

impl Encryption {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            enabled: BoolValue::default_from(false, &metadata),
            algorithm: StringValue::default_from(String::new(), &metadata),
            kms_key_id: StringValue::default_from(String::new(), &metadata),
            metadata,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Versioning {
    pub metadata: Metadata,
    pub enabled: BoolValue,
}

impl Versioning {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            enabled: BoolValue::default_from(false, &metadata),
            metadata,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PublicAccessBlock {
    pub metadata: Metadata,
    pub block_public_acls: BoolValue,
    pub block_public_policy: BoolValue,
    pub ignore_public_acls: BoolValue,
    pub restrict_public_buckets: BoolValue,
}

impl PublicAccessBlock {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            block_public_acls: BoolValue::default_from(false, &metadata),
            block_public_policy: BoolValue::default_from(false, &metadata),
            ignore_public_acls: BoolValue::default_from(false, &metadata),
            restrict_public_buckets: BoolValue::default_from(false, &metadata),
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infraguard_types::Range;

    #[test]
    fn missing_bucket_is_zero_value_not_a_fault() {
        let s3 = S3::default();
        let bucket = s3.bucket("does-not-exist");
        assert!(bucket.encryption.enabled.is_false());
        assert!(!bucket.encryption.enabled.is_explicit());
        assert!(!bucket.encryption.enabled.metadata().is_resolved());
        assert!(bucket.public_access_block.is_none());
    }

    #[test]
    fn lookup_finds_bucket_by_name() {
        let mut bucket = Bucket::new(Metadata::test());
        bucket.name = StringValue::new("logs".to_string(), Metadata::test());
        let s3 = S3 {
            buckets: vec![bucket],
        };
        assert!(matches!(s3.bucket("logs"), Cow::Borrowed(_)));
        assert!(matches!(s3.bucket("other"), Cow::Owned(_)));
    }

    #[test]
    fn new_bucket_defaults_point_at_bucket() {
        let meta = Metadata::new(Range::new("s3.tf", 1, 12), "aws_s3_bucket.logs");
        let bucket = Bucket::new(meta.clone());
        assert_eq!(bucket.encryption.enabled.metadata().range(), meta.range());
        assert_eq!(
            bucket.encryption.enabled.metadata().reference(),
            Some("aws_s3_bucket.logs")
        );
        assert!(!bucket.encryption.metadata.is_explicit());
        assert!(bucket.acl.equal_to("private"));
    }
}
