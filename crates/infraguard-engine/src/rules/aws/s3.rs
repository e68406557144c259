use crate::registry::{Registry, RegistryError};
use crate::results::Results;
use crate::rule::RuleDescriptor;
use infraguard_state::aws::s3::S3;
use infraguard_types::{Provider, Severity, ids};

pub(crate) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.try_register::<S3, _>(enable_bucket_encryption(), check_bucket_encryption)?;
    registry.try_register::<S3, _>(
        specify_public_access_block(),
        check_public_access_block,
    )?;
    Ok(())
}

fn enable_bucket_encryption() -> RuleDescriptor {
    RuleDescriptor {
        provider: Provider::Aws,
        service: ids::SERVICE_S3.to_string(),
        short_code: "enable-bucket-encryption".to_string(),
        summary: "Unencrypted S3 bucket.".to_string(),
        impact: "The bucket objects could be read if compromised".to_string(),
        resolution: "Configure bucket encryption".to_string(),
        explanation: "S3 Buckets should be encrypted to protect the data that is stored within \
                      them if access is compromised."
            .to_string(),
        links: vec![
            "https://docs.aws.amazon.com/AmazonS3/latest/userguide/bucket-encryption.html"
                .to_string(),
        ],
        severity: Severity::High,
    }
}

fn check_bucket_encryption(s3: &S3, results: &mut Results) {
    for bucket in &s3.buckets {
        let enabled = &bucket.encryption.enabled;
        if enabled.is_false() {
            results.add(
                "Bucket does not have encryption enabled",
                enabled.metadata(),
                *enabled.value(),
            );
        } else {
            results.add_passed(&bucket.metadata);
        }
    }
}

fn specify_public_access_block() -> RuleDescriptor {
    RuleDescriptor {
        provider: Provider::Aws,
        service: ids::SERVICE_S3.to_string(),
        short_code: "specify-public-access-block".to_string(),
        summary: "S3 buckets should each define an aws_s3_bucket_public_access_block".to_string(),
        impact: "Public access policies may be applied to sensitive data buckets".to_string(),
        resolution: "Define a aws_s3_bucket_public_access_block for the given bucket to control \
                     public access policies"
            .to_string(),
        explanation: "The \"block public access\" settings in S3 override individual policies \
                      that apply to a given bucket, meaning that all public access can be \
                      controlled in one central place for that bucket. It is therefore good \
                      practice to define these settings for each bucket in order to clearly \
                      define the public access that can be allowed for it."
            .to_string(),
        links: vec![
            "https://docs.aws.amazon.com/AmazonS3/latest/userguide/access-control-block-public-access.html"
                .to_string(),
        ],
        severity: Severity::Low,
    }
}

fn check_public_access_block(s3: &S3, results: &mut Results) {
    for bucket in &s3.buckets {
        match &bucket.public_access_block {
            None => results.add_resource(
                "Bucket does not have a corresponding public access block.",
                &bucket.metadata,
            ),
            Some(block) => results.add_passed(&block.metadata),
        }
    }
}
