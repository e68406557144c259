use crate::rule::RuleDescriptor;
use infraguard_state::aws::s3::{Bucket, Encryption};
use infraguard_state::{BoolValue, Metadata, Range, State, StringValue};
use infraguard_types::{Provider, Severity};

pub fn descriptor(
    provider: Provider,
    service: &str,
    short_code: &str,
    severity: Severity,
) -> RuleDescriptor {
    RuleDescriptor {
        provider,
        service: service.to_string(),
        short_code: short_code.to_string(),
        summary: format!("summary of {short_code}"),
        impact: "impact".to_string(),
        resolution: "resolution".to_string(),
        explanation: "explanation".to_string(),
        links: Vec::new(),
        severity,
    }
}

pub fn bucket(name: &str, encrypted: bool) -> Bucket {
    let reference = format!("aws_s3_bucket.{name}");
    let metadata = Metadata::new(Range::new("main.tf", 1, 10), reference.clone());
    let mut bucket = Bucket::new(metadata.clone());
    bucket.name = StringValue::new(name.to_string(), metadata.clone());
    bucket.encryption = Encryption {
        enabled: BoolValue::new(encrypted, Metadata::new(Range::new("main.tf", 4, 4), reference)),
        ..Encryption::new(metadata)
    };
    bucket
}

pub fn unencrypted_bucket(name: &str) -> Bucket {
    bucket(name, false)
}

pub fn state_with_buckets(buckets: Vec<Bucket>) -> State {
    let mut state = State::default();
    state.aws.s3.buckets = buckets;
    state
}
