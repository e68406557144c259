use infraguard_types::{Fault, LongId, Metadata};
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a result.
///
/// Identity fields:
/// - long_id
/// - resource reference (if present)
/// - source path and start line (if present)
/// - description
///
/// Status is not part of the identity: an ignored result keeps its fingerprint.
pub fn fingerprint_for_result(long_id: &LongId, description: &str, metadata: &Metadata) -> String {
    let line;
    let mut parts = vec![long_id.as_str(), metadata.reference().unwrap_or("")];
    match metadata.range() {
        Some(range) => {
            line = range.start_line.to_string();
            parts.push(range.path.as_str());
            parts.push(&line);
        }
        None => {
            parts.push("");
            parts.push("");
        }
    }
    parts.push(description);
    let canonical = parts.join("|");

    sha256_hex(&canonical)
}

/// Fingerprint of the synthetic result for a faulted rule: `long_id|code`.
///
/// Independent of the panic message or timing, so a rule that keeps faulting keeps one identity.
pub fn fingerprint_for_fault(long_id: &LongId, fault: Fault) -> String {
    sha256_hex(&format!("{}|{}", long_id.as_str(), fault.code()))
}

fn sha256_hex(canonical: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use infraguard_types::{Provider, Range};

    fn id() -> LongId {
        LongId::new(Provider::Aws, "s3", "enable-bucket-encryption")
    }

    #[test]
    fn fingerprint_is_stable_hex() {
        let meta = Metadata::new(Range::new("main.tf", 4, 9), "aws_s3_bucket.a");
        let a = fingerprint_for_result(&id(), "unencrypted", &meta);
        let b = fingerprint_for_result(&id(), "unencrypted", &meta);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn fingerprint_distinguishes_location() {
        let a = Metadata::new(Range::new("main.tf", 4, 9), "aws_s3_bucket.a");
        let b = Metadata::new(Range::new("main.tf", 12, 20), "aws_s3_bucket.a");
        assert_ne!(
            fingerprint_for_result(&id(), "x", &a),
            fingerprint_for_result(&id(), "x", &b)
        );
        assert_ne!(
            fingerprint_for_result(&id(), "x", &a),
            fingerprint_for_result(&id(), "x", &Metadata::not_found())
        );
    }

    #[test]
    fn fault_fingerprint_depends_on_rule_and_code_only() {
        let a = fingerprint_for_fault(&id(), Fault::InternalError);
        assert_eq!(a, fingerprint_for_fault(&id(), Fault::InternalError));
        assert_eq!(a.len(), 64);
        assert_ne!(a, fingerprint_for_fault(&id(), Fault::DeadlineExceeded));
        let other = LongId::new(Provider::Aws, "s3", "other");
        assert_ne!(a, fingerprint_for_fault(&other, Fault::InternalError));
    }
}
