//! The `explain` use case: look up rule documentation by `LongId`.

use infraguard_engine::{Registry, RuleDescriptor};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found the rule.
    Found(RuleDescriptor),
    /// Unknown identifier; includes every registered `LongId`.
    NotFound {
        identifier: String,
        available: Vec<String>,
    },
}

pub fn run_explain(registry: &Registry, identifier: &str) -> ExplainOutput {
    match registry.lookup(identifier) {
        Some(rule) => ExplainOutput::Found(rule.descriptor().clone()),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available: registry
                .enumerate()
                .map(|rule| rule.long_id().to_string())
                .collect(),
        },
    }
}

/// Format a rule's documentation for terminal display.
pub fn format_explanation(descriptor: &RuleDescriptor) -> String {
    let title = format!("{} ({})", descriptor.long_id(), descriptor.severity);
    let mut out = String::new();

    out.push_str(&title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push_str("\n\n");
    out.push_str(&descriptor.summary);
    out.push_str("\n\n");
    section(&mut out, "Impact", &descriptor.impact);
    section(&mut out, "Resolution", &descriptor.resolution);
    section(&mut out, "Explanation", &descriptor.explanation);

    if !descriptor.links.is_empty() {
        out.push_str("Links\n");
        out.push_str("-----\n");
        for link in &descriptor.links {
            out.push_str(&format!("  - {link}\n"));
        }
    }

    out
}

fn section(out: &mut String, heading: &str, body: &str) {
    out.push_str(heading);
    out.push('\n');
    out.push_str(&"-".repeat(heading.len()));
    out.push('\n');
    out.push_str(body);
    out.push_str("\n\n");
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, available: &[String]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown rule id: {identifier}\n\n"));
    out.push_str("Available rule ids:\n");
    for id in available {
        out.push_str(&format!("  - {id}\n"));
    }

    out
}
