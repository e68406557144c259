//! The `list` use case: enumerate the rules a policy selects.

use infraguard_engine::{Registry, Scanner};
use infraguard_settings::ResolvedConfig;
use infraguard_types::{LongId, Severity};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleListing {
    pub long_id: LongId,
    pub severity: Severity,
    pub summary: String,
}

/// Rules selected by `resolved`, in enumeration order.
pub fn run_list_rules(registry: &Registry, resolved: &ResolvedConfig) -> Vec<RuleListing> {
    Scanner::new(registry)
        .select(&resolved.effective.filter)
        .into_iter()
        .map(|rule| RuleListing {
            long_id: rule.long_id().clone(),
            severity: rule.severity(),
            summary: rule.descriptor().summary.clone(),
        })
        .collect()
}

/// One line per rule: `SEVERITY  long_id  summary`.
pub fn format_rule_list(rules: &[RuleListing]) -> String {
    let width = rules
        .iter()
        .map(|r| r.long_id.as_str().len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for r in rules {
        out.push_str(&format!(
            "{:<8}  {:<width$}  {}\n",
            r.severity.as_str(),
            r.long_id.as_str(),
            r.summary
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use infraguard_settings::{Overrides, parse_config_toml, resolve_config};

    fn resolved(toml: &str) -> ResolvedConfig {
        resolve_config(parse_config_toml(toml).unwrap(), Overrides::default()).unwrap()
    }

    #[test]
    fn default_profile_lists_every_rule_sorted() {
        let registry = Registry::with_builtin().unwrap();
        let rules = run_list_rules(&registry, &resolved(""));
        assert_eq!(rules.len(), registry.len());
        assert!(rules.windows(2).all(|w| w[0].long_id < w[1].long_id));
    }

    #[test]
    fn critical_profile_lists_critical_rules_only() {
        let registry = Registry::with_builtin().unwrap();
        let rules = run_list_rules(&registry, &resolved("profile = \"critical\""));
        assert!(!rules.is_empty());
        assert!(rules.iter().all(|r| r.severity == Severity::Critical));
    }

    #[test]
    fn format_aligns_columns() {
        let rules = vec![
            RuleListing {
                long_id: LongId::new(infraguard_types::Provider::Aws, "s3", "a"),
                severity: Severity::Low,
                summary: "first".to_string(),
            },
            RuleListing {
                long_id: LongId::new(infraguard_types::Provider::Aws, "vpc", "longer"),
                severity: Severity::Critical,
                summary: "second".to_string(),
            },
        ];
        let out = format_rule_list(&rules);
        assert_eq!(
            out,
            "LOW       aws/s3/a        first\nCRITICAL  aws/vpc/longer  second\n"
        );
    }
}
