use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical path of the configuration file a state fragment came from.
///
/// Paths are compared and fingerprinted as strings, so they are normalized on construction:
/// forward slashes only, no leading `./`, and `.` instead of an empty path.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct SourcePath(String);

impl Default for SourcePath {
    fn default() -> Self {
        SourcePath::new(".")
    }
}

impl SourcePath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn join(&self, segment: &str) -> SourcePath {
        let base = Utf8Path::new(self.as_str());
        SourcePath::new(base.join(segment).as_str())
    }
}

impl std::fmt::Display for SourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Utf8Path> for SourcePath {
    fn from(value: &Utf8Path) -> Self {
        SourcePath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for SourcePath {
    fn from(value: Utf8PathBuf) -> Self {
        SourcePath::new(value.as_str())
    }
}

impl From<&str> for SourcePath {
    fn from(value: &str) -> Self {
        SourcePath::new(value)
    }
}

impl From<String> for SourcePath {
    fn from(value: String) -> Self {
        SourcePath::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_separators_and_leading_dot() {
        assert_eq!(SourcePath::new(".\\modules\\s3\\main.tf").as_str(), "modules/s3/main.tf");
        assert_eq!(SourcePath::new("././main.tf").as_str(), "main.tf");
        assert_eq!(SourcePath::new("").as_str(), ".");
    }

    #[test]
    fn join_appends_segment() {
        let base = SourcePath::new("modules/s3");
        assert_eq!(base.join("main.tf").as_str(), "modules/s3/main.tf");
        assert_eq!(SourcePath::default().join("main.tf").as_str(), "main.tf");
    }

    #[test]
    fn converts_from_camino_paths() {
        let p = Utf8PathBuf::from("env/prod/vpc.tf");
        assert_eq!(SourcePath::from(p.as_path()), SourcePath::from(p.clone()));
        assert_eq!(SourcePath::from(p).to_string(), "env/prod/vpc.tf");
    }
}
