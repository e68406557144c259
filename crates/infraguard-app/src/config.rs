use anyhow::Context;
use camino::Utf8Path;

/// Read `infraguard.toml`. A missing file yields an empty string, so defaults apply.
pub fn read_config_text(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err).with_context(|| format!("read config {path}")),
    }
}
