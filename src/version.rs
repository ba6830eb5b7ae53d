use std::fmt::Display;


pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const COMMIT: Option<&str> = option_env!("CI_COMMIT_SHA");

/// Build information printed by the `version` command.
pub struct VersionInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub commit: &'static str,
}

impl VersionInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            commit: short_commit(COMMIT),
        }
    }
}

impl Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:\n    Version: v{}\n    Commit: {}",
            self.name, self.version, self.commit
        )
    }
}

fn short_commit(commit: Option<&'static str>) -> &'static str {
    match commit {
        Some(commit) if commit.len() > 7 => &commit[..7],
        Some(commit) => commit,
        None => "unknown",
    }
}
