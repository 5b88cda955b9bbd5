//! Version information stamped at build time.
//!
//! Labels are rendered as `{env}:{info}`:
//! - Prod: `stable:{version}`
//! - Nightly: `nightly:{date}`
//! - Test and local: `main:{commit}`
//!
//! The UI picks its environment from cargo features, the service from `ENV` at runtime.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Local,
    Test,
    Nightly,
    Prod,
}

impl RuntimeEnv {
    /// Environment selected by the `env_*` cargo features of this build.
    pub fn from_features() -> Self {
        if cfg!(feature = "env_nightly") {
            Self::Nightly
        } else if cfg!(feature = "env_test") {
            Self::Test
        } else {
            Self::Prod
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Test => "test",
            Self::Nightly => "nightly",
            Self::Prod => "prod",
        }
    }
}

impl Display for RuntimeEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build date in RFC 3339.
pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Short git commit hash, or `unknown` outside a checkout.
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

fn date_part(date: &str) -> &str {
    // BUILD_DATE is ASCII, e.g. "2026-01-03T12:00:00+00:00"
    if date.len() >= 10 && date.is_ascii() {
        &date[..10]
    } else {
        date
    }
}

pub fn format_version_for_runtime_env(env: RuntimeEnv) -> String {
    match env {
        RuntimeEnv::Nightly => format!("nightly:{}", date_part(build_date())),
        RuntimeEnv::Test | RuntimeEnv::Local => format!("main:{}", build_commit()),
        RuntimeEnv::Prod => format!("stable:{}", build_version()),
    }
}

/// Version label of the current build, as shown in the UI footer.
pub fn format_env_version() -> String {
    format_version_for_runtime_env(RuntimeEnv::from_features())
}
