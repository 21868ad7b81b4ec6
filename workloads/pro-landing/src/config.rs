//! Build-time site configuration.

use pro_core::{SiteConfig, ENV_SUPABASE_ANON_KEY, ENV_SUPABASE_URL};
use pro_observability::LogLevel;

/// Site configuration for this build.
///
/// The backend URL and key are baked in at compile time; browsers have no
/// process environment to read them from.
pub fn site_config() -> SiteConfig {
    SiteConfig::default().with_env_overrides(build_env)
}

fn build_env(name: &str) -> Option<String> {
    let value = match name {
        ENV_SUPABASE_URL => option_env!("PRO_SUPABASE_URL"),
        ENV_SUPABASE_ANON_KEY => option_env!("PRO_SUPABASE_ANON_KEY"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Console verbosity: chatty in debug builds.
pub fn log_level() -> LogLevel {
    if cfg!(debug_assertions) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}
