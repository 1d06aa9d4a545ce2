//! Application settings, read from the same figment Rocket itself is configured from.
//!
//! Sources, lowest to highest priority:
//! 1. `Rocket.toml` (profile-aware, `[default]`, `[debug]`, `[release]`)
//! 2. `ROCKET_*` environment variables
//! 3. `TRIVIA_*` environment variables, `__` separating nested keys
//!    (`TRIVIA_DATABASES__TRIVIA__URL` -> `databases.trivia.url`)

use {
    serde::{Deserialize, Serialize},
    figment::{
        Figment,
        providers::Env
    }
};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TriviaConfig {
    /// Value of `Access-Control-Allow-Origin`.
    #[serde(default = "TriviaConfig::default_allow_origin")]
    pub cors_allow_origin: String,

    /// Apply pending migrations during ignition.
    #[serde(default = "default_true")]
    pub run_migrations: bool
}

const fn default_true() -> bool {
    true
}

impl TriviaConfig {
    pub fn default_allow_origin() -> String {
        "*".to_string()
    }
}

impl Default for TriviaConfig {
    fn default() -> Self {
        TriviaConfig {
            cors_allow_origin: TriviaConfig::default_allow_origin(),
            run_migrations: default_true()
        }
    }
}

pub fn figment() -> Figment {
    rocket::Config::figment()
        .merge(Env::prefixed("TRIVIA_").split("__").global())
}
