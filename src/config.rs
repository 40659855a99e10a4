//! Configuration from the environment.
//!
//! Both provider keys are required and checked at startup; the process
//! refuses to start without them. `ENV_FILE` can point at a dotenv file,
//! otherwise `.env` in the working directory is tried. Values already
//! present in the environment are never overridden.

use crate::error::Result;
use crate::RouterError;
use std::env;

const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Resolved runtime settings.
#[derive(Clone)]
pub struct Settings {
    /// Key for the text-generation service (`OPENAI_API_KEY`).
    pub openai_api_key: String,
    /// Key for the weather service (`OPENWEATHER_API_KEY`).
    pub openweather_api_key: String,
    /// Model name (`OPENAI_MODEL`, default `gpt-4o-mini`).
    pub model: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("openai_api_key", &"***")
            .field("openweather_api_key", &"***")
            .field("model", &self.model)
            .finish()
    }
}

fn load_env_files() {
    if let Ok(env_file) = env::var("ENV_FILE") {
        let _ = dotenv::from_path(&env_file);
        return;
    }
    let _ = dotenv::dotenv();
}

/// Read a variable, treating unset and blank the same way.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn required_var(name: &str) -> Result<String> {
    non_empty_var(name).ok_or_else(|| {
        RouterError::Config(format!(
            "{name} not found. Set it in ENV_FILE or environment."
        ))
    })
}

impl Settings {
    /// Load settings, failing fast when a required key is absent.
    pub fn from_env() -> Result<Self> {
        load_env_files();
        Ok(Self {
            openai_api_key: required_var("OPENAI_API_KEY")?,
            openweather_api_key: required_var("OPENWEATHER_API_KEY")?,
            model: non_empty_var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}
