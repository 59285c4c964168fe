//! `sacavia env` – show which API the client would talk to.

use sacavia_core::config::{self, EnvironmentConfig};

pub fn run_env(env: &EnvironmentConfig) {
    config::log_api_config(env);
    print!("{}", render(env));
}

fn render(env: &EnvironmentConfig) -> String {
    format!(
        "{:<12} {}\n{:<12} {}\n",
        "ENVIRONMENT",
        env.environment_name(),
        "BASE_URL",
        env.base_api_url()
    )
}
