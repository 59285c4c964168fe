//! `sacavia resolve <input>...` – print the absolute URL for each media reference.

use sacavia_core::config::EnvironmentConfig;
use sacavia_core::media_url::MediaResolver;

/// Placeholder printed when a reference has no displayable media.
const ABSENT: &str = "-";

pub fn run_resolve(env: &EnvironmentConfig, inputs: &[String]) {
    let resolver = MediaResolver::new(env);
    for input in inputs {
        println!("{}", render(&resolver, input));
    }
}

fn render(resolver: &MediaResolver, input: &str) -> String {
    resolver
        .resolve(input)
        .map(String::from)
        .unwrap_or_else(|| ABSENT.to_string())
}
