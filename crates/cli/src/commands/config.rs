use std::env;
use std::fs;
use std::path::Path;

use outfitter_core::config::{resolve_config_path, AppConfig, LoadOptions};
use toml::Value;

struct FieldSources<'a> {
    config_file_doc: Option<&'a Value>,
    config_file_path: Option<&'a Path>,
}

pub fn run(options: LoadOptions) -> String {
    let config_file_path = resolve_config_path(options.config_path.as_deref());
    let overrides = options.overrides.clone();

    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let sources = FieldSources {
        config_file_doc: config_file_doc.as_ref(),
        config_file_path: config_file_path.as_deref(),
    };

    let mut lines =
        vec!["effective config (source precedence: flag > env > file > default):".to_string()];

    lines.push(render_line(
        "session.default_city",
        &config.session.default_city,
        sources.field("session.default_city", &["OUTFITTER_SESSION_DEFAULT_CITY"], false),
    ));
    lines.push(render_line(
        "session.default_condition",
        &config.session.default_condition,
        sources.field("session.default_condition", &["OUTFITTER_SESSION_DEFAULT_CONDITION"], false),
    ));
    lines.push(render_line(
        "session.loading_delay_ms",
        &config.session.loading_delay_ms.to_string(),
        sources.field(
            "session.loading_delay_ms",
            &["OUTFITTER_SESSION_LOADING_DELAY_MS"],
            overrides.loading_delay_ms.is_some(),
        ),
    ));
    lines.push(render_line(
        "session.color",
        &config.session.color.to_string(),
        sources.field("session.color", &["OUTFITTER_SESSION_COLOR"], overrides.color.is_some()),
    ));
    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        sources.field(
            "logging.level",
            &["OUTFITTER_LOGGING_LEVEL", "OUTFITTER_LOG_LEVEL"],
            overrides.log_level.is_some(),
        ),
    ));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format),
        sources.field("logging.format", &["OUTFITTER_LOGGING_FORMAT", "OUTFITTER_LOG_FORMAT"], false),
    ));

    lines.join("\n")
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

impl FieldSources<'_> {
    fn field(&self, key_path: &str, env_keys: &[&str], overridden: bool) -> String {
        if overridden {
            return "flag".to_string();
        }

        if let Some(env_key) = env_keys.iter().find(|key| read_env(key).is_some()) {
            return format!("env ({env_key})");
        }

        if let Some(doc) = self.config_file_doc {
            if contains_path(doc, key_path) {
                let file_path = self
                    .config_file_path
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "config file".to_string());
                return format!("file ({file_path})");
            }
        }

        "default".to_string()
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
