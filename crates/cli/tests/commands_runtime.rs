use std::env;
use std::sync::{Mutex, OnceLock};

use outfitter_cli::commands::recommend::RecommendArgs;
use outfitter_cli::commands::{catalog, config, doctor, recommend};
use outfitter_core::config::{ConfigOverrides, LoadOptions};
use outfitter_core::TemperatureBand;
use serde_json::Value;

fn args(city: &str, temperature: f64, condition: &str) -> RecommendArgs {
    RecommendArgs {
        city: city.to_string(),
        temperature,
        condition: condition.to_string(),
        outfit: 1,
        accessory: 1,
        shoe: 1,
        json: true,
    }
}

#[test]
fn recommend_returns_json_recommendation() {
    with_env(&[], || {
        let mut args = args("Oslo", -3.0, "Light snow");
        args.outfit = 2;
        args.accessory = 3;
        args.shoe = 4;

        let result = recommend::run(LoadOptions::default(), args);
        assert_eq!(result.exit_code, 0, "expected successful recommendation");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "recommend");
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["message"], "Arctic Explorer for Oslo");

        let data = &payload["data"];
        assert_eq!(data["band"], "cold");
        assert_eq!(data["advice"], "snow");
        assert_eq!(data["observation"]["city"], "Oslo");
        assert_eq!(data["recommendation"]["title"], "Arctic Explorer");
        assert_eq!(data["recommendation"]["accessory"], "Warm Beanie");
        assert_eq!(data["recommendation"]["shoe"], "Snow Boots");
    });
}

#[test]
fn recommend_fills_blank_fields_from_config_defaults() {
    with_env(
        &[
            ("OUTFITTER_SESSION_DEFAULT_CITY", "Lisbon"),
            ("OUTFITTER_SESSION_DEFAULT_CONDITION", "Windy"),
        ],
        || {
            let result = recommend::run(LoadOptions::default(), args("  ", 25.0, ""));
            assert_eq!(result.exit_code, 0);

            let payload = parse_payload(&result.output);
            let data = &payload["data"];
            assert_eq!(data["observation"]["city"], "Lisbon");
            assert_eq!(data["observation"]["condition"], "Windy");
            assert_eq!(data["band"], "moderate");
            assert_eq!(data["advice"], "wind");
            assert_eq!(data["recommendation"]["title"], "Smart Casual");
        },
    );
}

#[test]
fn recommend_rejects_out_of_range_pick() {
    with_env(&[], || {
        let mut args = args("Dubai", 41.0, "Sunny");
        args.accessory = 6;

        let result = recommend::run(LoadOptions::default(), args);
        assert_eq!(result.exit_code, 2, "expected selection failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "selection_out_of_range");
        assert_eq!(payload["message"], "accessory choice 6 is out of range (expected 1..=5)");
    });
}

#[test]
fn recommend_rejects_out_of_range_temperature() {
    with_env(&[], || {
        let result = recommend::run(LoadOptions::default(), args("Vostok", -60.0, "Clear"));
        assert_eq!(result.exit_code, 2, "expected input validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["error_class"], "input_validation");
        assert_eq!(payload["message"], "Temperature must be between -50.0 and 50.0°C.");
    });
}

#[test]
fn recommend_reports_config_failure() {
    with_env(&[("OUTFITTER_SESSION_LOADING_DELAY_MS", "9000")], || {
        let result = recommend::run(LoadOptions::default(), args("Oslo", 5.0, "Rain"));
        assert_eq!(result.exit_code, 2, "expected config validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "recommend");
        assert_eq!(payload["error_class"], "config_validation");
    });
}

#[test]
fn recommend_text_output_is_plain_when_color_disabled() {
    with_env(&[("OUTFITTER_SESSION_COLOR", "false")], || {
        let mut args = args("Vienna", 18.0, "Drizzle");
        args.json = false;

        let result = recommend::run(LoadOptions::default(), args);
        assert_eq!(result.exit_code, 0);
        assert!(!result.output.contains('\x1b'), "no ANSI escapes expected");
        assert!(result.output.contains("Weather Summary for Vienna"));
        assert!(result.output.contains("☔ Rain detected! Recommendations:"));
        assert!(result.output.contains("Style: Smart Casual"));
    });
}

#[test]
fn catalog_lists_requested_band() {
    let result = catalog::run(Some(TemperatureBand::Hot), true);
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "catalog");
    let data = payload["data"].as_array().expect("catalog array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["band"], "hot");
    assert_eq!(data[0]["shoes"][1], "Flip-Flops");
}

#[test]
fn doctor_passes_with_default_config() {
    with_env(&[], || {
        let output = doctor::run(LoadOptions::default(), true);
        let payload = parse_payload(&output);

        assert_eq!(payload["overall_status"], "pass");
        let names: Vec<&str> = payload["checks"]
            .as_array()
            .expect("checks array")
            .iter()
            .filter_map(|check| check["name"].as_str())
            .collect();
        assert_eq!(names, ["config_validation", "catalog_integrity", "band_coverage"]);
    });
}

#[test]
fn doctor_flags_invalid_log_level() {
    with_env(&[("OUTFITTER_LOG_LEVEL", "chatty")], || {
        let output = doctor::run(LoadOptions::default(), true);
        let payload = parse_payload(&output);

        assert_eq!(payload["overall_status"], "fail");
        assert_eq!(payload["checks"][0]["name"], "config_validation");
        assert_eq!(payload["checks"][0]["status"], "fail");
    });
}

#[test]
fn config_attributes_env_and_default_sources() {
    with_env(&[("OUTFITTER_SESSION_DEFAULT_CITY", "Bergen")], || {
        let output = config::run(LoadOptions::default());

        assert!(output.contains(
            "- session.default_city = Bergen (source: env (OUTFITTER_SESSION_DEFAULT_CITY))"
        ));
        assert!(output.contains("- session.default_condition = Clear (source: default)"));
        assert!(output.contains("- session.loading_delay_ms = 120 (source: default)"));
    });
}

#[test]
fn config_attributes_flag_overrides() {
    with_env(&[("OUTFITTER_SESSION_LOADING_DELAY_MS", "300")], || {
        let options = LoadOptions {
            overrides: ConfigOverrides {
                color: Some(false),
                loading_delay_ms: Some(0),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        };

        let output = config::run(options);

        assert!(output.contains("- session.loading_delay_ms = 0 (source: flag)"));
        assert!(output.contains("- session.color = false (source: flag)"));
    });
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "OUTFITTER_SESSION_DEFAULT_CITY",
        "OUTFITTER_SESSION_DEFAULT_CONDITION",
        "OUTFITTER_SESSION_LOADING_DELAY_MS",
        "OUTFITTER_SESSION_COLOR",
        "OUTFITTER_LOGGING_LEVEL",
        "OUTFITTER_LOGGING_FORMAT",
        "OUTFITTER_LOG_LEVEL",
        "OUTFITTER_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
