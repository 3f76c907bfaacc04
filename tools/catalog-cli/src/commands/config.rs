//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    // API section
    ctx.output.info("");
    ctx.output.info("[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);
    match ctx.config.api.timeout_secs {
        Some(secs) => ctx.output.kv("timeout_secs", &secs.to_string()),
        None => ctx.output.kv("timeout_secs", "(transport default)"),
    }
    ctx.output.kv("fetch_limit", &ctx.config.api.fetch_limit.to_string());

    // Catalog section
    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output
        .kv("items_per_page", &ctx.config.catalog.items_per_page.to_string());
    ctx.output.kv(
        "search_debounce_ms",
        &ctx.config.catalog.search_debounce_ms.to_string(),
    );

    // Logging section
    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", ctx.config.logging.level.as_directive());
    ctx.output.kv("format", &ctx.config.logging.format.to_string());
    if let Some(ref directives) = ctx.config.logging.directives {
        ctx.output.kv("directives", directives);
    }

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = find_config_file(ctx)?;

    let mut config = CliConfig::load(&config_path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.resolve_path(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = ctx.config.check();

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<serde_json::Value> {
    let parts: Vec<&str> = key.split('.').collect();

    let value = match parts.as_slice() {
        ["api", "base_url"] => serde_json::json!(config.api.base_url),
        ["api", "timeout_secs"] => serde_json::json!(config.api.timeout_secs),
        ["api", "fetch_limit"] => serde_json::json!(config.api.fetch_limit),
        ["catalog", "items_per_page"] => serde_json::json!(config.catalog.items_per_page),
        ["catalog", "search_debounce_ms"] => serde_json::json!(config.catalog.search_debounce_ms),
        ["logging", "level"] => serde_json::json!(config.logging.level),
        ["logging", "format"] => serde_json::json!(config.logging.format),
        ["logging", "directives"] => serde_json::json!(config.logging.directives),
        _ => bail!("Unknown config key: {}", key),
    };

    Ok(value)
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["api", "base_url"] => config.api.base_url = value.to_string(),
        ["api", "timeout_secs"] => {
            config.api.timeout_secs = match value {
                "" | "none" | "default" => None,
                secs => Some(secs.parse()?),
            }
        }
        ["api", "fetch_limit"] => config.api.fetch_limit = value.parse()?,
        ["catalog", "items_per_page"] => config.catalog.items_per_page = value.parse()?,
        ["catalog", "search_debounce_ms"] => config.catalog.search_debounce_ms = value.parse()?,
        ["logging", "level"] => config.logging.level = value.parse()?,
        ["logging", "format"] => config.logging.format = value.parse()?,
        ["logging", "directives"] => config.logging.directives = Some(value.to_string()),
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

fn find_config_file(ctx: &Context) -> Result<String> {
    if let Some(path) = &ctx.config_path {
        return Ok(path.to_string_lossy().to_string());
    }
    bail!("No config file found. Run `catalog config init` to create one.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_observability::LogLevel;

    #[test]
    fn test_get_known_keys() {
        let config = CliConfig::default();
        assert_eq!(
            get_config_value(&config, "api.base_url").unwrap(),
            "https://dummyjson.com"
        );
        assert_eq!(get_config_value(&config, "api.timeout_secs").unwrap(), serde_json::Value::Null);
        assert_eq!(get_config_value(&config, "catalog.items_per_page").unwrap(), 12);
        assert_eq!(get_config_value(&config, "logging.level").unwrap(), "warn");
        assert!(get_config_value(&config, "api.token").is_err());
    }

    #[test]
    fn test_set_values() {
        let mut config = CliConfig::default();
        set_config_value(&mut config, "api.timeout_secs", "10").unwrap();
        set_config_value(&mut config, "catalog.items_per_page", "24").unwrap();
        set_config_value(&mut config, "logging.level", "debug").unwrap();

        assert_eq!(config.api.timeout_secs, Some(10));
        assert_eq!(config.catalog.items_per_page, 24);
        assert_eq!(config.logging.level, LogLevel::Debug);

        set_config_value(&mut config, "api.timeout_secs", "none").unwrap();
        assert_eq!(config.api.timeout_secs, None);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = CliConfig::default();
        assert!(set_config_value(&mut config, "api.fetch_limit", "lots").is_err());
        assert!(set_config_value(&mut config, "logging.format", "xml").is_err());
        assert!(set_config_value(&mut config, "nope", "1").is_err());
    }
}
