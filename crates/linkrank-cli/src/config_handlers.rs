//! Handlers for the `config` subcommands.
//!
//! Values are addressed by dotted keys (`pagerank.damping_factor`,
//! `graph.preset`). Edits are checked against [`LinkrankConfig`] before the
//! file is written, so a mistyped key or an out-of-range value never reaches
//! disk.

use crate::cli::ConfigAction;
use crate::config::{self, LinkrankConfig, PROJECT_NAME};
use linkrank_core::{Error, Result};
use std::path::{Path, PathBuf};

// ============================================================================
// Command dispatch
// ============================================================================

/// Runs a `config` subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Set { key, value } => cmd_config_set(config_path, &key, &value),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force),
        ConfigAction::Export { docker_env } => {
            let config = LinkrankConfig::load(config_path)?;
            cmd_config_export(&config, docker_env)
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Prints the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = require_path(config_path)?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `{PROJECT_NAME} config init` to create it)");
    }
    Ok(())
}

/// Prints the effective value of a dotted key.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let config = LinkrankConfig::load(config_path)?;
    println!("{}", lookup(&config, key)?);
    Ok(())
}

/// Sets a dotted key in the config file.
pub fn cmd_config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<()> {
    let path = require_path(config_path)?;
    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `{PROJECT_NAME} config init` first.",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let updated = set_in_document(&content, key, value)
        .map_err(|e| Error::config(format!("{}: {e}", path.display())))?;
    std::fs::write(&path, updated).map_err(|e| Error::io_with_path(e, &path))?;

    log::info!("Set {key} = {value} in {}", path.display());
    println!("Set {key} = {value} in {}", path.display());
    Ok(())
}

/// Writes a config file holding the defaults.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => config::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };
    write_default_config(&path, force)?;
    println!("Config file created at {}", path.display());
    Ok(())
}

/// Prints the configuration as `KEY=VALUE` lines.
pub fn cmd_config_export(config: &LinkrankConfig, docker_env: bool) -> Result<()> {
    for (key, value) in config.to_env_vars()? {
        if docker_env {
            println!("--env {key}={value}");
        } else {
            println!("{key}={value}");
        }
    }
    Ok(())
}

fn require_path(config_path: Option<&str>) -> Result<PathBuf> {
    config::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))
}

fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    let text = LinkrankConfig::default().to_toml_string()?;
    std::fs::write(path, text).map_err(|e| Error::io_with_path(e, path))
}

// ============================================================================
// Dotted-key helpers
// ============================================================================

/// The effective value of `key`, formatted for display.
pub fn lookup(config: &LinkrankConfig, key: &str) -> Result<String> {
    let value = toml::Value::try_from(config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Applies `key = value` to a TOML document and returns the new text.
///
/// The result must still describe a valid [`LinkrankConfig`] in which `key`
/// exists; otherwise the edit is rejected.
pub fn set_in_document(content: &str, key: &str, value: &str) -> Result<String> {
    let mut doc: toml::Value = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
    set_nested_value(&mut doc, key, parse_value(value))?;

    let text = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    let config = LinkrankConfig::from_toml_str(&text)?;
    lookup(&config, key).map_err(|_| Error::config(format!("Unknown configuration key '{key}'")))?;
    Ok(text)
}

/// Follows a dotted key through nested tables.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Sets the value at a dotted key, creating missing tables on the way.
pub fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let Some((last, path)) = parts.split_last() else {
        return Err(Error::config("Empty key path"));
    };
    if parts.iter().any(|p| p.is_empty()) {
        return Err(Error::config(format!("Malformed key '{key}'")));
    }

    let mut current = root;
    for part in path {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config(format!("'{part}' is not inside a table")))?;
        current = table
            .entry(part.to_string())
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }

    current
        .as_table_mut()
        .ok_or_else(|| Error::config(format!("Cannot set '{last}' on a non-table value")))?
        .insert(last.to_string(), value);
    Ok(())
}

/// Interprets a command-line string as a TOML scalar.
///
/// Tried in order: bool, integer, float, then string.
pub fn parse_value(s: &str) -> toml::Value {
    match s {
        "true" => toml::Value::Boolean(true),
        "false" => toml::Value::Boolean(false),
        _ => s
            .parse::<i64>()
            .map(toml::Value::Integer)
            .or_else(|_| s.parse::<f64>().map(toml::Value::Float))
            .unwrap_or_else(|_| toml::Value::String(s.to_string())),
    }
}

/// Formats a TOML value for stdout; strings print without quotes.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
        other => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
