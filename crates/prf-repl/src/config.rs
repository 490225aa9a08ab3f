//! REPL configuration.

use anyhow::{bail, Context, Result};

/// Step limit applied when none is configured.
pub const DEFAULT_GAS_LIMIT: u64 = 50_000_000;

/// REPL configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Evaluation step limit; `None` means unlimited
    pub gas_limit: Option<u64>,
    /// Prompt printed before each line
    pub prompt: String,
    /// Colored status markers
    pub color: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            gas_limit: Some(DEFAULT_GAS_LIMIT),
            prompt: "prf> ".to_string(),
            color: true,
        }
    }
}

impl ReplConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from `PRF_*` variables supplied by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(val) = lookup("PRF_GAS_LIMIT") {
            cfg.gas_limit = parse_gas_limit(&val).context("invalid PRF_GAS_LIMIT")?;
        }
        if let Some(prompt) = lookup("PRF_PROMPT") {
            cfg.prompt = prompt;
        }
        if let Some(val) = lookup("PRF_COLOR") {
            cfg.color = parse_flag(&val).context("invalid PRF_COLOR")?;
        }

        Ok(cfg)
    }
}

/// Parse a step limit: a positive number, or `off` for no limit.
pub fn parse_gas_limit(val: &str) -> Result<Option<u64>> {
    match val.trim() {
        "off" | "none" | "unlimited" => Ok(None),
        s => {
            let n: u64 = s
                .parse()
                .with_context(|| format!("expected a step count or `off`, got {s:?}"))?;
            if n == 0 {
                bail!("step limit must be positive");
            }
            Ok(Some(n))
        }
    }
}

fn parse_flag(val: &str) -> Result<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let cfg = ReplConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, ReplConfig::default());
        assert_eq!(cfg.gas_limit, Some(DEFAULT_GAS_LIMIT));
    }

    #[test]
    fn variables_override_defaults() {
        let cfg = ReplConfig::from_lookup(lookup(&[
            ("PRF_GAS_LIMIT", "1000"),
            ("PRF_PROMPT", "> "),
            ("PRF_COLOR", "no"),
        ]))
        .unwrap();
        assert_eq!(cfg.gas_limit, Some(1000));
        assert_eq!(cfg.prompt, "> ");
        assert!(!cfg.color);
    }

    #[test]
    fn gas_limit_can_be_disabled() {
        let cfg = ReplConfig::from_lookup(lookup(&[("PRF_GAS_LIMIT", "off")])).unwrap();
        assert_eq!(cfg.gas_limit, None);
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(ReplConfig::from_lookup(lookup(&[("PRF_GAS_LIMIT", "lots")])).is_err());
        assert!(ReplConfig::from_lookup(lookup(&[("PRF_GAS_LIMIT", "0")])).is_err());
        assert!(ReplConfig::from_lookup(lookup(&[("PRF_COLOR", "maybe")])).is_err());
    }
}
