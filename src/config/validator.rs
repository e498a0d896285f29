//! Configuration validation

use super::*;
use crate::generator::pacer::interval_for_rate;
use anyhow::Result;

/// Largest session population accepted
///
/// The address space holds about 3.7e9 identities and every session is
/// kept in memory, so populations are capped well below that.
pub const MAX_SESSIONS: usize = 1_000_000;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_generator(&config.generator)?;
    validate_runtime(&config.runtime)?;
    validate_fields(&config.fields)?;

    Ok(())
}

/// Validate generator configuration
pub fn validate_generator(generator: &GeneratorConfig) -> Result<()> {
    if generator.sessions == 0 {
        anyhow::bail!("sessions must be at least 1, got 0");
    }

    if generator.sessions > MAX_SESSIONS {
        anyhow::bail!(
            "sessions must be at most {}, got {}",
            MAX_SESSIONS,
            generator.sessions
        );
    }

    if generator.session_length == 0 {
        anyhow::bail!("session_length must be at least 1, got 0");
    }

    if !generator.rate.is_finite() || generator.rate <= 0.0 {
        anyhow::bail!("rate must be a positive number, got {}", generator.rate);
    }

    if interval_for_rate(generator.rate).is_none() {
        anyhow::bail!(
            "rate {} is too low: the interval between lines does not fit in a duration",
            generator.rate
        );
    }

    Ok(())
}

/// Validate runtime configuration
pub fn validate_runtime(runtime: &RuntimeConfig) -> Result<()> {
    match runtime.completion {
        CompletionMode::Lines { count: 0 } => {
            anyhow::bail!("completion line count must be at least 1");
        }
        CompletionMode::Duration { seconds: 0 } => {
            anyhow::bail!("completion duration must be at least 1 second");
        }
        _ => {}
    }

    if runtime.append && runtime.output.is_none() {
        anyhow::bail!("append requires an output file");
    }

    Ok(())
}

/// Validate field table overrides
pub fn validate_fields(fields: &FieldsConfig) -> Result<()> {
    if let Some(ref entries) = fields.user_agents {
        validate_string_table("user_agents", entries)?;
    }
    if let Some(ref entries) = fields.paths {
        validate_string_table("paths", entries)?;
    }
    if let Some(ref entries) = fields.files {
        validate_string_table("files", entries)?;
    }
    if let Some(ref entries) = fields.extensions {
        validate_string_table("extensions", entries)?;
    }
    if let Some(ref entries) = fields.status_codes {
        validate_total_weight("status_codes", entries)?;
        for (i, entry) in entries.iter().enumerate() {
            if !(100..=599).contains(&entry.value) {
                anyhow::bail!(
                    "status_codes entry {} has status {} outside 100-599",
                    i,
                    entry.value
                );
            }
        }
    }

    Ok(())
}

fn validate_string_table(name: &str, entries: &[FieldEntry<String>]) -> Result<()> {
    validate_total_weight(name, entries)?;

    for (i, entry) in entries.iter().enumerate() {
        if entry.value.is_empty() {
            anyhow::bail!("{} entry {} has an empty value", name, i);
        }
        if entry.value.contains('\n') {
            anyhow::bail!("{} entry {} contains a newline", name, i);
        }
    }

    Ok(())
}

fn validate_total_weight<T>(name: &str, entries: &[FieldEntry<T>]) -> Result<()> {
    if entries.is_empty() {
        anyhow::bail!("{} table has no entries", name);
    }

    let total: u64 = entries.iter().map(|e| e.weight as u64).sum();
    if total == 0 {
        anyhow::bail!("{} weights must not all be zero", name);
    }
    if total > u32::MAX as u64 {
        anyhow::bail!("{} total weight {} exceeds {}", name, total, u32::MAX);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn entry(value: &str, weight: u32) -> FieldEntry<String> {
        FieldEntry { value: value.to_string(), weight }
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_sessions() {
        let mut generator = GeneratorConfig::default();
        generator.sessions = 0;
        assert!(validate_generator(&generator).is_err());

        generator.sessions = 1;
        assert!(validate_generator(&generator).is_ok());
    }

    #[test]
    fn test_validate_sessions_upper_bound() {
        let mut generator = GeneratorConfig::default();
        generator.sessions = MAX_SESSIONS;
        assert!(validate_generator(&generator).is_ok());

        generator.sessions = MAX_SESSIONS + 1;
        let err = validate_generator(&generator).unwrap_err();
        assert!(err.to_string().contains("at most"));

        generator.sessions = usize::MAX;
        assert!(validate_generator(&generator).is_err());
    }

    #[test]
    fn test_validate_session_length() {
        let mut generator = GeneratorConfig::default();
        generator.session_length = 0;
        assert!(validate_generator(&generator).is_err());
    }

    #[test]
    fn test_validate_rate() {
        let mut generator = GeneratorConfig::default();
        for rate in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            generator.rate = rate;
            assert!(validate_generator(&generator).is_err());
        }

        generator.rate = 0.5;
        assert!(validate_generator(&generator).is_ok());
    }

    #[test]
    fn test_validate_rate_too_low_for_pacer() {
        let mut config = Config::default();
        config.generator.rate = 1e-300;

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("too low"));

        // The smallest rates that pass must still build a pacer
        config.generator.rate = 1e-9;
        assert!(validate_config(&config).is_ok());
        let pacer = crate::generator::RatePacer::new(config.generator.rate);
        assert!(pacer.interval() > Duration::from_secs(1_000_000));
    }

    #[test]
    fn test_validate_completion() {
        let mut runtime = RuntimeConfig::default();
        runtime.completion = CompletionMode::Lines { count: 0 };
        assert!(validate_runtime(&runtime).is_err());

        runtime.completion = CompletionMode::Duration { seconds: 0 };
        assert!(validate_runtime(&runtime).is_err());

        runtime.completion = CompletionMode::Lines { count: 1 };
        assert!(validate_runtime(&runtime).is_ok());
    }

    #[test]
    fn test_validate_append() {
        let mut runtime = RuntimeConfig::default();
        runtime.append = true;
        assert!(validate_runtime(&runtime).is_err());

        runtime.output = Some(PathBuf::from("access.log"));
        assert!(validate_runtime(&runtime).is_ok());
    }

    #[test]
    fn test_validate_zero_weight_table() {
        let fields = FieldsConfig {
            paths: Some(vec![entry("/a/", 0), entry("/b/", 0)]),
            ..Default::default()
        };
        let err = validate_fields(&fields).unwrap_err();
        assert!(err.to_string().contains("paths"));
    }

    #[test]
    fn test_validate_partial_zero_weight_allowed() {
        let fields = FieldsConfig {
            files: Some(vec![entry("index", 0), entry("item", 3)]),
            ..Default::default()
        };
        assert!(validate_fields(&fields).is_ok());
    }

    #[test]
    fn test_validate_empty_table() {
        let fields = FieldsConfig {
            extensions: Some(vec![]),
            ..Default::default()
        };
        assert!(validate_fields(&fields).is_err());
    }

    #[test]
    fn test_validate_empty_value() {
        let fields = FieldsConfig {
            user_agents: Some(vec![entry("", 1)]),
            ..Default::default()
        };
        assert!(validate_fields(&fields).is_err());
    }

    #[test]
    fn test_validate_status_range() {
        let fields = FieldsConfig {
            status_codes: Some(vec![FieldEntry { value: 99, weight: 1 }]),
            ..Default::default()
        };
        assert!(validate_fields(&fields).is_err());

        let fields = FieldsConfig {
            status_codes: Some(vec![FieldEntry { value: 418, weight: 1 }]),
            ..Default::default()
        };
        assert!(validate_fields(&fields).is_ok());
    }

    #[test]
    fn test_validate_weight_overflow() {
        let fields = FieldsConfig {
            files: Some(vec![entry("a", u32::MAX), entry("b", 1)]),
            ..Default::default()
        };
        assert!(validate_fields(&fields).is_err());
    }
}
