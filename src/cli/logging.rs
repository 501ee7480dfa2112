//! Log filter selection for the binary

/// Pick the `EnvFilter` directive.
///
/// An explicit `--log-level` wins, then `RUST_LOG`, then the configured level.
pub fn filter_directive(configured: &str, from_cli: bool, rust_log: Option<&str>) -> String {
    if from_cli {
        return configured.to_string();
    }
    match rust_log.map(str::trim) {
        Some(env) if !env.is_empty() => env.to_string(),
        _ => configured.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_beats_rust_log() {
        assert_eq!(filter_directive("warn", true, Some("trace")), "warn");
    }

    #[test]
    fn test_rust_log_beats_config_file() {
        assert_eq!(filter_directive("info", false, Some("hni_wizard=debug")), "hni_wizard=debug");
        assert_eq!(filter_directive("info", false, Some("  ")), "info");
        assert_eq!(filter_directive("info", false, None), "info");
    }
}
