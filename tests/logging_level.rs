// tests/logging_level.rs

use bootseq::cli::LogLevel;
use bootseq::logging::resolve_level;
use tracing::Level;

#[test]
fn cli_flag_wins_over_env() {
    assert_eq!(resolve_level(Some(LogLevel::Warn), Some("debug")), Level::WARN);
}

#[test]
fn env_value_is_used_without_flag() {
    assert_eq!(resolve_level(None, Some("debug")), Level::DEBUG);
    assert_eq!(resolve_level(None, Some(" Warning ")), Level::WARN);
}

#[test]
fn unparseable_or_missing_env_falls_back_to_info() {
    assert_eq!(resolve_level(None, Some("loud")), Level::INFO);
    assert_eq!(resolve_level(None, None), Level::INFO);
}
