//! Integration tests for siege-bot crate.
//!
//! These tests verify startup wiring: configuration into command state,
//! including the missing API key policy.

use siege_bot::{build_data, BotError};
use siege_common::test_utils::{create_temp_dir, discord_fixtures, init_test_logging};
use siege_config::Config;
use std::fs;
use std::sync::Arc;

fn base_config() -> Config {
    let mut config = Config::default();
    config.discord.token = "test_token".to_string();
    config
}

#[test]
fn test_missing_key_without_demo_refuses_to_start() {
    init_test_logging();

    let result = build_data(Arc::new(base_config()));
    assert!(matches!(result, Err(BotError::Config(ref e)) if e.is_config()));
}

#[test]
fn test_demo_mode_without_key_starts() {
    let mut config = base_config();
    config.tracker.demo_mode = true;

    let data = build_data(Arc::new(config)).unwrap();
    assert!(data.resolver.demo_mode());
    assert_eq!(data.challenges.name(), "none");
}

#[test]
fn test_linked_accounts_loaded_from_config() {
    let dir = create_temp_dir();
    let path = dir.path().join("users.json");
    let user = discord_fixtures::test_user_id();
    fs::write(&path, format!(r#"{{ "{user}": ["Linked.Handle"] }}"#)).unwrap();

    let mut config = base_config();
    config.tracker.api_key = Some("key".to_string());
    config.accounts.path = Some(path);

    let data = build_data(Arc::new(config)).unwrap();
    assert_eq!(data.accounts.handle_for(user), Some("Linked.Handle"));
    assert!(!data.resolver.demo_mode());
}

#[tokio::test]
async fn test_demo_data_flows_through_state() {
    let mut config = base_config();
    config.tracker.demo_mode = true;

    let data = build_data(Arc::new(config)).unwrap();
    let record = data
        .resolver
        .fetch("Anyone", siege_common::Platform::Psn, siege_common::Playlist::All)
        .await
        .unwrap();
    assert_eq!(record.kills, Some(1833));
    assert!(data.operators.image_for(record.top_defender.as_ref()).is_some());
}
