use super::*;
use crate::test_utils::arb_messy_string;
use proptest::prelude::*;

/// Generates an arbitrary Config
fn arb_config() -> impl Strategy<Value = Config> {
    (
        arb_messy_string(),
        arb_messy_string(),
        prop::option::of(arb_messy_string()),
    )
        .prop_map(|(database_url, bind_address, log_dir)| Config {
            database_url,
            bind_address,
            log_dir: log_dir.map(PathBuf::from),
        })
}

/// Generates an arbitrary ConfigUpdate
fn arb_config_update() -> impl Strategy<Value = ConfigUpdate> {
    (
        prop::option::of(arb_messy_string()),
        prop::option::of(arb_messy_string()),
        prop::option::of(arb_messy_string()),
        prop::option::of(arb_messy_string()),
    )
        .prop_map(|(database_url, bind_address, log_dir, server_url)| ConfigUpdate {
            database_url,
            bind_address,
            log_dir: log_dir.map(PathBuf::from),
            server_url,
        })
}

fn snapshot(config: &Config) -> (String, String, Option<PathBuf>) {
    (config.database_url.clone(), config.bind_address.clone(), config.log_dir.clone())
}

proptest! {
    /// Applying an empty update changes nothing
    #[test]
    fn prop_empty_update_is_identity(config in arb_config()) {
        let before = snapshot(&config);
        let after = config.apply_update(ConfigUpdate::default());
        prop_assert_eq!(snapshot(&after), before);
    }

    /// Every field set in the update wins; every unset field keeps its value
    #[test]
    fn prop_update_fields_take_precedence(config in arb_config(), update in arb_config_update()) {
        let before = config.clone();
        let expected_url = update.database_url.clone().unwrap_or(before.database_url);
        let expected_bind = update.bind_address.clone().unwrap_or(before.bind_address);
        let expected_log = update.log_dir.clone().or(before.log_dir);

        let after = config.apply_update(update);

        prop_assert_eq!(after.database_url, expected_url);
        prop_assert_eq!(after.bind_address, expected_bind);
        prop_assert_eq!(after.log_dir, expected_log);
    }

    /// Applying the same update twice is the same as applying it once
    #[test]
    fn prop_update_is_idempotent(config in arb_config(), update in arb_config_update()) {
        let once = config.clone().apply_update(update.clone());
        let twice = config.apply_update(update.clone()).apply_update(update);
        prop_assert_eq!(snapshot(&once), snapshot(&twice));
    }
}
