//! End-to-end resolution scenarios over a realistic config directory.
//!
//! Two directories are used throughout: a main one holding assorted good and
//! broken presets, and a "user" one holding a site-wide `default` preset plus
//! sibling files that must be ignored.

use cluster_config::{
    ClusterConfig, ConfigOverride, ConfigPathRegistry, ConfigResolver, DEFAULT_CONFIG,
    DEFAULT_CONFIG_PATH, Error,
};
use cluster_test_utils::TestConfigDir;
use pretty_assertions::assert_eq;
use std::sync::Arc;

struct Suite {
    configs: TestConfigDir,
    user_configs: TestConfigDir,
    registry: Arc<ConfigPathRegistry>,
    resolver: ConfigResolver,
}

impl Suite {
    fn new() -> Self {
        let configs = TestConfigDir::new()
            .with_preset("tiny", Some(1), None)
            .with_preset("small", Some(1), Some(3))
            .with_preset("large", None, Some(10))
            .with_preset("brokenmaster", Some(2), None)
            .with_preset("brokenworker", None, Some(0))
            .with_file("cow.mastercount", "cow")
            .with_file("pig.workercount", "pig");

        let user_configs = TestConfigDir::new()
            .with_user_default(3, 3)
            .with_file("small", "fish")
            .with_file("small.somethingelse", "chicken")
            .with_preset("small", Some(1), Some(3));

        let registry = Arc::new(ConfigPathRegistry::new());
        let resolver = ConfigResolver::new(Arc::clone(&registry));
        Self {
            configs,
            user_configs,
            registry,
            resolver,
        }
    }

    fn use_configs(&self) {
        self.registry.set(self.configs.path());
    }

    fn use_user_configs(&self) {
        self.registry.set(self.user_configs.path());
    }

    fn resolve(&self, config_override: Option<&ConfigOverride>) -> cluster_config::ResolveResult {
        self.resolver.resolve(config_override)
    }
}

fn config(master_count: i64, worker_count: i64, name: &str) -> ClusterConfig {
    ClusterConfig {
        master_count,
        worker_count,
        name: name.to_string(),
    }
}

#[test]
fn registry_starts_at_default_path_and_can_move() {
    let suite = Suite::new();
    assert_eq!(suite.registry.get().as_str(), DEFAULT_CONFIG_PATH);

    suite.use_configs();
    assert_eq!(
        suite.registry.get(),
        cluster_fs::NormalizedPath::new(suite.configs.path())
    );
}

#[test]
fn no_files_and_no_override_gives_built_in_default() {
    let suite = Suite::new();
    let empty = TestConfigDir::new();
    suite.registry.set(empty.path());

    assert_eq!(suite.resolve(None).unwrap(), config(1, 1, ""));
    assert_eq!(
        suite.resolve(Some(&ConfigOverride::default())).unwrap(),
        DEFAULT_CONFIG
    );
}

#[test]
fn tiny_inherits_default_worker_count() {
    let suite = Suite::new();
    suite.use_configs();
    let resolved = suite.resolve(Some(&ConfigOverride::named("tiny"))).unwrap();
    assert_eq!(resolved, config(1, DEFAULT_CONFIG.worker_count, "tiny"));
}

#[test]
fn small_supplies_both_counts() {
    let suite = Suite::new();
    suite.use_configs();
    let resolved = suite.resolve(Some(&ConfigOverride::named("small"))).unwrap();
    assert_eq!(resolved, config(1, 3, "small"));
}

#[test]
fn large_inherits_default_master_count() {
    let suite = Suite::new();
    suite.use_configs();
    let resolved = suite.resolve(Some(&ConfigOverride::named("large"))).unwrap();
    assert_eq!(resolved, config(DEFAULT_CONFIG.master_count, 10, "large"));
}

#[test]
fn brokenmaster_fails_unless_corrected_explicitly() {
    let suite = Suite::new();
    suite.use_configs();

    let err = suite
        .resolve(Some(&ConfigOverride::named("brokenmaster")))
        .unwrap_err();
    assert!(matches!(err.kind(), Error::MasterCountMustBeOne));
    assert_eq!(err.partial().master_count, 2);

    let corrected = ConfigOverride::named("brokenmaster").with_master_count(1);
    assert_eq!(
        suite.resolve(Some(&corrected)).unwrap(),
        config(1, DEFAULT_CONFIG.worker_count, "brokenmaster")
    );
}

#[test]
fn brokenworker_fails_validation() {
    let suite = Suite::new();
    suite.use_configs();

    let err = suite
        .resolve(Some(&ConfigOverride::named("brokenworker")))
        .unwrap_err();
    assert!(matches!(err.kind(), Error::WorkerCountMustBeAtLeastOne));
    assert_eq!(err.partial(), &config(1, 0, "brokenworker"));
}

#[test]
fn non_integer_master_names_offending_file() {
    let suite = Suite::new();
    suite.use_configs();

    let err = suite.resolve(Some(&ConfigOverride::named("cow"))).unwrap_err();
    match err.kind() {
        Error::ErrorWhileProcessing { path, detail } => {
            assert_eq!(path, &suite.registry.get().join("cow.mastercount"));
            assert_eq!(detail, "expected integer");
        }
        other => panic!("expected ErrorWhileProcessing, got {other:?}"),
    }
}

#[test]
fn unknown_name_is_reported() {
    let suite = Suite::new();
    suite.use_configs();

    let err = suite
        .resolve(Some(&ConfigOverride::named("notthere")))
        .unwrap_err();
    match err.kind() {
        Error::NamedConfigDoesNotExist { name } => assert_eq!(name, "notthere"),
        other => panic!("expected NamedConfigDoesNotExist, got {other:?}"),
    }
    assert_eq!(err.partial(), &DEFAULT_CONFIG);
}

#[test]
fn user_default_replaces_built_in_default() {
    let suite = Suite::new();
    let empty = TestConfigDir::new();
    suite.registry.set(empty.path());
    assert_eq!(suite.resolve(None).unwrap(), DEFAULT_CONFIG);

    suite.use_user_configs();
    let err = suite.resolve(None).unwrap_err();
    assert_eq!(err.partial(), &config(3, 3, ""));
    assert!(matches!(err.kind(), Error::MasterCountMustBeOne));
}

#[test]
fn sibling_elements_do_not_break_named_resolution() {
    let suite = Suite::new();
    suite.use_user_configs();

    let resolved = suite.resolve(Some(&ConfigOverride::named("small"))).unwrap();
    assert_eq!(resolved, config(1, 3, "small"));
}

#[test]
fn loosely_typed_request_body_is_resolved() {
    let suite = Suite::new();
    suite.use_configs();

    let body = serde_json::json!({"name": "large", "masterCount": 0, "workerCount": 4});
    let over = ConfigOverride::from_json(&body).unwrap();
    assert_eq!(suite.resolve(Some(&over)).unwrap(), config(1, 4, "large"));

    let bad = serde_json::json!({"name": {"preset": "large"}});
    assert!(matches!(
        ConfigOverride::from_json(&bad),
        Err(Error::InvalidOverride { .. })
    ));
}

#[test]
fn preset_written_through_fs_layer_is_picked_up() {
    let suite = Suite::new();
    suite.use_configs();

    let path = suite.registry.get().join("fresh.workercount");
    cluster_fs::io::write_text(&path, "6\n").unwrap();

    let resolved = suite.resolve(Some(&ConfigOverride::named("fresh"))).unwrap();
    assert_eq!(resolved, config(1, 6, "fresh"));
}
