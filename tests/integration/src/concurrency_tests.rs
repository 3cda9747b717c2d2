//! Concurrent resolution tests
//!
//! A resolver is shared across threads; each resolution reads the registry
//! once, so it sees one directory or the other but never a mix.

use cluster_config::{ConfigOverride, ConfigPathRegistry, ConfigResolver};
use cluster_test_utils::TestConfigDir;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn shared_resolver_gives_identical_results() {
    let dir = TestConfigDir::new().with_preset("small", Some(1), Some(3));
    let resolver = Arc::new(ConfigResolver::with_config_dir(dir.path()));

    let num_threads = 8;
    let barrier = Arc::new(Barrier::new(num_threads));
    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..25)
                    .map(|_| {
                        resolver
                            .resolve(Some(&ConfigOverride::named("small")))
                            .unwrap()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for config in handle.join().expect("Thread should not panic") {
            assert_eq!(config.worker_count, 3);
            assert_eq!(config.name, "small");
        }
    }
}

#[test]
fn registry_switch_during_resolution_never_mixes_directories() {
    // Both directories define "p" with different worker counts
    let first = TestConfigDir::new().with_preset("p", Some(1), Some(2));
    let second = TestConfigDir::new().with_preset("p", Some(1), Some(7));

    let registry = Arc::new(ConfigPathRegistry::with_path(first.path()));
    let resolver = ConfigResolver::new(Arc::clone(&registry));

    let barrier = Arc::new(Barrier::new(2));
    let writer = {
        let registry = Arc::clone(&registry);
        let barrier = Arc::clone(&barrier);
        let paths = [first.path().to_path_buf(), second.path().to_path_buf()];
        thread::spawn(move || {
            barrier.wait();
            for i in 0..200 {
                registry.set(paths[i % 2].as_path());
            }
        })
    };

    barrier.wait();
    for _ in 0..200 {
        let config = resolver.resolve(Some(&ConfigOverride::named("p"))).unwrap();
        assert!(
            config.worker_count == 2 || config.worker_count == 7,
            "unexpected worker count {}",
            config.worker_count
        );
    }
    writer.join().expect("Writer thread should not panic");
}
