use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;
use typeahead::core::config::ServiceConfig;
use typeahead::core::error::{Error, ErrorKind, Result};
use typeahead::core::types::Backend;
use typeahead::format::{DefaultFormat, KeywordListFormat};
use typeahead::service::AutocompleteService;
use typeahead::source::{DataProvider, DataSource, LocalFileProvider};

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn keyword_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("parks.json"), r#"["dog park", "pool", "beach"]"#).unwrap();
    fs::write(dir.path().join("bikes.txt"), "keywords\nbike\nbike path\nbicycle repair\n").unwrap();
    dir
}

fn local_source(dir: &TempDir, file: &str) -> DataSource {
    let provider = Arc::new(LocalFileProvider::new(dir.path()).unwrap());
    if file.ends_with(".json") {
        DataSource::new(provider, Arc::new(DefaultFormat), file)
    } else {
        DataSource::new(provider, Arc::new(KeywordListFormat), file)
    }
}

/// Counts close calls, optionally failing them
struct CountingProvider {
    closes: AtomicUsize,
    fail_close: bool,
}

impl DataProvider for CountingProvider {
    fn read(&self, _location: &str) -> Result<Vec<u8>> {
        Ok(b"[\"counted\"]".to_vec())
    }

    fn close(&self) -> Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            return Err(Error::new(ErrorKind::Io, "provider stuck".to_string()));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "counting"
    }
}

#[test]
fn backend_follows_low_memory_mode() {
    let fast = AutocompleteService::new(ServiceConfig::default(), &[]).unwrap();
    assert_eq!(fast.backend(), Backend::Trie);

    let small = AutocompleteService::new(ServiceConfig::new().with_low_memory_mode(), &[]).unwrap();
    assert_eq!(small.backend(), Backend::Ternary);
}

#[test]
fn seeds_keywords_and_completes() {
    for config in [ServiceConfig::new(), ServiceConfig::new().with_low_memory_mode()] {
        let service =
            AutocompleteService::new(config, &strings(&["bike", "bike path", "bicycle repair"])).unwrap();

        assert!(service.exists("bike"));
        assert!(!service.exists("bik"));
        assert_eq!(service.complete("bik"), strings(&["bike", "bike path"]));
        assert_eq!(service.contents().len(), 3);
    }
}

#[test]
fn max_results_caps_completions() {
    let config = ServiceConfig::new().with_max_results(2);
    let service = AutocompleteService::new(config, &strings(&["aa", "ab", "ac", "ad"])).unwrap();

    assert_eq!(service.complete("a").len(), 2);
    assert_eq!(service.contents().len(), 4);
}

#[test]
fn loads_data_sources_on_start() {
    let dir = keyword_dir();
    let config = ServiceConfig::new()
        .with_service_name("parks")
        .with_data_source(local_source(&dir, "parks.json"))
        .with_data_source(local_source(&dir, "bikes.txt"))
        .with_load_data_sources_on_start();

    let service = AutocompleteService::new(config, &[]).unwrap();

    assert_eq!(service.config().service_name, "parks");
    assert_eq!(service.contents().len(), 6);
    assert!(service.exists("dog park"));
    assert!(!service.exists("keywords"));
    assert_eq!(service.complete("bi").len(), 3);
}

#[test]
fn sources_are_not_loaded_unless_asked() {
    let dir = keyword_dir();
    let config = ServiceConfig::new().with_data_source(local_source(&dir, "parks.json"));

    let service = AutocompleteService::new(config, &[]).unwrap();
    assert!(service.contents().is_empty());

    assert_eq!(service.load_data_sources().unwrap(), 3);
    assert!(service.exists("pool"));
}

#[test]
fn missing_source_fails_construction() {
    let dir = keyword_dir();
    let config = ServiceConfig::new()
        .with_data_source(local_source(&dir, "missing.json"))
        .with_load_data_sources_on_start();

    let err = AutocompleteService::new(config, &[]).err().unwrap();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn load_stops_at_first_failure_keeping_earlier_sources() {
    let dir = keyword_dir();
    let config = ServiceConfig::new().with_data_sources(vec![
        local_source(&dir, "parks.json"),
        local_source(&dir, "absent.txt"),
        local_source(&dir, "bikes.txt"),
    ]);
    let service = AutocompleteService::new(config, &[]).unwrap();

    assert!(service.load_data_sources().is_err());
    assert!(service.exists("pool"));
    assert!(!service.exists("bike"));
}

#[test]
fn load_single_source_and_bump_timestamp() {
    let dir = keyword_dir();
    let service = AutocompleteService::new(ServiceConfig::new(), &[]).unwrap();
    let before = service.last_updated();

    let count = service.load_data_source(&local_source(&dir, "bikes.txt")).unwrap();

    assert_eq!(count, 3);
    assert!(service.last_updated() >= before);
    assert_eq!(service.complete("bike"), strings(&["bike", "bike path"]));
}

#[test]
fn provider_rejects_missing_base_dir() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    assert_eq!(LocalFileProvider::new(&missing).unwrap_err().kind, ErrorKind::NotFound);

    let file = dir.path().join("plain.txt");
    fs::write(&file, "x").unwrap();
    assert_eq!(LocalFileProvider::new(&file).unwrap_err().kind, ErrorKind::InvalidArgument);
}

#[test]
fn export_encodes_vocabulary() {
    let service = AutocompleteService::new(ServiceConfig::new(), &strings(&["b", "a"])).unwrap();

    let bytes = service.export(&DefaultFormat, "dump.json").unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), r#"["a","b"]"#);

    let err = service.export(&DefaultFormat, "dump.bin").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedFormat);
}

#[test]
fn clear_empties_the_store() {
    let service = AutocompleteService::new(ServiceConfig::new(), &strings(&["one", "two"])).unwrap();
    service.clear();

    assert!(service.contents().is_empty());
    service.add("three");
    assert!(service.exists("three"));
}

#[test]
fn closed_service_ignores_calls() {
    let provider = Arc::new(CountingProvider { closes: AtomicUsize::new(0), fail_close: false });
    let source = DataSource::new(provider.clone(), Arc::new(DefaultFormat), "ignored.json");
    let config = ServiceConfig::new().with_data_source(source.clone());
    let service = AutocompleteService::new(config, &strings(&["kept"])).unwrap();

    service.close().unwrap();
    service.close().unwrap();

    assert!(service.is_closed());
    assert_eq!(provider.closes.load(Ordering::SeqCst), 1);
    assert!(!service.exists("kept"));
    assert!(service.complete("k").is_empty());
    assert!(service.contents().is_empty());

    service.add("late");
    assert!(!service.exists("late"));

    assert_eq!(service.load_data_sources().unwrap_err().kind, ErrorKind::Closed);
    assert_eq!(service.load_data_source(&source).unwrap_err().kind, ErrorKind::Closed);
    assert_eq!(service.export(&DefaultFormat, "x.json").unwrap_err().kind, ErrorKind::Closed);
}

#[test]
fn close_collects_every_provider_failure() {
    let failing = || {
        let provider = Arc::new(CountingProvider { closes: AtomicUsize::new(0), fail_close: true });
        DataSource::new(provider, Arc::new(DefaultFormat), "x.json")
    };
    let config = ServiceConfig::new().with_data_sources(vec![failing(), failing()]);
    let service = AutocompleteService::new(config, &strings(&["kept"])).unwrap();

    let err = service.close().unwrap_err();
    assert_eq!(err.kind, ErrorKind::Io);
    assert!(err.context.contains("2 errors"));
    assert!(!service.is_closed());
    assert!(service.exists("kept"));
}

#[test]
fn custom_provider_feeds_store() {
    let provider = Arc::new(CountingProvider { closes: AtomicUsize::new(0), fail_close: false });
    let config = ServiceConfig::new()
        .with_low_memory_mode()
        .with_data_source(DataSource::new(provider, Arc::new(DefaultFormat), "remote.json"))
        .with_load_data_sources_on_start();

    let service = AutocompleteService::new(config, &[]).unwrap();
    assert_eq!(service.complete("co"), strings(&["counted"]));
}

#[test]
fn adds_racing_close_leave_store_empty() {
    for config in [ServiceConfig::default(), ServiceConfig::default().with_low_memory_mode()] {
        let backend = config.backend();
        let service = Arc::new(AutocompleteService::new(config, &strings(&["seed"])).unwrap());

        let writers: Vec<_> = (0..4)
            .map(|t| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || {
                    for i in 0..500 {
                        service.add(&format!("word{}-{}", t, i));
                    }
                })
            })
            .collect();

        std::thread::sleep(std::time::Duration::from_millis(1));
        service.close().unwrap();
        for writer in writers {
            writer.join().unwrap();
        }

        assert!(service.is_closed());
        assert!(service.store().list_contents().is_empty(), "{}", backend);
    }
}
