use chrono::{DateTime, Utc};
use parking_lot::{RwLock, RwLockReadGuard};
use rayon::prelude::*;
use tracing::{debug, info, warn};
use crate::core::config::ServiceConfig;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::Backend;
use crate::format::formatter::Formatter;
use crate::source::provider::DataSource;
use crate::store::prefix_store::{new_store, PrefixStore};

/// Facade over one prefix store plus the data sources that feed it.
///
/// The backend is picked once from `ServiceConfig::low_memory_mode` and never
/// changes. After `close()` reads return empty results and writes are ignored.
///
/// Writes hold the shared side of `closed` while they touch the store and
/// `close()` takes the exclusive side, so no write lands after the final clear.
pub struct AutocompleteService {
    config: ServiceConfig,
    store: Box<dyn PrefixStore>,
    last_updated: RwLock<DateTime<Utc>>,
    closed: RwLock<bool>,
}

impl AutocompleteService {
    /// Build the store, seed it with `keywords`, then load the configured
    /// data sources when `load_data_sources_on_start` is set.
    pub fn new(config: ServiceConfig, keywords: &[String]) -> Result<Self> {
        let store = new_store(config.backend());
        store.insert_batch(keywords);

        let service = AutocompleteService {
            store,
            last_updated: RwLock::new(Utc::now()),
            closed: RwLock::new(false),
            config,
        };

        if service.config.load_data_sources_on_start {
            service.load_data_sources()?;
        }

        info!(
            service = %service.config.service_name,
            backend = %service.backend(),
            "autocomplete service ready"
        );
        Ok(service)
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn backend(&self) -> Backend {
        self.store.backend()
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        *self.last_updated.read()
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.read()
    }

    /// Backing store, read or written without the closed check
    pub fn store(&self) -> &dyn PrefixStore {
        self.store.as_ref()
    }

    fn touch(&self) {
        *self.last_updated.write() = Utc::now();
    }

    /// Shared guard on the open state; keep it alive across the store write
    fn ensure_open(&self, operation: &str) -> Result<RwLockReadGuard<'_, bool>> {
        let closed = self.closed.read();
        if *closed {
            return Err(Error::closed(operation));
        }
        Ok(closed)
    }

    /// Fetch every configured source in parallel, then insert them in
    /// configuration order. Stops at the first source that fails; sources
    /// before it stay loaded.
    pub fn load_data_sources(&self) -> Result<usize> {
        let _open = self.ensure_open("load_data_sources")?;

        let sources = &self.config.data_sources;
        let fetched: Vec<Result<Vec<String>>> = sources
            .par_iter()
            .map(DataSource::fetch)
            .collect();

        let mut total = 0;
        for (source, words) in sources.iter().zip(fetched) {
            match words {
                Ok(words) => {
                    self.store.insert_batch(&words);
                    total += words.len();
                }
                Err(e) => {
                    warn!(source = ?source, error = %e, "failed to load data source");
                    return Err(e);
                }
            }
        }

        self.touch();
        debug!(sources = sources.len(), words = total, "data sources loaded");
        Ok(total)
    }

    pub fn load_data_source(&self, source: &DataSource) -> Result<usize> {
        let _open = self.ensure_open("load_data_source")?;

        let count = source.load_into(self.store.as_ref()).inspect_err(|e| {
            warn!(source = ?source, error = %e, "failed to load data source");
        })?;

        self.touch();
        Ok(count)
    }

    /// Encode the whole vocabulary; the caller decides where the bytes go
    pub fn export(&self, formatter: &dyn Formatter, file_name: &str) -> Result<Vec<u8>> {
        let _open = self.ensure_open("export")?;
        formatter.encode(&self.store.list_contents(), file_name)
    }

    /// Completions of `prefix`, capped at `max_results` when it is non-zero
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        if self.is_closed() {
            return Vec::new();
        }

        let mut results = self.store.autocomplete(prefix);
        if self.config.max_results > 0 {
            results.truncate(self.config.max_results);
        }
        results
    }

    pub fn exists(&self, word: &str) -> bool {
        !self.is_closed() && self.store.contains(word)
    }

    pub fn add(&self, word: &str) {
        let Ok(_open) = self.ensure_open("add") else {
            warn!(word = %word, "add ignored, service is closed");
            return;
        };
        self.store.insert(word);
        self.touch();
    }

    pub fn contents(&self) -> Vec<String> {
        if self.is_closed() {
            return Vec::new();
        }
        self.store.list_contents()
    }

    pub fn clear(&self) {
        self.store.clear();
        self.touch();
        debug!(service = %self.config.service_name, "store cleared");
    }

    /// Close every provider. All failures are gathered into one error, in
    /// which case the service stays open. Closing twice is a no-op.
    pub fn close(&self) -> Result<()> {
        let mut closed = self.closed.write();
        if *closed {
            return Ok(());
        }

        let failures: Vec<String> = self
            .config
            .data_sources
            .iter()
            .filter_map(|source| source.provider.close().err())
            .map(|e| e.to_string())
            .collect();

        if !failures.is_empty() {
            return Err(Error::new(
                ErrorKind::Io,
                format!(
                    "close: encountered {} errors while closing data sources: [{}]",
                    failures.len(),
                    failures.join("; ")
                ),
            ));
        }

        self.clear();
        *closed = true;
        info!(service = %self.config.service_name, "autocomplete service closed");
        Ok(())
    }
}
