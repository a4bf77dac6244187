use crate::core::types::Backend;
use crate::source::provider::DataSource;

pub const DEFAULT_SERVICE_NAME: &str = "autocomplete";

#[derive(Clone)]
pub struct ServiceConfig {
    pub service_name: String,
    pub max_results: usize,                     // 0 = unlimited
    pub low_memory_mode: bool,                  // TernaryStore instead of TrieStore
    pub load_data_sources_on_start: bool,
    pub data_sources: Vec<DataSource>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            max_results: 0,
            low_memory_mode: false,
            load_data_sources_on_start: false,
            data_sources: Vec::new(),
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service_name(mut self, name: &str) -> Self {
        self.service_name = name.to_string();
        self
    }

    /// Cap the number of completions returned; 0 disables the cap.
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    pub fn with_low_memory_mode(mut self) -> Self {
        self.low_memory_mode = true;
        self
    }

    pub fn with_load_data_sources_on_start(mut self) -> Self {
        self.load_data_sources_on_start = true;
        self
    }

    pub fn with_data_source(mut self, source: DataSource) -> Self {
        self.data_sources.push(source);
        self
    }

    pub fn with_data_sources(mut self, sources: Vec<DataSource>) -> Self {
        self.data_sources = sources;
        self
    }

    pub fn backend(&self) -> Backend {
        Backend::from_low_memory(self.low_memory_mode)
    }
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("service_name", &self.service_name)
            .field("max_results", &self.max_results)
            .field("low_memory_mode", &self.low_memory_mode)
            .field("load_data_sources_on_start", &self.load_data_sources_on_start)
            .field("data_sources", &self.data_sources.len())
            .finish()
    }
}
