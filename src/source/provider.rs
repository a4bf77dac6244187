use std::fmt;
use std::sync::Arc;
use tracing::debug;
use crate::core::error::Result;
use crate::format::formatter::Formatter;
use crate::store::prefix_store::PrefixStore;

/// Where raw keyword bytes come from
pub trait DataProvider: Send + Sync {
    fn read(&self, location: &str) -> Result<Vec<u8>>;

    /// Release any handles held by the provider
    fn close(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

/// A provider, the codec for its bytes and the location to read.
#[derive(Clone)]
pub struct DataSource {
    pub provider: Arc<dyn DataProvider>,
    pub formatter: Arc<dyn Formatter>,
    pub location: String,
}

impl DataSource {
    pub fn new(
        provider: Arc<dyn DataProvider>,
        formatter: Arc<dyn Formatter>,
        location: &str,
    ) -> Self {
        DataSource {
            provider,
            formatter,
            location: location.to_string(),
        }
    }

    /// Read and decode, without touching any store
    pub fn fetch(&self) -> Result<Vec<String>> {
        let data = self.provider.read(&self.location)?;
        let words = self.formatter.decode(&data, &self.location)?;
        debug!(
            provider = self.provider.name(),
            formatter = self.formatter.name(),
            location = %self.location,
            count = words.len(),
            "fetched keywords"
        );
        Ok(words)
    }

    pub fn load_into(&self, store: &dyn PrefixStore) -> Result<usize> {
        let words = self.fetch()?;
        store.insert_batch(&words);
        Ok(words.len())
    }
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSource")
            .field("provider", &self.provider.name())
            .field("formatter", &self.formatter.name())
            .field("location", &self.location)
            .finish()
    }
}
