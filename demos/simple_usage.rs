/// Typeahead API Demo
///
/// Demonstrates the autocomplete service end to end:
/// - Seeding keywords
/// - Completion and membership checks
/// - Loading a keyword file from disk
/// - Exporting and clearing the vocabulary

use typeahead::core::config::ServiceConfig;
use typeahead::format::{DefaultFormat, KeywordListFormat};
use typeahead::service::AutocompleteService;
use typeahead::source::{DataSource, LocalFileProvider};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║      Typeahead - Autocomplete API Demo       ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    // Step 1: Create service with a few seed keywords
    println!("Step 1: Creating service...");
    let config = ServiceConfig::new()
        .with_service_name("demo")
        .with_max_results(5);
    let seeds: Vec<String> = ["bike", "bike path", "bicycle repair", "pool", "beach"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let service = AutocompleteService::new(config, &seeds)?;
    println!("  Backend: {}\n", service.backend());

    // Step 2: COMPLETE
    println!("Step 2: COMPLETE - Querying prefixes...");
    for prefix in ["bi", "bik", "b", "z"] {
        println!("  '{}': {:?}", prefix, service.complete(prefix));
    }
    println!();

    // Step 3: EXISTS
    println!("Step 3: EXISTS - Membership checks...");
    for word in ["bike", "bik", "pool"] {
        println!("  '{}': {}", word, service.exists(word));
    }
    println!();

    // Step 4: LOAD - Read a keyword file
    println!("Step 4: LOAD - Reading keywords from disk...");
    let dir = std::env::temp_dir().join("typeahead-demo");
    std::fs::create_dir_all(&dir)?;
    std::fs::write(dir.join("parks.txt"), "keywords\ndog park\nwaterfront\n")?;

    let provider = Arc::new(LocalFileProvider::new(&dir)?);
    let source = DataSource::new(provider, Arc::new(KeywordListFormat), "parks.txt");
    let loaded = service.load_data_source(&source)?;
    println!("  Loaded {} keywords, last updated {}\n", loaded, service.last_updated());

    // Step 5: EXPORT
    println!("Step 5: EXPORT - Encoding vocabulary as JSON...");
    let bytes = service.export(&DefaultFormat, "vocabulary.json")?;
    println!("  {}\n", String::from_utf8_lossy(&bytes));

    // Step 6: CLOSE
    println!("Step 6: CLOSE - Shutting down...");
    service.close()?;
    println!("  Closed: {}, contents after close: {}", service.is_closed(), service.contents().len());

    println!("\n╔════════════════════════════════════════╗");
    println!("║    All API Operations Completed!      ║");
    println!("╚════════════════════════════════════════╝\n");

    Ok(())
}
