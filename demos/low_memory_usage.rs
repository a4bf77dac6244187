/// Low-memory mode demo
///
/// Runs the same vocabulary through both backends and renders the
/// ternary search tree as Graphviz DOT.

use typeahead::core::types::Backend;
use typeahead::store::{new_store, PrefixStore, TernaryStore};
use typeahead::visualize::Visualize;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let words = ["bike", "bike path", "bicycle repair", "beach", "pool"];

    println!("=== Backend comparison ===\n");
    for backend in [Backend::Trie, Backend::Ternary] {
        let store = new_store(backend);
        for word in words {
            store.insert(word);
        }
        println!("{:>8}: {:?}", backend, store.autocomplete("bi"));
    }

    println!("\n=== Ternary search tree (DOT) ===\n");
    let tst = TernaryStore::new();
    for word in words {
        tst.insert(word);
    }
    println!("{}", tst.render_dot()?);
    println!("Pipe into `dot -Tpng` to draw it.");

    Ok(())
}
