pub mod core;
pub mod store;
pub mod visualize;
pub mod format;
pub mod source;
pub mod service;

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                          TYPEAHEAD STRUCT ARCHITECTURE                        │
└──────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── SERVICE LAYER ───────────────────────────────┐
│  struct AutocompleteService                                                  │
│  • config: ServiceConfig            // name, max_results, low_memory_mode   │
│  • store: Box<dyn PrefixStore>      // Trie or Ternary, chosen once          │
│  • last_updated: RwLock<DateTime>                                            │
│  • closed: AtomicBool                                                        │
└──────────────────────────────────────────────────────────────────────────────┘
                 │ insert_batch(words)                ▲ Vec<String>
                 ▼                                    │
┌──────────────────────────────── STORE LAYER ─────────────────────────────────┐
│  trait PrefixStore: insert / insert_batch / contains / autocomplete /        │
│                     list_contents / clear                                    │
│                                                                              │
│  ┌──────────────────────────────┐   ┌──────────────────────────────────┐    │
│  │ struct TrieStore             │   │ struct TernaryStore              │    │
│  │ • root: RwLock<TrieNode>     │   │ • root: RwLock<Option<Box<..>>>  │    │
│  │ TrieNode                     │   │ TstNode                          │    │
│  │ • children: BTreeMap<char,_> │   │ • ch, is_end                     │    │
│  │ • is_end                     │   │ • left / mid / right             │    │
│  └──────────────────────────────┘   └──────────────────────────────────┘    │
└──────────────────────────────────────────────────────────────────────────────┘
                 ▲ read_root() (shared lock)
┌──────────────────────────────── VISUALIZE ───────────────────────────────────┐
│  trait Visualize → Graphviz DOT                                              │
└──────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── INPUT LAYER ─────────────────────────────────┐
│  struct DataSource { provider, formatter, location }                         │
│  trait DataProvider  → LocalFileProvider                                     │
│  trait Formatter     → DefaultFormat, KeywordListFormat (json/txt/csv/yaml)  │
└──────────────────────────────────────────────────────────────────────────────┘
*/
