pub mod autocomplete;

pub use autocomplete::AutocompleteService;
