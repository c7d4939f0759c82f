pub mod encoding;
pub mod entry;
pub mod keys;
pub mod reconcile;
pub mod translations;

pub use encoding::read_text;
pub use entry::{placeholder, CatalogEntry, KeyCatalog, TranslationMap, PLACEHOLDER_PREFIX};
pub use keys::{load_keys, parse_keys};
pub use reconcile::{reconcile, reconcile_file, FileOutcome, Reconciliation};
pub use translations::{load_translations, parse_translations};
