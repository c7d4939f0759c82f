use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

use super::defaults::is_valid_language;

/// Find every language that has a `<domain>_<lang>.properties` file under one of the domains
///
/// Domain directories that do not exist are skipped; the result is sorted.
pub fn discover_languages(root: &Path, domains: &[String]) -> Vec<String> {
    let mut found = BTreeSet::new();

    for domain in domains {
        let prefix = format!("{}_", domain);
        let walker = WalkDir::new(root.join(domain))
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            let code = name
                .strip_prefix(&prefix)
                .and_then(|rest| rest.strip_suffix(".properties"));
            if let Some(code) = code {
                if is_valid_language(code) {
                    found.insert(code.to_string());
                }
            }
        }
    }

    found.into_iter().collect()
}
