use std::collections::BTreeMap;

use super::model::{StemPair, StemRole};

/// Suffix lalal.ai appends to preview exports.
const EXPORT_SUFFIX: &str = "_split_by_lalalai_preview";

/// Derive the pairing key for a stem file name.
///
/// Strips the file extension and the export-tool suffix, splits the rest on
/// `_` and drops every token exactly equal to `vocals` or `no`, rejoining
/// what remains. Files that differ only in role markers collapse to the
/// same title, which is the point. A stray token literally equal to `no`
/// anywhere in the title is stripped too; the naming convention never
/// produces one, so this stays as-is.
pub fn clean_title(file_name: &str) -> String {
    let base = match file_name.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => file_name,
    };
    let base = base.replace(EXPORT_SUFFIX, "");

    base.split('_')
        .filter(|part| *part != "vocals" && *part != "no")
        .collect::<Vec<_>>()
        .join("_")
}

/// Classify a filename by its role marker, or `None` when it carries
/// neither marker.
pub(super) fn role_of(file_name: &str) -> Option<StemRole> {
    if file_name.contains("_no_vocals") {
        Some(StemRole::NoVocals)
    } else if file_name.contains("vocals") {
        Some(StemRole::Vocals)
    } else {
        None
    }
}

/// Group filenames into stem pairs keyed by clean title.
///
/// Pure over the input list. Files without a role marker are dropped
/// without creating an entry. A duplicate (title, role) keeps the later
/// filename (last-write-wins), so the result is deterministic for a fixed
/// input order.
pub fn match_files<S: AsRef<str>>(file_names: &[S]) -> BTreeMap<String, StemPair> {
    let mut pairs: BTreeMap<String, StemPair> = BTreeMap::new();

    for name in file_names {
        let name = name.as_ref();
        let Some(role) = role_of(name) else {
            continue;
        };
        pairs
            .entry(clean_title(name))
            .or_default()
            .set_stem(role, name.to_string());
    }

    pairs
}
