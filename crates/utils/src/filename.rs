/// Builds an upload filename from a user-supplied hint.
///
/// An empty hint becomes `{default_stem}.{ext}`; a hint that does not already
/// end with `.{ext}` (case-insensitive) gets the extension appended.
pub fn with_extension(hint: &str, default_stem: &str, ext: &str) -> String {
    let ext = ext.trim_start_matches('.');
    let name = hint.trim();

    if name.is_empty() {
        return format!("{}.{}", default_stem, ext);
    }
    if ext.is_empty() {
        return name.to_string();
    }

    let suffix = format!(".{}", ext.to_lowercase());
    if name.to_lowercase().ends_with(&suffix) {
        name.to_string()
    } else {
        format!("{}.{}", name, ext)
    }
}
