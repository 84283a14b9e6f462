use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const MAX_PROMPT_NAME_CHARS: usize = 50;
pub const EDITED_SUFFIX: &str = "_edited";

/// Fallback stem when a prompt sanitizes down to nothing
pub const FALLBACK_STEM: &str = "output";

/// Turn a prompt into something safe to use as a file stem.
///
/// Alphanumerics, spaces, `-` and `_` survive, everything else becomes `_`.
/// The result is capped at 50 characters.
pub fn sanitize_prompt(prompt: &str) -> String {
    prompt
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_PROMPT_NAME_CHARS)
        .collect()
}

pub fn default_output_path(prompt: &str, extension: &str) -> PathBuf {
    let stem = sanitize_prompt(prompt);
    let stem = if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem
    };
    PathBuf::from(format!("{}.{}", stem, extension))
}

/// `photos/cat.png` -> `photos/cat_edited.png`
pub fn edited_output_path(input: &Path) -> PathBuf {
    let mut name: OsString = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    name.push(EDITED_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}
