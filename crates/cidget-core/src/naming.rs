//! Output naming: derive the local filename for a fetched identifier.
//!
//! Identifiers are opaque strings, so the path component built from one is
//! sanitized for Linux filesystems before it touches the output directory.

use std::path::{Path, PathBuf};

/// Placeholder in a template that is replaced by the sanitized identifier.
pub const CID_PLACEHOLDER: &str = "{cid}";

/// Default output filename template.
pub const DEFAULT_TEMPLATE: &str = "downloaded_{cid}.txt";

/// Fallback when the rendered filename is empty or a reserved name.
const DEFAULT_FILENAME: &str = "download.bin";

/// Renders `template` for `cid`, substituting [`CID_PLACEHOLDER`].
///
/// The identifier is sanitized first, so a hostile value cannot inject path
/// separators. An empty or reserved result falls back to `download.bin`.
pub fn render_filename(template: &str, cid: &str) -> String {
    let component = sanitize_component(cid);
    let name = template.replace(CID_PLACEHOLDER, &component);
    if name.is_empty() || name == "." || name == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        name
    }
}

/// Joins the rendered filename onto the output directory.
pub fn output_path(dir: &Path, template: &str, cid: &str) -> PathBuf {
    dir.join(render_filename(template, cid))
}

/// Sanitizes one path component for safe use on Linux.
///
/// - `/`, `\`, NUL, other control characters, and whitespace become `_`
/// - runs of `_` collapse to one
/// - leading/trailing dots, spaces, and underscores are trimmed
/// - capped at 255 bytes (NAME_MAX), on a char boundary
pub fn sanitize_component(raw: &str) -> String {
    const NAME_MAX: usize = 255;

    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        let keep = !(c == '\0' || c == '/' || c == '\\' || c.is_control() || c.is_whitespace());
        if keep {
            out.push(c);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_' || c == ' ');
    if trimmed.len() <= NAME_MAX {
        return trimmed.to_string();
    }
    let mut end = NAME_MAX;
    while end > 0 && !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].to_string()
}
