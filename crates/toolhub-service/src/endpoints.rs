//! CMP REST API paths.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped when an identifier is placed in a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Folder listing.
pub const FOLDERS: &str = "/v3/folders";
/// Field listing.
pub const FIELDS: &str = "/v3/fields";

fn segment(id: &str) -> String {
    utf8_percent_encode(id, SEGMENT).to_string()
}

/// A single folder.
pub fn folder(id: &str) -> String {
    format!("{FOLDERS}/{}", segment(id))
}

/// A single image asset.
pub fn image(id: &str) -> String {
    format!("/v3/images/{}", segment(id))
}

/// A single raw file asset (spreadsheets, documents).
pub fn raw_file(id: &str) -> String {
    format!("/v3/raw-files/{}", segment(id))
}

/// The brief attached to a task.
pub fn task_brief(id: &str) -> String {
    format!("/v3/tasks/{}/brief", segment(id))
}
