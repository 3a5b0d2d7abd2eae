//! Binary payload returned by a successful calculation.

use reqwest::header::{HeaderMap, CONTENT_DISPOSITION, CONTENT_TYPE};

/// File name used when the server does not suggest one.
pub const DEFAULT_FILE_NAME: &str = "capital_gains_results.zip";

/// Response body of a successful calculation, byte-for-byte.
///
/// The backend usually sends a zip archive, sometimes a bare CSV. The
/// headers are recorded but not checked; interpreting `data` is up to the
/// caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blob {
    pub data: Vec<u8>,
    /// Value of the `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// File name from the `Content-Disposition` header, reduced to its last
    /// path component.
    pub file_name: Option<String>,
}

impl Blob {
    pub(crate) fn from_parts(headers: &HeaderMap, data: Vec<u8>) -> Self {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let file_name = headers
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(disposition_file_name);
        Self {
            data,
            content_type,
            file_name,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn suggested_file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME)
    }
}

fn disposition_file_name(value: &str) -> Option<String> {
    let raw = value.split(';').map(str::trim).find_map(|param| {
        let (key, val) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("filename")
            .then(|| val.trim().trim_matches('"'))
    })?;
    // never let the server pick a directory
    let name = raw.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(raw).trim();
    if name.is_empty() || name == "." || name == ".." {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(disposition: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(CONTENT_TYPE, HeaderValue::from_static("application/zip"));
        map.insert(
            CONTENT_DISPOSITION,
            HeaderValue::from_str(disposition).unwrap(),
        );
        map
    }

    #[test]
    fn reads_quoted_file_name() {
        let blob = Blob::from_parts(
            &headers("attachment; filename=\"capital_gains_results.zip\""),
            vec![1, 2, 3],
        );
        assert_eq!(blob.file_name.as_deref(), Some("capital_gains_results.zip"));
        assert_eq!(blob.content_type.as_deref(), Some("application/zip"));
        assert_eq!(blob.len(), 3);
    }

    #[test]
    fn reads_bare_file_name() {
        let blob = Blob::from_parts(&headers("attachment; filename=gains.csv"), Vec::new());
        assert_eq!(blob.suggested_file_name(), "gains.csv");
        assert!(blob.is_empty());
    }

    #[test]
    fn strips_directories_from_file_name() {
        let blob = Blob::from_parts(
            &headers("attachment; filename=\"../../etc/passwd\""),
            Vec::new(),
        );
        assert_eq!(blob.file_name.as_deref(), Some("passwd"));

        let blob = Blob::from_parts(&headers("attachment; filename=\"..\""), Vec::new());
        assert_eq!(blob.file_name, None);
    }

    #[test]
    fn missing_headers_use_default_name() {
        let blob = Blob::from_parts(&HeaderMap::new(), vec![0xff]);
        assert_eq!(blob.content_type, None);
        assert_eq!(blob.suggested_file_name(), DEFAULT_FILE_NAME);
    }
}
