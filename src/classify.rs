//! Binary/text classification and decoding of file contents.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// How many leading bytes are sniffed for the null-byte binary heuristic.
const BINARY_SNIFF_LEN: usize = 1024;

/// Decoders tried in order; the first that decodes the whole stream without
/// error wins.
const ENCODINGS: [&encoding_rs::Encoding; 2] = [encoding_rs::UTF_8, encoding_rs::SHIFT_JIS];

/// Outcome of classifying one file's bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A null byte was found in the sniffed prefix; content is never decoded.
    Binary,
    /// The bytes decoded cleanly under one of the configured encodings.
    Text(String),
    /// No configured encoding could decode the bytes. Treated downstream as
    /// an empty file, not as a failure.
    Unreadable,
}

/// Reads and classifies a file. Only the first kilobyte is read for the
/// binary sniff; the rest of the file is read only when the prefix holds no
/// null byte. Read errors degrade to [`Classification::Unreadable`] so one
/// bad file never aborts a traversal.
pub fn classify_file(path: &Path) -> Classification {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("unreadable file {}: {}", path.display(), _e);
            return Classification::Unreadable;
        }
    };
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(BINARY_SNIFF_LEN);
    if reader
        .by_ref()
        .take(BINARY_SNIFF_LEN as u64)
        .read_to_end(&mut bytes)
        .is_err()
    {
        return Classification::Unreadable;
    }
    if bytes.contains(&0) {
        return Classification::Binary;
    }
    if reader.read_to_end(&mut bytes).is_err() {
        return Classification::Unreadable;
    }
    decode(&bytes)
}

/// Classifies raw bytes already in memory: null-byte sniff first, then the
/// decoder fallback chain over the full stream.
pub fn classify_bytes(bytes: &[u8]) -> Classification {
    let sniff = &bytes[..bytes.len().min(BINARY_SNIFF_LEN)];
    if sniff.contains(&0) {
        return Classification::Binary;
    }
    decode(bytes)
}

fn decode(bytes: &[u8]) -> Classification {
    for encoding in ENCODINGS {
        let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
        if !had_errors {
            return Classification::Text(text.into_owned());
        }
    }
    Classification::Unreadable
}
