// crates/core/src/encoding.rs
use std::io::Read;

use encoding_rs::{CoderResult, Encoding, UTF_8};

use crate::counter::LineCounter;
use crate::error::{CoreError, Result};

/// Bytes read from the input per decode round.
const CHUNK_SIZE: usize = 8 * 1024;

/// Resolve a user-supplied encoding label to a concrete encoding.
///
/// `None` selects the platform default, UTF-8. Labels go through the
/// WHATWG label registry, so the usual aliases (`latin1`, `utf-16le`,
/// `shift_jis`, ...) all resolve.
///
/// # Errors
///
/// Returns [`CoreError::UnknownEncoding`] when the label is not a
/// recognized encoding name.
pub fn resolve(label: Option<&str>) -> Result<&'static Encoding> {
    match label {
        None => Ok(UTF_8),
        Some(label) => Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
            CoreError::UnknownEncoding {
                label: label.to_string(),
            }
        }),
    }
}

/// Decode `reader` with `encoding`, feeding every character into `counter`.
///
/// Reads buffered chunks but preserves character-at-a-time scanner
/// semantics: the decoder carries multi-byte sequences split across chunk
/// boundaries, and the scanner's CR lookback carries across chunks. The
/// decoder is created without BOM handling so a leading BOM is counted as
/// an ordinary character, and malformed sequences decode to U+FFFD; any
/// character is accepted by the scanner, so decoding itself cannot fail.
///
/// # Errors
///
/// Propagates I/O errors from `reader`.
pub fn decode_into<R: Read>(
    mut reader: R,
    encoding: &'static Encoding,
    counter: &mut LineCounter,
) -> std::io::Result<()> {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut bytes = [0u8; CHUNK_SIZE];
    // Worst-case UTF-8 expansion of a chunk is three bytes per input byte,
    // plus slack for decoder carry-over.
    let mut text = String::with_capacity(CHUNK_SIZE * 3 + 16);

    loop {
        let read = reader.read(&mut bytes)?;
        let last = read == 0;
        let mut src = &bytes[..read];
        loop {
            text.clear();
            let (result, consumed, _) = decoder.decode_to_string(src, &mut text, last);
            src = &src[consumed..];
            counter.push_str(&text);
            match result {
                CoderResult::InputEmpty => break,
                CoderResult::OutputFull => {}
            }
        }
        if last {
            return Ok(());
        }
    }
}
