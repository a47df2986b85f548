// src/decode.rs

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use std::borrow::Cow;
use tracing::{debug, instrument};

/// `<meta charset=...>` and `<meta http-equiv ... content="...; charset=...">`.
/// Byte-level (`-u`) so undecodable input can still be scanned.
static META_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i-u)<\s*meta[^>]+charset\s*=\s*["']?([^>]*?)[ /;'">]"#)
        .expect("meta charset regex should compile")
});

/// A declaration is only looked for in the first `max(SNIFF_MIN, len / 20)` bytes.
const SNIFF_MIN: usize = 2048;

#[derive(Debug)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static Encoding,
}

/// Turn the raw body into text. Order: BOM, in-document `<meta>` declaration
/// (only if the body decodes cleanly under it), strict UTF-8, Windows-1252.
/// Transport headers are not consulted.
#[instrument(level = "debug", skip(body), fields(bytes = body.len()))]
pub fn decode_body(body: &[u8]) -> Decoded {
    if let Some((enc, bom_len)) = Encoding::for_bom(body) {
        let (text, _) = enc.decode_without_bom_handling(&body[bom_len..]);
        return finish(text, enc, "byte order mark");
    }

    if let Some(enc) = declared_encoding(body) {
        match enc.decode_without_bom_handling_and_without_replacement(body) {
            Some(text) => return finish(text, enc, "meta declaration"),
            None => debug!(encoding = enc.name(), "declared encoding does not fit body"),
        }
    }

    if let Ok(text) = std::str::from_utf8(body) {
        return finish(Cow::Borrowed(text), UTF_8, "utf-8");
    }

    let (text, _) = WINDOWS_1252.decode_without_bom_handling(body);
    finish(text, WINDOWS_1252, "fallback")
}

fn declared_encoding(body: &[u8]) -> Option<&'static Encoding> {
    let end = body.len().min(SNIFF_MIN.max(body.len() / 20));
    let caps = META_CHARSET.captures(&body[..end])?;
    let label = caps.get(1)?.as_bytes();
    // utf-16 and "replacement" labels in markup mean utf-8
    Encoding::for_label(label).map(Encoding::output_encoding)
}

fn finish(text: Cow<'_, str>, encoding: &'static Encoding, via: &str) -> Decoded {
    debug!(encoding = encoding.name(), via, "decoded body");
    Decoded {
        text: text.into_owned(),
        encoding,
    }
}
