//! Newline-delimited JSON codec for the stdio transport.
//!
//! One JSON message per line. A bad line is reported as an item-level
//! [`FrameError`] so the stream keeps going; only IO failures end it.

use bytes::{Buf, BufMut, BytesMut};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::marker::PhantomData;
use thiserror::Error;
use tokio_util::codec::{Decoder, Encoder};

/// Why a single inbound line could not be turned into a message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Line is not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),
    /// Valid JSON, wrong message shape; keeps the value so callers can
    /// recover fields such as a request id
    #[error("Invalid request: {message}")]
    Invalid { message: String, value: Value },
    /// Line exceeded the configured maximum and was discarded
    #[error("Message too large: {0} > {1}")]
    TooLarge(usize, usize),
}

/// Newline-delimited JSON codec.
///
/// Blank lines are skipped and a trailing `\r` is tolerated. Lines longer
/// than `max_length` are dropped up to the next newline.
#[derive(Debug)]
pub struct NdJsonCodec<T> {
    _phantom: PhantomData<T>,
    max_length: usize,
    /// Dropping the rest of an oversized line
    discarding: bool,
    /// Where to resume the newline scan
    next_index: usize,
}

impl<T> NdJsonCodec<T> {
    /// Create a new codec with default max length (16 MB).
    pub fn new() -> Self {
        Self::with_max_length(16 * 1024 * 1024)
    }

    /// Create a new codec with custom max length.
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            _phantom: PhantomData,
            max_length,
            discarding: false,
            next_index: 0,
        }
    }

    /// Get the max message length.
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl<T> Default for NdJsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> NdJsonCodec<T> {
    fn parse(line: &[u8]) -> std::result::Result<T, FrameError> {
        let value: Value = serde_json::from_slice(line).map_err(|e| FrameError::Parse(e.to_string()))?;
        T::deserialize(&value).map_err(|e| FrameError::Invalid {
            message: e.to_string(),
            value,
        })
    }
}

impl<T: DeserializeOwned> Decoder for NdJsonCodec<T> {
    type Item = std::result::Result<T, FrameError>;
    type Error = std::io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> std::result::Result<Option<Self::Item>, Self::Error> {
        loop {
            let newline_pos = src[self.next_index..]
                .iter()
                .position(|&b| b == b'\n')
                .map(|pos| pos + self.next_index);

            match (self.discarding, newline_pos) {
                (true, Some(pos)) => {
                    src.advance(pos + 1);
                    self.discarding = false;
                    self.next_index = 0;
                }
                (true, None) => {
                    src.clear();
                    self.next_index = 0;
                    return Ok(None);
                }
                (false, Some(pos)) => {
                    self.next_index = 0;
                    let line = src.split_to(pos + 1);
                    if pos > self.max_length {
                        return Ok(Some(Err(FrameError::TooLarge(pos, self.max_length))));
                    }
                    let trimmed = line[..pos].trim_ascii();
                    if trimmed.is_empty() {
                        continue;
                    }
                    return Ok(Some(Self::parse(trimmed)));
                }
                (false, None) => {
                    if src.len() > self.max_length {
                        let len = src.len();
                        src.clear();
                        self.discarding = true;
                        self.next_index = 0;
                        return Ok(Some(Err(FrameError::TooLarge(len, self.max_length))));
                    }
                    self.next_index = src.len();
                    return Ok(None);
                }
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> std::result::Result<Option<Self::Item>, Self::Error> {
        if let Some(frame) = self.decode(src)? {
            return Ok(Some(frame));
        }

        // Final line without a trailing newline
        self.next_index = 0;
        if self.discarding || src.is_empty() {
            self.discarding = false;
            src.clear();
            return Ok(None);
        }

        let line = src.split_to(src.len());
        let trimmed = line.trim_ascii();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Self::parse(trimmed)))
        }
    }
}

impl<T: Serialize> Encoder<T> for NdJsonCodec<T> {
    type Error = std::io::Error;

    fn encode(&mut self, item: T, dst: &mut BytesMut) -> std::result::Result<(), Self::Error> {
        // Serialize to JSON (compact, no newlines)
        let json = serde_json::to_vec(&item)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, format!("JSON error: {}", e)))?;

        dst.reserve(json.len() + 1);
        dst.put_slice(&json);
        dst.put_u8(b'\n');

        Ok(())
    }
}
