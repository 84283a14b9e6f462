use crate::api::models::StreamResponse;
use crate::error::{GrokError, Result};
use crate::ui::log_verbose;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use std::collections::VecDeque;
use std::io::Write;

pub const DATA_PREFIX: &str = "data: ";
pub const DONE_MARKER: &str = "[DONE]";

/// Splits a byte stream into complete lines.
///
/// Bytes are held until a `\n` arrives so that a UTF-8 sequence split
/// across two network chunks is decoded intact.
#[derive(Default)]
pub struct LineDecoder {
    pending: Vec<u8>,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let raw: Vec<u8> = self.pending.drain(..=pos).collect();
            lines.push(decode_line(&raw[..raw.len() - 1]));
        }
        lines
    }

    /// Whatever is left once the body has ended without a final newline.
    pub fn finish(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        let raw = std::mem::take(&mut self.pending);
        Some(decode_line(&raw))
    }
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

#[derive(Debug, PartialEq)]
pub enum SseFrame {
    Content(String),
    Done,
    /// Not a `data: ` line, or a chunk with no text in it.
    Ignored,
    Malformed(String),
}

pub fn parse_line(line: &str) -> SseFrame {
    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return SseFrame::Ignored;
    };

    if payload == DONE_MARKER {
        return SseFrame::Done;
    }

    match serde_json::from_str::<StreamResponse>(payload) {
        Ok(parsed) => match parsed.into_content() {
            Some(content) => SseFrame::Content(content),
            None => SseFrame::Ignored,
        },
        Err(e) => SseFrame::Malformed(e.to_string()),
    }
}

/// Lazy, single-pass sequence of text fragments decoded from a chat
/// completion stream. Once it has yielded `None` it stays exhausted.
pub struct DeltaStream<S> {
    inner: S,
    decoder: LineDecoder,
    ready: VecDeque<String>,
    body_ended: bool,
    done: bool,
    verbose: bool,
}

impl<S, E> DeltaStream<S>
where
    S: Stream<Item = std::result::Result<Bytes, E>> + Unpin,
    E: Into<GrokError>,
{
    pub fn new(inner: S, verbose: bool) -> Self {
        Self {
            inner,
            decoder: LineDecoder::new(),
            ready: VecDeque::new(),
            body_ended: false,
            done: false,
            verbose,
        }
    }

    pub async fn next_fragment(&mut self) -> Result<Option<String>> {
        loop {
            if self.done {
                return Ok(None);
            }

            while let Some(line) = self.ready.pop_front() {
                match parse_line(&line) {
                    SseFrame::Content(content) => return Ok(Some(content)),
                    SseFrame::Done => {
                        self.done = true;
                        self.ready.clear();
                        return Ok(None);
                    }
                    SseFrame::Ignored => {}
                    SseFrame::Malformed(e) => {
                        log_verbose(self.verbose, format!("skipped malformed frame: {}", e));
                    }
                }
            }

            if self.body_ended {
                self.done = true;
                return Ok(None);
            }

            match self.inner.next().await {
                Some(Ok(chunk)) => {
                    self.ready.extend(self.decoder.push(&chunk));
                }
                Some(Err(e)) => return Err(e.into()),
                None => {
                    self.body_ended = true;
                    self.ready.extend(self.decoder.finish());
                }
            }
        }
    }
}

/// Write every fragment to `out` as it arrives, then one newline.
///
/// Returns the full assistant reply.
pub async fn render_stream<S, E, W>(stream: &mut DeltaStream<S>, out: &mut W) -> Result<String>
where
    S: Stream<Item = std::result::Result<Bytes, E>> + Unpin,
    E: Into<GrokError>,
    W: Write,
{
    let mut reply = String::new();

    while let Some(fragment) = stream.next_fragment().await? {
        write!(out, "{}", fragment)?;
        out.flush()?;
        reply.push_str(&fragment);
    }

    writeln!(out)?;
    out.flush()?;

    Ok(reply)
}

pub async fn process_streaming_response<W: Write>(
    response: reqwest::Response,
    verbose: bool,
    out: &mut W,
) -> Result<String> {
    let mut stream = DeltaStream::new(response.bytes_stream(), verbose);
    render_stream(&mut stream, out).await
}
