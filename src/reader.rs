use std::{io::Read, marker::PhantomData};

use serde::de::DeserializeOwned;

const CHUNK: usize = 1024;

/// Reads newline-delimited JSON messages from a byte stream.
pub struct MessageReader<T, R> {
    buffer: Vec<u8>,
    loaded: usize,
    /// Bytes of `buffer[..loaded]` already known to hold no newline.
    scanned: usize,
    eof: bool,
    client: R,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned, R: Read> MessageReader<T, R> {
    pub fn new(client: R) -> Self {
        Self {
            buffer: vec![0; CHUNK],
            loaded: 0,
            scanned: 0,
            eof: false,
            client,
            _marker: PhantomData,
        }
    }

    /// Returns the next message, or `None` once the stream is exhausted.
    /// Blank lines are skipped.
    pub fn recv(&mut self) -> Option<anyhow::Result<T>> {
        loop {
            let unscanned = &self.buffer[self.scanned..self.loaded];
            if let Some(offset) = unscanned.iter().position(|c| *c == b'\n') {
                let position = self.scanned + offset;
                let line = self.buffer[..position].to_vec();
                self.consume(position + 1);
                if line.trim_ascii().is_empty() {
                    continue;
                }
                return Some(decode(&line));
            }
            self.scanned = self.loaded;
            if self.eof {
                // last line without a trailing newline
                let line = self.buffer[..self.loaded].to_vec();
                self.consume(self.loaded);
                if line.trim_ascii().is_empty() {
                    return None;
                }
                return Some(decode(&line));
            }
            if self.loaded == self.buffer.len() {
                self.buffer.resize(self.buffer.len() * 2, 0);
            }
            let read_bytes = match self.client.read(&mut self.buffer[self.loaded..]) {
                Ok(b) => b,
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(err) => return Some(Err(err.into())),
            };
            if read_bytes == 0 {
                self.eof = true;
            }
            self.loaded += read_bytes;
        }
    }

    /// Drops the first `n` loaded bytes and gives back memory grown for a
    /// long line once the leftover fits in one chunk again.
    fn consume(&mut self, n: usize) {
        self.buffer.copy_within(n..self.loaded, 0);
        self.loaded -= n;
        self.scanned = 0;
        if self.buffer.len() > CHUNK && self.loaded <= CHUNK {
            self.buffer.truncate(CHUNK);
            self.buffer.shrink_to(CHUNK);
        }
    }
}

fn decode<T: DeserializeOwned>(line: &[u8]) -> anyhow::Result<T> {
    let msg = serde_json::from_slice(line)?;
    Ok(msg)
}

impl<T: DeserializeOwned, R: Read> Iterator for MessageReader<T, R> {
    type Item = anyhow::Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv()
    }
}
