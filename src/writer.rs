use std::{io::Write, marker::PhantomData};

use serde::Serialize;

/// Writes messages as newline-delimited JSON.
pub struct MessageWriter<T, W> {
    stream: W,
    _marker: PhantomData<T>,
}

impl<T: Serialize, W: Write> MessageWriter<T, W> {
    pub fn new(stream: W) -> Self {
        Self {
            stream,
            _marker: PhantomData,
        }
    }

    pub fn send(&mut self, msg: T) -> anyhow::Result<()> {
        let serialized = serde_json::to_vec(&msg)?;
        self.stream.write_all(&serialized)?;
        self.stream.write_all(b"\n")?;
        self.stream.flush()?;
        Ok(())
    }
}
