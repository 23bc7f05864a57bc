use std::{
    collections::VecDeque,
    io::{Read, Write},
};

use crate::{
    merge::merge,
    messages::{MergeRequest, MergeResponse, MergeResult},
    reader::MessageReader,
    sequence::is_non_decreasing,
    writer::MessageWriter,
};

/// Merges one request. Unsorted inputs are merged anyway and flagged.
pub fn handle_request(req: MergeRequest) -> MergeResult {
    let sorted_inputs = is_non_decreasing(&req.left) && is_non_decreasing(&req.right);
    if !sorted_inputs {
        log::warn!("input is not sorted, merged output order is unspecified");
    }
    let mut left = VecDeque::from(req.left);
    let mut right = VecDeque::from(req.right);
    let merged = merge(&mut left, &mut right);
    MergeResult {
        merged: merged.into(),
        sorted_inputs,
    }
}

/// Answers every request line from `input` with one response line on
/// `output`. Undecodable lines get an error response; I/O errors abort.
/// Returns the number of requests handled.
pub fn serve<R: Read, W: Write>(input: R, output: W) -> anyhow::Result<usize> {
    let reader = MessageReader::<MergeRequest, _>::new(input);
    let mut writer = MessageWriter::<MergeResponse, _>::new(output);
    let mut handled = 0;
    for msg in reader {
        let response = match msg {
            Ok(req) => MergeResponse::Merged(handle_request(req)),
            Err(e) if e.is::<serde_json::Error>() => {
                log::debug!("rejecting request: {e}");
                MergeResponse::Error(e.to_string())
            }
            Err(e) => return Err(e),
        };
        writer.send(response)?;
        handled += 1;
    }
    log::debug!("handled {handled} requests");
    Ok(handled)
}
