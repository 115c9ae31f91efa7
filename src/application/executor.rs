//! Timed execution of a single codec call

use std::time::{Duration, Instant};

/// Run `codec_fn` over `input` to completion and measure it.
///
/// The clock is monotonic, so the elapsed time is never negative. Errors
/// are returned unchanged and nothing is retried.
pub fn execute<F, E>(input: &[u8], codec_fn: F) -> Result<(Vec<u8>, Duration), E>
where
    F: FnOnce(&[u8]) -> Result<Vec<u8>, E>,
{
    let start = Instant::now();
    let output = codec_fn(input)?;
    let elapsed = start.elapsed();

    tracing::debug!(
        input_bytes = input.len(),
        output_bytes = output.len(),
        elapsed_us = elapsed.as_micros() as u64,
        "Codec call finished"
    );

    Ok((output, elapsed))
}
