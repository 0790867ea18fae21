use rayon::prelude::*;

use crate::sha1::sha1_hex;

/// Digests each message with its own fresh engine, in parallel.
///
/// Messages are independent computations, so this is safe to fan out;
/// output order matches input order. The first failing message fails the
/// whole batch.
pub fn sha1_hex_batch<M>(messages: &[M]) -> Result<Vec<String>, String>
where
    M: AsRef<[u8]> + Sync,
{
    messages
        .par_iter()
        .map(|message| sha1_hex(message.as_ref()))
        .collect()
}
