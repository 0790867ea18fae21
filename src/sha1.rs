const INITIALISATION_CONSTANTS: [u32; 5] =
    [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];
const BLOCK_SIZE: usize = 64;
const ROUNDS: usize = 80;

/// SHA-1 computed from first principles, one complete message at a time.
///
/// The running state is reinitialised at the start of every digest, so a
/// reused engine behaves identically to a freshly constructed one.
#[derive(Debug, Clone)]
pub struct Sha1 {
    state: [u32; 5],
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha1 {
    pub fn new() -> Self {
        Self {
            state: INITIALISATION_CONSTANTS,
        }
    }

    /// Discards any running state left over from a previous message.
    pub fn reset(&mut self) {
        self.state = INITIALISATION_CONSTANTS;
    }

    /// Digests `message` and returns it as 40 lowercase hex characters.
    ///
    /// Fails only if the message's bit length does not fit in 64 bits.
    pub fn hexdigest(&mut self, message: &[u8]) -> Result<String, String> {
        self.reset();
        let padded = pad(message)?;
        assert!(
            !padded.is_empty() && padded.len() % BLOCK_SIZE == 0,
            "padded message length {} is not a positive multiple of {}",
            padded.len(),
            BLOCK_SIZE,
        );

        for block in padded.chunks_exact(BLOCK_SIZE) {
            self.process_block(block.try_into().unwrap());
        }

        Ok(self
            .state
            .iter()
            .map(|word| format!("{:08x}", word))
            .collect())
    }

    fn process_block(&mut self, block: &[u8; BLOCK_SIZE]) {
        let w = expand_schedule(block);

        let [mut a, mut b, mut c, mut d, mut e] = self.state;
        for (j, &word) in w.iter().enumerate() {
            let (f, k) = match j {
                0..=19 => (d ^ (b & (c ^ d)), 0x5A827999),
                20..=39 => (b ^ c ^ d, 0x6ED9EBA1),
                40..=59 => ((b & c) | (b & d) | (c & d), 0x8F1BBCDC),
                _ => (b ^ c ^ d, 0xCA62C1D6),
            };

            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(word);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        for (h, register) in self.state.iter_mut().zip([a, b, c, d, e]) {
            *h = h.wrapping_add(register);
        }
    }
}

/// Digests `message` with a fresh engine.
pub fn sha1_hex(message: &[u8]) -> Result<String, String> {
    Sha1::new().hexdigest(message)
}

/// Appends the 0x80 end marker, the zero fill and the big-endian 64-bit
/// bit length of the original message, so the result splits evenly into
/// 64-byte blocks.
fn pad(message: &[u8]) -> Result<Vec<u8>, String> {
    let bit_len = message_bit_length(message.len())?;
    let zeros = (120 - (message.len() + 1) % 64) % 64;

    let mut padded = Vec::with_capacity(message.len() + 1 + zeros + 8);
    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.extend(std::iter::repeat(0x00).take(zeros));
    padded.extend_from_slice(&bit_len.to_be_bytes());
    Ok(padded)
}

fn message_bit_length(byte_len: usize) -> Result<u64, String> {
    (byte_len as u64).checked_mul(8).ok_or_else(|| {
        format!(
            "message of {} bytes exceeds SHA-1's 64-bit length field",
            byte_len
        )
    })
}

fn expand_schedule(block: &[u8; BLOCK_SIZE]) -> [u32; ROUNDS] {
    let mut w = [0u32; ROUNDS];
    for (j, word) in block.chunks_exact(4).enumerate() {
        w[j] = u32::from_be_bytes(word.try_into().unwrap());
    }
    for j in 16..ROUNDS {
        w[j] = (w[j - 3] ^ w[j - 8] ^ w[j - 14] ^ w[j - 16]).rotate_left(1);
    }
    w
}
