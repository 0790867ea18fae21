mod batch;
mod sha1;

pub use batch::sha1_hex_batch;
pub use sha1::{sha1_hex, Sha1};
