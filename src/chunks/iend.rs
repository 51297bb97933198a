use std::borrow::Cow;

use super::WritableChunk;

pub const HEADER: &[u8; 4] = b"IEND";

pub(crate) struct IENDChunk;

impl WritableChunk for IENDChunk {
    const HEADER: &'static [u8; 4] = HEADER;

    fn payload(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&[])
    }
}
