use std::borrow::Cow;

use super::WritableChunk;

pub const HEADER: &[u8; 4] = b"IDAT";

/// Compressed image data. Owned when encoding, borrowed from the input when
/// reading.
#[derive(Debug)]
pub struct IDATChunk<T> {
    pub data: T,
}

impl<T> WritableChunk for IDATChunk<T>
where
    T: AsRef<[u8]>,
{
    const HEADER: &'static [u8; 4] = HEADER;

    fn payload(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.data.as_ref())
    }
}

pub(crate) fn parse_data(chunk_data: &[u8]) -> IDATChunk<&[u8]> {
    IDATChunk { data: chunk_data }
}
