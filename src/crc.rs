const CRC_TABLE: [u32; 256] = {
    let mut table = [0; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 {
                0xedb88320 ^ (c >> 1)
            } else {
                c >> 1
            };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
};

/// Running CRC32 over one or more byte slices, as used for PNG chunks.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Crc(u32);

impl Crc {
    pub(crate) const fn new() -> Self {
        Self(0xffffffff)
    }

    pub(crate) fn update(mut self, data: &[u8]) -> Self {
        for &b in data {
            let index = (self.0 ^ b as u32) & 0xff;
            self.0 = CRC_TABLE[index as usize] ^ (self.0 >> 8);
        }
        self
    }

    pub(crate) const fn finish(self) -> u32 {
        self.0 ^ 0xffffffff
    }
}

/// CRC of a chunk: covers the type tag and the payload, never the length.
pub(crate) fn chunk_crc(chunk_type: &[u8; 4], payload: &[u8]) -> u32 {
    Crc::new().update(chunk_type).update(payload).finish()
}
