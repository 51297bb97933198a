use anyhow::anyhow;

/// Per-scanline filter type. Only "none" is ever written or accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Filter {
    None = 0,
}

impl TryFrom<u8> for Filter {
    type Error = anyhow::Error;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            i => Err(anyhow!("filter type {i} is not supported")),
        }
    }
}
