use anyhow::anyhow;
use miniz_oxide::{
    deflate::compress_to_vec_zlib,
    inflate::{decompress_to_vec_zlib_with_limit, TINFLStatus},
};

const COMPRESSION_LEVEL: u8 = 9;

pub(crate) fn compress_data(raw_scanlines: &[u8]) -> Vec<u8> {
    compress_to_vec_zlib(raw_scanlines, COMPRESSION_LEVEL)
}

/// Inflates at most `limit` bytes; a stream that would produce more is an
/// error.
pub(crate) fn decompress_data(compressed_data: &[u8], limit: usize) -> anyhow::Result<Vec<u8>> {
    decompress_to_vec_zlib_with_limit(compressed_data, limit).map_err(|e| match e.status {
        TINFLStatus::HasMoreOutput => anyhow!("image data inflates past {limit} bytes"),
        status => anyhow!("Failed to decompress image data: {:?}", status),
    })
}
