//! zlib inflate/deflate for the token payload.
//!
//! Inflate goes through flate2. Deflate calls zlib's `deflateInit2` directly
//! since flate2 has no way to pass a memLevel, and memLevel changes the
//! stream the encoder emits.

use std::ffi::{c_int, c_uint};
use std::mem;

use flate2::{Decompress, FlushDecompress, Status};
use libz_rs_sys::{
    deflate as z_deflate, deflateEnd, deflateInit2_, z_stream, zlibVersion, Z_BUF_ERROR,
    Z_DEFLATED, Z_FINISH, Z_OK, Z_STREAM_END,
};

use crate::codec::CompressionProfile;
use crate::error::{DecodeError, EncodeError};
use crate::limits::MAX_DOCUMENT_SIZE;

/// Inflates a zlib stream, rejecting payloads over [`MAX_DOCUMENT_SIZE`].
///
/// A stream that ends before its final block is an error, not a short read,
/// and so is anything after the stream's checksum.
pub fn inflate(compressed: &[u8]) -> Result<Vec<u8>, DecodeError> {
    inflate_with_limit(compressed, MAX_DOCUMENT_SIZE)
}

pub(crate) fn inflate_with_limit(compressed: &[u8], limit: usize) -> Result<Vec<u8>, DecodeError> {
    // One byte past the limit is enough to tell that the limit was crossed.
    let ceiling = limit.saturating_add(1);
    let mut inflater = Decompress::new(true);
    let mut decompressed =
        Vec::with_capacity(compressed.len().saturating_mul(4).clamp(64, ceiling.max(64)));

    loop {
        if decompressed.len() == decompressed.capacity() {
            let room = ceiling.saturating_sub(decompressed.len()).max(1);
            decompressed.reserve_exact(decompressed.capacity().min(room));
        }

        let in_before = inflater.total_in();
        let out_before = inflater.total_out();
        let input = &compressed[in_before as usize..];

        let status = inflater
            .decompress_vec(input, &mut decompressed, FlushDecompress::None)
            .map_err(|e| DecodeError::DecompressionError(e.to_string()))?;

        if decompressed.len() > limit {
            return Err(DecodeError::LengthExceedsLimit {
                field: "document",
                len: decompressed.len(),
                max: limit,
            });
        }

        match status {
            Status::StreamEnd => {
                if inflater.total_in() as usize != compressed.len() {
                    return Err(DecodeError::DecompressionError(
                        "trailing bytes after zlib stream".to_string(),
                    ));
                }
                return Ok(decompressed);
            }
            Status::Ok | Status::BufError => {
                let stalled = inflater.total_in() == in_before && inflater.total_out() == out_before;
                if stalled && decompressed.len() < decompressed.capacity() {
                    return Err(DecodeError::DecompressionError(
                        "unexpected end of zlib stream".to_string(),
                    ));
                }
            }
        }
    }
}

/// Deflates `data` into a zlib stream after validating `profile`.
///
/// Every profile field reaches `deflateInit2`. Output is deterministic for a
/// given input and profile.
pub fn deflate(data: &[u8], profile: &CompressionProfile) -> Result<Vec<u8>, EncodeError> {
    profile.validate()?;

    let avail_in = c_uint::try_from(data.len())
        .map_err(|_| EncodeError::CompressionFailed("payload too large to deflate".to_string()))?;

    let mut deflater = Deflater::new(profile)?;
    let stream = &mut *deflater.stream;
    stream.next_in = data.as_ptr().cast_mut();
    stream.avail_in = avail_in;

    let mut out: Vec<u8> = Vec::with_capacity(data.len() / 2 + 64);
    loop {
        if out.len() == out.capacity() {
            out.reserve(out.capacity());
        }
        let spare = out.capacity() - out.len();
        let avail_out = c_uint::try_from(spare).unwrap_or(c_uint::MAX);

        stream.next_out = out.spare_capacity_mut().as_mut_ptr().cast();
        stream.avail_out = avail_out;

        // SAFETY: the stream was initialised by `deflateInit2_`, `next_in`
        // covers the unread part of `data`, and `next_out` points at
        // `avail_out` writable bytes of `out`'s spare capacity.
        let code = unsafe { z_deflate(stream, Z_FINISH) };

        let written = (avail_out - stream.avail_out) as usize;
        // SAFETY: zlib initialised exactly `written` bytes past `out.len()`.
        unsafe { out.set_len(out.len() + written) };

        match code {
            Z_STREAM_END => return Ok(out),
            Z_OK | Z_BUF_ERROR => {}
            code => {
                return Err(EncodeError::CompressionFailed(format!(
                    "deflate returned {code}"
                )));
            }
        }
    }
}

/// Owns an initialised deflate stream and ends it on drop.
///
/// Boxed because zlib's internal state points back at the stream.
struct Deflater {
    stream: Box<z_stream>,
}

impl Deflater {
    fn new(profile: &CompressionProfile) -> Result<Self, EncodeError> {
        // SAFETY: an all-zero `z_stream` has null buffers and no custom
        // allocator, which is the state `deflateInit2_` expects.
        let mut stream: Box<z_stream> = Box::new(unsafe { mem::zeroed() });

        let level = c_int::try_from(profile.level)
            .map_err(|_| EncodeError::CompressionFailed("level out of range".to_string()))?;
        // SAFETY: `stream` is zeroed and outlives the call; the version and
        // size arguments describe the linked library's own `z_stream`.
        let code = unsafe {
            deflateInit2_(
                &mut *stream,
                level,
                Z_DEFLATED,
                c_int::from(profile.window_bits),
                c_int::from(profile.mem_level),
                c_int::from(profile.strategy),
                zlibVersion(),
                mem::size_of::<z_stream>() as c_int,
            )
        };
        if code != Z_OK {
            return Err(EncodeError::CompressionFailed(format!(
                "deflateInit2 returned {code}"
            )));
        }
        Ok(Self { stream })
    }
}

impl Drop for Deflater {
    fn drop(&mut self) {
        // SAFETY: the stream was initialised in `new` and is ended only here.
        unsafe {
            deflateEnd(&mut *self.stream);
        }
    }
}
