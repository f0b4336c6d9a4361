//! Positioned little-endian cursor over a seekable byte source.

use std::io::{self, Read, Seek, SeekFrom};

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};

use super::error::DecodeError;

/// Sequential binary reader that tracks its own position.
///
/// The source length is measured once on construction so that reads and
/// seeks past the end fail before any buffer is allocated.
pub struct PrimitiveReader<R: Read + Seek> {
    inner: R,
    position: u64,
    len: u64,
}

impl<R: Read + Seek> PrimitiveReader<R> {
    /// Wrap a seekable source, positioning the cursor at offset 0.
    pub fn new(mut inner: R) -> Result<Self, DecodeError> {
        let len = inner
            .seek(SeekFrom::End(0))
            .map_err(|e| DecodeError::io(0, e))?;
        inner
            .seek(SeekFrom::Start(0))
            .map_err(|e| DecodeError::io(0, e))?;
        Ok(Self {
            inner,
            position: 0,
            len,
        })
    }

    /// Current byte offset from the start of the source.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Total length of the source in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` if the source holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes between the cursor and the end of the source.
    pub fn remaining(&self) -> u64 {
        self.len.saturating_sub(self.position)
    }

    /// Consume the reader, returning the wrapped source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn ensure_available(&self, needed: u64) -> Result<(), DecodeError> {
        if needed > self.remaining() {
            return Err(DecodeError::io(
                self.position,
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!(
                        "need {} bytes, {} remaining of {}",
                        needed,
                        self.remaining(),
                        self.len
                    ),
                ),
            ));
        }
        Ok(())
    }

    fn read_with<T>(
        &mut self,
        size: u64,
        read: impl FnOnce(&mut R) -> io::Result<T>,
    ) -> Result<T, DecodeError> {
        self.ensure_available(size)?;
        let start = self.position;
        let value = read(&mut self.inner).map_err(|e| DecodeError::io(start, e))?;
        self.position += size;
        Ok(value)
    }

    /// Read a signed 32-bit integer.
    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        self.read_with(4, |r| r.read_i32::<LittleEndian>())
    }

    /// Read an unsigned 32-bit integer.
    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        self.read_with(4, |r| r.read_u32::<LittleEndian>())
    }

    /// Read a signed 64-bit integer.
    pub fn read_i64(&mut self) -> Result<i64, DecodeError> {
        self.read_with(8, |r| r.read_i64::<LittleEndian>())
    }

    /// Read a 32-bit float.
    pub fn read_f32(&mut self) -> Result<f32, DecodeError> {
        self.read_with(4, |r| r.read_f32::<LittleEndian>())
    }

    /// Read a one-byte boolean (any non-zero byte is `true`).
    pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
        self.read_with(1, |r| r.read_u8()).map(|b| b != 0)
    }

    /// Read exactly `n` raw bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, DecodeError> {
        self.read_with(n as u64, |r| {
            let mut buf = vec![0u8; n];
            r.read_exact(&mut buf)?;
            Ok(buf)
        })
    }

    /// Read `count` consecutive 32-bit floats into a pre-sized vector.
    pub fn read_f32_vec(&mut self, count: usize) -> Result<Vec<f32>, DecodeError> {
        let size = (count as u64).saturating_mul(4);
        self.read_with(size, |r| {
            let mut raw = vec![0u8; count * 4];
            r.read_exact(&mut raw)?;
            let mut values = vec![0f32; count];
            LittleEndian::read_f32_into(&raw, &mut values);
            Ok(values)
        })
    }

    /// Move the cursor to an absolute offset (at most the source length).
    pub fn seek_absolute(&mut self, offset: u64) -> Result<(), DecodeError> {
        if offset > self.len {
            return Err(DecodeError::io(
                self.position,
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("seek to {} beyond end of source ({})", offset, self.len),
                ),
            ));
        }
        self.inner
            .seek(SeekFrom::Start(offset))
            .map_err(|e| DecodeError::io(self.position, e))?;
        self.position = offset;
        Ok(())
    }

    /// Move the cursor by `delta` bytes relative to the current position.
    pub fn seek_relative(&mut self, delta: i64) -> Result<(), DecodeError> {
        let target = self.position.checked_add_signed(delta).ok_or_else(|| {
            DecodeError::io(
                self.position,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("relative seek by {} from {} leaves the source", delta, self.position),
                ),
            )
        })?;
        self.seek_absolute(target)
    }
}
