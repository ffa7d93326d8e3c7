//! The synthetic pixel raster and its Pixel Data element.
use bytes::{BufMut, BytesMut};
use dicom::dictionary_std::tags;
use serde::Deserialize;

use crate::element::put_tag;
use crate::error::FixtureError;

/// Bytes of the Pixel Data element header: tag (4), 32-bit length (4).
pub const PIXEL_HEADER_LEN: usize = 8;

pub const BITS_ALLOCATED: u16 = 16;
pub const BITS_STORED: u16 = 12;
pub const HIGH_BIT: u16 = BITS_STORED - 1;

/// Sample values wrap at this modulus so they stay within [BITS_STORED].
const SAMPLE_MODULUS: u32 = 1 << BITS_STORED;

/// Byte order of the 16-bit samples inside Pixel Data.
///
/// The declared transfer syntax is little endian, but the samples have always been
/// written big endian; [PixelByteOrder::Big] keeps that.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelByteOrder {
    #[default]
    Big,
    Little,
}

/// Single-frame, single-sample grayscale raster with `sample(x, y) = (x + y) mod 4096`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRaster {
    pub rows: u16,
    pub columns: u16,
    pub byte_order: PixelByteOrder,
}

impl PixelRaster {
    pub fn new(rows: u16, columns: u16, byte_order: PixelByteOrder) -> Self {
        Self {
            rows,
            columns,
            byte_order,
        }
    }

    pub fn sample(x: u16, y: u16) -> u16 {
        ((x as u32 + y as u32) % SAMPLE_MODULUS) as u16
    }

    /// Byte length of the raster: rows × columns × 2.
    pub fn value_len(&self) -> usize {
        self.rows as usize * self.columns as usize * (BITS_ALLOCATED as usize / 8)
    }

    /// Append the Pixel Data element: tag, 32-bit little endian length, then every
    /// sample in row-major order.
    pub fn encode(&self, buf: &mut BytesMut) -> Result<(), FixtureError> {
        let len = self.value_len();
        let declared = u32::try_from(len).map_err(|_| FixtureError::ValueTooLong {
            tag: tags::PIXEL_DATA,
            len,
        })?;
        buf.reserve(PIXEL_HEADER_LEN + len);
        put_tag(buf, tags::PIXEL_DATA);
        buf.put_u32_le(declared);
        for y in 0..self.rows {
            for x in 0..self.columns {
                let sample = Self::sample(x, y);
                match self.byte_order {
                    PixelByteOrder::Big => buf.put_u16(sample),
                    PixelByteOrder::Little => buf.put_u16_le(sample),
                }
            }
        }
        Ok(())
    }
}
