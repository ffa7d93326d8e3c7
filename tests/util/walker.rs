//! Reads back the element layout written by dcmfixture: explicit VR little endian
//! elements with 16-bit lengths, and a Pixel Data element with a 32-bit length.

use dcmfixture::{MAGIC, PREAMBLE_LEN};

pub(crate) const PIXEL_DATA: (u16, u16) = (0x7FE0, 0x0010);

#[derive(Debug)]
pub(crate) struct RawElement {
    pub tag: (u16, u16),
    /// Absent for Pixel Data.
    pub vr: Option<[u8; 2]>,
    /// Offset of the element header in the file.
    pub offset: usize,
    /// Offset of the first value byte in the file.
    pub value_offset: usize,
    pub value: Vec<u8>,
}

impl RawElement {
    pub fn encoded_len(&self) -> usize {
        self.value_offset - self.offset + self.value.len()
    }

    pub fn as_u16(&self) -> u16 {
        u16::from_le_bytes(self.value[..2].try_into().unwrap())
    }

    pub fn as_u32(&self) -> u32 {
        u32::from_le_bytes(self.value[..4].try_into().unwrap())
    }
}

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

/// Walk every element after the preamble and magic code.
///
/// Panics if a declared length runs past the end of the file.
pub(crate) fn walk(bytes: &[u8]) -> Vec<RawElement> {
    let mut elements = Vec::new();
    let mut pos = PREAMBLE_LEN + MAGIC.len();
    while pos < bytes.len() {
        let offset = pos;
        let tag = (read_u16(bytes, pos), read_u16(bytes, pos + 2));
        pos += 4;
        let (vr, len) = if tag == PIXEL_DATA {
            let len = u32::from_le_bytes(bytes[pos..pos + 4].try_into().unwrap()) as usize;
            pos += 4;
            (None, len)
        } else {
            let vr = [bytes[pos], bytes[pos + 1]];
            let len = read_u16(bytes, pos + 2) as usize;
            pos += 4;
            (Some(vr), len)
        };
        assert!(
            pos + len <= bytes.len(),
            "element {tag:04X?} at offset {offset} declares {len} bytes but only {} remain",
            bytes.len() - pos
        );
        elements.push(RawElement {
            tag,
            vr,
            offset,
            value_offset: pos,
            value: bytes[pos..pos + len].to_vec(),
        });
        pos += len;
    }
    elements
}

pub(crate) fn find(elements: &[RawElement], tag: (u16, u16)) -> &RawElement {
    elements
        .iter()
        .find(|e| e.tag == tag)
        .unwrap_or_else(|| panic!("element {tag:04X?} not found"))
}
