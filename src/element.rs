//! Data element descriptors and their explicit VR little endian encoding.
use std::borrow::Cow;

use bytes::{BufMut, BytesMut};
use dicom::core::{Tag, VR};

use crate::error::FixtureError;
use crate::uid::is_valid_uid;

/// Bytes of an element header: tag (4), VR (2), length (2).
pub(crate) const SHORT_HEADER_LEN: usize = 8;

/// Value of a data element, before padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(Cow<'static, str>),
    U16(u16),
    U32(u32),
}

impl Value {
    fn to_bytes(&self) -> Cow<'_, [u8]> {
        match self {
            Value::Str(s) => Cow::Borrowed(s.as_bytes()),
            Value::U16(n) => Cow::Owned(n.to_le_bytes().to_vec()),
            Value::U32(n) => Cow::Owned(n.to_le_bytes().to_vec()),
        }
    }
}

impl From<&'static str> for Value {
    fn from(value: &'static str) -> Self {
        Value::Str(Cow::Borrowed(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(Cow::Owned(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::U16(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::U32(value)
    }
}

/// A (tag, VR, value) descriptor. Length and padding are derived when encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub vr: VR,
    pub value: Value,
}

impl Element {
    pub fn new(tag: Tag, vr: VR, value: impl Into<Value>) -> Self {
        Self {
            tag,
            vr,
            value: value.into(),
        }
    }

    /// Length of the value after padding to an even number of bytes.
    pub fn value_len(&self) -> usize {
        let len = self.value.to_bytes().len();
        len + len % 2
    }

    /// Total number of bytes [Element::encode] writes.
    pub fn encoded_len(&self) -> usize {
        SHORT_HEADER_LEN + self.value_len()
    }

    /// Append this element to `buf`: tag, VR, 16-bit length, then the value padded
    /// with a NUL byte if its length is odd.
    pub fn encode(&self, buf: &mut BytesMut) -> Result<(), FixtureError> {
        self.check_uid()?;
        let value = self.value.to_bytes();
        let padded_len = value.len() + value.len() % 2;
        let len = u16::try_from(padded_len).map_err(|_| FixtureError::ValueTooLong {
            tag: self.tag,
            len: padded_len,
        })?;
        buf.reserve(SHORT_HEADER_LEN + padded_len);
        put_tag(buf, self.tag);
        buf.put_slice(&self.vr.to_bytes());
        buf.put_u16_le(len);
        buf.put_slice(&value);
        if value.len() % 2 == 1 {
            buf.put_u8(0);
        }
        Ok(())
    }

    fn check_uid(&self) -> Result<(), FixtureError> {
        match (&self.vr, &self.value) {
            (VR::UI, Value::Str(uid)) if !is_valid_uid(uid) => Err(FixtureError::InvalidUid {
                tag: self.tag,
                value: uid.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Write a tag as two little endian u16: group, then element.
pub(crate) fn put_tag(buf: &mut BytesMut, tag: Tag) {
    buf.put_u16_le(tag.group());
    buf.put_u16_le(tag.element());
}

/// A named, ordered sequence of elements emitted together.
#[derive(Debug, Clone)]
pub struct ElementGroup {
    pub name: &'static str,
    pub elements: Vec<Element>,
}

impl ElementGroup {
    pub fn new(name: &'static str, elements: impl IntoIterator<Item = Element>) -> Self {
        Self {
            name,
            elements: elements.into_iter().collect(),
        }
    }

    /// Encode every element in order, returning the number of bytes written.
    pub fn encode(&self, buf: &mut BytesMut) -> Result<usize, FixtureError> {
        let start = buf.len();
        for element in &self.elements {
            element.encode(buf)?;
        }
        Ok(buf.len() - start)
    }

    /// Encode the group preceded by a group length element `(gggg,0000) UL` whose value
    /// is the byte length of everything after it. Returns that declared length.
    pub fn encode_with_group_length(
        &self,
        group_length_tag: Tag,
        buf: &mut BytesMut,
    ) -> Result<u32, FixtureError> {
        let mut body = BytesMut::new();
        let len = self.encode(&mut body)?;
        let group_length = u32::try_from(len).map_err(|_| FixtureError::ValueTooLong {
            tag: group_length_tag,
            len,
        })?;
        Element::new(group_length_tag, VR::UL, group_length).encode(buf)?;
        buf.extend_from_slice(&body);
        Ok(group_length)
    }

    /// Total number of bytes [ElementGroup::encode] writes.
    pub fn encoded_len(&self) -> usize {
        self.elements.iter().map(Element::encoded_len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom::dictionary_std::tags;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn encode(element: &Element) -> Vec<u8> {
        let mut buf = BytesMut::new();
        element.encode(&mut buf).unwrap();
        buf.to_vec()
    }

    #[rstest]
    #[case("ABC", b"ABC\0".as_slice())]
    #[case("ABCD", b"ABCD".as_slice())]
    #[case("", b"".as_slice())]
    fn test_string_padding(#[case] value: &'static str, #[case] expected: &[u8]) {
        let element = Element::new(tags::PATIENT_ID, VR::LO, value);
        let bytes = encode(&element);
        assert_eq!(&bytes[..4], &[0x10, 0x00, 0x20, 0x00]);
        assert_eq!(&bytes[4..6], b"LO");
        assert_eq!(
            u16::from_le_bytes([bytes[6], bytes[7]]) as usize,
            expected.len()
        );
        assert_eq!(&bytes[8..], expected);
        assert_eq!(bytes.len(), element.encoded_len());
    }

    #[test]
    fn test_unsigned_short() {
        let bytes = encode(&Element::new(tags::ROWS, VR::US, 256u16));
        assert_eq!(bytes, vec![0x28, 0x00, 0x10, 0x00, b'U', b'S', 2, 0, 0x00, 0x01]);
    }

    #[test]
    fn test_invalid_uid() {
        let element = Element::new(tags::SOP_INSTANCE_UID, VR::UI, "1.2.x");
        let err = element.encode(&mut BytesMut::new()).unwrap_err();
        assert!(matches!(err, FixtureError::InvalidUid { tag, .. } if tag == tags::SOP_INSTANCE_UID));
    }

    #[test]
    fn test_value_too_long() {
        let element = Element::new(tags::STUDY_DESCRIPTION, VR::LT, "x".repeat(70_000));
        let err = element.encode(&mut BytesMut::new()).unwrap_err();
        assert!(matches!(err, FixtureError::ValueTooLong { len: 70_000, .. }));
    }

    #[test]
    fn test_group_length() {
        let group = ElementGroup::new(
            "test",
            [
                Element::new(tags::TRANSFER_SYNTAX_UID, VR::UI, "1.2.840.10008.1.2"),
                Element::new(tags::IMPLEMENTATION_VERSION_NAME, VR::SH, "ABCD"),
            ],
        );
        let mut buf = BytesMut::new();
        let declared = group
            .encode_with_group_length(tags::FILE_META_INFORMATION_GROUP_LENGTH, &mut buf)
            .unwrap();
        assert_eq!(declared as usize, group.encoded_len());
        assert_eq!(declared, (8 + 18) + (8 + 4));
        assert_eq!(&buf[4..6], b"UL");
        assert_eq!(&buf[8..12], &declared.to_le_bytes());
        assert_eq!(buf.len(), 12 + declared as usize);
    }
}
