use std::fmt::{Display, Formatter};

use bytes::{BufMut, Bytes, BytesMut};
use camino::{Utf8Path, Utf8PathBuf};
use dicom::dictionary_std::tags;
use serde::Deserialize;

use crate::error::FixtureError;
use crate::groups::{self, MODALITY, PATIENT_ID, PATIENT_NAME, SOP_CLASS_UID, TRANSFER_SYNTAX_UID};
use crate::pixel::{PixelByteOrder, PixelRaster};
use crate::uid::SOP_INSTANCE_UID;

/// Length of the zero-filled preamble.
pub const PREAMBLE_LEN: usize = 128;

/// Magic code following the preamble.
pub const MAGIC: &[u8; 4] = b"DICM";

/// Height of the raster in pixels.
pub const ROWS: u16 = 256;
/// Width of the raster in pixels.
pub const COLUMNS: u16 = 256;

/// Choices which change the encoded bytes.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
pub struct FixtureOptions {
    #[serde(default)]
    pub pixel_byte_order: PixelByteOrder,
}

/// An encoded DICOM file held in memory.
#[derive(Debug, Clone)]
pub struct Fixture {
    bytes: Bytes,
    meta_group_length: u32,
    raster: PixelRaster,
}

impl Fixture {
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Value of the File Meta Information Group Length element.
    pub fn meta_group_length(&self) -> u32 {
        self.meta_group_length
    }

    pub fn raster(&self) -> &PixelRaster {
        &self.raster
    }
}

/// Encode the fixture: preamble, magic code, file meta information, data set groups,
/// then Pixel Data.
pub fn encode_fixture(options: &FixtureOptions) -> Result<Fixture, FixtureError> {
    let raster = PixelRaster::new(ROWS, COLUMNS, options.pixel_byte_order);
    let mut buf = BytesMut::new();
    buf.put_bytes(0, PREAMBLE_LEN);
    buf.put_slice(MAGIC);
    let meta_group_length = groups::file_meta_group()
        .encode_with_group_length(tags::FILE_META_INFORMATION_GROUP_LENGTH, &mut buf)?;
    for group in groups::data_set_groups(&raster)? {
        let len = group.encode(&mut buf)?;
        tracing::debug!(event = "encode", group = group.name, bytes = len);
    }
    raster.encode(&mut buf)?;
    tracing::info!(event = "encode", bytes = buf.len());
    Ok(Fixture {
        bytes: buf.freeze(),
        meta_group_length,
        raster,
    })
}

/// Write an encoded fixture to `output_path`, creating parent directories as needed.
/// An existing file is overwritten.
pub fn write_fixture<P: AsRef<Utf8Path>>(
    output_path: P,
    fixture: &Fixture,
) -> Result<Utf8PathBuf, FixtureError> {
    let output_path = output_path.as_ref();
    if let Some(parent_dir) = output_path.parent().filter(|p| !p.as_str().is_empty()) {
        fs_err::create_dir_all(parent_dir)?;
    }
    match fs_err::write(output_path, fixture.bytes()) {
        Ok(()) => tracing::info!(event = "write", path = output_path.as_str()),
        Err(e) => {
            tracing::error!(event = "write", error = e.to_string());
            return Err(e.into());
        }
    }
    Ok(output_path.to_path_buf())
}

/// Encode the fixture, write it to `output_path`, and print a summary to stdout.
///
/// Returns `output_path`.
pub fn generate<P: AsRef<Utf8Path>>(output_path: P) -> Result<Utf8PathBuf, FixtureError> {
    generate_with(output_path, &FixtureOptions::default())
}

/// [generate] with explicit [FixtureOptions].
pub fn generate_with<P: AsRef<Utf8Path>>(
    output_path: P,
    options: &FixtureOptions,
) -> Result<Utf8PathBuf, FixtureError> {
    let fixture = encode_fixture(options)?;
    let path = write_fixture(output_path, &fixture)?;
    println!("{}", FixtureSummary::new(&path, &fixture));
    Ok(path)
}

/// Human-readable description of a written fixture.
pub struct FixtureSummary<'a> {
    path: &'a Utf8Path,
    size: usize,
    raster: &'a PixelRaster,
}

impl<'a> FixtureSummary<'a> {
    pub fn new(path: &'a Utf8Path, fixture: &'a Fixture) -> Self {
        Self {
            path,
            size: fixture.bytes.len(),
            raster: &fixture.raster,
        }
    }
}

impl Display for FixtureSummary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Created DICOM file: {}", self.path)?;
        writeln!(f, "  Size:             {} bytes", self.size)?;
        writeln!(f, "  PatientName:      {PATIENT_NAME}")?;
        writeln!(f, "  PatientID:        {PATIENT_ID}")?;
        writeln!(f, "  Modality:         {MODALITY}")?;
        writeln!(f, "  SOPClassUID:      {SOP_CLASS_UID}")?;
        writeln!(f, "  SOPInstanceUID:   {SOP_INSTANCE_UID}")?;
        writeln!(f, "  TransferSyntax:   {TRANSFER_SYNTAX_UID}")?;
        writeln!(
            f,
            "  Image:            {}x{}, {:?} endian samples",
            self.raster.columns, self.raster.rows, self.raster.byte_order
        )?;
        writeln!(f)?;
        writeln!(f, "Next steps:")?;
        writeln!(f, "  dcmdump {}", self.path)?;
        write!(
            f,
            "  curl -X POST http://localhost:8042/instances --data-binary @{}",
            self.path
        )
    }
}
