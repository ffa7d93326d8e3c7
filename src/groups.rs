//! The element groups making up the fixture, in the order they are written.
use dicom::core::VR;
use dicom::dictionary_std::{tags, uids};
use time::Date;
use time::macros::{date, format_description};

use crate::element::{Element, ElementGroup};
use crate::error::FixtureError;
use crate::pixel::{BITS_ALLOCATED, BITS_STORED, HIGH_BIT, PixelRaster};
use crate::uid;

pub const SOP_CLASS_UID: &str = uids::COMPUTED_RADIOGRAPHY_IMAGE_STORAGE;
pub const TRANSFER_SYNTAX_UID: &str = uids::IMPLICIT_VR_LITTLE_ENDIAN;
pub const MODALITY: &str = "CR";
pub const PATIENT_NAME: &str = "Fixture^Test";
pub const PATIENT_ID: &str = "FIXTURE0001";
pub const PHOTOMETRIC_INTERPRETATION: &str = "MONOCHROME2";

const STUDY_DATE: Date = date!(2024 - 01 - 15);
const PATIENT_BIRTH_DATE: Date = date!(1980 - 06 - 30);

/// Format a date as a DICOM DA value.
fn da(date: Date) -> Result<String, FixtureError> {
    Ok(date.format(format_description!("[year][month][day]"))?)
}

/// File Meta Information, without its group length element.
pub fn file_meta_group() -> ElementGroup {
    ElementGroup::new(
        "file meta information",
        [
            Element::new(tags::MEDIA_STORAGE_SOP_CLASS_UID, VR::UI, SOP_CLASS_UID),
            Element::new(
                tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
                VR::UI,
                uid::SOP_INSTANCE_UID,
            ),
            Element::new(tags::TRANSFER_SYNTAX_UID, VR::UI, TRANSFER_SYNTAX_UID),
            Element::new(
                tags::IMPLEMENTATION_CLASS_UID,
                VR::UI,
                uid::IMPLEMENTATION_CLASS_UID,
            ),
            Element::new(
                tags::IMPLEMENTATION_VERSION_NAME,
                VR::SH,
                uid::IMPLEMENTATION_VERSION_NAME,
            ),
        ],
    )
}

/// The data set groups following the meta information, in order.
///
/// Image geometry is taken from `raster` so Rows and Columns always describe the
/// Pixel Data which is actually written.
pub fn data_set_groups(raster: &PixelRaster) -> Result<Vec<ElementGroup>, FixtureError> {
    Ok(vec![
        ElementGroup::new(
            "study description",
            [
                Element::new(tags::SOP_CLASS_UID, VR::UI, SOP_CLASS_UID),
                Element::new(tags::SOP_INSTANCE_UID, VR::UI, uid::SOP_INSTANCE_UID),
                Element::new(tags::STUDY_DATE, VR::DA, da(STUDY_DATE)?),
                Element::new(tags::ACCESSION_NUMBER, VR::SH, "ACC0001"),
                Element::new(tags::MODALITY, VR::CS, MODALITY),
                Element::new(tags::STUDY_DESCRIPTION, VR::LO, "Archive fixture study"),
                Element::new(tags::SERIES_DESCRIPTION, VR::LO, "Synthetic gradient"),
            ],
        ),
        ElementGroup::new(
            "patient",
            [
                Element::new(tags::PATIENT_NAME, VR::PN, PATIENT_NAME),
                Element::new(tags::PATIENT_ID, VR::LO, PATIENT_ID),
                Element::new(tags::PATIENT_BIRTH_DATE, VR::DA, da(PATIENT_BIRTH_DATE)?),
                Element::new(tags::PATIENT_SEX, VR::CS, "O"),
            ],
        ),
        ElementGroup::new(
            "identifiers",
            [
                Element::new(tags::STUDY_INSTANCE_UID, VR::UI, uid::STUDY_INSTANCE_UID),
                Element::new(tags::SERIES_INSTANCE_UID, VR::UI, uid::SERIES_INSTANCE_UID),
                Element::new(tags::STUDY_ID, VR::SH, "1"),
                Element::new(tags::SERIES_NUMBER, VR::IS, "1"),
                Element::new(tags::INSTANCE_NUMBER, VR::IS, "1"),
            ],
        ),
        ElementGroup::new(
            "image pixel",
            [
                Element::new(tags::SAMPLES_PER_PIXEL, VR::US, 1u16),
                Element::new(
                    tags::PHOTOMETRIC_INTERPRETATION,
                    VR::CS,
                    PHOTOMETRIC_INTERPRETATION,
                ),
                Element::new(tags::ROWS, VR::US, raster.rows),
                Element::new(tags::COLUMNS, VR::US, raster.columns),
                Element::new(tags::BITS_ALLOCATED, VR::US, BITS_ALLOCATED),
                Element::new(tags::BITS_STORED, VR::US, BITS_STORED),
                Element::new(tags::HIGH_BIT, VR::US, HIGH_BIT),
                // unsigned
                Element::new(tags::PIXEL_REPRESENTATION, VR::US, 0u16),
            ],
        ),
    ])
}
