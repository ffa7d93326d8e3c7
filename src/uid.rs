//! UIDs written into the fixture, and a check that a string is a well-formed UID.
//!
//! <https://dicom.nema.org/medical/dicom/current/output/chtml/part05/chapter_9.html>

use regex::Regex;
use std::sync::OnceLock;

/// Implementation Class UID identifying this program as the file writer.
pub const IMPLEMENTATION_CLASS_UID: &str = "1.2.826.0.1.3680043.8.498.1";

/// Implementation Version Name. VR is SH, so at most 16 characters.
pub const IMPLEMENTATION_VERSION_NAME: &str = "DCMFIXTURE_01";

pub const STUDY_INSTANCE_UID: &str = "1.2.826.0.1.3680043.8.498.10001";
pub const SERIES_INSTANCE_UID: &str = "1.2.826.0.1.3680043.8.498.10002";
pub const SOP_INSTANCE_UID: &str = "1.2.826.0.1.3680043.8.498.10003";

/// Maximum length of a UID, excluding padding.
const MAX_UID_LEN: usize = 64;

/// Whether `uid` is a dotted-decimal UID: numeric components without leading zeros,
/// at most 64 characters. Trailing NUL padding is not part of the UID.
pub(crate) fn is_valid_uid(uid: &str) -> bool {
    uid.len() <= MAX_UID_LEN
        && UID_RE
            .get_or_init(|| Regex::new(r"^(0|[1-9][0-9]*)(\.(0|[1-9][0-9]*))*$").unwrap())
            .is_match(uid)
}

static UID_RE: OnceLock<Regex> = OnceLock::new();
