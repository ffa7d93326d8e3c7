//! Settings, which are configurable using environment variables.
use camino::Utf8PathBuf;
use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::Deserialize;

use crate::error::FixtureError;
use crate::fixture::FixtureOptions;
use crate::pixel::PixelByteOrder;

pub const DEFAULT_OUTPUT: &str = "test-data/dicom-samples/sample-valid.dcm";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FixtureSettings {
    /// Where to write the DICOM file.
    #[serde(default = "default_output")]
    pub output: Utf8PathBuf,
    #[serde(default)]
    pub pixel_byte_order: PixelByteOrder,
}

impl FixtureSettings {
    /// Load settings from `DCMFIXTURE_*` environment variables. `output`, when given,
    /// takes precedence over `DCMFIXTURE_OUTPUT`.
    pub fn load(output: Option<Utf8PathBuf>) -> Result<Self, FixtureError> {
        Ok(figment(output).extract()?)
    }

    pub fn options(&self) -> FixtureOptions {
        FixtureOptions {
            pixel_byte_order: self.pixel_byte_order,
        }
    }
}

fn figment(output: Option<Utf8PathBuf>) -> Figment {
    let figment = Figment::new().merge(Env::prefixed("DCMFIXTURE_"));
    match output {
        Some(output) => figment.merge(Serialized::default("output", output)),
        None => figment,
    }
}

fn default_output() -> Utf8PathBuf {
    Utf8PathBuf::from(DEFAULT_OUTPUT)
}
