mod element;
mod error;
mod fixture;
mod groups;
mod pixel;
mod settings;
mod uid;

pub use element::{Element, ElementGroup, Value};
pub use error::FixtureError;
pub use fixture::{
    COLUMNS, Fixture, FixtureOptions, FixtureSummary, MAGIC, PREAMBLE_LEN, ROWS, encode_fixture, generate,
    generate_with, write_fixture,
};
pub use groups::{SOP_CLASS_UID, TRANSFER_SYNTAX_UID};
pub use pixel::{PixelByteOrder, PixelRaster};
pub use settings::{DEFAULT_OUTPUT, FixtureSettings};
pub use uid::SOP_INSTANCE_UID;
