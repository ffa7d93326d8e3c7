use dicom::core::Tag;

#[derive(thiserror::Error, Debug)]
pub enum FixtureError {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("value of {tag} is not a valid UID: {value:?}")]
    InvalidUid { tag: Tag, value: String },

    #[error("value of {tag} is {len} bytes long, which does not fit a 16-bit length field")]
    ValueTooLong { tag: Tag, len: usize },

    #[error(transparent)]
    DateFormat(#[from] time::error::Format),

    #[error(transparent)]
    Config(#[from] figment::Error),
}
