use thiserror::Error;

/// Errors raised while building or reading a [`HitsSchema`](crate::schema::HitsSchema).
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Hits schema has no columns")]
    EmptySchema,

    #[error("Hits schema is missing the required column `{0}`")]
    MissingColumn(&'static str),

    #[error("Hits schema lists the column `{0}` more than once")]
    DuplicateColumn(String),

    #[error(
        "Missing or invalid file extension in hits schema file. It must be `toml`, `yaml` or `yml`"
    )]
    InvalidFileType,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
