#[derive(Debug)]
pub enum Error {
    IO(std::io::Error),
    FileNotFound(String),
    InvalidPuzzle(String),
    TomlDeserialize(toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::IO(value)
    }
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Error::TomlDeserialize(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IO(e) => write!(f, "IO error: {e}"),
            Self::FileNotFound(file) => write!(f, "puzzle file not found: {file}"),
            Self::InvalidPuzzle(file) => write!(f, "not a valid puzzle: {file}"),
            Self::TomlDeserialize(e) => write!(f, "TOML deserialization error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IO(e) => e.source(),
            Self::FileNotFound(_) => None,
            Self::InvalidPuzzle(_) => None,
            Self::TomlDeserialize(e) => e.source(),
        }
    }
}
