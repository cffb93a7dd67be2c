use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IniError {
    #[error("error accessing ini file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IniError {
    pub fn io<P>(path: P, source: io::Error) -> Self
    where
        P: Into<PathBuf>,
    {
        IniError::Io { path: path.into(), source }
    }
}
