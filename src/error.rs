use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchEnvError {
    #[error("PARAMETER file \"{}\" doesn't exist", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read PARAMETER file \"{}\": {source}", path.display())]
    ParameterRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, BenchEnvError>;
