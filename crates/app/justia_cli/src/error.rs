use justia_core::data::{DataError, LookupError};
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),

    #[error("Data: {}", .0)]
    Data(#[from] DataError),

    #[error("{}", .0)]
    Lookup(#[from] LookupError),
}
