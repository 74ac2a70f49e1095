use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Checked replacements for the preconditions of the raw-pointer routines
pub enum Error {
    /// No `0` terminator was found inside the scanned bound
    #[error("no terminator within {scanned} bytes")]
    InvalidInput { scanned: usize },
    /// A count exceeded the length of one of the buffers
    #[error("{requested} elements requested but only {available} available")]
    OutOfBounds { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Fails with [`Error::OutOfBounds`] unless `requested <= available`
    pub fn ensure_in_bounds(requested: usize, available: usize) -> Result<()> {
        if requested <= available {
            Ok(())
        } else {
            log::debug!("out of bounds: {requested} > {available}");
            Err(Error::OutOfBounds {
                requested,
                available,
            })
        }
    }
}
