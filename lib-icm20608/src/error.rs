use core::{error, fmt};


/// Failure of a driver operation. `T` is the transport error, `L` the output line error.
/// 
#[derive(Debug)]
pub enum Error<T, L>
{
    /// The bus could not be opened in the required mode.
    Open(T),

    /// The bus handle could not be released.
    Close(T),

    /// Exporting, configuring or driving the chip-select line failed.
    Line(L),

    /// A register read or write failed on the bus.
    Transaction(T),
}

impl<T, L> Error<T, L> {

    /// Whether the failure only concerns a single transaction. Such failures leave the session
    /// usable, every other kind should be treated as fatal.
    /// 
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transaction(_))
    }
}

impl<T: fmt::Debug, L: fmt::Debug> error::Error for Error<T, L> {}

impl<T: fmt::Debug, L: fmt::Debug> fmt::Display for Error<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Open(err) => write!(f, "Failed to open bus: {:?}", err),
            Self::Close(err) => write!(f, "Failed to close bus: {:?}", err),
            Self::Line(err) => write!(f, "Chip-select line error: {:?}", err),
            Self::Transaction(err) => write!(f, "Bus transaction failed: {:?}", err),
        }
    }
}
