//! Interactive confirmation port.

use crate::error::Result;

/// Blocking line input from the operator.
pub trait Confirmation {
    /// Show `message` and block until the operator submits a line.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn ask(&mut self, message: &str) -> Result<String>;
}
