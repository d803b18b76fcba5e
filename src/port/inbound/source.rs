//! Quote source port.

use crate::domain::Quote;
use crate::error::Result;

/// Supplies a normalized, validated quote set for one detection pass.
///
/// Implementations own schema handling and type coercion; every returned
/// [`Quote`] has already passed [`Quote::try_new`].
pub trait QuoteSource {
    /// Short description of where the quotes come from, for logs.
    fn describe(&self) -> String;

    /// Load every quote.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending record if any row is malformed.
    fn load(&self) -> Result<Vec<Quote>>;
}
