use crate::domain::ticket::TicketRequest;
use crate::error::{PurchaseError, Result};
use std::io::Read;

/// Reads ticket requests from a CSV source.
///
/// Expects a `category, count` header. Wraps `csv::Reader`, trimming
/// whitespace and tolerating trailing columns.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<TicketRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PurchaseError::from))
    }

    /// Reads the whole batch, failing on the first malformed row.
    pub fn read_all(self) -> Result<Vec<TicketRequest>> {
        self.requests().collect()
    }
}
