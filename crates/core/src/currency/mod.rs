//! Currency registry, exchange rate resolution, and conversion.

pub mod conversion;
pub mod exchange;
pub mod parse;
pub mod registry;
pub mod request;
pub mod resolver;
pub mod source;

#[cfg(test)]
mod props;
#[cfg(test)]
pub(crate) mod testing;

pub use conversion::{ConversionCalculator, ConversionError, ConversionResult, RateBasis};
pub use exchange::{ExchangeRate, RateCandidate, RateWindow};
pub use registry::{CurrencyDescriptor, CurrencyRegistry, USD};
pub use request::{CandidateField, RateRequest};
pub use resolver::{RateResolver, ResolveError};
pub use source::{RateSource, SourceError};
