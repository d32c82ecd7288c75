pub mod code;
pub mod conversion;
pub mod error;
pub mod variant;

pub use code::NdcCode;
pub use conversion::ConversionResult;
pub use error::{NdcError, Result};
pub use variant::{Confidence, Direction, SegmentVariant};
