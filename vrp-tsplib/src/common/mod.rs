//! Contains common logic used by problem readers.

mod routing;
pub use self::routing::*;

mod text_reader;
pub(crate) use self::text_reader::*;
