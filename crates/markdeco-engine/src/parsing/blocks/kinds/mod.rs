pub mod block_quote;
pub mod heading;
pub mod list_marker;

pub use block_quote::BlockQuote;
pub use heading::Heading;
pub use list_marker::ListMarker;
