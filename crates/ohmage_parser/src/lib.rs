pub mod elements;
pub mod error;
mod lexer;
mod parser;
mod statements;
mod value;

pub use elements::{
    Configuration, ElementSpec, ResistorSpec, UnknownConfiguration, VoltageSourceSpec,
};
pub use error::NetlistError;
pub use lexer::{Span, TokenKind};
pub use parser::{Deck, parse};
pub use value::{Value, ValueSuffix};
