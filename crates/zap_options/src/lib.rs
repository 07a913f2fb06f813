mod error;
pub use error::Error;

mod matches;
pub use matches::Matches;

mod option;
pub use option::Opt;

mod parse;
pub use parse::{Match, Options};
