//! Protocol Module
//!
//! The driver-facing surface of the store as data.
//!
//! ## Shell Grammar
//! One command per line; tokens are separated by whitespace and a double
//! quoted run forms a single token.
//! ```text
//! add <identifier> <name> <age> <dd.mm.yyyy>
//! append <identifier> <record-line>
//! list | next-id | clear
//! exists <identifier> | get <identifier>
//! search <field> <value> | delete <field> <value>
//! open <path> | save <path>
//! ```
//!
//! ### Examples
//! - `add 42 "Mary Ann" 30 01.01.1990`
//! - `search "date of birth" 01.01.1990`
//! - `delete name eve`

mod codec;
mod command;
mod response;

pub use codec::{decode_command, encode_outcome, tokenize};
pub use command::{Command, CommandType};
pub use response::Outcome;
