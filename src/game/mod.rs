mod board;
pub use board::*;
mod cell;
pub use cell::*;
mod lines;
pub use lines::*;
mod rules;
pub use rules::*;
