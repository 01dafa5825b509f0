//! A two-operand arithmetic calculator with a session history.

pub mod calculator;
pub mod config;
pub mod history;
pub mod items;
pub mod session;
pub mod ui;

pub use calculator::{EvalError, Expression, Operator, ValidationError, evaluate};
pub use history::History;
pub use session::Session;
