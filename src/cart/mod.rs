//! Cart state management

pub mod line;
pub mod state;

pub use line::CartLine;
pub use state::Cart;
