pub mod state;
pub mod token;
