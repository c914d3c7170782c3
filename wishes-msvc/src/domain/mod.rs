pub mod token_commander;
pub mod token_model;
pub mod wish_commander;
pub mod wish_model;
pub mod wish_querier;
