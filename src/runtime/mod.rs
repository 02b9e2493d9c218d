mod action_handler;
pub use action_handler::*;

mod error;
pub use error::*;

mod reducer;
pub use reducer::*;

mod reducer_factory;
pub use reducer_factory::*;

mod reducer_map;
pub use reducer_map::*;

mod store;
pub use store::*;
