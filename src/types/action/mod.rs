mod action;
pub use action::*;

mod action_creator;
pub use action_creator::*;

mod action_type;
pub use action_type::*;
