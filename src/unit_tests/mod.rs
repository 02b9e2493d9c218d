pub use sample::*;

mod action_creator;
