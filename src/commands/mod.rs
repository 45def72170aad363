pub mod generate;
pub mod list;

pub use generate::{GenCommandArgs, execute_gen, generate_bundle};
pub use list::execute_list;
