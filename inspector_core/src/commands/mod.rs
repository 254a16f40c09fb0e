pub mod batch_cmd;
pub mod command_manager;
pub mod reflect_set_cmd;
pub mod set_value_cmd;

pub use batch_cmd::BatchCmd;
pub use command_manager::{Command, CommandManager};
pub use reflect_set_cmd::ReflectSetCmd;
pub use set_value_cmd::SetValueCmd;
