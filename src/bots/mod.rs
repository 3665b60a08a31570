pub mod human;
pub mod random;
pub mod registry;
pub mod scripted;

pub use human::{HumanBot, LineSource, SharedLines};
pub use random::RandomBot;
pub use registry::{create_bot_from_spec, label_for_spec};
pub use scripted::ScriptedBot;
