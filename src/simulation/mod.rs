pub mod activity;
pub mod events;
pub mod simulator;

pub use activity::Activity;
pub use events::DailyEvent;
pub use simulator::Simulator;
