mod controller;
mod loop_worker;

pub use controller::SweepController;
pub use loop_worker::prune_loop;
