pub mod controller;
pub mod input_adapter;

pub use controller::{Button, Controller};
pub use input_adapter::WinitController;
