pub mod certificates;
pub mod demo_reset;
