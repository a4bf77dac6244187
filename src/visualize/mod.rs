pub mod dot;

pub use dot::Visualize;
