mod queue;
mod stack;

pub use queue::Queue;
pub use stack::Stack;
