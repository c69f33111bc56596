pub mod puppet;

pub use puppet::MockPuppet;
