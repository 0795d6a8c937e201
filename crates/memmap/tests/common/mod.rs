//! Shared helpers for the memory map tests.


pub use harness::{FailingWriter, FakeMemmap};
