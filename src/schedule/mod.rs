pub mod observer;
pub mod store;
pub mod types;


pub use observer::*;
pub use store::*;
pub use types::*;
