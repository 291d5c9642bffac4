pub mod account;
pub mod constant;
pub mod time;

pub use account::*;
pub use constant::*;
pub use time::*;
