pub mod init_pyth;
pub mod set_pyth_price;
pub mod state;

pub use init_pyth::*;
pub use set_pyth_price::*;
pub use state::*;
