pub mod init_switchboard;
pub mod set_switchboard_price;
pub mod state;

pub use init_switchboard::*;
pub use set_switchboard_price::*;
pub use state::*;
