pub mod user_account;
pub use user_account::*;

pub mod global_account;
pub use global_account::*;

pub mod events;
pub use events::*;
