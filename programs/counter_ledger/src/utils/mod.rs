pub mod seeds;
pub use seeds::*;

pub mod pda;
pub use pda::*;

pub mod store;

pub mod authority;
pub use authority::*;
