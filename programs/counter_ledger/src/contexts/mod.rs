pub mod initialize;
pub use initialize::*;

pub mod initialize_global;
pub use initialize_global::*;

pub mod increment;
pub use increment::*;

pub mod close;
pub use close::*;

pub mod close_global;
pub use close_global::*;
