pub mod session;
pub mod settings;

pub use session::*;
pub use settings::*;
