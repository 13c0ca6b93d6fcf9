pub mod fare;
pub mod paan;
pub mod postcard;
pub mod thali;

pub use crate::domain::model::{FareRange, FrozenMenu, MenuEntry, ThaliRecord, ThaliStats};
pub use crate::domain::ports::MenuProvider;
pub use crate::utils::error::Result;
