pub mod calendar;
pub mod clock;
pub mod config;
pub mod denied;
pub mod error;
pub mod zone;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use denied::DeniedDates;
pub use error::*;
pub use zone::*;
