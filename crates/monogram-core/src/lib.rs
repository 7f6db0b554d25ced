#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod avatar;
pub mod constants;
pub mod initials;
pub mod profile;
pub mod style;

pub use crate::avatar::*;
pub use crate::constants::*;
pub use crate::initials::*;
pub use crate::profile::*;
pub use crate::style::*;
