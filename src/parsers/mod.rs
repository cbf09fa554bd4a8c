pub mod csv;
pub mod sms;
pub mod traits;

pub mod prelude {
    pub use super::csv::prelude::*;
    pub use super::sms::prelude::*;
    pub use super::traits::Parser;
}
