pub mod bounds;
pub mod gateways;
pub mod geolocation;
pub mod selection;
pub mod shell;

pub mod entities {
    pub use placepicker_entities::{geo::*, geolocation::*, id::*, place::*};
}
