//! Board topology (static) and the derived occupancy view.

pub mod topology;
pub mod view;

pub use topology::{
    is_safe, Color, ColorSpec, COLOR_SPACING, COLOR_TABLE, HOME_LEN, PATH_LEN, SAFE_SQUARES,
};
pub use view::{BoardView, Occupant, Occupants};
