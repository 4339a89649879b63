mod device;
mod pointer;
mod scroll;

pub use device::{wire_orientation, wire_pagehide, wire_resize};
pub use pointer::wire_pointer;
pub use scroll::{apply_offset, wire_scroll};
