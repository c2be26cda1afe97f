//! J1939 transport layer: the 29-bit extended identifier that frames every
//! message on the bus.

pub mod can_id;
