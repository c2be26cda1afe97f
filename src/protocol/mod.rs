//! J1939 protocol components. Only the identifier layer of the transport is
//! implemented: PGN semantics and multi-frame transport are left to callers.
pub mod transport;
