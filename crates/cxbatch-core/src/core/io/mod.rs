//! Output targets for dispatched host commands.
//!
//! The driver itself never writes files; analysis logs are written by the host.
//! The only format produced here is the ChimeraX command script, used when the
//! batch is replayed by the host instead of dispatched live.

pub mod cxc;
