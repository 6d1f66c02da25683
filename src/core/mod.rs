pub mod backup;
pub mod checkin;
pub mod checkout;
pub mod extend;
pub mod log;
pub mod roster;
pub mod stats;
pub mod status;
