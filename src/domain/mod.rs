//! Domain layer: the capability traits and their concrete variants.

pub mod device;
pub mod observer;
pub mod payment;
pub mod ports;
pub mod rates;
