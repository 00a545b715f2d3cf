//! Configuration access port trait.
//!
//! Getters return `Option` so callers can distinguish an absent key from a
//! present value and apply their own defaults.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_double(&self, section: &str, key: &str) -> Option<f64>;
}
