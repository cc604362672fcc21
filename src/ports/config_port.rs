//! Configuration access port trait.
//!
//! Section and key lookups are case-insensitive.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn has_section(&self, section: &str) -> bool;
    /// Keys present in `section`, empty when the section is absent.
    fn section_keys(&self, section: &str) -> Vec<String>;
}
