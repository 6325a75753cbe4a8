pub mod context;
pub mod dashboard;
pub mod goals;
pub mod history;
pub mod loader;
pub mod profile;
pub mod sample;
pub mod submit;
pub mod validation;
pub mod view_state;

#[cfg(test)]
pub(crate) mod testing;
