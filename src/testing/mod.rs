pub mod instance;
pub mod setup;

#[cfg(test)]
mod user;
