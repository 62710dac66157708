pub mod auth;
pub mod client;
pub mod dashboard;
pub mod health;
pub mod reservation;
pub mod session;
pub mod station;

#[cfg(test)]
mod test;
