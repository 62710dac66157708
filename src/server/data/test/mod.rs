mod client;
mod dashboard;
mod reservation;
mod session;
mod station;
