pub use super::admin::Entity as Admin;
pub use super::client::Entity as Client;
pub use super::play_session::Entity as PlaySession;
pub use super::reservation::Entity as Reservation;
pub use super::reservation_client::Entity as ReservationClient;
pub use super::station::Entity as Station;
pub use super::station_console::Entity as StationConsole;
pub use super::station_pc::Entity as StationPc;
