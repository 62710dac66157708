pub mod db;
pub mod parse;
pub mod shutdown;
