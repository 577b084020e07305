pub mod init_db;
pub mod serve;

pub use init_db::{run_init_db, InitDbArgs};
pub use serve::{run_serve, ServeArgs};
