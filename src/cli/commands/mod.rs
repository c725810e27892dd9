mod add_user;
mod init;
mod list;
mod serve;

pub use add_user::cmd_add_user;
pub use init::cmd_init;
pub use list::cmd_list_reports;
pub use serve::cmd_serve;
