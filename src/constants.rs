/// Status every lost item starts with. Nothing transitions it afterwards.
pub const LOST_STATUS: &str = "Lost";

pub mod session {

    /// Key under which the visitor state is stored in the tower session.
    pub const VISITOR_KEY: &str = "visitor";
}

pub mod db {
    use std::time::Duration;

    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    pub const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

    pub const MAX_LIFETIME: Duration = Duration::from_secs(600);
}
