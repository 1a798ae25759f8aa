pub mod db;
pub mod jobdb;
pub mod notificationdb;
pub mod orgdb;
pub mod partnerdb;
pub mod referraldb;
pub mod userdb;
pub mod workerdb;
