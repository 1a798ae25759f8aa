pub mod jobdtos;
pub mod notificationdtos;
pub mod referraldtos;
pub mod userdtos;

pub use jobdtos::*;
pub use notificationdtos::*;
pub use referraldtos::*;
pub use userdtos::*;
