pub mod jobmodel;
pub mod notificationmodel;
pub mod partnermodel;
pub mod profilemodels;
pub mod referralmodel;
pub mod usermodel;
