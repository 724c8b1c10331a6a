pub mod contact;
pub mod greetings;
pub mod notifier;
pub mod request;
pub mod response;

pub use crate::domain::model::{ContactRecord, ContactSubmission, EmailMessage, GreetingItem};
pub use crate::domain::ports::{ContactStore, GreetingStore, Mailer};
pub use crate::utils::error::Result;
