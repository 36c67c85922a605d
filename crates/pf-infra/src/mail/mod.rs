mod emailjs;

pub use emailjs::{EmailJsConfig, EmailJsMailer};
