pub mod session;
pub mod submit_contact_form;

pub use session::ContactFormSession;
pub use submit_contact_form::SubmitContactForm;
