pub mod captcha;
pub mod email;
pub mod form;
pub mod handlers;
pub mod messages;
pub mod pipeline;
