pub mod pricing;
pub mod ticket_service;
pub mod validator;
