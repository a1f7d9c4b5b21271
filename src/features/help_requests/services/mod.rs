mod help_request_service;

pub use help_request_service::HelpRequestService;
