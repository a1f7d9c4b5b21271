mod help_request;

pub use help_request::{GeoLocation, HelpRequest, RequestStatus, Requester, Urgency, Volunteer};
