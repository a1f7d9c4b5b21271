pub mod help_request_handler;

pub use help_request_handler::{
    __path_create_help_request, __path_delete_help_request, __path_get_help_request,
    __path_list_help_requests, __path_update_help_request, __path_volunteer_for_request,
    create_help_request, delete_help_request, get_help_request, list_help_requests,
    update_help_request, volunteer_for_request,
};
