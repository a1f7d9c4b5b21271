mod help_request_dto;

pub use help_request_dto::{
    CreateHelpRequestDto, GeoLocationDto, RequesterDto, UpdateHelpRequestDto, VolunteerDto,
    VolunteerRequestDto,
};
