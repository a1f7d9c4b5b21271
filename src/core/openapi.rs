use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers, models as auth_models};
use crate::features::help_requests::{
    dtos as help_requests_dtos, handlers as help_requests_handlers,
    models as help_requests_models,
};
use crate::features::stats::{dtos as stats_dtos, handlers as stats_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth (mock)
        auth_handlers::login,
        // Help requests
        help_requests_handlers::list_help_requests,
        help_requests_handlers::create_help_request,
        help_requests_handlers::get_help_request,
        help_requests_handlers::update_help_request,
        help_requests_handlers::delete_help_request,
        help_requests_handlers::volunteer_for_request,
        // Stats
        stats_handlers::get_overview,
        stats_handlers::get_summary,
        stats_handlers::get_chart_colors,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_dtos::LoginRequestDto,
            auth_models::User,
            // Help requests
            help_requests_dtos::CreateHelpRequestDto,
            help_requests_dtos::UpdateHelpRequestDto,
            help_requests_dtos::GeoLocationDto,
            help_requests_dtos::RequesterDto,
            help_requests_dtos::VolunteerRequestDto,
            help_requests_dtos::VolunteerDto,
            help_requests_models::HelpRequest,
            help_requests_models::GeoLocation,
            help_requests_models::Requester,
            help_requests_models::Volunteer,
            help_requests_models::Urgency,
            help_requests_models::RequestStatus,
            // Stats
            stats_dtos::StatsOverviewDto,
            stats_dtos::StatisticsSummaryDto,
            stats_dtos::OverviewStatsDto,
            stats_dtos::UrgencyStatsDto,
            stats_dtos::StatusStatsDto,
            stats_dtos::TimeStatsDto,
            stats_dtos::DailyCountDto,
            stats_dtos::ChartColorsDto,
            // Envelopes
            ApiResponse<auth_models::User>,
            ApiResponse<help_requests_models::HelpRequest>,
            ApiResponse<Vec<help_requests_models::HelpRequest>>,
            ApiResponse<stats_dtos::StatsOverviewDto>,
            ApiResponse<stats_dtos::StatisticsSummaryDto>,
            ApiResponse<stats_dtos::ChartColorsDto>,
        )
    ),
    tags(
        (name = "auth", description = "Mock login (no real authentication)"),
        (name = "help-requests", description = "Community help requests and volunteering"),
        (name = "stats", description = "Dashboard statistics (public)"),
    ),
    info(
        title = "Community Hub API",
        version = "0.1.0",
        description = "API documentation for the Community Hub backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
