use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::collectors::{dtos as collectors_dtos, handlers as collectors_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::exports::handlers as exports_handlers;
use crate::features::locations::{
    dtos as locations_dtos, handlers as locations_handlers, models as locations_models,
};
use crate::features::lookups::{dto as lookups_dtos, handler as lookups_handlers};
use crate::features::members::{dtos as members_dtos, handlers as members_handlers};
use crate::features::programs::{dtos as programs_dtos, handlers as programs_handlers};
use crate::modules::postal::PostOffice;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Members
        members_handlers::list_members,
        members_handlers::get_member,
        members_handlers::create_member,
        members_handlers::update_member,
        members_handlers::delete_member,
        members_handlers::restore_member,
        // Collectors
        collectors_handlers::list_collectors,
        collectors_handlers::get_collector,
        collectors_handlers::create_collector,
        collectors_handlers::update_collector,
        collectors_handlers::delete_collector,
        collectors_handlers::restore_collector,
        // Programs
        programs_handlers::list_programs,
        programs_handlers::get_program,
        programs_handlers::create_program,
        programs_handlers::update_program,
        programs_handlers::delete_program,
        programs_handlers::restore_program,
        // Locations
        locations_handlers::list_districts,
        locations_handlers::list_talukas,
        locations_handlers::list_villages,
        locations_handlers::apply_selection,
        // Lookups
        lookups_handlers::transliterate,
        lookups_handlers::post_offices_by_name,
        lookups_handlers::post_offices_by_pincode,
        // Exports
        exports_handlers::export_members_xlsx,
        exports_handlers::print_members,
        exports_handlers::export_collectors_xlsx,
        // Dashboard
        dashboard_handlers::get_summary,
        // Admin
        admin_handlers::list_deleted,
        admin_handlers::restore_deleted,
    ),
    components(
        schemas(
            Meta,
            // Members
            members_dtos::MemberRequestDto,
            members_dtos::MemberResponseDto,
            ApiResponse<members_dtos::MemberResponseDto>,
            ApiResponse<Vec<members_dtos::MemberResponseDto>>,
            // Collectors
            collectors_dtos::CollectorRequestDto,
            collectors_dtos::LocationAssignmentDto,
            collectors_dtos::AssignedLocationDto,
            collectors_dtos::CollectorResponseDto,
            ApiResponse<collectors_dtos::CollectorResponseDto>,
            ApiResponse<Vec<collectors_dtos::CollectorResponseDto>>,
            // Programs
            programs_dtos::ProgramFormDto,
            programs_dtos::ProgramResponseDto,
            ApiResponse<programs_dtos::ProgramResponseDto>,
            ApiResponse<Vec<programs_dtos::ProgramResponseDto>>,
            // Locations
            locations_models::LocationLevel,
            locations_models::LocationSelection,
            locations_models::SelectionAction,
            locations_dtos::ApplySelectionDto,
            locations_dtos::SelectionResponseDto,
            ApiResponse<Vec<String>>,
            ApiResponse<locations_dtos::SelectionResponseDto>,
            // Lookups
            lookups_dtos::TransliterateRequestDto,
            lookups_dtos::TransliterateResponseDto,
            PostOffice,
            ApiResponse<lookups_dtos::TransliterateResponseDto>,
            ApiResponse<Vec<PostOffice>>,
            // Dashboard
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
            // Admin
            admin_dtos::RecordKind,
            admin_dtos::DeletedItemsDto,
            admin_dtos::RestoredItemDto,
            ApiResponse<admin_dtos::DeletedItemsDto>,
            ApiResponse<admin_dtos::RestoredItemDto>,
        )
    ),
    tags(
        (name = "members", description = "Member registry"),
        (name = "collectors", description = "Collectors and their assigned villages"),
        (name = "programs", description = "Programs (events) with poster images"),
        (name = "locations", description = "District, taluka and village hierarchy of Maharashtra"),
        (name = "lookups", description = "Marathi transliteration and India Post lookups"),
        (name = "exports", description = "Member register and collector spreadsheets, print view"),
        (name = "dashboard", description = "Home page summary"),
        (name = "admin", description = "Deleted items (basic auth)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Atmapravartak API",
        version = "0.1.0",
        description = "Membership management API for the trust",
    )
)]
pub struct ApiDoc;

/// Adds the HTTP basic security scheme used by the admin routes
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

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
