//! Read-only catalogue endpoints used to build the editing form.

use axum::Json;
use reelprompt_core::parameters::{CategoryDefinition, CATEGORY_DEFINITIONS};
use reelprompt_core::platforms::{ExportPlatform, EXPORT_PLATFORMS};

use crate::response::DataResponse;

/// GET /api/v1/parameters
///
/// Every category with its label and allowed values, in canonical order.
pub async fn list_parameters() -> Json<DataResponse<&'static [CategoryDefinition]>> {
    Json(DataResponse {
        data: &CATEGORY_DEFINITIONS[..],
    })
}

/// GET /api/v1/platforms
pub async fn list_platforms() -> Json<DataResponse<&'static [ExportPlatform]>> {
    Json(DataResponse {
        data: &EXPORT_PLATFORMS[..],
    })
}
