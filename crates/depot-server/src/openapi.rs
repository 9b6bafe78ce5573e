//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::dto::{HealthResponse, ItemRequest, ItemResponse, ServiceStatus};
use crate::handlers::{health, items};

/// OpenAPI documentation for the Depot API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Depot API",
        version = "0.1.0",
        description = "Item management with concurrent batch processing.

## Quick Start

1. Check server health: `GET /health`
2. Create an item: `POST /api/items`
3. Process every pending item: `GET /api/items/process`
",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        health::health_check,
        items::list_items,
        items::get_item,
        items::create_item,
        items::update_item,
        items::delete_item,
        items::process_items,
    ),
    components(
        schemas(
            // Request types
            ItemRequest,
            // Response types
            ItemResponse,
            HealthResponse,
            ServiceStatus,
        )
    ),
    tags(
        (name = "system", description = "System health"),
        (name = "items", description = "Item CRUD and batch processing"),
    )
)]
pub struct ApiDoc;
