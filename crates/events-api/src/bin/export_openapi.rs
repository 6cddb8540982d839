// Export OpenAPI specification as JSON
//
// Usage: cargo run -p multiapp-events --bin export-events-openapi > docs/events-openapi.json

use multiapp_events::openapi::ApiDoc;

fn main() {
    println!("{}", ApiDoc::to_json());
}
