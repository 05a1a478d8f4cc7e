//! Dump the OpenAPI document to stdout.

use repair_backend::doc::ApiDoc;
use utoipa::OpenApi;

fn main() {
    let doc = ApiDoc::openapi().to_json().unwrap();
    println!("{doc}");
}
