//! Response JSON mapping helpers.

use stockroom_core::Document;

pub fn document_to_json(doc: &Document) -> serde_json::Value {
    serde_json::json!({
        "document_id": doc.id.get(),
        "document_name": doc.name,
        "quantity": doc.quantity,
    })
}
