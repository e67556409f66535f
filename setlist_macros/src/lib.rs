mod record;

use proc_macro::TokenStream;

/// Derive macro implementing `setlist::Record` for a named-field struct.
///
/// Struct-level attributes:
/// - `#[record(collection = "...")]` storage collection (default: snake_case name + "s")
/// - `#[record(label = "...")]` human-facing entity name used in messages (default: struct name)
///
/// Field-level attributes:
/// - `#[record(id)]` the identity field (default: a field named `id`)
/// - `#[record(editable)]` the field takes part in conflict diffs
/// - `#[record(unique)]` storage rejects two records sharing this value
/// - `#[record(label = "...")]` display label (default: title-cased field name)
/// - `#[record(format = "currency" | "date" | "phone" | "plain")]`
/// - `#[record(reference = "collection", display = "field")]` foreign key
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Record)]
/// #[record(collection = "genres", label = "Genre")]
/// struct Genre {
///     #[record(id)]
///     pub id: String,
///     #[record(editable, label = "Name")]
///     pub name: String,
/// }
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
