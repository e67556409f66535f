use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, LitStr};

pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (collection, label) = extract_struct_attrs(input)?;

    let fields = named_fields(input)?;
    let mut id_field = None;
    let mut specs = Vec::new();

    for field in &fields {
        let attrs = FieldAttrs::parse(field)?;
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "Record derive: unnamed field"))?;

        if attrs.id {
            id_field = Some(ident.clone());
        }
        if attrs.editable || attrs.unique {
            specs.push(field_spec_tokens(&ident.to_string(), &attrs)?);
        }
    }

    let id_field = match id_field {
        Some(ident) => ident,
        None => fields
            .iter()
            .filter_map(|f| f.ident.clone())
            .find(|ident| ident == "id")
            .ok_or_else(|| {
                syn::Error::new_spanned(
                    name,
                    "Record derive: no field marked with #[record(id)] and no field named `id`",
                )
            })?,
    };

    Ok(quote! {
        impl setlist::Record for #name {
            const COLLECTION: &'static str = #collection;
            const LABEL: &'static str = #label;

            fn id(&self) -> &str {
                &self.#id_field
            }

            fn fields() -> &'static [setlist::FieldSpec] {
                const FIELDS: &[setlist::FieldSpec] = &[#(#specs),*];
                FIELDS
            }
        }
    })
}

fn named_fields(input: &DeriveInput) -> syn::Result<Vec<&Field>> {
    if let Data::Struct(data_struct) = &input.data {
        if let Fields::Named(fields) = &data_struct.fields {
            return Ok(fields.named.iter().collect());
        }
    }
    Err(syn::Error::new_spanned(
        &input.ident,
        "Record derive: only structs with named fields are supported",
    ))
}

fn extract_struct_attrs(input: &DeriveInput) -> syn::Result<(String, String)> {
    let mut collection = None;
    let mut label = None;

    for attr in &input.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("collection") {
                let value: LitStr = meta.value()?.parse()?;
                collection = Some(value.value());
            } else if meta.path.is_ident("label") {
                let value: LitStr = meta.value()?.parse()?;
                label = Some(value.value());
            } else {
                return Err(meta.error("unknown record attribute"));
            }
            Ok(())
        })?;
    }

    let name = input.ident.to_string();
    let collection = collection.unwrap_or_else(|| format!("{}s", to_snake_case(&name)));
    let label = label.unwrap_or(name);
    Ok((collection, label))
}

#[derive(Default)]
struct FieldAttrs {
    id: bool,
    editable: bool,
    unique: bool,
    label: Option<String>,
    format: Option<LitStr>,
    reference: Option<String>,
    display: Option<LitStr>,
}

impl FieldAttrs {
    fn parse(field: &Field) -> syn::Result<Self> {
        let mut attrs = FieldAttrs::default();
        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("id") {
                    attrs.id = true;
                } else if meta.path.is_ident("editable") {
                    attrs.editable = true;
                } else if meta.path.is_ident("unique") {
                    attrs.unique = true;
                } else if meta.path.is_ident("label") {
                    let value: LitStr = meta.value()?.parse()?;
                    attrs.label = Some(value.value());
                } else if meta.path.is_ident("format") {
                    attrs.format = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("reference") {
                    let value: LitStr = meta.value()?.parse()?;
                    attrs.reference = Some(value.value());
                } else if meta.path.is_ident("display") {
                    attrs.display = Some(meta.value()?.parse()?);
                } else {
                    return Err(meta.error("unknown record field attribute"));
                }
                Ok(())
            })?;
        }
        Ok(attrs)
    }
}

fn field_spec_tokens(name: &str, attrs: &FieldAttrs) -> syn::Result<TokenStream2> {
    let label = attrs.label.clone().unwrap_or_else(|| to_title_case(name));
    let editable = attrs.editable;
    let unique = attrs.unique;

    if let (Some(_), Some(format)) = (&attrs.reference, &attrs.format) {
        return Err(syn::Error::new_spanned(
            format,
            "`format` cannot be combined with `reference`; references display the referenced field",
        ));
    }
    if let (None, Some(display)) = (&attrs.reference, &attrs.display) {
        return Err(syn::Error::new_spanned(
            display,
            "`display` requires `reference = \"collection\"`",
        ));
    }

    let format = match (&attrs.reference, &attrs.format) {
        (Some(collection), _) => {
            let display = attrs
                .display
                .as_ref()
                .map(LitStr::value)
                .unwrap_or_else(|| "name".to_string());
            quote! { setlist::FieldFormat::Reference { collection: #collection, display: #display } }
        }
        (None, Some(format)) => match format.value().as_str() {
            "plain" => quote! { setlist::FieldFormat::Plain },
            "currency" => quote! { setlist::FieldFormat::Currency },
            "date" => quote! { setlist::FieldFormat::Date },
            "phone" => quote! { setlist::FieldFormat::Phone },
            other => {
                return Err(syn::Error::new_spanned(
                    format,
                    format!("unknown record field format `{}`", other),
                ))
            }
        },
        (None, None) => quote! { setlist::FieldFormat::Plain },
    };

    Ok(quote! {
        setlist::FieldSpec {
            name: #name,
            label: #label,
            editable: #editable,
            unique: #unique,
            format: #format,
        }
    })
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}

fn to_title_case(s: &str) -> String {
    s.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
