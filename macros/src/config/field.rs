//! Field information structures and parsing.

use syn::Type;

use crate::config::attr::{
    InlineDoc, extract_doc_comment, get_custom_name, get_default_value, get_inline_doc, has_attr,
};

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub toml_name: String,
    pub doc: Option<String>,
    pub inline_doc: Option<String>,
    pub default: Option<String>,
    pub hidden: bool,
    pub ty: Type,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    pub fn from_field(field: &syn::Field) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        let mut doc = extract_doc_comment(attrs);
        let inline_doc = match get_inline_doc(attrs) {
            Some(InlineDoc::Text(text)) => Some(text),
            // Single-line doc moves to the end of the key line
            Some(InlineDoc::FromDoc) => doc.take().map(|d| d.replace('\n', " ")),
            None => None,
        };

        Some(Self {
            name: ident.clone(),
            toml_name: get_custom_name(attrs).unwrap_or_else(|| ident.to_string()),
            doc,
            inline_doc,
            default: get_default_value(attrs),
            hidden: has_attr(attrs, "hidden"),
            ty: field.ty.clone(),
        })
    }
}
