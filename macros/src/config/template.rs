//! Template generation code for Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;
use crate::config::types::{format_default_for_type, type_to_string};

/// Generate template code (TokenStream) for fields
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let field_codes: Vec<TokenStream> = fields
        .iter()
        .map(|f| generate_field_template_code(f))
        .collect();

    quote! {
        #(#field_codes)*
    }
}

/// Generate TOML template code for a single field
fn generate_field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;

    let doc_code = match &info.doc {
        Some(doc) => {
            let doc_str: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
            quote! { out.push_str(#doc_str); }
        }
        None => quote! {},
    };

    // Trailing "  # comment" (or plain newline)
    let line_end = match &info.inline_doc {
        Some(comment) => format!("  # {}\n", comment),
        None => "\n".to_string(),
    };

    // Explicit default value (compile-time known)
    if let Some(default_val) = &info.default {
        let formatted = format_default_for_type(default_val, &type_to_string(&info.ty));
        let line = format!("{} = {}{}", toml_name, formatted, line_end);
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    // Runtime value from Default::default()
    let key = format!("{} = ", toml_name);
    quote! {
        #doc_code
        out.push_str(#key);
        out.push_str(&toml::Value::try_from(default.#field_name.clone())
            .map(|v| v.to_string())
            .unwrap_or_default());
        out.push_str(#line_end);
    }
}
