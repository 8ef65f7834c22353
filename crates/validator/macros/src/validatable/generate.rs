//! Code generation for the Validatable derive
//!
//! Emits two impls per struct: `Validatable` (the field registry, with
//! rule slices as `const` data) and `AsFieldValue` (the struct renders
//! as a nested value inside other registries).

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields as SynFields, FieldsNamed};

use super::parse::RuleAttrs;

/// Generate both trait impls for a struct with named fields.
pub(crate) fn derive(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let fields = named_fields(input)?;

    let mut registrations = Vec::new();

    for field in &fields.named {
        let ident = field.ident.as_ref().expect("named fields have idents");
        let attrs = RuleAttrs::from_attributes(&field.attrs)?;

        if attrs.skip {
            if attrs.has_rules() {
                return Err(syn::Error::new_spanned(
                    field,
                    "`skip` cannot be combined with other rules",
                ));
            }
            continue;
        }

        let rules = rule_tokens(&attrs);
        let name_str = ident.to_string();
        registrations.push(quote! {
            {
                const RULES: &[::veld_validator::rules::Rule] = &[#(#rules),*];
                fields.push(::veld_validator::foundation::FieldBinding::new(
                    #name_str,
                    RULES,
                    &self.#ident,
                ));
            }
        });
    }

    let body = if registrations.is_empty() {
        quote! { ::veld_validator::foundation::Fields::new() }
    } else {
        quote! {
            let mut fields = ::veld_validator::foundation::Fields::new();
            #(#registrations)*
            fields
        }
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::veld_validator::foundation::Validatable for #name #ty_generics #where_clause {
            fn fields(&self) -> ::veld_validator::foundation::Fields<'_> {
                #body
            }
        }

        #[automatically_derived]
        impl #impl_generics ::veld_validator::foundation::AsFieldValue for #name #ty_generics #where_clause {
            fn as_field_value(
                &self,
            ) -> ::core::result::Result<
                ::veld_validator::foundation::FieldValue<'_>,
                ::veld_validator::foundation::AccessError,
            > {
                ::core::result::Result::Ok(::veld_validator::foundation::FieldValue::Nested(self))
            }
        }
    })
}

fn named_fields(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            SynFields::Named(named) => Ok(named),
            _ => Err(syn::Error::new_spanned(
                input,
                "Validatable requires named fields",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            "Validatable can only be derived for structs",
        )),
    }
}

/// Render the parsed attributes as `Rule` constructor expressions.
fn rule_tokens(attrs: &RuleAttrs) -> Vec<TokenStream> {
    let mut rules = Vec::new();

    if attrs.required_non_blank {
        rules.push(quote!(::veld_validator::rules::Rule::RequiredNonBlank));
    }
    if attrs.required {
        rules.push(quote!(::veld_validator::rules::Rule::Required));
    }
    if attrs.non_empty {
        rules.push(quote!(::veld_validator::rules::Rule::NonEmpty));
    }
    if attrs.non_blank {
        rules.push(quote!(::veld_validator::rules::Rule::NonBlank));
    }
    if let Some((min, max)) = &attrs.range {
        rules.push(quote!(::veld_validator::rules::Rule::Range { min: #min, max: #max }));
    }
    if !attrs.patterns.is_empty() {
        let patterns = &attrs.patterns;
        rules.push(quote!(::veld_validator::rules::Rule::Pattern {
            patterns: &[#(#patterns),*],
        }));
    }

    rules
}
