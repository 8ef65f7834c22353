//! Parsing of #[rule(...)] attributes

use syn::punctuated::Punctuated;
use syn::{Attribute, LitStr, Token};

/// Rule declarations collected from one field's attributes.
#[derive(Debug, Default, Clone)]
pub(super) struct RuleAttrs {
    // Flag rules
    pub required: bool,
    pub non_empty: bool,
    pub non_blank: bool,
    pub required_non_blank: bool,

    // Parameterized rules
    pub range: Option<(LitStr, LitStr)>,
    pub patterns: Vec<LitStr>,

    // Meta
    pub skip: bool,
}

impl RuleAttrs {
    /// Parse rule attributes from a field's attribute list.
    pub(super) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("rule") {
                continue;
            }

            attr.parse_nested_meta(|meta| result.parse_meta(&meta))?;
        }

        Ok(result)
    }

    fn parse_meta(&mut self, meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<()> {
        let path = &meta.path;

        // Flag rules (no value)
        if path.is_ident("required") {
            self.required = true;
            return Ok(());
        }

        if path.is_ident("non_empty") {
            self.non_empty = true;
            return Ok(());
        }

        if path.is_ident("non_blank") {
            self.non_blank = true;
            return Ok(());
        }

        if path.is_ident("required_non_blank") {
            self.required_non_blank = true;
            return Ok(());
        }

        if path.is_ident("skip") {
            self.skip = true;
            return Ok(());
        }

        // range(min = "0", max = "10")
        if path.is_ident("range") {
            let mut min: Option<LitStr> = None;
            let mut max: Option<LitStr> = None;
            meta.parse_nested_meta(|nested| {
                if nested.path.is_ident("min") {
                    min = Some(nested.value()?.parse()?);
                    Ok(())
                } else if nested.path.is_ident("max") {
                    max = Some(nested.value()?.parse()?);
                    Ok(())
                } else {
                    Err(nested.error("expected `min` or `max` in range"))
                }
            })?;

            return match (min, max) {
                (Some(min), Some(max)) => {
                    self.range = Some((min, max));
                    Ok(())
                }
                _ => Err(meta.error("range requires both `min = \"...\"` and `max = \"...\"`")),
            };
        }

        // pattern("^a.*", "^b.*")
        if path.is_ident("pattern") {
            let content;
            syn::parenthesized!(content in meta.input);
            let patterns = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
            if patterns.is_empty() {
                return Err(meta.error("pattern requires at least one pattern string"));
            }
            self.patterns.extend(patterns);
            return Ok(());
        }

        Err(meta.error(format!(
            "unknown rule `{}`; supported rules: required, non_empty, non_blank, \
             required_non_blank, range(min = \"...\", max = \"...\"), \
             pattern(\"...\", ...), skip",
            path.get_ident()
                .map_or_else(|| format!("{path:?}"), ToString::to_string)
        )))
    }

    /// True when any rule (not counting `skip`) is declared.
    pub(super) fn has_rules(&self) -> bool {
        self.required
            || self.non_empty
            || self.non_blank
            || self.required_non_blank
            || self.range.is_some()
            || !self.patterns.is_empty()
    }
}
