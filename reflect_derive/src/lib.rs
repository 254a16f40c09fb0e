// reflect_derive/src/lib.rs
extern crate proc_macro;
use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute,
    Data,
    DeriveInput,
    Expr,
    Fields,
    LitStr,
    Token,
    Visibility,
    parse_macro_input
};

/// Options collected from the `#[reflect(...)]` and `#[widget = "..."]` attributes of one field.
#[derive(Default)]
struct FieldOptions {
    hidden: bool,
    read_only: bool,
    min: Option<Expr>,
    max: Option<Expr>,
    hint: Option<String>,
}

/// `#[derive(Reflect)]` – generates an impl of the `Reflect` trait.
///
/// Only `pub` named fields are exposed. Field attributes:
/// - `#[reflect(skip)]` marks the field as not user editable.
/// - `#[reflect(readonly)]` shows the field without allowing writes.
/// - `#[reflect(min = 0.0, max = 10.0)]` clamps numeric edits.
/// - `#[widget("slider")]` forwards a widget hint to the UI.
#[proc_macro_derive(Reflect, attributes(widget, reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    // Parse the input token stream into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident; // Struct name
    let name_str = name.to_string();
    let generics = input.generics; // keep generic params untouched

    // Collect field information (only works for structs with named fields)
    let fields = match input.data {
        Data::Struct(s) => match s.fields {
            Fields::Named(named) => named.named,
            Fields::Unit => Default::default(),
            _ => {
                return syn::Error::new_spanned(
                    s.struct_token,
                    "Reflect can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(
                name,
                "Reflect can only be derived for structs",
            )
            .to_compile_error()
            .into();
        }
    };

    // Private fields are never reflected
    let mut public = Vec::new();
    for f in fields.iter() {
        if !matches!(f.vis, Visibility::Public(_)) {
            continue;
        }
        match field_options(&f.attrs) {
            Ok(options) => public.push((f, options)),
            Err(e) => return e.to_compile_error().into(),
        }
    }

    // For each field generate a call to <FieldType>::field_info(...)
    let field_infos = public.iter().map(|(f, options)| {
        let field_str = f.ident.as_ref().map(|i| i.to_string()).unwrap_or_default();
        let ty = &f.ty; // the field type

        let hint_expr = match &options.hint {
            Some(s) => quote! { Some(#s) },
            None => quote! { None },
        };
        let range_expr = match (&options.min, &options.max) {
            (Some(min), Some(max)) => quote! { Some(((#min) as f32, (#max) as f32)) },
            (Some(min), None) => quote! { Some(((#min) as f32, f32::MAX)) },
            (None, Some(max)) => quote! { Some((f32::MIN, (#max) as f32)) },
            (None, None) => quote! { None },
        };
        let hidden = options.hidden;
        let read_only = options.read_only;

        quote! {
            <#ty as ::inspector_core::reflect::ReflectField>::field_info(#field_str)
                .with_hint(#hint_expr)
                .with_range(#range_expr)
                .with_hidden(#hidden)
                .with_read_only(#read_only)
        }
    });

    let get_arms = public.iter().map(|(f, _)| {
        let ident = &f.ident;
        let field_str = ident.as_ref().map(|i| i.to_string()).unwrap_or_default();
        quote! {
            #field_str => Some(::inspector_core::reflect::ReflectField::to_value(&self.#ident)),
        }
    });

    let set_arms = public.iter().map(|(f, options)| {
        let ident = &f.ident;
        let field_str = ident.as_ref().map(|i| i.to_string()).unwrap_or_default();
        let ty = &f.ty;

        if options.read_only {
            return quote! {
                #field_str => Err(::inspector_core::reflect::ReflectError::ReadOnly(#field_str.to_string())),
            };
        }

        quote! {
            #field_str => {
                let found = value.kind_name();
                self.#ident = <#ty as ::inspector_core::reflect::ReflectField>::from_value(value)
                    .ok_or_else(|| ::inspector_core::reflect::ReflectError::TypeMismatch {
                        field: #field_str.to_string(),
                        expected: ::std::any::type_name::<#ty>(),
                        found,
                    })?;
                Ok(())
            }
        }
    });

    // Build the final impl block
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::inspector_core::reflect::Reflect for #name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #name_str
            }

            fn fields(&self) -> ::std::vec::Vec<::inspector_core::reflect::FieldInfo> {
                vec![
                    #(#field_infos),*
                ]
            }

            #[allow(unreachable_patterns)]
            fn get_field(&self, name: &str) -> ::std::option::Option<::inspector_core::reflect::FieldValue> {
                match name {
                    #(#get_arms)*
                    _ => None,
                }
            }

            #[allow(unreachable_patterns, unused_variables)]
            fn set_field(
                &mut self,
                name: &str,
                value: ::inspector_core::reflect::FieldValue,
            ) -> ::std::result::Result<(), ::inspector_core::reflect::ReflectError> {
                match name {
                    #(#set_arms)*
                    _ => Err(::inspector_core::reflect::ReflectError::UnknownField {
                        type_name: #name_str,
                        field: name.to_string(),
                    }),
                }
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }
        }
    };

    // Hand the generated code back to the compiler
    TokenStream::from(expanded)
}

/// Reads every supported attribute on a field.
fn field_options(attrs: &[Attribute]) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions {
        hint: widget_hint(attrs),
        ..Default::default()
    };

    for attr in attrs {
        if !attr.path().is_ident("reflect") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                options.hidden = true;
                Ok(())
            } else if meta.path.is_ident("readonly") {
                options.read_only = true;
                Ok(())
            } else if meta.path.is_ident("min") {
                options.min = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("max") {
                options.max = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `skip`, `readonly`, `min` or `max`"))
            }
        })?;
    }

    Ok(options)
}

/// Returns the string literal that appears in `#[widget = "…"]`.
/// If the attribute is missing, has a different name, or the value is not a
/// string literal, `None` is returned.
fn widget_hint(attrs: &[Attribute]) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("widget") {
            continue;
        }

        // `#[widget = "slider"]`
        if let syn::Meta::NameValue(nv) = &attr.meta {
            if let Expr::Lit(syn::ExprLit { lit: syn::Lit::Str(lit), .. }) = &nv.value {
                return Some(lit.value());
            }
            continue;
        }

        // `#[widget("slider")]`
        let parser = |input: syn::parse::ParseStream| {
            if input.peek(Token![=]) {
                let _eq: Token![=] = input.parse()?;
            }
            let lit: LitStr = input.parse()?;
            Ok(lit)
        };

        // If parsing fails we just ignore the attribute
        if let Ok(lit) = attr.parse_args_with(parser) {
            return Some(lit.value());
        }
    }
    None
}
