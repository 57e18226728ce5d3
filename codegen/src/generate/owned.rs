use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::Field;

use super::*;

/// Generate the implementation of `struct_defaults::StructDefaultsInto` for
/// the given structs.
///
/// The source struct is consumed, so no `Clone` bounds are required.
pub(crate) fn impl_owned(params: &Parameters, fields: Vec<(Field, Field)>) -> TokenStream {
    let fill_code = defaults_into(fields);

    let src_ident = &params.src_struct.ident;
    let dest_path = &params.dest_path;
    quote! {
        impl struct_defaults::StructDefaultsInto<#dest_path> for #src_ident {
            fn defaults_into(self, dest: &mut #dest_path) {
                #fill_code
            }
        }
    }
}

/// Generate the fill snippets for the `defaults_into` function body.
///
/// A destination field is only ever written while it is `None`; fields that
/// already hold a value stay untouched.
fn defaults_into(fields: Vec<(Field, Field)>) -> TokenStream {
    let mut fill_code = TokenStream::new();
    for (src_field, dest_field) in fields {
        let src_ident = src_field.ident;
        let dest_ident = dest_field.ident;

        // Fields that aren't `Option`al can never be unset. Skip them.
        let (dest_inner, dest_outer) = match determine_field_type(dest_field.ty) {
            FieldType::Optional { inner, outer } => (inner, outer),
            FieldType::Normal(_) => continue,
            FieldType::Invalid(error) => {
                fill_code.extend([error]);
                continue;
            }
        };

        let snippet = match determine_field_type(src_field.ty) {
            // The source value is always present and gets wrapped in `Some`.
            FieldType::Normal(src_type) => {
                fill_if_equal_type!(
                    src_type,
                    dest_inner,
                    "",
                    quote! {
                        if dest.#dest_ident.is_none() {
                            dest.#dest_ident = Some(self.#src_ident);
                        }
                    }
                )
            }
            // Both fields are optional. It can now be either of these:
            // - (Option<T>, Option<T>)
            // - (Option<Option<T>>, Option<T>)
            // - (Option<T>, Option<Option<T>>)
            FieldType::Optional {
                inner: src_inner,
                outer: src_outer,
            } => {
                // Handling the (Option<T>, Option<T>) case
                if is_equal_type(&src_inner, &dest_inner) {
                    quote! {
                        if dest.#dest_ident.is_none() {
                            dest.#dest_ident = self.#src_ident;
                        }
                    }
                // Handling the (Option<Option<T>>, Option<T>) case
                } else if is_equal_type(&src_inner, &dest_outer) {
                    quote! {
                        if dest.#dest_ident.is_none() {
                            if let Some(value) = self.#src_ident {
                                dest.#dest_ident = value;
                            }
                        }
                    }
                // Handling the (Option<T>, Option<Option<T>>) case
                } else {
                    fill_if_equal_type!(
                        src_outer,
                        dest_inner,
                        "Inner ",
                        quote! {
                            if dest.#dest_ident.is_none() {
                                dest.#dest_ident = Some(self.#src_ident);
                            }
                        }
                    )
                }
            }
            FieldType::Invalid(error) => error,
        };

        fill_code.extend([snippet]);
    }

    fill_code
}
