use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::spanned::Spanned;
use syn::{ExprPath, Fields, FieldsNamed, GenericArgument, ItemStruct, PathArguments, Type};

use crate::Mode;

/// Emit the given fill snippet if both types match.
/// Otherwise, emit a compile error pointing at the source field's type.
macro_rules! fill_if_equal_type {
    ($src_type:ident, $dest_type:ident, $prefix:expr, $tokens:expr) => {
        if is_equal_type(&$src_type, &$dest_type) {
            $tokens
        } else {
            err!(
                $src_type,
                "{}type '{}' cannot be used as a default for a field of type '{}'.",
                $prefix,
                $src_type.to_token_stream(),
                $dest_type.to_token_stream()
            )
        }
    };
}

mod borrowed;
mod owned;

/// Everything the generators need to know about the current macro invocation.
pub(crate) struct Parameters {
    pub src_struct: ItemStruct,
    pub dest_path: ExprPath,
}

/// Return a TokenStream that contains the impl to fill the `dest` struct's
/// unset fields from the annotated source struct.
///
/// Fields are paired by name. Only pairs whose destination side is `Option`al
/// take part: a non-`Option` destination field always holds a value and can
/// never be unset, so it is skipped.
///
/// Known limitations:
/// - Types are compared token-wise, so aliases of the same type don't match.
/// - Visibility of the `dest` struct isn't taken into account.
pub(crate) fn generate_impl(
    mode: &Mode,
    params: &Parameters,
    dest_struct: ItemStruct,
) -> Result<TokenStream, TokenStream> {
    let dest_fields = named_fields(&dest_struct)?;
    let src_fields = named_fields(&params.src_struct)?;

    // Pair up all fields that exist on both structs under the same name.
    let mut shared_fields = Vec::new();
    for src_field in src_fields.named {
        for dest_field in dest_fields.named.clone() {
            if src_field.ident == dest_field.ident {
                shared_fields.push((src_field.clone(), dest_field));
            }
        }
    }

    // Field type mismatches inside the pairs become inline compile errors, so
    // one bad field doesn't suppress the fill code for the others.
    match mode {
        Mode::Owned => Ok(owned::impl_owned(params, shared_fields)),
        Mode::Borrowed => Ok(borrowed::impl_borrowed(params, shared_fields)),
    }
}

/// Extract the named fields of a struct, erroring out on any other shape.
fn named_fields(item: &ItemStruct) -> Result<FieldsNamed, TokenStream> {
    match &item.fields {
        Fields::Named(fields) => Ok(fields.clone()),
        _ => Err(err!(
            item,
            "struct_defaults only works on structs with named fields."
        )),
    }
}

/// Check whether two given [Type]s are of the same type.
fn is_equal_type(src_type: &Type, dest_type: &Type) -> bool {
    // Token-wise comparison. Crude, but it has to do until proper type
    // resolution is available to proc macros.
    src_type.to_token_stream().to_string() == dest_type.to_token_stream().to_string()
}

/// Internal representation of parsed field types.
///
/// We either expect fields to have a generic type `T` or `Option<T>`.
pub(crate) enum FieldType {
    Normal(Type),
    Optional { inner: Type, outer: Type },
    Invalid(TokenStream),
}

/// This function takes any [Type] and determines whether it's an `Option<T>`
/// or just a `T`.
///
/// The detected variant is represented via the [FieldType] enum.
/// Malformed `Option` types return the `FieldType::Invalid` variant, carrying
/// the compile error to emit in place of a fill snippet.
pub(crate) fn determine_field_type(ty: Type) -> FieldType {
    let type_path = match &ty {
        // A path with a qualified self is relative to `Self` and thereby not
        // a plain `Option`.
        Type::Path(type_path) if type_path.qself.is_none() => type_path,
        _ => return FieldType::Normal(ty),
    };

    let path = &type_path.path;

    // `Option<T>` shouldn't have a leading colon or multiple segments.
    if path.leading_colon.is_some() || path.segments.len() > 1 {
        return FieldType::Normal(ty);
    }

    let segment = match path.segments.first() {
        Some(segment) if segment.ident == "Option" => segment,
        _ => return FieldType::Normal(ty),
    };

    // Get the angle brackets.
    let generic_arg = match &segment.arguments {
        PathArguments::AngleBracketed(params) => match params.args.first() {
            Some(arg) => arg.clone(),
            None => {
                return FieldType::Invalid(err!(ty, "Option doesn't have a type parameter."));
            }
        },
        _ => {
            return FieldType::Invalid(err!(
                ty,
                "Unknown path arguments behind Option. Please report this."
            ));
        }
    };

    // This argument must be a type.
    match generic_arg {
        GenericArgument::Type(inner) => FieldType::Optional { inner, outer: ty },
        _ => FieldType::Invalid(err!(ty, "Option path argument isn't a type.")),
    }
}
