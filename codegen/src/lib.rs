use generate::{generate_impl, Parameters};
use module::get_struct_from_path;
use path::{get_root_src_path, parse_input_paths};
use proc_macro::TokenStream;
use syn::{parse_macro_input, Expr, ItemStruct};

/// Helper macro, which attaches an error to a given span.
macro_rules! err {
    ($span:ident, $($text:expr),*) => {
        {
            let message = format!($($text,)*);
            let span = $span.span();
            quote::quote_spanned!( span => compile_error!(#message); )
        }
    }
}

/// Helper macro, which takes a result.
/// Ok(T) => simply return the T
/// Err(err) => Emits a compiler error on the given span with the provided
///             error message and returns early.
///             Errors are collected instead of panicking, so all code that
///             can be generated is generated and the user sees every error.
macro_rules! ok_or_err_return {
    ($expr:expr, $span:ident, $($text:expr),*) => {
        match $expr {
            Ok(result) => result,
            Err(error) =>  {
                return Err(err!($span, $($text,)* error));
            }
        }
    }
}

mod generate;
mod module;
mod path;

/// Implement the `struct_defaults::StructDefaultsInto<T>` trait for all given
/// targets.
///
/// The target struct paths have to be
/// - absolute
/// - relative to the current crate
/// - contained in this crate
///
/// Either a single struct or a list of structs can be provided.
/// `StructDefaultsInto<T>` will then be implemented on each given target
/// struct.
///
/// Examples:
/// - `#[struct_defaults(crate::structs::Config)]`
/// - `#[struct_defaults([crate::structs::Config, crate::structs::Other])]`
///
/// `struct.rs`
/// ```ignore
/// use struct_defaults::struct_defaults;
///
/// pub struct Config {
///     pub host: Option<String>,
/// }
///
/// #[struct_defaults(crate::structs::Config)]
/// pub struct Fallback {
///     pub host: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn struct_defaults(args: TokenStream, struct_ast: TokenStream) -> TokenStream {
    struct_defaults_base(args, struct_ast, Mode::Owned)
}

/// Implement the `struct_defaults::StructDefaultsIntoRef<T>` trait for all
/// given targets.
///
/// The target struct paths have to be
/// - absolute
/// - relative to the current crate
/// - contained in this crate
///
/// Either a single struct or a list of structs can be provided.
/// `StructDefaultsIntoRef<T>` will then be implemented on each given target
/// struct. All shared fields must implement `Clone`.
///
/// Examples:
/// - `#[struct_defaults_ref(crate::structs::Config)]`
/// - `#[struct_defaults_ref([crate::structs::Config, crate::structs::Other])]`
#[proc_macro_attribute]
pub fn struct_defaults_ref(args: TokenStream, struct_ast: TokenStream) -> TokenStream {
    struct_defaults_base(args, struct_ast, Mode::Borrowed)
}

/// This enum is used to differentiate between consuming and cloning fill
/// behavior. Depending on this, another trait impl and slightly different
/// code is generated.
enum Mode {
    Owned,
    Borrowed,
}

fn struct_defaults_base(args: TokenStream, mut struct_ast: TokenStream, mode: Mode) -> TokenStream {
    let parsed_args = parse_macro_input!(args as Expr);

    // Check if we can find the src root path of this crate.
    // Return early if it doesn't exist.
    let src_root_path = match get_root_src_path(&parsed_args) {
        Ok(path) => path,
        Err(error) => {
            struct_ast.extend([TokenStream::from(error)]);
            return struct_ast;
        }
    };

    // Parse the main macro input as a struct.
    // We work on a clone of the struct ast.
    // That way we don't have to parse it lateron when we return it.
    let cloned_struct_ast = struct_ast.clone();
    let src_struct = parse_macro_input!(cloned_struct_ast as ItemStruct);

    // Get the target paths from the given argument expressions.
    let paths = match parse_input_paths(parsed_args) {
        Ok(paths) => paths,
        Err(error) => {
            struct_ast.extend([TokenStream::from(error)]);
            return struct_ast;
        }
    };

    // Go through all paths and process the respective target struct.
    let mut impls = Vec::new();
    for dest_path in paths {
        // Make sure we find the struct at that path.
        let dest_struct = match get_struct_from_path(src_root_path.clone(), dest_path.clone()) {
            Ok(ast) => ast,
            Err(error) => {
                impls.push(error);
                continue;
            }
        };

        let params = Parameters {
            src_struct: src_struct.clone(),
            dest_path,
        };

        // Generate the StructDefaultsInto trait implementations.
        match generate_impl(&mode, &params, dest_struct) {
            Ok(ast) => impls.push(ast),
            Err(error) => {
                impls.push(error);
                continue;
            }
        }
    }

    // Merge all generated pieces of the code with the original unaltered
    // struct.
    struct_ast.extend(impls.into_iter().map(TokenStream::from));

    // Hand the final output tokens back to the compiler.
    struct_ast
}
