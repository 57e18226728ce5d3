use std::path::PathBuf;

use proc_macro2::TokenStream;
use syn::{spanned::Spanned, Expr, ExprPath};

/// Extract the target paths from the macro arguments.
///
/// Both a single path and an array of paths are supported.
/// I.e.
/// - `struct_defaults(crate::some::Struct)`
/// - `struct_defaults([crate::some::Struct, crate::some_other::Struct])`
pub fn parse_input_paths(args: Expr) -> Result<Vec<ExprPath>, TokenStream> {
    match args {
        Expr::Path(path) => Ok(vec![path]),
        Expr::Array(array) => {
            let mut paths = Vec::new();
            for expr in array.elems {
                match expr {
                    Expr::Path(path) => paths.push(path),
                    _ => {
                        return Err(err!(
                            expr,
                            "Only paths are allowed in struct_defaults' attribute."
                        ));
                    }
                }
            }
            Ok(paths)
        }
        _ => Err(err!(
            args,
            "struct_defaults' macro parameters should be either a single path {}",
            "or an array of paths, such as '[crate::your::Struct]'."
        )),
    }
}

/// Get the source root of the crate that's currently using this proc macro.
/// This is done via the `CARGO_MANIFEST_DIR` variable, that's always supplied
/// by cargo and represents the directory containing the `Cargo.toml` for the
/// current crate.
pub fn get_root_src_path(parsed_args: &Expr) -> Result<PathBuf, TokenStream> {
    let manifest_dir = ok_or_err_return!(
        std::env::var("CARGO_MANIFEST_DIR"),
        parsed_args,
        "Couldn't read CARGO_MANIFEST_DIR environment variable: {}"
    );

    let mut path = PathBuf::from(manifest_dir);
    if !path.exists() {
        return Err(err!(
            parsed_args,
            "CARGO_MANIFEST_DIR path doesn't exist: {:?}",
            path
        ));
    }

    // The source tree is expected to start at `$CARGO_MANIFEST_DIR/src`.
    // Anything else would require parsing the Cargo manifest.
    path.push("src");

    Ok(path)
}
