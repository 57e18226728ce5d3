use std::path::PathBuf;

use proc_macro2::TokenStream;
use syn::{spanned::Spanned, ExprPath, Item, ItemStruct};

/// This function takes a path to a struct and returns the AST of that struct.
///
/// There is no easy way to do module resolution during this stage of the
/// compilation. Some non-trivial limitations:
/// - Non-public structs. I.e. structs that aren't fully internally visible.
/// - Alternating mix of `mod {}` code blocks and actual file modules.
/// - Code isn't located in the `src` folder. We would have to parse the
///   `Cargo.toml` to resolve this.
///
/// Resolution that does work:
/// - [x] Import path is equivalent to file path.
/// - [x] Directory modules with a `mod.rs`.
/// - [ ] Struct in (potentially nested or alternating) `mod {}` block in file.
/// - [ ] Struct located at root of crate. E.g. `lib.rs`.
/// - [ ] Struct located in integration tests.
pub fn get_struct_from_path(
    mut file_path: PathBuf,
    path: ExprPath,
) -> Result<ItemStruct, TokenStream> {
    // Keep a copy of the whole path around as the span anchor for errors that
    // concern the path as a whole.
    let full_path = path.clone();

    let mut segments = path.path.segments.into_iter().peekable();

    // Make sure the root of the path is the current crate.
    let first = match segments.next() {
        Some(segment) => segment,
        None => {
            return Err(err!(full_path, "Expected a non-empty struct path."));
        }
    };
    if first.ident != "crate" {
        return Err(err!(
            first,
            "struct_defaults only supports paths in the current 'crate::' space for now."
        ));
    }

    // Get the file path for the specified Rust path.
    let dest_struct_name = loop {
        let segment = match segments.next() {
            Some(segment) => segment,
            None => {
                return Err(err!(
                    full_path,
                    "Expected a struct name after 'crate::' in the given path."
                ));
            }
        };

        // The last identifier is the name of the struct.
        // Break, so it doesn't get added to the file path.
        if segments.peek().is_none() {
            break segment.ident;
        }

        // Push the next identifier to the path.
        file_path.push(segment.ident.to_string());

        // Check if we find a folder for that module.
        if !file_path.is_dir() {
            // In case we couldn't find a folder, try a Rust file.
            // Set the extension for rust source code files.
            file_path.set_extension("rs");

            if !file_path.exists() {
                return Err(err!(segment, "Cannot find file for path: {:?}", file_path));
            }
        }
    };

    // Directory modules keep their items in a `mod.rs`.
    if file_path.is_dir() {
        file_path.push("mod.rs");
    }

    // Read and parse the file.
    let file_content = ok_or_err_return!(
        std::fs::read_to_string(&file_path),
        full_path,
        "Failed to open file: {}"
    );

    let file_ast = ok_or_err_return!(
        syn::parse_file(&file_content),
        full_path,
        "Failed to parse file: {}"
    );

    for item in file_ast.items.into_iter() {
        if let Item::Struct(item_struct) = item {
            if item_struct.ident == dest_struct_name {
                return Ok(item_struct);
            }
        }
    }

    Err(err!(
        full_path,
        "Didn't find struct {} in file {:?}",
        dest_struct_name,
        &file_path
    ))
}
