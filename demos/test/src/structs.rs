use struct_defaults::{struct_defaults, struct_defaults_ref};

/// The struct that's going to be filled.
pub struct Base {
    pub plain: String,
    pub optional: Option<String>,
}

impl Base {
    pub fn new() -> Self {
        Self {
            plain: "base".to_string(),
            optional: None,
        }
    }
}

/// A source with identical field types.
#[struct_defaults(crate::structs::Base)]
#[struct_defaults_ref(crate::structs::Base)]
pub struct Identical {
    pub plain: String,
    pub optional: Option<String>,
}

impl Identical {
    pub fn new() -> Self {
        Self {
            plain: "identical".to_string(),
            optional: Some("identical".to_string()),
        }
    }
}

/// A source with the same field types, but all of them optional.
#[struct_defaults(crate::structs::Base)]
#[struct_defaults_ref(crate::structs::Base)]
pub struct Optional {
    pub plain: Option<String>,
    pub optional: Option<Option<String>>,
}

impl Optional {
    pub fn new() -> Self {
        Self {
            plain: Some("optional".to_string()),
            optional: Some(Some("optional".to_string())),
        }
    }
}

/// A source with both identical and optional fields.
#[struct_defaults(crate::structs::Base)]
#[struct_defaults_ref(crate::structs::Base)]
pub struct Mixed {
    pub plain: String,
    pub optional: Option<Option<String>>,
}

impl Mixed {
    pub fn new() -> Self {
        Self {
            plain: "mixed".to_string(),
            optional: Some(Some("mixed".to_string())),
        }
    }
}
