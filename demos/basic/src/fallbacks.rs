use struct_defaults::{struct_defaults, struct_defaults_ref};

/// Per-user configuration. Consulted first.
#[struct_defaults_ref(crate::base::Options)]
pub struct UserOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// System-wide configuration. Only fills what the user layer left unset.
#[struct_defaults(crate::base::Options)]
pub struct SystemOptions {
    pub host: String,
    pub port: Option<u16>,
    pub verbose: bool,
}
