/// The options struct the caller assembles. Unset fields get filled from the
/// fallback layers.
pub struct Options {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub verbose: bool,
}
