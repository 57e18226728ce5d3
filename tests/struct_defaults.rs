//! Exercise the trait surface through hand-written source-side impls,
//! the same shape the attribute macros generate.

use struct_defaults::{
    StructDefaults, StructDefaultsInto, StructDefaultsIntoRef, StructDefaultsRef,
};

#[derive(Debug, Clone, PartialEq)]
struct Connection {
    host: Option<String>,
    port: Option<u16>,
    retries: u32,
}

struct Fallback {
    host: Option<String>,
    port: Option<u16>,
}

impl StructDefaultsInto<Connection> for Fallback {
    fn defaults_into(self, dest: &mut Connection) {
        if dest.host.is_none() {
            dest.host = self.host;
        }
        if dest.port.is_none() {
            dest.port = self.port;
        }
    }
}

impl StructDefaultsIntoRef<Connection> for Fallback {
    fn defaults_into_ref(&self, dest: &mut Connection) {
        if dest.host.is_none() {
            dest.host = self.host.clone();
        }
        if dest.port.is_none() {
            dest.port = self.port.clone();
        }
    }
}

fn partial_connection() -> Connection {
    Connection {
        host: Some("example.org".to_string()),
        port: None,
        retries: 3,
    }
}

#[test]
fn fills_only_unset_fields() {
    let mut connection = partial_connection();
    connection.defaults(Fallback {
        host: Some("fallback.local".to_string()),
        port: Some(443),
    });

    assert_eq!(connection.host, Some("example.org".to_string()));
    assert_eq!(connection.port, Some(443));
    assert_eq!(connection.retries, 3);
}

#[test]
fn earlier_sources_win_across_layers() {
    let mut connection = partial_connection();
    connection.defaults_ref(&Fallback {
        host: None,
        port: Some(8080),
    });
    connection.defaults_ref(&Fallback {
        host: Some("ignored.local".to_string()),
        port: Some(9090),
    });

    assert_eq!(connection.host, Some("example.org".to_string()));
    assert_eq!(connection.port, Some(8080));
}

#[test]
fn repeated_application_is_a_no_op() {
    let source = Fallback {
        host: Some("fallback.local".to_string()),
        port: Some(443),
    };

    let mut once = partial_connection();
    once.defaults_ref(&source);
    let mut twice = once.clone();
    twice.defaults_ref(&source);

    assert_eq!(once, twice);
}

#[test]
fn unset_source_fields_leave_the_destination_refillable() {
    let mut connection = partial_connection();
    connection.defaults_ref(&Fallback {
        host: None,
        port: None,
    });
    assert_eq!(connection.port, None);

    connection.defaults_ref(&Fallback {
        host: None,
        port: Some(22),
    });
    assert_eq!(connection.port, Some(22));
}
