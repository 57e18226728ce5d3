//! Fill unset values from layered default sources.
//!
//! The rule is the same everywhere in this crate: a value is copied from a
//! source only if the destination doesn't already hold one, and sources are
//! consulted in order, so earlier sources win. Already-assigned values are
//! never overwritten.
//!
//! Two surfaces implement the rule:
//!
//! - [`value::defaults`] applies it dynamically to [`serde_json::Value`]
//!   objects, with `Null` acting as the unset sentinel.
//! - The `#[struct_defaults]`/`#[struct_defaults_ref]` attribute macros
//!   generate it at compile time for pairs of structs, with `Option::None`
//!   acting as the unset sentinel.

pub use struct_defaults_codegen::{struct_defaults, struct_defaults_ref};

pub mod eq;
pub mod value;

pub use value::{defaults, with_defaults};

/// This trait defines functions which fill the unset fields of a given struct
/// from `self`'s fields.
///
/// Only `Option`al fields of the destination can be unset; a field is filled
/// if and only if it is currently `None`.
pub trait StructDefaultsInto<Dest: ?Sized> {
    /// Fill `dest`'s unset fields while consuming `self`.
    fn defaults_into(self, dest: &mut Dest);
}

/// The borrowed counterpart of [StructDefaultsInto].
///
/// Filled values are cloned out of `self`, so all shared fields must
/// implement `Clone`.
pub trait StructDefaultsIntoRef<Dest: ?Sized> {
    /// Fill `dest`'s unset fields while cloning `self`'s fields.
    fn defaults_into_ref(&self, dest: &mut Dest);
}

/// The counterpart implementing the fill functions on the destination struct.
/// These functions are automatically implemented as soon as a
/// [StructDefaultsInto] impl for the destination struct exists.
///
/// Layered defaults are successive calls; the first source to fill a field
/// wins, since the field is no longer `None` afterwards.
pub trait StructDefaults<Src: StructDefaultsInto<Self>> {
    /// Fill self's unset fields from the given struct, consuming it.
    fn defaults(&mut self, src: Src);
}

/// The destination-side counterpart of [StructDefaultsIntoRef].
pub trait StructDefaultsRef<Src: StructDefaultsIntoRef<Self>> {
    /// Fill self's unset fields from the given struct, cloning its fields.
    fn defaults_ref(&mut self, src: &Src);
}

/// Implement [StructDefaults] for all types that provide [StructDefaultsInto]
/// for them.
impl<Dest, Src: StructDefaultsInto<Dest>> StructDefaults<Src> for Dest {
    fn defaults(&mut self, src: Src) {
        src.defaults_into(self);
    }
}

/// Implement [StructDefaultsRef] for all types that provide
/// [StructDefaultsIntoRef] for them.
impl<Dest, Src: StructDefaultsIntoRef<Dest>> StructDefaultsRef<Src> for Dest {
    fn defaults_ref(&mut self, src: &Src) {
        src.defaults_into_ref(self);
    }
}
