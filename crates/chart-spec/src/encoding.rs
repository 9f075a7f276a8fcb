// File: crates/chart-spec/src/encoding.rs
// Summary: Field encoder; maps typed enum variants and flag sets onto the engine's JSON primitives.
// Notes:
// - Enums are declared as a table of `Variant => wire` rows. The wire column may
//   mix booleans, numbers and strings, so "polymorphic" enums use the same path.
// - Flag sets keep their bits in `bitflags` storage but only ever serialize
//   through the declared catalogue, never through raw bit order.

use bitflags::Flags;
use serde::{Serialize, Serializer};

/// A single JSON primitive as emitted on the wire.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Bool(bool),
    Str(&'static str),
    Int(i64),
    Float(f64),
}

impl Primitive {
    pub fn as_str(&self) -> Option<&'static str> {
        match *self {
            Primitive::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn to_json(self) -> serde_json::Value {
        match self {
            Primitive::Bool(b) => serde_json::Value::Bool(b),
            Primitive::Str(s) => serde_json::Value::String(s.to_owned()),
            Primitive::Int(n) => serde_json::Value::from(n),
            Primitive::Float(f) => serde_json::Value::from(f),
        }
    }
}

impl From<bool> for Primitive {
    fn from(b: bool) -> Self { Primitive::Bool(b) }
}

impl From<&'static str> for Primitive {
    fn from(s: &'static str) -> Self { Primitive::Str(s) }
}

impl From<i64> for Primitive {
    fn from(n: i64) -> Self { Primitive::Int(n) }
}

impl From<f64> for Primitive {
    fn from(f: f64) -> Self { Primitive::Float(f) }
}

impl From<Primitive> for serde_json::Value {
    fn from(p: Primitive) -> Self { p.to_json() }
}

impl Serialize for Primitive {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Primitive::Bool(b) => serializer.serialize_bool(b),
            Primitive::Str(s) => serializer.serialize_str(s),
            Primitive::Int(n) => serializer.serialize_i64(n),
            Primitive::Float(f) => serializer.serialize_f64(f),
        }
    }
}

/// Closed enum whose every variant has exactly one wire primitive.
///
/// Encoding is total: there is no variant without a mapping, and the mapping
/// is fixed when the enum is declared.
pub trait Encode {
    fn encode(&self) -> Primitive;
}

/// Flag set drawn from a fixed, ordered catalogue of named bits.
pub trait FlagSet: Flags + Copy {
    /// Every flag of the set with its wire name, in serialization order.
    const CATALOGUE: &'static [(Self, &'static str)];

    /// Join the wire names of all set flags with `+`, in catalogue order.
    /// The empty set encodes to `""`.
    fn encode(&self) -> String {
        Self::CATALOGUE
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join("+")
    }

    /// Wire names of the set flags, in catalogue order.
    fn names(&self) -> Vec<&'static str> {
        Self::CATALOGUE
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

/// `skip_serializing_if` predicate for flag-set fields that drop out when nothing is set.
pub fn unset_flags<F: FlagSet>(value: &Option<F>) -> bool {
    value.as_ref().map_or(true, |f| f.is_empty())
}

/// `skip_serializing_if` predicate for list fields that drop out when empty.
pub fn empty_list<T>(value: &Option<Vec<T>>) -> bool {
    value.as_ref().map_or(true, |v| v.is_empty())
}

/// Declare an enum from a `Variant => wire` table and derive its wire encoding.
///
/// The wire column accepts any literal convertible into [`Primitive`]
/// (`true`, `false`, `"name"`, `1_i64`, `0.5_f64`).
macro_rules! primitive_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All variants, in declaration order.
            pub const VARIANTS: &'static [$name] = &[$( $name::$variant ),+];
        }

        impl $crate::encoding::Encode for $name {
            fn encode(&self) -> $crate::encoding::Primitive {
                match *self {
                    $( $name::$variant => $crate::encoding::Primitive::from($wire), )+
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                ::serde::Serialize::serialize(&$crate::encoding::Encode::encode(self), serializer)
            }
        }
    };
}

/// Declare a `bitflags` set together with its ordered wire catalogue.
///
/// Rows read `FLAG = bit => "wire"`; the row order is the serialization order.
macro_rules! flag_set {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident: $bits:ty {
            $(
                $(#[$fmeta:meta])*
                $flag:ident = $bit:literal => $wire:literal
            ),+ $(,)?
        }
    ) => {
        ::bitflags::bitflags! {
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
            $vis struct $name: $bits {
                $( $(#[$fmeta])* const $flag = 1 << $bit; )+
            }
        }

        impl $crate::encoding::FlagSet for $name {
            const CATALOGUE: &'static [(Self, &'static str)] = &[$( ($name::$flag, $wire) ),+];
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(&$crate::encoding::FlagSet::encode(self))
            }
        }
    };
}

pub(crate) use flag_set;
pub(crate) use primitive_enum;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    primitive_enum! {
        enum Toggle {
            On => true,
            Off => false,
            Reversed => "reversed",
            Half => 0.5_f64,
            Level => 3_i64,
        }
    }

    // Bits deliberately run opposite to the catalogue.
    flag_set! {
        struct Parts: u8 {
            HEAD = 2 => "head",
            BODY = 1 => "body",
            TAIL = 0 => "tail",
        }
    }

    #[test]
    fn enum_rows_encode_to_declared_primitive() {
        assert_eq!(Toggle::On.encode(), Primitive::Bool(true));
        assert_eq!(Toggle::Off.encode(), Primitive::Bool(false));
        assert_eq!(Toggle::Reversed.encode(), Primitive::Str("reversed"));
        assert_eq!(serde_json::to_value(Toggle::Half).unwrap(), json!(0.5));
        assert_eq!(serde_json::to_value(Toggle::Level).unwrap(), json!(3));
        assert_eq!(Toggle::VARIANTS.len(), 5);
    }

    #[test]
    fn catalogue_order_beats_bit_order() {
        let parts = Parts::TAIL | Parts::HEAD;
        assert_eq!(parts.bits(), 0b101);
        assert_eq!(FlagSet::encode(&parts), "head+tail");
        assert_eq!(FlagSet::encode(&Parts::all()), "head+body+tail");
        assert_eq!(FlagSet::encode(&Parts::empty()), "");
        assert_eq!(parts.names(), vec!["head", "tail"]);
    }

    #[test]
    fn unset_predicate_covers_none_and_empty() {
        assert!(unset_flags::<Parts>(&None));
        assert!(unset_flags(&Some(Parts::empty())));
        assert!(!unset_flags(&Some(Parts::BODY)));
        assert!(empty_list::<u8>(&Some(vec![])));
        assert!(!empty_list(&Some(vec![1u8])));
    }
}
