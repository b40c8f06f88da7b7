//! Templates for composite writers.
//!
//! A composite writer is declared once as a table of child properties; the
//! macros below expand every row into the accessor triple
//! (`<prop>_writer`, `open_<prop>_property`, `write_<prop>_property`), the
//! lazy child slot and the `PROPERTIES` table entry.

use super::element::{ElementWriter, Scoped};
use super::property::PropertyWriter;
use super::scope::ParentScope;
use crate::util::Result;
use crate::value::{Binding, CzmlValue, ValueKind};

/// One row of a composite writer's property table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyInfo {
    /// Member name on the wire.
    pub name: &'static str,
    pub kind: ValueKind,
    /// Client-side default, for reference only; never written implicitly.
    pub default: Option<&'static str>,
}

impl PropertyInfo {
    /// Look up `name` in `table`.
    pub fn find(table: &'static [PropertyInfo], name: &str) -> Option<&'static PropertyInfo> {
        table.iter().find(|p| p.name == name)
    }
}

/// Open the child in `slot`, creating it on first use.
pub(crate) fn open_child<'a, P, W>(
    parent: &mut P,
    slot: &'a mut Option<W>,
    create: impl FnOnce() -> W,
) -> Result<&'a mut W>
where
    P: ParentScope,
    W: ElementWriter,
{
    let output = parent.prepare_child()?;
    let writer = slot.get_or_insert_with(create);
    writer.open(&output)?;
    Ok(writer)
}

/// Open the child property in `slot`, write one value and close it again.
/// The child is closed on every path.
pub(crate) fn write_child<P, V>(
    parent: &mut P,
    slot: &mut Option<PropertyWriter<V>>,
    name: &'static str,
    encoding: V::Encoding,
    value: Binding<V>,
) -> Result<()>
where
    P: ParentScope,
    V: CzmlValue,
{
    let output = parent.prepare_child()?;
    let writer = slot.get_or_insert_with(|| PropertyWriter::new(name));
    let mut scoped = Scoped::open(writer, &output)?;
    scoped.write_as(encoding, value)?;
    scoped.finish()
}

/// Accessor methods for child slots of a writer whose `core` field
/// implements `ParentScope`.
macro_rules! property_accessors {
    (
        properties {
            $(
                $(#[$doc:meta])*
                $field:ident($wire:literal): $vty:ty = $default:expr
                    => $get:ident, $open:ident, $write:ident, $write_ref:ident
                        $(, $alt:ident($enc:expr))*;
            )*
        }
        composites {
            $(
                $(#[$cdoc:meta])*
                $cfield:ident($cwire:literal): $cty:ty => $cget:ident, $copen:ident;
            )*
        }
    ) => {
        $(
            #[doc = concat!("Writer for the `", $wire, "` property.")]
            pub fn $get(&mut self) -> &mut $crate::writer::PropertyWriter<$vty> {
                self.$field.get_or_insert_with(|| $crate::writer::PropertyWriter::new($wire))
            }

            #[doc = concat!("Open the `", $wire, "` property.")]
            pub fn $open(&mut self) -> $crate::Result<&mut $crate::writer::PropertyWriter<$vty>> {
                $crate::writer::macros::open_child(&mut self.core, &mut self.$field, || {
                    $crate::writer::PropertyWriter::new($wire)
                })
            }

            $(#[$doc])*
            pub fn $write(&mut self, value: impl Into<$crate::value::Binding<$vty>>) -> $crate::Result<()> {
                $crate::writer::macros::write_child(
                    &mut self.core,
                    &mut self.$field,
                    $wire,
                    Default::default(),
                    value.into(),
                )
            }

            #[doc = concat!("Write `", $wire, "` as a reference to another object's property.")]
            pub fn $write_ref(&mut self, reference: impl $crate::value::IntoReference) -> $crate::Result<()> {
                let reference = reference.into_reference()?;
                $crate::writer::macros::write_child(
                    &mut self.core,
                    &mut self.$field,
                    $wire,
                    Default::default(),
                    $crate::value::Binding::Reference(reference),
                )
            }

            $(
                #[doc = concat!("Write `", $wire, "` in the `", stringify!($enc), "` encoding.")]
                pub fn $alt(&mut self, value: impl Into<$crate::value::Binding<$vty>>) -> $crate::Result<()> {
                    $crate::writer::macros::write_child(
                        &mut self.core,
                        &mut self.$field,
                        $wire,
                        $enc,
                        value.into(),
                    )
                }
            )*
        )*

        $(
            $(#[$cdoc])*
            pub fn $cget(&mut self) -> &mut $cty {
                self.$cfield.get_or_insert_with(|| <$cty>::new($cwire))
            }

            #[doc = concat!("Open the `", $cwire, "` property.")]
            pub fn $copen(&mut self) -> $crate::Result<&mut $cty> {
                $crate::writer::macros::open_child(&mut self.core, &mut self.$cfield, || {
                    <$cty>::new($cwire)
                })
            }
        )*
    };
}

/// A composite property writer: a `PropertyCore`, one lazy slot per child
/// and the generated accessors.
macro_rules! czml_writer {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            properties {
                $(
                    $(#[$doc:meta])*
                    $field:ident($wire:literal): $vty:ty = $default:expr
                        => $get:ident, $open:ident, $write:ident, $write_ref:ident
                            $(, $alt:ident($enc:expr))*;
                )*
            }
            composites {
                $(
                    $(#[$cdoc:meta])*
                    $cfield:ident($cwire:literal): $cty:ty => $cget:ident, $copen:ident;
                )*
            }
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            core: $crate::writer::PropertyCore,
            $( $field: Option<$crate::writer::PropertyWriter<$vty>>, )*
            $( $cfield: Option<$cty>, )*
        }

        impl $name {
            /// Child properties: value properties in declaration order, then composites.
            pub const PROPERTIES: &'static [$crate::writer::PropertyInfo] = &[
                $(
                    $crate::writer::PropertyInfo {
                        name: $wire,
                        kind: <$vty as $crate::value::CzmlValue>::KIND,
                        default: $default,
                    },
                )*
                $(
                    $crate::writer::PropertyInfo {
                        name: $cwire,
                        kind: $crate::value::ValueKind::Composite,
                        default: None,
                    },
                )*
            ];

            /// Writer for the member `name`.
            pub fn new(name: &'static str) -> Self {
                Self {
                    core: $crate::writer::PropertyCore::new(name),
                    $( $field: None, )*
                    $( $cfield: None, )*
                }
            }

            property_accessors! {
                properties {
                    $(
                        $(#[$doc])*
                        $field($wire): $vty = $default
                            => $get, $open, $write, $write_ref $(, $alt($enc))*;
                    )*
                }
                composites {
                    $(
                        $(#[$cdoc])*
                        $cfield($cwire): $cty => $cget, $copen;
                    )*
                }
            }
        }

        impl Clone for $name {
            /// A fresh, unopened writer with no children created yet.
            fn clone(&self) -> Self {
                Self {
                    core: self.core.clone(),
                    $( $field: None, )*
                    $( $cfield: None, )*
                }
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("name", &self.core.name())
                    .field("open", &self.core.is_open())
                    .finish_non_exhaustive()
            }
        }

        impl $crate::writer::ElementWriter for $name {
            fn open(&mut self, output: &$crate::output::SharedOutput) -> $crate::Result<()> {
                self.core.open(output)
            }

            fn close(&mut self) -> $crate::Result<()> {
                self.core.close()
            }

            fn is_open(&self) -> bool {
                self.core.is_open()
            }
        }

        impl $crate::writer::PropertyElement for $name {
            fn core(&self) -> &$crate::writer::PropertyCore {
                &self.core
            }

            fn core_mut(&mut self) -> &mut $crate::writer::PropertyCore {
                &mut self.core
            }
        }
    };
}
