use super::{
    inflector::{camelize, classify},
    types::{Part, QName},
};

/// Turns message parts and the XML types or elements they reference into
/// host language identifiers.
///
/// Implementations must be deterministic for identical inputs.
pub trait NamingStrategy {
    fn property_name(&self, part: &Part) -> String;

    fn type_name(&self, ty: &QName) -> String;

    fn item_name(&self, element: &QName) -> String;
}

impl<N: NamingStrategy + ?Sized> NamingStrategy for &N {
    fn property_name(&self, part: &Part) -> String {
        (**self).property_name(part)
    }

    fn type_name(&self, ty: &QName) -> String {
        (**self).type_name(ty)
    }

    fn item_name(&self, element: &QName) -> String {
        (**self).item_name(element)
    }
}

impl<N: NamingStrategy + ?Sized> NamingStrategy for Box<N> {
    fn property_name(&self, part: &Part) -> String {
        (**self).property_name(part)
    }

    fn type_name(&self, ty: &QName) -> String {
        (**self).type_name(ty)
    }

    fn item_name(&self, element: &QName) -> String {
        (**self).item_name(element)
    }
}

/// Names types after their local XML name with a `Type` suffix, and elements
/// after their local XML name as is.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortNamingStrategy;

fn dotless(name: &str) -> String {
    name.replace('.', " ")
}

impl NamingStrategy for ShortNamingStrategy {
    fn property_name(&self, part: &Part) -> String {
        camelize(&dotless(&part.name))
    }

    fn type_name(&self, ty: &QName) -> String {
        let mut name = classify(&dotless(&ty.name));

        if !name.is_empty() && !name.ends_with("Type") {
            name.push_str("Type");
        }

        name
    }

    fn item_name(&self, element: &QName) -> String {
        classify(&dotless(&element.name))
    }
}
