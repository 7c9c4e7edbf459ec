//! Filters over a decoded part sequence.

use crate::part::{NumericPart, Part, StringPart, ValuePart};

/// String parts with the given type, in wire order.
pub fn string_parts(parts: &[Part], part_type: u16) -> impl Iterator<Item = &StringPart> {
    parts
        .iter()
        .filter_map(Part::as_string)
        .filter(move |part| part.header.part_type == part_type)
}

/// Numeric parts with the given type, in wire order.
pub fn numeric_parts(parts: &[Part], part_type: u16) -> impl Iterator<Item = &NumericPart> {
    parts
        .iter()
        .filter_map(Part::as_numeric)
        .filter(move |part| part.header.part_type == part_type)
}

/// All values parts, in wire order.
pub fn value_parts(parts: &[Part]) -> impl Iterator<Item = &ValuePart> {
    parts.iter().filter_map(Part::as_values)
}
