//! Human-readable rendering of validator trees.
//!
//! The output is meant for debugging and logs, e.g.
//! `All(Type(integer), MultipleOf(2))`.

use std::fmt::{self, Display, Formatter};

use super::{Additional, Validator};

impl Display for Validator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Validator::Anything => write!(f, "Anything"),
            Validator::Type(kind) => write!(f, "Type({})", kind),
            Validator::Any(children) => write_children(f, "Any", children),
            Validator::All(children) => write_children(f, "All", children),
            Validator::ExactlyOne(children) => write_children(f, "ExactlyOne", children),
            Validator::Range(range) => write!(
                f,
                "Range(min={}, max={}, min_included={}, max_included={})",
                optional(range.min),
                optional(range.max),
                range.min_inclusive,
                range.max_inclusive
            ),
            Validator::Length(length) => write!(
                f,
                "Length(min={}, max={})",
                optional(length.min),
                optional(length.max)
            ),
            Validator::MultipleOf(multiple) => write!(f, "MultipleOf({})", multiple.divisor),
            Validator::Pattern(pattern) => write!(f, "Pattern({:?})", pattern.regex.as_str()),
            Validator::ArrayOf(items) => write!(f, "ArrayOf({})", items),
            Validator::PositionalArray(positional) => {
                write!(f, "PositionalArray([")?;
                write_list(f, &positional.items)?;
                write!(f, "], additional={})", AdditionalDisplay(&positional.additional))
            }
            Validator::ObjectShape(shape) => {
                write!(f, "ObjectShape({{")?;
                for (i, (name, validator)) in shape.properties.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, validator)?;
                }
                write!(f, "}}, additional={})", AdditionalDisplay(&shape.additional))
            }
            Validator::Required(keys) => write!(f, "Required([{}])", keys.join(", ")),
            Validator::PropertyCount(count) => write!(
                f,
                "PropertyCount(min={}, max={})",
                optional(count.min),
                optional(count.max)
            ),
        }
    }
}

struct AdditionalDisplay<'a>(&'a Additional);

impl Display for AdditionalDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Additional::Reject => write!(f, "Reject"),
            Additional::AllowAny => write!(f, "AllowAny"),
            Additional::AllowIf(validator) => write!(f, "AllowIf({})", validator),
        }
    }
}

fn optional<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

fn write_children(f: &mut Formatter<'_>, name: &str, children: &[Validator]) -> fmt::Result {
    write!(f, "{}(", name)?;
    write_list(f, children)?;
    write!(f, ")")
}

fn write_list(f: &mut Formatter<'_>, items: &[Validator]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InstanceType;
    use crate::validator::{
        LengthCheck, LengthUnit, MultipleOfCheck, Numeric, ObjectShape, PositionalArray,
        RangeCheck,
    };
    use indexmap::IndexMap;

    #[test]
    fn test_render_nested() {
        let validator = Validator::All(vec![
            Validator::Type(InstanceType::Integer),
            Validator::MultipleOf(MultipleOfCheck {
                divisor: Numeric::Int(2),
                booleans_as_numbers: false,
            }),
        ]);
        assert_eq!(validator.to_string(), "All(Type(integer), MultipleOf(2))");
    }

    #[test]
    fn test_render_bounds() {
        let range = Validator::Range(RangeCheck {
            min: Some(Numeric::Float(2.5)),
            max: None,
            min_inclusive: false,
            max_inclusive: true,
            booleans_as_numbers: false,
        });
        assert_eq!(
            range.to_string(),
            "Range(min=2.5, max=None, min_included=false, max_included=true)"
        );

        let length = Validator::Length(LengthCheck {
            min: None,
            max: Some(3),
            unit: LengthUnit::Elements,
        });
        assert_eq!(length.to_string(), "Length(min=None, max=3)");
    }

    #[test]
    fn test_render_containers() {
        let positional = Validator::PositionalArray(PositionalArray {
            items: vec![Validator::Type(InstanceType::Boolean)],
            additional: Additional::Reject,
        });
        assert_eq!(
            positional.to_string(),
            "PositionalArray([Type(boolean)], additional=Reject)"
        );

        let mut properties = IndexMap::new();
        properties.insert("a".to_string(), Validator::Anything);
        let shape = Validator::ObjectShape(ObjectShape {
            properties,
            additional: Additional::AllowIf(Box::new(Validator::Type(InstanceType::Null))),
        });
        assert_eq!(
            shape.to_string(),
            "ObjectShape({a: Anything}, additional=AllowIf(Type(null)))"
        );

        let required = Validator::Required(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(required.to_string(), "Required([a, b])");
    }
}
