//! Struct values with named and embedded fields
//!
//! A [`Record`] is how a Rust struct shows up to the engine: its type name and
//! an ordered list of named field values. Fields flagged as *embedded* promote
//! their own fields into the parent, so `validate_struct` can address them by
//! their simple name.
//!
//! Records are normally produced by the [`record!`](crate::record) macro.

use crate::foundation::convert::ToValue;
use crate::foundation::error::Error;
use crate::foundation::traits::Validatable;
use crate::foundation::value::Value;

/// A struct value: type name plus named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<'a> {
    type_name: &'static str,
    fields: Vec<RecordField<'a>>,
}

/// One field of a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordField<'a> {
    name: &'static str,
    value: Value<'a>,
    embedded: bool,
}

impl<'a> RecordField<'a> {
    /// The declared field name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The field value.
    #[must_use]
    pub fn value(&self) -> &Value<'a> {
        &self.value
    }

    /// Returns `true` if the field's own fields are promoted into the parent.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }
}

impl<'a> Record<'a> {
    /// Creates a record with no fields.
    #[must_use]
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            fields: Vec::new(),
        }
    }

    /// Adds a directly declared field.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<T: ToValue + ?Sized>(mut self, name: &'static str, value: &'a T) -> Self {
        self.fields.push(RecordField {
            name,
            value: value.to_value(),
            embedded: false,
        });
        self
    }

    /// Adds an embedded field whose fields are promoted into this record.
    #[must_use = "builder methods must be chained or built"]
    pub fn embed<T: ToValue + ?Sized>(mut self, name: &'static str, value: &'a T) -> Self {
        self.fields.push(RecordField {
            name,
            value: value.to_value(),
            embedded: true,
        });
        self
    }

    /// The struct's type name.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &RecordField<'a>> {
        self.fields.iter()
    }

    /// Wraps the record as a plain value.
    #[must_use]
    pub fn into_value(self) -> Value<'a> {
        Value::Record(self)
    }

    /// Wraps the record together with the struct's own validation logic.
    #[must_use]
    pub fn validated_by(self, validator: &'a dyn Validatable) -> Value<'a> {
        Value::delegate(validator, Value::Record(self))
    }

    /// Resolves a field by its simple name.
    ///
    /// Fields are searched level by level: the record's own fields first, then
    /// the fields of its embedded records, then theirs. The shallowest match
    /// wins. Two matches at the same level are ambiguous.
    ///
    /// # Errors
    ///
    /// A usage error if the name is ambiguous or no field has it.
    pub fn lookup(&self, name: &str) -> Result<&RecordField<'a>, Error> {
        let mut level: Vec<&Record<'a>> = vec![self];
        while !level.is_empty() {
            let mut found = None;
            let mut next = Vec::new();
            for record in level {
                for field in &record.fields {
                    if field.name == name {
                        if found.is_some() {
                            return Err(Error::usage(format!("field \"{name}\" is ambiguous")));
                        }
                        found = Some(field);
                    }
                    if field.embedded
                        && let Some(inner) = field.value.as_record()
                    {
                        next.push(inner);
                    }
                }
            }
            if let Some(field) = found {
                return Ok(field);
            }
            level = next;
        }
        Err(Error::usage(format!(
            "field \"{name}\" cannot be found in the struct"
        )))
    }

    /// Detaches the record from borrowed data.
    #[must_use]
    pub fn into_owned(self) -> Record<'static> {
        Record {
            type_name: self.type_name,
            fields: self
                .fields
                .into_iter()
                .map(|f| RecordField {
                    name: f.name,
                    value: f.value.into_owned(),
                    embedded: f.embedded,
                })
                .collect(),
        }
    }
}
