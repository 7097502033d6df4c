// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Geostory-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Geostory and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;

use super::record::{AttrValue, DataObject};

/// One step of a compiled column path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    Field(String),
    Index(usize),
}

/// A column path compiled once and evaluated against many records.
///
/// Three shapes are accepted: `name`, `name[idx]`, and `name[idx].attr`.
/// A plain `name` path falls back to the nested `tableContent` record when
/// the top-level attribute is absent; bracket paths do not. A bracket path
/// without a trailing `.attr` yields the addressed element itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrPath {
    steps: SmallVec<[PathStep; 3]>,
}

impl AttrPath {
    pub fn parse(input: &str) -> Result<Self, AttrPathError> {
        if input.is_empty() {
            return Err(AttrPathError::Empty);
        }

        let Some((column, rest)) = input.split_once('[') else {
            let mut steps = SmallVec::new();
            steps.push(PathStep::Field(input.to_owned()));
            return Ok(Self { steps });
        };

        if column.is_empty() {
            return Err(AttrPathError::MissingColumn);
        }
        let Some((index_str, attr)) = rest.split_once(']') else {
            return Err(AttrPathError::UnclosedBracket);
        };
        let index: usize = index_str.parse().map_err(|_| AttrPathError::InvalidIndex {
            index: index_str.to_owned(),
        })?;

        let mut steps = SmallVec::new();
        steps.push(PathStep::Field(column.to_owned()));
        steps.push(PathStep::Index(index));

        if attr.is_empty() {
            return Ok(Self { steps });
        }
        let Some(attr) = attr.strip_prefix('.') else {
            return Err(AttrPathError::TrailingInput {
                rest: attr.to_owned(),
            });
        };
        if attr.is_empty() {
            return Err(AttrPathError::TrailingInput {
                rest: ".".to_owned(),
            });
        }
        steps.push(PathStep::Field(attr.to_owned()));
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Resolves the path against one record.
    ///
    /// Any missing attribute or out-of-range element yields `None`;
    /// resolution never fails hard, so a scan over many records always
    /// completes.
    pub fn resolve<'a>(&self, object: &'a DataObject) -> Option<&'a AttrValue> {
        let mut steps = self.steps.iter();
        let PathStep::Field(column) = steps.next()? else {
            return None;
        };

        let mut current = match object.attr(column) {
            Some(value) => value,
            // the tableContent fallback only applies to plain paths
            None if self.steps.len() == 1 => return object.table_content_attr(column),
            None => return None,
        };

        for step in steps {
            current = match step {
                PathStep::Field(name) => current.field(name)?,
                PathStep::Index(index) => current.element(*index)?,
            };
        }
        Some(current)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrPathError {
    Empty,
    MissingColumn,
    UnclosedBracket,
    InvalidIndex { index: String },
    TrailingInput { rest: String },
}

impl fmt::Display for AttrPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("column path must not be empty"),
            Self::MissingColumn => f.write_str("column path has no name before '['"),
            Self::UnclosedBracket => f.write_str("column path has an unclosed '['"),
            Self::InvalidIndex { index } => {
                write!(f, "column path index '{index}' is not a number")
            }
            Self::TrailingInput { rest } => {
                write!(f, "unexpected input '{rest}' after ']'")
            }
        }
    }
}

impl std::error::Error for AttrPathError {}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::super::record::{AttrValue, DataObject, TABLE_CONTENT};
    use super::{AttrPath, AttrPathError, PathStep};

    fn visits_object() -> DataObject {
        let mut visit = BTreeMap::new();
        visit.insert("place".to_owned(), AttrValue::text("Paris"));
        let mut object = DataObject::new(0);
        object.set_attr("visits", AttrValue::List(vec![AttrValue::Record(visit)]));
        object
    }

    #[test]
    fn plain_path_compiles_to_one_field_step() {
        let path = AttrPath::parse("city").unwrap();
        assert_eq!(path.steps(), [PathStep::Field("city".to_owned())]);
    }

    #[test]
    fn bracket_path_compiles_field_index_field() {
        let path = AttrPath::parse("visits[0].place").unwrap();
        assert_eq!(
            path.steps(),
            [
                PathStep::Field("visits".to_owned()),
                PathStep::Index(0),
                PathStep::Field("place".to_owned()),
            ]
        );
    }

    #[test]
    fn malformed_paths_are_rejected() {
        assert_eq!(AttrPath::parse(""), Err(AttrPathError::Empty));
        assert_eq!(AttrPath::parse("[0]"), Err(AttrPathError::MissingColumn));
        assert_eq!(
            AttrPath::parse("visits[0"),
            Err(AttrPathError::UnclosedBracket)
        );
        assert_eq!(
            AttrPath::parse("visits[x]"),
            Err(AttrPathError::InvalidIndex {
                index: "x".to_owned()
            })
        );
        assert_eq!(
            AttrPath::parse("visits[0]place"),
            Err(AttrPathError::TrailingInput {
                rest: "place".to_owned()
            })
        );
    }

    #[test]
    fn plain_path_falls_back_to_table_content() {
        let mut fallback = BTreeMap::new();
        fallback.insert("city".to_owned(), AttrValue::text("Rome"));
        let mut object = DataObject::new(0);
        object.set_attr(TABLE_CONTENT, AttrValue::Record(fallback));

        let path = AttrPath::parse("city").unwrap();
        assert_eq!(path.resolve(&object), Some(&AttrValue::text("Rome")));
    }

    #[test]
    fn bracket_path_does_not_fall_back() {
        let mut fallback = BTreeMap::new();
        fallback.insert("visits".to_owned(), AttrValue::List(Vec::new()));
        let mut object = DataObject::new(0);
        object.set_attr(TABLE_CONTENT, AttrValue::Record(fallback));

        let path = AttrPath::parse("visits[0]").unwrap();
        assert_eq!(path.resolve(&object), None);
    }

    #[test]
    fn bracket_path_without_attr_yields_the_element() {
        let object = visits_object();
        let path = AttrPath::parse("visits[0]").unwrap();
        let element = path.resolve(&object).unwrap();
        assert_eq!(element.field("place"), Some(&AttrValue::text("Paris")));
    }

    #[test]
    fn bracket_path_reads_nested_attribute() {
        let object = visits_object();
        let path = AttrPath::parse("visits[0].place").unwrap();
        assert_eq!(path.resolve(&object), Some(&AttrValue::text("Paris")));
    }

    #[test]
    fn missing_element_resolves_to_none() {
        let object = visits_object();
        let path = AttrPath::parse("visits[7].place").unwrap();
        assert_eq!(path.resolve(&object), None);
    }
}
