use crate::types::{CuisineStyle, RestaurantRecord};
use serde::{Deserialize, Serialize};

/// The store-side subset of a request's criteria.
///
/// "Open now" is evaluated after the scan and never pushed to the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<CuisineStyle>,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub deliveries: bool,
}

impl ScanFilter {
    /// Conjunctive expression for this filter, `None` when nothing is constrained.
    pub fn expression(&self) -> Option<FilterExpression> {
        let mut conditions = Vec::new();
        if let Some(style) = self.style {
            conditions.push(Condition::eq(
                RecordAttribute::Style,
                AttributeValue::Text(style.as_str().to_string()),
            ));
        }
        if self.vegetarian {
            conditions.push(Condition::eq(
                RecordAttribute::Vegetarian,
                AttributeValue::Bool(true),
            ));
        }
        if self.deliveries {
            conditions.push(Condition::eq(
                RecordAttribute::Deliveries,
                AttributeValue::Bool(true),
            ));
        }

        if conditions.is_empty() {
            None
        } else {
            Some(FilterExpression { all: conditions })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordAttribute {
    Style,
    Vegetarian,
    Deliveries,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Bool(bool),
}

/// Equality condition on one record attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub attribute: RecordAttribute,
    pub equals: AttributeValue,
}

impl Condition {
    pub fn eq(attribute: RecordAttribute, equals: AttributeValue) -> Self {
        Self { attribute, equals }
    }

    pub fn matches(&self, record: &RestaurantRecord) -> bool {
        match (self.attribute, &self.equals) {
            (RecordAttribute::Style, AttributeValue::Text(style)) => {
                record.style.trim().eq_ignore_ascii_case(style)
            }
            (RecordAttribute::Vegetarian, AttributeValue::Bool(expected)) => {
                record.vegetarian == *expected
            }
            (RecordAttribute::Deliveries, AttributeValue::Bool(expected)) => {
                record.deliveries == *expected
            }
            // Type mismatch: a text attribute never equals a boolean and vice versa.
            _ => false,
        }
    }
}

/// Conjunction of equality conditions, the shape every backend understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterExpression {
    pub all: Vec<Condition>,
}

impl FilterExpression {
    pub fn conditions(&self) -> &[Condition] {
        &self.all
    }

    pub fn matches(&self, record: &RestaurantRecord) -> bool {
        self.all.iter().all(|condition| condition.matches(record))
    }
}

/// Applies an optional expression to records in place, keeping their order.
pub fn apply_filter(
    records: Vec<RestaurantRecord>,
    filter: Option<&FilterExpression>,
) -> Vec<RestaurantRecord> {
    match filter {
        Some(expression) => records
            .into_iter()
            .filter(|record| expression.matches(record))
            .collect(),
        None => records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_filter_has_no_expression() {
        assert_eq!(ScanFilter::default().expression(), None);
    }

    #[test]
    fn false_flags_add_no_conditions() {
        let filter = ScanFilter {
            style: Some(CuisineStyle::Mexican),
            vegetarian: false,
            deliveries: false,
        };
        let expression = filter.expression().unwrap();
        assert_eq!(expression.conditions().len(), 1);
        assert_eq!(expression.conditions()[0].attribute, RecordAttribute::Style);
    }

    #[test]
    fn expression_is_conjunctive() {
        let filter = ScanFilter {
            style: Some(CuisineStyle::Italian),
            vegetarian: true,
            deliveries: true,
        };
        let expression = filter.expression().unwrap();

        let full = RestaurantRecord::new("a", "Italian")
            .with_vegetarian(true)
            .with_deliveries(true);
        let no_delivery = RestaurantRecord::new("b", "italian").with_vegetarian(true);
        let wrong_style = RestaurantRecord::new("c", "french")
            .with_vegetarian(true)
            .with_deliveries(true);

        assert!(expression.matches(&full));
        assert!(!expression.matches(&no_delivery));
        assert!(!expression.matches(&wrong_style));
    }

    #[test]
    fn expression_wire_shape() {
        let filter = ScanFilter {
            style: Some(CuisineStyle::Korean),
            vegetarian: true,
            deliveries: false,
        };
        let value = serde_json::to_value(filter.expression().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "all": [
                    {"attribute": "style", "equals": "korean"},
                    {"attribute": "vegetarian", "equals": true}
                ]
            })
        );
    }

    #[test]
    fn apply_filter_keeps_store_order() {
        let records = vec![
            RestaurantRecord::new("z", "indian"),
            RestaurantRecord::new("a", "french"),
            RestaurantRecord::new("m", "indian"),
        ];
        let expression = ScanFilter {
            style: Some(CuisineStyle::Indian),
            ..Default::default()
        }
        .expression();

        let names: Vec<_> = apply_filter(records, expression.as_ref())
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["z", "m"]);
    }
}
