//! Table ordering. Stability matters: downstream ordinal numbering assumes
//! equal keys keep their relative input order.

use std::cmp::Ordering;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::record::SalesRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Product,
    Sales,
    Revenue,
    Date,
}

impl SortField {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim() {
            "product" => Ok(Self::Product),
            "sales" => Ok(Self::Sales),
            "revenue" => Ok(Self::Revenue),
            "date" => Ok(Self::Date),
            _ => Err(anyhow!("sort field must be one of: product, sales, revenue, date")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Stable in-place sort by the field's natural ordering. Descending reverses
/// the comparator only, so equal keys keep input order either way.
pub fn sort_records(records: &mut [SalesRecord], field: SortField, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ord = compare(a, b, field);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

fn compare(a: &SalesRecord, b: &SalesRecord, field: SortField) -> Ordering {
    match field {
        SortField::Product => a.product.cmp(&b.product),
        SortField::Sales => a.sales.cmp(&b.sales),
        SortField::Revenue => a.revenue.partial_cmp(&b.revenue).unwrap_or(Ordering::Equal),
        // None sorts before any parseable date, keeping the order total even
        // with malformed rows in the set.
        SortField::Date => a.date().cmp(&b.date()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(product: &str, sales: i64, revenue: f64, date: &str) -> SalesRecord {
        SalesRecord {
            product: product.to_string(),
            sales,
            revenue,
            date: date.to_string(),
        }
    }

    #[test]
    fn sorts_numeric_fields_ascending_and_descending() {
        let mut records = vec![
            rec("A", 3, 30.0, "2024-01-03"),
            rec("B", 1, 10.0, "2024-01-01"),
            rec("C", 2, 20.0, "2024-01-02"),
        ];
        sort_records(&mut records, SortField::Sales, SortDirection::Asc);
        let names: Vec<&str> = records.iter().map(|r| r.product.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);

        sort_records(&mut records, SortField::Revenue, SortDirection::Desc);
        let names: Vec<&str> = records.iter().map(|r| r.product.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "B"]);
    }

    #[test]
    fn sorts_dates_chronologically_with_unparseable_first() {
        let mut records = vec![
            rec("late", 1, 0.0, "2024-06-01"),
            rec("bad", 2, 0.0, "???"),
            rec("early", 3, 0.0, "2024-01-01"),
        ];
        sort_records(&mut records, SortField::Date, SortDirection::Asc);
        let names: Vec<&str> = records.iter().map(|r| r.product.as_str()).collect();
        assert_eq!(names, vec!["bad", "early", "late"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let mut records = vec![
            rec("first", 5, 1.0, "2024-01-01"),
            rec("second", 5, 2.0, "2024-01-02"),
            rec("third", 5, 3.0, "2024-01-03"),
        ];
        sort_records(&mut records, SortField::Sales, SortDirection::Asc);
        let names: Vec<&str> = records.iter().map(|r| r.product.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);

        // Reversed comparator, not reversed output: ties still keep order.
        sort_records(&mut records, SortField::Sales, SortDirection::Desc);
        let names: Vec<&str> = records.iter().map(|r| r.product.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn parse_accepts_known_fields_only() {
        assert_eq!(SortField::parse("sales").ok(), Some(SortField::Sales));
        assert_eq!(SortField::parse(" date ").ok(), Some(SortField::Date));
        assert!(SortField::parse("color").is_err());
    }
}
